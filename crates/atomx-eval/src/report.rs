//! Structured evaluation for JSON hosts.
//!
//! A request carries the expression, the raw context atoms, the alias pairs
//! and optional [`EvalOptions`]. The report always serializes, whether
//! evaluation succeeded or not:
//!
//! ```json
//! {
//!   "success": true,
//!   "value": true,
//!   "diagnostics": { "warnings": [], "total_warnings": 0 }
//! }
//! ```

use atomx_env::LabelIdPair;
use atomx_types::{Diagnostics, EvalOptions, ExprError};
use serde::{Deserialize, Serialize};

use crate::Evaluator;

/// One evaluation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalRequest {
    pub expression: String,
    #[serde(default)]
    pub context: Vec<String>,
    #[serde(default)]
    pub universe: Vec<LabelIdPair>,
    #[serde(default)]
    pub options: EvalOptions,
}

impl EvalRequest {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            context: Vec::new(),
            universe: Vec::new(),
            options: EvalOptions::default(),
        }
    }
}

/// Outcome of one evaluation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// `true` when the expression evaluated.
    pub success: bool,
    /// The result, when `success` is `true`.
    pub value: Option<bool>,
    /// The fatal error, when `success` is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ExprError>,
    /// Warnings for skipped context atoms and alias pairs.
    pub diagnostics: Diagnostics,
}

/// Evaluate `request`, collecting warnings into the report.
pub fn evaluate_request(request: &EvalRequest) -> EvalReport {
    let mut evaluator = Evaluator::with_sink(Diagnostics::empty()).with_options(request.options);
    let result = evaluator.evaluate(
        &request.expression,
        &request.context,
        request
            .universe
            .iter()
            .map(|pair| (pair.label.as_str(), pair.id.as_str())),
    );
    let diagnostics = evaluator.into_sink();
    match result {
        Ok(value) => EvalReport {
            success: true,
            value: Some(value),
            error: None,
            diagnostics,
        },
        Err(error) => EvalReport {
            success: false,
            value: None,
            error: Some(error),
            diagnostics,
        },
    }
}

/// Evaluate a JSON-encoded [`EvalRequest`] and return the JSON-encoded
/// [`EvalReport`].
///
/// Fails only when `input` is not a valid request.
pub fn evaluate_json(input: &str) -> serde_json::Result<String> {
    let request: EvalRequest = serde_json::from_str(input)?;
    serde_json::to_string(&evaluate_request(&request))
}
