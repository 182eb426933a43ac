//! atomx: boolean expressions over aliased truth atoms.
//!
//! ```text
//! alias pairs → Universe ┐
//! raw atoms ──→ Context ─┴→ Lexer → TokenStream → Parser → bool
//! ```
//!
//! [`evaluate_boolean_expression`] is the one-call entry point. [`Evaluator`]
//! adds evaluation options and a caller-supplied diagnostics sink, and
//! [`evaluate_json`] serves hosts that speak JSON.

mod evaluator;
mod report;

pub use evaluator::{tokenize, Evaluator};
pub use report::{evaluate_json, evaluate_request, EvalReport, EvalRequest};

pub use atomx_env::{Context, LabelIdPair, Universe};
pub use atomx_lexer::{Connector, Label, Token, TokenKind, TokenStream};
pub use atomx_types::{
    DiagnosticSink, Diagnostics, ErrorCode, EvalOptions, ExprError, LogSink, NullSink, Result,
    Span, ValidationWarning, DEFAULT_MAX_DEPTH,
};

/// Evaluate `expression` against the atoms in `context`, resolving aliases
/// through the `(label, identifier)` pairs in `universe`.
///
/// Malformed context atoms and alias pairs are skipped and logged with
/// `log::warn!`. Only a malformed expression is an error.
///
/// ```
/// let universe = [("Read", "4246b7a7-1e49-40dd-8fa6-7aebdd70f34d")];
/// let context = ["4246b7a7-1e49-40dd-8fa6-7aebdd70f34d"];
/// assert_eq!(atomx_eval::evaluate_boolean_expression("read & !write", &context, &universe), Ok(true));
/// ```
pub fn evaluate_boolean_expression(
    expression: &str,
    context: &[impl AsRef<str>],
    universe: &[(impl AsRef<str>, impl AsRef<str>)],
) -> Result<bool> {
    Evaluator::new().evaluate(
        expression,
        context,
        universe.iter().map(|(label, id)| (label, id)),
    )
}
