//! Diagnostic sinks for non-fatal validation warnings.

use crate::log::targets;
use crate::ValidationWarning;
use serde::{Deserialize, Serialize};

/// Receives the warnings produced while building a universe or a context.
pub trait DiagnosticSink {
    fn warning(&mut self, warning: ValidationWarning);
}

/// Forwards every warning to `log::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warning(&mut self, warning: ValidationWarning) {
        ::log::warn!(target: targets::VALIDATION, "{warning}");
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warning(&mut self, _warning: ValidationWarning) {}
}

impl DiagnosticSink for Vec<ValidationWarning> {
    fn warning(&mut self, warning: ValidationWarning) {
        self.push(warning);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn warning(&mut self, warning: ValidationWarning) {
        (**self).warning(warning);
    }
}

/// Collected warnings, capped at [`Diagnostics::MAX_WARNINGS`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    pub warnings: Vec<ValidationWarning>,
    pub total_warnings: usize,
}

impl Diagnostics {
    /// Maximum number of warnings stored; the total keeps counting.
    pub const MAX_WARNINGS: usize = 20;

    /// Create an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_warnings(&self) -> bool {
        self.total_warnings > 0
    }
}

impl DiagnosticSink for Diagnostics {
    fn warning(&mut self, warning: ValidationWarning) {
        if self.warnings.len() < Self::MAX_WARNINGS {
            self.warnings.push(warning);
        }
        self.total_warnings += 1;
    }
}
