//! Shared types for atomx.
//!
//! This crate defines source spans, error codes and error types, the
//! atom-name syntax, evaluation options, and the diagnostic sinks used
//! across all stages.

pub mod atom;
mod config;
mod diagnostics;
mod error;
pub mod log;
mod span;

pub use config::{EvalOptions, DEFAULT_MAX_DEPTH};
pub use diagnostics::{DiagnosticSink, Diagnostics, LogSink, NullSink};
pub use error::{
    AtomNameError, ErrorCategory, ErrorCode, ExprError, Severity, ValidationWarning,
};
pub use span::Span;

/// Result type used throughout atomx.
pub type Result<T> = std::result::Result<T, ExprError>;
