use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error severity.
///
/// Expression errors are always `Error`; rejected universe pairs and context
/// atoms surface as `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Syntax,
    Validation,
    Structure,
}

/// Numeric error code (E100–E699).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Syntax errors (E100–E199) ──
    pub const EMPTY_EXPRESSION: Self = Self(100);
    pub const INVALID_CHARACTER: Self = Self(101);
    pub const UNEXPECTED_END: Self = Self(102);
    pub const MISSING_CLOSE_PAREN: Self = Self(103);
    pub const EXPECTED_PRIMARY: Self = Self(104);
    pub const UNEXPECTED_TOKEN: Self = Self(105);

    // ── Validation warnings (E200–E299) ──
    pub const INVALID_UNIVERSE_PAIR: Self = Self(200);
    pub const INVALID_CONTEXT_ATOM: Self = Self(201);

    // ── Structure errors (E600–E699) ──
    pub const NESTING_LIMIT_EXCEEDED: Self = Self(600);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Syntax,
            200..=299 => ErrorCategory::Validation,
            600..=699 => ErrorCategory::Structure,
            _ => ErrorCategory::Syntax, // fallback
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Validation => write!(f, "validation"),
            Self::Structure => write!(f, "structure"),
        }
    }
}

/// A fatal expression error.
///
/// Raised by the lexer for scanning failures and by the parser for grammar
/// failures. Carries the offending character and its position when one is
/// available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprError {
    /// Error code (e.g., E101).
    pub code: ErrorCode,
    /// Error severity.
    pub severity: Severity,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Location in the trimmed expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// The character the error was found near.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<char>,
}

impl ExprError {
    /// Create a new error with no location.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            category: code.category(),
            message: message.into(),
            span: None,
            near: None,
        }
    }

    /// Create a new error located at `span`.
    pub fn at(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(code, message).with_span(span)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the character the error was found near.
    pub fn near(mut self, ch: char) -> Self {
        self.near = Some(ch);
        self
    }

    /// Zero-based position of the error, if known.
    pub fn position(&self) -> Option<usize> {
        self.span.map(|s| s.start)
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.near, self.span) {
            (Some(ch), Some(span)) => write!(
                f,
                "syntax error near '{ch}' (position: {span}): {} [{}] {}",
                self.code, self.category, self.message
            ),
            (None, Some(span)) => write!(
                f,
                "{span}: {} [{}] {}",
                self.code, self.category, self.message
            ),
            _ => write!(f, "{} [{}] {}", self.code, self.category, self.message),
        }
    }
}

impl std::error::Error for ExprError {}

/// Why a string was rejected as an atom name.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AtomNameError {
    #[error("atom name is empty")]
    Empty,
    #[error("atom name cannot start with '{ch}'")]
    InvalidFirstCharacter { ch: char },
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

/// A non-fatal problem found while building the universe or the context.
///
/// The offending entry is skipped and evaluation proceeds with the rest.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    #[error("[Universe] failed insertion of '{label}': '{id}' ({reason})")]
    InvalidUniversePair {
        label: String,
        id: String,
        reason: AtomNameError,
    },
    #[error("[Context] failed insertion of '{atom}' ({reason})")]
    InvalidContextAtom { atom: String, reason: AtomNameError },
}

impl ValidationWarning {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidUniversePair { .. } => ErrorCode::INVALID_UNIVERSE_PAIR,
            Self::InvalidContextAtom { .. } => ErrorCode::INVALID_CONTEXT_ATOM,
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Warning
    }
}
