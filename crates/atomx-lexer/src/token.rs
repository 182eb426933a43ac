//! Token types for the atomx lexer.
//!
//! A [`Token`] is either a [`Connector`] or a [`Label`] bound to its truth
//! value, paired with the source [`Span`] it was scanned from.

use atomx_types::Span;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the atomx lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn connector(connector: Connector, span: Span) -> Self {
        Self::new(TokenKind::Connector(connector), span)
    }

    /// Returns the label payload if this is a label token.
    pub fn as_label(&self) -> Option<&Label> {
        match &self.kind {
            TokenKind::Label(label) => Some(label),
            TokenKind::Connector(_) => None,
        }
    }

    /// Returns `true` if this token is the given connector.
    pub fn is(&self, connector: Connector) -> bool {
        self.kind == TokenKind::Connector(connector)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// An operator or a grouping parenthesis.
    Connector(Connector),
    /// An atom reference.
    Label(Label),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Connector(c) => c.fmt(f),
            TokenKind::Label(label) => f.write_str(&label.canonical),
        }
    }
}

/// Single-character connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// `&`
    And,
    /// `|` or `,`
    Or,
    /// `!`
    Not,
    /// `^`
    Xor,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Connector {
    /// Map a source character to its connector, if it is one.
    pub fn from_char(ch: char) -> Option<Connector> {
        Some(match ch {
            '&' => Connector::And,
            '|' | ',' => Connector::Or,
            '!' => Connector::Not,
            '^' => Connector::Xor,
            '(' => Connector::LParen,
            ')' => Connector::RParen,
            _ => return None,
        })
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Connector::And => "&",
            Connector::Or => "|",
            Connector::Not => "!",
            Connector::Xor => "^",
            Connector::LParen => "(",
            Connector::RParen => ")",
        })
    }
}

/// An atom reference, bound at scan time.
///
/// `canonical` identifies the atom; `value` was looked up in the context
/// with the `raw` spelling, not the canonical one. Both spellings resolve
/// because the context holds raw atoms and their canonical labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Case-folded text as scanned.
    pub raw: String,
    /// Universe-resolved label, or `raw` when unresolved.
    pub canonical: String,
    /// Whether the universe knows this name.
    pub resolved: bool,
    /// Truth value of the atom in the context.
    pub value: bool,
}
