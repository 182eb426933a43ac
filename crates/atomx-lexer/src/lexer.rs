//! Core atomx lexer: converts expression text to a bound token stream.
//!
//! Features:
//! - Single-character connectors: `&`, `|`, `,`, `!`, `^`, `(`, `)`
//! - Labels matching the atom-name syntax, case-folded
//! - Labels resolved against a [`Universe`] and bound to their truth value
//!   in a [`Context`] at scan time
//! - Fail-fast: the first error aborts the scan, there is no recovery

use atomx_env::{Context, Universe};
use atomx_types::atom::{self, is_atom_char, is_atom_start, is_whitespace};
use atomx_types::log::targets;
use atomx_types::{ErrorCode, ExprError, Result, Span};

use crate::stream::TokenStream;
use crate::token::{Connector, Label, Token, TokenKind};

/// The atomx lexer.
///
/// Scans the trimmed expression one token at a time. The lexer is an
/// iterator over `Result<Token>`; it stops after the first error and cannot
/// be restarted. Its tokens are only meaningful for the context and universe
/// it was built against.
pub struct Lexer<'env> {
    /// The trimmed expression as characters.
    chars: Vec<char>,
    /// Current character offset into `chars`.
    pos: usize,
    context: &'env Context,
    universe: &'env Universe,
    /// Set once an error has been returned.
    done: bool,
}

impl<'env> Lexer<'env> {
    /// Create a new lexer. Surrounding whitespace is trimmed here, so spans
    /// are relative to the trimmed text.
    pub fn new(source: &str, context: &'env Context, universe: &'env Universe) -> Self {
        Self {
            chars: source.trim_matches(atom::WHITESPACE).chars().collect(),
            pos: 0,
            context,
            universe,
            done: false,
        }
    }

    /// Lex the entire expression.
    pub fn lex(self) -> Result<Vec<Token>> {
        self.collect()
    }

    /// Lex the entire expression into a [`TokenStream`] ready for parsing.
    pub fn lex_stream(self) -> Result<TokenStream> {
        self.lex().map(TokenStream::from)
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one token. Called only when input remains.
    fn scan_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let Some(ch) = self.peek() else {
            return Err(ExprError::at(
                ErrorCode::UNEXPECTED_END,
                "unexpected end of expression",
                Span::point(self.pos),
            ));
        };

        let start = self.pos;
        if let Some(connector) = Connector::from_char(ch) {
            self.pos += 1;
            return Ok(Token::connector(connector, Span::point(start)));
        }

        if !is_atom_start(ch) {
            return Err(ExprError::at(
                ErrorCode::INVALID_CHARACTER,
                format!("invalid or unexpected character in expression: {ch}"),
                Span::point(start),
            )
            .near(ch));
        }

        Ok(self.scan_label(start))
    }

    /// Greedily consume a label starting at `start` and bind it.
    fn scan_label(&mut self, start: usize) -> Token {
        while self.peek().is_some_and(is_atom_char) {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        let raw = atom::fold(&text);

        let (canonical, resolved) = match self.universe.label(&raw) {
            Some(label) => (label.to_string(), true),
            None => (raw.clone(), false),
        };
        // The truth lookup uses the raw spelling, not the canonical label.
        let value = self.context.contains(&raw);

        Token::new(
            TokenKind::Label(Label {
                raw,
                canonical,
                resolved,
                value,
            }),
            Span::new(start, self.pos),
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.chars.is_empty() {
            self.done = true;
            return Some(Err(ExprError::new(
                ErrorCode::EMPTY_EXPRESSION,
                "empty expression not allowed",
            )));
        }
        if self.at_end() {
            self.done = true;
            return None;
        }

        let token = self.scan_token();
        match &token {
            Ok(token) => log::trace!(target: targets::LEXER, "{} at {}", token, token.span),
            Err(_) => self.done = true,
        }
        Some(token)
    }
}
