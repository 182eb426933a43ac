//! Core parser infrastructure: token cursor, nesting limit, error helpers.

use atomx_lexer::{Token, TokenStream};
use atomx_types::log::targets;
use atomx_types::{ErrorCode, EvalOptions, ExprError, Result, Span};

/// The atomx parser.
///
/// Consumes a [`TokenStream`] produced by the lexer and evaluates it in a
/// single pass. The first error aborts evaluation; there is no recovery.
pub struct Parser {
    /// The token stream, consumed from the front.
    tokens: TokenStream,
    /// End offset of the last consumed token, used to locate end-of-stream
    /// errors.
    last_end: usize,
    /// Current nesting depth of `!` and `(`.
    depth: usize,
    options: EvalOptions,
}

impl Parser {
    /// Create a new parser with default options.
    pub fn new(tokens: impl Into<TokenStream>) -> Self {
        Self::with_options(tokens, EvalOptions::default())
    }

    pub fn with_options(tokens: impl Into<TokenStream>, options: EvalOptions) -> Self {
        Self {
            tokens: tokens.into(),
            last_end: 0,
            depth: 0,
            options,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Consume the next token, or `None` at end of stream.
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        self.last_end = token.span.end;
        Some(token)
    }

    /// Un-consume a token the current production decided not to use.
    pub(crate) fn push_back(&mut self, token: Token) {
        self.tokens.push_front(token);
    }

    // ── Nesting ───────────────────────────────────────────────────────────────

    /// Enter one nesting level opened by the token at `span`.
    pub(crate) fn enter(&mut self, span: Span) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ExprError::at(
                ErrorCode::NESTING_LIMIT_EXCEEDED,
                format!(
                    "maximum expression nesting depth is {}",
                    self.options.max_depth
                ),
                span,
            ));
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// An error located just past the last consumed token.
    pub(crate) fn error_at_end(&self, code: ErrorCode, message: impl Into<String>) -> ExprError {
        ExprError::at(code, message, Span::new(self.last_end, self.last_end))
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Evaluate the token stream.
    ///
    /// Tokens left over after the top-level expression are ignored unless
    /// [`EvalOptions::reject_trailing_tokens`] is set.
    pub fn evaluate(mut self) -> Result<bool> {
        let value = self.parse_expression()?;
        if let Some(token) = self.tokens.peek() {
            if self.options.reject_trailing_tokens {
                return Err(ExprError::at(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("unexpected '{token}' after end of expression"),
                    token.span,
                ));
            }
            log::debug!(
                target: targets::PARSER,
                "ignoring {} trailing token(s) starting with '{}' at {}",
                self.tokens.len(),
                token,
                token.span
            );
        }
        Ok(value)
    }
}
