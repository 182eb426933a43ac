//! Expression productions, evaluated as they are parsed.
//!
//! ```text
//! Expression := Term { ('&' | '|' | ',') Term }
//! Term       := Primary { '^' Primary }
//! Primary    := '!' Primary | '(' Expression ')' | LABEL
//! ```
//!
//! `&` and `|` share one precedence level and fold strictly left to right:
//! `a | b & c` is `(a | b) & c`. `^` binds tighter and folds left to right
//! as well. Each loop takes one token of lookahead and pushes it back when
//! the production does not handle it.
//!
//! Only `!` and `(` recurse, so only they count toward the nesting limit.

use atomx_lexer::{Connector, TokenKind};
use atomx_types::{ErrorCode, ExprError, Result};

use crate::parser::Parser;

impl Parser {
    /// `Expression := Term { ('&' | '|' | ',') Term }`
    pub(crate) fn parse_expression(&mut self) -> Result<bool> {
        let mut left = self.parse_term()?;
        while let Some(token) = self.advance() {
            match token.kind {
                TokenKind::Connector(Connector::And) => {
                    let right = self.parse_term()?;
                    left = left && right;
                }
                TokenKind::Connector(Connector::Or) => {
                    let right = self.parse_term()?;
                    left = left || right;
                }
                _ => {
                    self.push_back(token);
                    break;
                }
            }
        }
        Ok(left)
    }

    /// `Term := Primary { '^' Primary }`
    fn parse_term(&mut self) -> Result<bool> {
        let mut left = self.parse_primary()?;
        while let Some(token) = self.advance() {
            match token.kind {
                TokenKind::Connector(Connector::Xor) => {
                    left ^= self.parse_primary()?;
                }
                _ => {
                    self.push_back(token);
                    break;
                }
            }
        }
        Ok(left)
    }

    /// `Primary := '!' Primary | '(' Expression ')' | LABEL`
    fn parse_primary(&mut self) -> Result<bool> {
        let Some(token) = self.advance() else {
            return Err(self.error_at_end(
                ErrorCode::UNEXPECTED_END,
                "unexpected end of stream, primary not found",
            ));
        };

        match token.kind {
            TokenKind::Label(label) => Ok(label.value),

            TokenKind::Connector(Connector::Not) => {
                self.enter(token.span)?;
                let value = self.parse_primary()?;
                self.leave();
                Ok(!value)
            }

            TokenKind::Connector(Connector::LParen) => {
                self.enter(token.span)?;
                let value = self.parse_expression()?;
                self.leave();
                match self.advance() {
                    Some(close) if close.is(Connector::RParen) => Ok(value),
                    Some(other) => Err(ExprError::at(
                        ErrorCode::MISSING_CLOSE_PAREN,
                        format!(
                            "missing closing parenthesis for '(' at {}, found '{other}'",
                            token.span
                        ),
                        other.span,
                    )),
                    None => Err(self.error_at_end(
                        ErrorCode::MISSING_CLOSE_PAREN,
                        format!(
                            "unexpected end of stream, closing parenthesis for '(' at {} not found",
                            token.span
                        ),
                    )),
                }
            }

            TokenKind::Connector(connector) => Err(ExprError::at(
                ErrorCode::EXPECTED_PRIMARY,
                format!("primary expected, found '{connector}'"),
                token.span,
            )),
        }
    }
}
