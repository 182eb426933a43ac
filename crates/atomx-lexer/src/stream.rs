//! Destructively consumed token buffer.

use crate::token::Token;
use std::collections::VecDeque;

/// FIFO token queue with a one-step un-consume.
///
/// The parser pops tokens from the front and pushes back the single token it
/// looked at but decided not to consume.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token to the end of the stream.
    pub fn append(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    /// Put a token back at the front, making it the next one returned.
    pub fn push_front(&mut self, token: Token) {
        self.tokens.push_front(token);
    }

    /// Remove and return the first token, or `None` at end of stream.
    pub fn pop_front(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// The first token, without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}
