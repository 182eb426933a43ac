//! atomx lexer: converts expression text into a bound token stream.

pub mod lexer;
pub mod stream;
pub mod token;

pub use lexer::Lexer;
pub use stream::TokenStream;
pub use token::{Connector, Label, Token, TokenKind};
