//! atomx parser: evaluates a bound token stream to a boolean.
//!
//! Parsing and evaluation happen in the same recursive-descent pass; no
//! syntax tree is built.

mod parse_expr;
mod parser;

pub use parser::Parser;
