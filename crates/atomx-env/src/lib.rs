//! atomx evaluation environment.
//!
//! A [`Universe`] maps labels and identifiers to canonical labels; a
//! [`Context`] holds the atoms asserted true for one evaluation. Both are
//! built once per call and owned by it.

mod context;
mod universe;

pub use context::Context;
pub use universe::{LabelIdPair, Universe};
