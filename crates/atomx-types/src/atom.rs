//! Atom-name syntax and case folding.
//!
//! An atom name is `[A-Za-z0-9_][A-Za-z0-9_-]*`. The same rule applies to
//! universe labels, universe identifiers, context atoms, and label tokens
//! scanned from an expression.

use crate::AtomNameError;

/// Characters skipped between tokens and trimmed from both ends of an
/// expression.
pub const WHITESPACE: &[char] = &[' ', '\u{8}', '\u{c}', '\n', '\r', '\t', '\u{b}'];

/// Returns `true` for space, backspace, form-feed, newline, carriage return,
/// tab and vertical tab.
pub fn is_whitespace(ch: char) -> bool {
    WHITESPACE.contains(&ch)
}

/// Returns `true` if `ch` may start an atom name.
pub fn is_atom_start(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Returns `true` if `ch` may continue an atom name.
pub fn is_atom_char(ch: char) -> bool {
    is_atom_start(ch) || ch == '-'
}

/// Check `name` against the atom-name syntax.
pub fn validate_atom_name(name: &str) -> Result<(), AtomNameError> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(AtomNameError::Empty),
        Some(ch) if !is_atom_start(ch) => return Err(AtomNameError::InvalidFirstCharacter { ch }),
        Some(_) => {}
    }
    match chars.enumerate().find(|(_, ch)| !is_atom_char(*ch)) {
        Some((i, ch)) => Err(AtomNameError::InvalidCharacter {
            ch,
            position: i + 1,
        }),
        None => Ok(()),
    }
}

/// Returns `true` if `name` is a well-formed atom name.
pub fn is_atom_name(name: &str) -> bool {
    validate_atom_name(name).is_ok()
}

/// Case-fold an atom name. Only ASCII letters are folded.
pub fn fold(name: &str) -> String {
    name.to_ascii_uppercase()
}
