//! The set of atoms asserted true for one evaluation.

use crate::Universe;
use atomx_types::atom::{fold, validate_atom_name};
use atomx_types::{AtomNameError, DiagnosticSink, ValidationWarning};
use std::collections::BTreeSet;

/// Case-insensitive set of asserted atom names.
#[derive(Debug, Clone, Default)]
pub struct Context {
    atoms: BTreeSet<String>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the expanded context for one evaluation.
    ///
    /// Every raw atom is inserted as given; when `universe` resolves a raw
    /// atom, its canonical label is inserted as well. Malformed raw atoms are
    /// reported to `sink` and skipped.
    pub fn expand<A, S>(atoms: A, universe: &Universe, sink: &mut impl DiagnosticSink) -> Self
    where
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut context = Self::new();
        for atom in atoms {
            let atom = atom.as_ref();
            if let Err(reason) = context.add(atom) {
                sink.warning(ValidationWarning::InvalidContextAtom {
                    atom: atom.to_string(),
                    reason,
                });
            }
            if let Some(label) = universe.label(atom) {
                // Universe keys are well-formed, so this cannot fail.
                let _ = context.add(label);
            }
        }
        context
    }

    /// Assert `atom`. Nothing is inserted unless it is a well-formed atom name.
    pub fn add(&mut self, atom: &str) -> Result<(), AtomNameError> {
        validate_atom_name(atom)?;
        self.atoms.insert(fold(atom));
        Ok(())
    }

    /// Returns `true` if `atom` is asserted.
    pub fn contains(&self, atom: &str) -> bool {
        self.atoms.contains(&fold(atom))
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Asserted atoms in folded form, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(String::as_str)
    }
}
