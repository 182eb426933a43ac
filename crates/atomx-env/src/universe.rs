//! Alias table mapping labels and identifiers to canonical labels.

use atomx_types::atom::{fold, validate_atom_name};
use atomx_types::{AtomNameError, DiagnosticSink, ValidationWarning};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `(label, identifier)` registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelIdPair {
    pub label: String,
    pub id: String,
}

impl LabelIdPair {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

impl<L: Into<String>, I: Into<String>> From<(L, I)> for LabelIdPair {
    fn from((label, id): (L, I)) -> Self {
        Self::new(label, id)
    }
}

/// Case-insensitive alias table.
///
/// Both the label and the identifier of every admitted pair resolve to the
/// same folded label. Re-registering an alias overwrites its previous
/// mapping.
#[derive(Debug, Clone, Default)]
pub struct Universe {
    aliases: BTreeMap<String, String>,
}

impl Universe {
    /// Create an empty universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a universe from `pairs`, reporting every rejected pair to `sink`.
    pub fn from_pairs<P, L, I>(pairs: P, sink: &mut impl DiagnosticSink) -> Self
    where
        P: IntoIterator<Item = (L, I)>,
        L: AsRef<str>,
        I: AsRef<str>,
    {
        let mut universe = Self::new();
        for (label, id) in pairs {
            let (label, id) = (label.as_ref(), id.as_ref());
            if let Err(reason) = universe.add(label, id) {
                sink.warning(ValidationWarning::InvalidUniversePair {
                    label: label.to_string(),
                    id: id.to_string(),
                    reason,
                });
            }
        }
        universe
    }

    /// Register `label` and `id` as aliases of `label`.
    ///
    /// Nothing is inserted unless both names are well-formed atom names.
    pub fn add(&mut self, label: &str, id: &str) -> Result<(), AtomNameError> {
        validate_atom_name(label)?;
        validate_atom_name(id)?;
        let label = fold(label);
        self.aliases.insert(label.clone(), label.clone());
        self.aliases.insert(fold(id), label);
        Ok(())
    }

    /// Register a [`LabelIdPair`].
    pub fn add_pair(&mut self, pair: &LabelIdPair) -> Result<(), AtomNameError> {
        self.add(&pair.label, &pair.id)
    }

    /// Returns `true` if `text` is a known label or identifier.
    pub fn contains(&self, text: &str) -> bool {
        self.aliases.contains_key(&fold(text))
    }

    /// The canonical label `text` resolves to.
    pub fn label(&self, text: &str) -> Option<&str> {
        self.aliases.get(&fold(text)).map(String::as_str)
    }

    /// Number of registered aliases (labels and identifiers).
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
