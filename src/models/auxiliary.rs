//! Auxiliary model.

use serde::{Deserialize, Serialize};

/// A care auxiliary to whom patients are assigned.
///
/// Auxiliaries are identified by name, unique case-insensitively within a
/// roster. Their position in the roster is meaningful: it is the rotation
/// order the assignment engine walks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auxiliary {
    /// Display name and identifier.
    pub name: String,
}

impl Auxiliary {
    /// Creates an auxiliary with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Case-insensitive identity check.
    pub fn matches_name(&self, other: &str) -> bool {
        names_match(&self.name, other)
    }
}

/// Case-insensitive name comparison used everywhere auxiliary identity is
/// decided.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
