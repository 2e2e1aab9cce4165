use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Minimum number of characters required before teams can be generated.
pub const MIN_SQUAD_SIZE: usize = 4;

/// The set of characters a user has picked from their roster.
///
/// An explicit value rather than shared UI state: the web shell threads it
/// through callbacks and hands it to the team-request call, so the core
/// logic never touches a mutable global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    chosen: BTreeSet<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the character if absent, remove it if present.
    #[must_use]
    pub fn toggled(&self, name: &str) -> Self {
        let mut chosen = self.chosen.clone();
        if !chosen.remove(name) {
            chosen.insert(name.to_string());
        }
        Self { chosen }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.chosen.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Whether enough characters are selected to request teams.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.chosen.len() >= MIN_SQUAD_SIZE
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.chosen.iter().cloned().collect()
    }
}
