//! Unlock index: the derived transpose of the prerequisite relation.
//!
//! For each course Y in the registry and each id X in Y's prereq list, Y is
//! recorded as an unlocker entry under X. The index is keyed by raw id
//! strings, not validated course references: if X is not itself a known
//! course, the entry is still recorded, because the unlock relationship
//! exists even when the prerequisite's own record is missing.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::CourseRegistry;

/// Reverse mapping: course id → the ids that directly depend on it.
///
/// Derived in a single pure pass over a fully-built [`CourseRegistry`];
/// immutable afterwards. Exact transpose of the registry's prereq relation.
#[derive(Debug, Clone, Default)]
pub struct UnlockIndex {
    unlocks: BTreeMap<String, BTreeSet<String>>,
}

impl UnlockIndex {
    /// Derive the index from a registry.
    ///
    /// Infallible: the registry is already well-formed, and dangling prereq
    /// ids are legal keys here.
    #[must_use]
    pub fn derive(registry: &CourseRegistry) -> Self {
        let mut unlocks: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (id, record) in registry.iter() {
            for prereq in &record.prereqs {
                unlocks.entry(prereq.clone()).or_default().insert(id.clone());
            }
        }

        debug!(keys = unlocks.len(), "derived unlock index");

        Self {
            unlocks,
        }
    }

    /// The set of course ids that list `id` as a direct prerequisite.
    ///
    /// Returns an empty set, never an error, when the id unlocks nothing.
    #[must_use]
    pub fn unlocks_of(&self, id: &str) -> BTreeSet<String> {
        self.unlocks.get(id).cloned().unwrap_or_default()
    }

    /// Iterate over `(prereq id, unlocker ids)` entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.unlocks.iter()
    }
}
