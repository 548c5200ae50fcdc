//! Two-hop classification of a focal course's neighborhood.

use std::collections::BTreeSet;
use tracing::debug;

use super::Classification;
use crate::graph::{CourseRegistry, UnlockIndex};

/// Classify the immediate neighborhood of `focal_id`.
///
/// Computation order matters and is fixed:
///
/// 1. An unknown focal id short-circuits to three empty sets - focusing an
///    element that isn't a course highlights nothing, by design, not as an
///    error.
/// 2. `primary` is the focal course's declared prereq list, deduplicated,
///    with the focal id itself excluded defensively. Ids that resolve to
///    no known course are kept.
/// 3. `secondary` is the union of each primary course's declared prereqs,
///    minus `primary` and minus the focal id. The subtraction is a
///    precedence rule: secondary membership only exists for ids that did
///    not qualify as primary. Unknown primary ids contribute nothing.
/// 4. `unlocks` comes from the index as-is (focal self-edge excluded), with
///    no filtering against the other sets.
///
/// Only the focal course and its one-hop neighbors are ever touched -
/// O(degree²) worst case, never a traversal - so even cyclic defect data
/// cannot loop. This function never fails; malformed references degrade to
/// empty contributions at each step.
///
/// # Examples
///
/// ```rust
/// use flowsheet_cli::catalog::Flowsheet;
/// use flowsheet_cli::graph::{CourseRegistry, UnlockIndex};
/// use flowsheet_cli::highlight::classify;
///
/// let flowsheet: Flowsheet = toml::from_str(r#"
///     [[years]]
///     name = "Year 1"
///     [[years.quarters]]
///     name = "Fall"
///     courses = [
///         { id = "A", title = "A", prereqs = [] },
///         { id = "B", title = "B", prereqs = ["A"] },
///     ]
/// "#).unwrap();
///
/// let registry = CourseRegistry::build(&flowsheet)?;
/// let index = UnlockIndex::derive(&registry);
///
/// let result = classify("B", &registry, &index);
/// assert!(result.primary.contains("A"));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[must_use]
pub fn classify(
    focal_id: &str,
    registry: &CourseRegistry,
    unlock_index: &UnlockIndex,
) -> Classification {
    let Some(focal) = registry.lookup(focal_id) else {
        debug!(focal = focal_id, "focal id unknown, classifying as empty");
        return Classification::default();
    };

    let primary: BTreeSet<String> =
        focal.prereqs.iter().filter(|id| id.as_str() != focal_id).cloned().collect();

    let mut secondary = BTreeSet::new();
    for primary_id in &primary {
        if let Some(record) = registry.lookup(primary_id) {
            secondary.extend(record.prereqs.iter().cloned());
        }
    }
    // Precedence: anything that qualified as primary never renders secondary
    secondary.retain(|id| !primary.contains(id) && id != focal_id);

    let mut unlocks = unlock_index.unlocks_of(focal_id);
    unlocks.remove(focal_id);

    debug!(
        focal = focal_id,
        primary = primary.len(),
        secondary = secondary.len(),
        unlocks = unlocks.len(),
        "classified course"
    );

    Classification {
        focal: Some(focal_id.to_string()),
        primary,
        secondary,
        unlocks,
    }
}
