//! The result value of one focus evaluation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Three disjoint-with-precedence sets of course ids computed for one
/// focal course.
///
/// - `primary`: the focal course's declared direct-prerequisite ids,
///   deduplicated. Not filtered against the registry - an id that resolves
///   to no known course stays in the set and simply styles nothing.
/// - `secondary`: prerequisites of primary prerequisites, minus anything
///   already primary and minus the focal id. An id qualifying as both
///   renders primary, never secondary.
/// - `unlocks`: courses that list the focal course as a direct
///   prerequisite, as-is. Not cross-filtered against the other two sets:
///   a course can be both a secondary prerequisite and an unlock through
///   different edges, and both facts are reported.
///
/// `focal` echoes the focused id when it resolved to a known course, so
/// the presentation layer stays decision-free. Ephemeral: computed on
/// focus-enter, discarded on focus-leave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The focused course id, when it resolved to a known course
    pub focal: Option<String>,
    /// Direct prerequisites of the focal course
    pub primary: BTreeSet<String>,
    /// Prerequisites of primary prerequisites, with primary precedence
    pub secondary: BTreeSet<String>,
    /// Courses the focal course directly unlocks
    pub unlocks: BTreeSet<String>,
}

impl Classification {
    /// Whether the classification carries no highlight information at all.
    ///
    /// True for unknown focal ids and for known courses with no
    /// relationships; the two are deliberately indistinguishable through
    /// the highlight path except for the `focal` echo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty() && self.unlocks.is_empty()
    }
}
