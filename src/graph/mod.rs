//! The prerequisite graph derived from a flowsheet.
//!
//! The graph is stored as two complementary mappings, built in two explicit
//! passes:
//! - [`CourseRegistry`] - the forward relation: course id → its record,
//!   including the declared direct-prerequisite ids. Built first, once.
//! - [`UnlockIndex`] - the transpose: course id → the ids that list it as a
//!   direct prerequisite. Derived from the fully-built registry as a
//!   separate pure pass.
//!
//! Both are immutable after construction and thereafter serve read-only
//! lookups for the highlight classifier. The invariant between them:
//! for every id X in `registry[Y].prereqs`, Y appears in
//! `unlock_index.unlocks_of(X)`, and vice versa.

mod registry;
mod unlock_index;

pub use registry::{CourseRecord, CourseRegistry};
pub use unlock_index::UnlockIndex;
