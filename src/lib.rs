//! Flowsheet - curriculum prerequisite and unlock explorer
//!
//! A command-line tool for exploring a curriculum "flowsheet": the courses of a
//! program laid out by year and quarter, each declaring the course ids it
//! requires. From those declared edges the tool derives the reverse direction
//! (which later courses a given course unlocks) and classifies a focused
//! course's neighborhood the way the original interactive flowsheet page did
//! on hover.
//!
//! # Architecture Overview
//!
//! The crate follows a two-pass derivation model:
//! - A [`catalog::Flowsheet`] is loaded from `flowsheet.toml` (or the original
//!   `courses.json` export) and holds the presentation ordering
//! - A [`graph::CourseRegistry`] maps course ids to their records and rejects
//!   duplicate ids
//! - A [`graph::UnlockIndex`] is derived from the registry as the transpose of
//!   the declared prerequisite edges
//! - The [`highlight`] module classifies a focal course into primary
//!   prerequisites, secondary prerequisites, and unlocks, and applies the
//!   result to a highlight board
//!
//! Dangling prerequisite ids (declared but never defined) are carried through
//! rather than rejected; only duplicate course ids fail loading.
//!
//! # Core Modules
//!
//! - [`catalog`] - Flowsheet data model, file formats, and discovery
//! - [`graph`] - Course registry and derived unlock index
//! - [`highlight`] - Two-hop classification and highlight board
//! - [`render`] - Terminal rendering of the flowsheet and legend
//! - [`cli`] - Command-line interface with subcommands
//! - [`core`] - Error types and user-friendly error formatting
//!
//! # Flowsheet Format (flowsheet.toml)
//!
//! ```toml
//! [[years]]
//! name = "Year 1"
//!
//! [[years.quarters]]
//! name = "Fall"
//! courses = [
//!     { id = "CS101", title = "Intro to Programming", prereqs = [] },
//!     { id = "MATH101", title = "Calculus I", prereqs = [] },
//! ]
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Initialize a starter flowsheet
//! flowsheet init
//!
//! # Render the whole flowsheet
//! flowsheet show
//!
//! # Highlight a course's neighborhood
//! flowsheet focus CS201
//!
//! # Inspect one course
//! flowsheet info CS201
//!
//! # Follow the prerequisite chain all the way down
//! flowsheet tree CS201
//!
//! # Convert the original JSON export to TOML
//! flowsheet convert courses.json flowsheet.toml
//! ```

pub mod catalog;
pub mod cli;
pub mod constants;
pub mod core;
pub mod graph;
pub mod highlight;
pub mod render;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
