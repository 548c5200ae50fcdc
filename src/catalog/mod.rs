//! Curriculum data model: years, quarters, and courses.
//!
//! A flowsheet is an ordered hierarchy of [`Year`] → [`Quarter`] → [`Course`]
//! records. Ordering is display-significant (it controls terminal layout)
//! but carries no meaning in the prerequisite graph, which is derived
//! separately by [`crate::graph`].
//!
//! # Data Formats
//!
//! The serde model accepts both the native TOML field names (`name`) and
//! the original JSON export's names (`yearName`, `quarterName`) via aliases,
//! so an unmodified `courses.json` loads without conversion:
//!
//! ```toml
//! [[years]]
//! name = "Year 1"
//!
//! [[years.quarters]]
//! name = "Fall"
//!
//! [[years.quarters.courses]]
//! id = "CS101"
//! title = "CS 101"
//! subtitle = "Intro to Programming"
//! prereqs = []
//! ```
//!
//! Courses are immutable after load. Prerequisite ids may reference courses
//! that do not exist; that is a data defect the graph layer survives by
//! treating such ids as "no such course", never a crash.

mod catalog_io;
mod discovery;

pub use discovery::{find_flowsheet, find_flowsheet_from, find_flowsheet_with_optional};

use serde::{Deserialize, Serialize};

/// A single course in the curriculum.
///
/// Identity is the `id` field, which prerequisite lists reference. The
/// `prereqs` list is ordered as declared and may contain ids that resolve
/// to no known course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier, referenced by other courses' prereq lists
    pub id: String,
    /// Display title (e.g. "CS 201")
    pub title: String,
    /// Display subtitle (e.g. "Data Structures")
    #[serde(default)]
    pub subtitle: String,
    /// Ordered ids of this course's direct prerequisites (may be empty)
    #[serde(default)]
    pub prereqs: Vec<String>,
}

/// A named quarter holding an ordered sequence of courses.
///
/// Order is left-to-right display order and has no graph meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quarter {
    /// Quarter display name (e.g. "Fall")
    #[serde(alias = "quarterName")]
    pub name: String,
    /// Courses offered in this quarter, in display order
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// A named academic year holding an ordered sequence of quarters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Year {
    /// Year display name (e.g. "Year 1")
    #[serde(alias = "yearName")]
    pub name: String,
    /// Quarters in this year, in display order
    #[serde(default)]
    pub quarters: Vec<Quarter>,
}

/// The full curriculum: an ordered sequence of years.
///
/// This is the root value loaded from a flowsheet file and the input to
/// [`crate::graph::CourseRegistry::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flowsheet {
    /// Academic years in display order
    #[serde(default)]
    pub years: Vec<Year>,
}

impl Flowsheet {
    /// Iterate over every course in display order (year, then quarter,
    /// then course position).
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.years
            .iter()
            .flat_map(|year| year.quarters.iter())
            .flat_map(|quarter| quarter.courses.iter())
    }

    /// Total number of courses across all years and quarters.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses().count()
    }

    /// Find a course by id, scanning in display order.
    #[must_use]
    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses().find(|course| course.id == id)
    }

    /// Whether the flowsheet contains no courses at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses().next().is_none()
    }
}
