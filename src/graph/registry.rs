//! Course registry: the forward prerequisite mapping.
//!
//! Indexes every course in a flowsheet by id. Construction is the only
//! fallible step in the graph layer: two courses sharing an id is rejected
//! with [`FlowsheetError::DuplicateCourseId`] rather than last-write-wins,
//! since a silent winner would make later classifications quietly wrong.
//! No other validation happens at build time - in particular, prereq ids
//! are stored as declared and may reference unknown courses.

use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::Flowsheet;
use crate::core::FlowsheetError;

/// Per-course data held by the registry.
///
/// Carries the display fields alongside the declared prereq ids so callers
/// rendering a course card never need a second lookup structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Display title
    pub title: String,
    /// Display subtitle
    pub subtitle: String,
    /// Direct-prerequisite ids, in declaration order, unvalidated
    pub prereqs: Vec<String>,
}

/// Immutable id → course mapping built once from a flowsheet.
///
/// A `BTreeMap` keeps iteration deterministic, which the renderer and the
/// tests rely on.
///
/// # Examples
///
/// ```rust,no_run
/// use flowsheet_cli::catalog::Flowsheet;
/// use flowsheet_cli::graph::CourseRegistry;
/// use std::path::Path;
///
/// let flowsheet = Flowsheet::load(Path::new("flowsheet.toml"))?;
/// let registry = CourseRegistry::build(&flowsheet)?;
/// if let Some(record) = registry.lookup("CS201") {
///     println!("{} requires {:?}", record.title, record.prereqs);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CourseRegistry {
    courses: BTreeMap<String, CourseRecord>,
}

impl CourseRegistry {
    /// Index every course in the flowsheet by id.
    ///
    /// # Errors
    ///
    /// Returns [`FlowsheetError::DuplicateCourseId`] if two courses share
    /// an id.
    pub fn build(flowsheet: &Flowsheet) -> Result<Self, FlowsheetError> {
        let mut courses = BTreeMap::new();

        for course in flowsheet.courses() {
            let record = CourseRecord {
                title: course.title.clone(),
                subtitle: course.subtitle.clone(),
                prereqs: course.prereqs.clone(),
            };
            if courses.insert(course.id.clone(), record).is_some() {
                return Err(FlowsheetError::DuplicateCourseId {
                    id: course.id.clone(),
                });
            }
        }

        debug!(courses = courses.len(), "built course registry");

        Ok(Self {
            courses,
        })
    }

    /// Look up a course by id.
    ///
    /// `None` is a valid outcome meaning "id not known", not an error.
    /// The classifier treats it as "no such course, contributes nothing".
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&CourseRecord> {
        self.courses.get(id)
    }

    /// Whether the id resolves to a known course.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    /// Iterate over `(id, record)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CourseRecord)> {
        self.courses.iter()
    }

    /// Number of registered courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the registry holds no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
