//! Test utilities for the flowsheet CLI.
//!
//! Shared fixture builders used by unit tests throughout the crate and by
//! the integration suite (via the `test-utils` feature on the self
//! dev-dependency).

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::catalog::{Course, Flowsheet, Quarter, Year};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize tracing for tests, once per process.
///
/// Respects `RUST_LOG` when no explicit level is given; does nothing when
/// neither is set.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Build a one-year, one-quarter flowsheet from `(id, prereqs)` pairs.
///
/// Titles are derived from the ids. Handy for graph and classifier tests
/// where the year/quarter layout is irrelevant.
#[must_use]
pub fn flowsheet_from_courses(courses: &[(&str, &[&str])]) -> Flowsheet {
    let courses = courses
        .iter()
        .map(|(id, prereqs)| Course {
            id: (*id).to_string(),
            title: format!("Course {id}"),
            subtitle: String::new(),
            prereqs: prereqs.iter().map(|p| (*p).to_string()).collect(),
        })
        .collect();

    Flowsheet {
        years: vec![Year {
            name: "Year 1".to_string(),
            quarters: vec![Quarter {
                name: "Fall".to_string(),
                courses,
            }],
        }],
    }
}

/// A small two-year curriculum with a realistic prerequisite structure.
///
/// ```text
/// CS101 ──► CS102 ──► CS201
///   │                   ▲
///   └────► CS210 ───────┘ (CS210 also needs MATH101)
/// MATH101 ──► MATH102
/// ```
#[must_use]
pub fn sample_flowsheet() -> Flowsheet {
    Flowsheet {
        years: vec![
            Year {
                name: "Year 1".to_string(),
                quarters: vec![
                    Quarter {
                        name: "Fall".to_string(),
                        courses: vec![
                            course("CS101", "CS 101", "Intro to Programming", &[]),
                            course("MATH101", "Math 101", "Calculus I", &[]),
                        ],
                    },
                    Quarter {
                        name: "Winter".to_string(),
                        courses: vec![
                            course("CS102", "CS 102", "Program Design", &["CS101"]),
                            course("MATH102", "Math 102", "Calculus II", &["MATH101"]),
                        ],
                    },
                ],
            },
            Year {
                name: "Year 2".to_string(),
                quarters: vec![Quarter {
                    name: "Fall".to_string(),
                    courses: vec![
                        course("CS201", "CS 201", "Data Structures", &["CS102"]),
                        course("CS210", "CS 210", "Computer Systems", &["CS101", "MATH101"]),
                    ],
                }],
            },
        ],
    }
}

/// The TOML rendition of [`sample_flowsheet`], for file-based tests.
#[must_use]
pub fn sample_flowsheet_toml() -> String {
    r#"[[years]]
name = "Year 1"

[[years.quarters]]
name = "Fall"
courses = [
    { id = "CS101", title = "CS 101", subtitle = "Intro to Programming", prereqs = [] },
    { id = "MATH101", title = "Math 101", subtitle = "Calculus I", prereqs = [] },
]

[[years.quarters]]
name = "Winter"
courses = [
    { id = "CS102", title = "CS 102", subtitle = "Program Design", prereqs = ["CS101"] },
    { id = "MATH102", title = "Math 102", subtitle = "Calculus II", prereqs = ["MATH101"] },
]

[[years]]
name = "Year 2"

[[years.quarters]]
name = "Fall"
courses = [
    { id = "CS201", title = "CS 201", subtitle = "Data Structures", prereqs = ["CS102"] },
    { id = "CS210", title = "CS 210", subtitle = "Computer Systems", prereqs = ["CS101", "MATH101"] },
]
"#
    .to_string()
}

/// The original `courses.json` rendition of [`sample_flowsheet`].
#[must_use]
pub fn sample_courses_json() -> String {
    r#"[
  {
    "yearName": "Year 1",
    "quarters": [
      {
        "quarterName": "Fall",
        "courses": [
          {"id": "CS101", "title": "CS 101", "subtitle": "Intro to Programming", "prereqs": []},
          {"id": "MATH101", "title": "Math 101", "subtitle": "Calculus I", "prereqs": []}
        ]
      },
      {
        "quarterName": "Winter",
        "courses": [
          {"id": "CS102", "title": "CS 102", "subtitle": "Program Design", "prereqs": ["CS101"]},
          {"id": "MATH102", "title": "Math 102", "subtitle": "Calculus II", "prereqs": ["MATH101"]}
        ]
      }
    ]
  },
  {
    "yearName": "Year 2",
    "quarters": [
      {
        "quarterName": "Fall",
        "courses": [
          {"id": "CS201", "title": "CS 201", "subtitle": "Data Structures", "prereqs": ["CS102"]},
          {"id": "CS210", "title": "CS 210", "subtitle": "Computer Systems", "prereqs": ["CS101", "MATH101"]}
        ]
      }
    ]
  }
]
"#
    .to_string()
}

fn course(id: &str, title: &str, subtitle: &str, prereqs: &[&str]) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        prereqs: prereqs.iter().map(|p| (*p).to_string()).collect(),
    }
}
