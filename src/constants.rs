//! Well-known file names and environment variables used throughout the
//! flowsheet codebase.
//!
//! Defining these centrally keeps the discovery logic, the CLI help text,
//! and the tests in agreement about what a flowsheet file is called.

/// Native flowsheet file name, searched for first during discovery.
pub const FLOWSHEET_TOML: &str = "flowsheet.toml";

/// Original JSON course data file name, accepted as a fallback so an
/// unmodified `courses.json` export can be used directly.
pub const COURSES_JSON: &str = "courses.json";

/// Environment variable overriding flowsheet file discovery.
///
/// Checked after the `--flowsheet` flag but before the ancestor search.
pub const FLOWSHEET_FILE_ENV: &str = "FLOWSHEET_FILE";
