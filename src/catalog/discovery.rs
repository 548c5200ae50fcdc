//! Flowsheet file discovery.
//!
//! Resolution order mirrors common project-file tooling:
//! 1. An explicit `--flowsheet <PATH>` argument
//! 2. The `FLOWSHEET_FILE` environment variable
//! 3. Walking up from the current directory, checking each directory for
//!    `flowsheet.toml` and then `courses.json` (Cargo/Git-style search)

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::constants::{COURSES_JSON, FLOWSHEET_FILE_ENV, FLOWSHEET_TOML};
use crate::core::FlowsheetError;

/// Find a flowsheet file by searching up from the current directory.
///
/// Checks each directory for `flowsheet.toml` first and `courses.json`
/// second, walking up until found or the filesystem root is reached.
pub fn find_flowsheet() -> Result<PathBuf> {
    let current = std::env::current_dir()
        .context("Cannot determine current working directory")?;
    find_flowsheet_from(current)
}

/// Find a flowsheet using an explicit path, the environment, or search.
///
/// The explicit path wins when provided; a path that doesn't exist is an
/// error rather than a fallthrough, so a typo'd `--flowsheet` never
/// silently picks up a different file.
///
/// # Examples
///
/// ```rust,no_run
/// use flowsheet_cli::catalog::find_flowsheet_with_optional;
/// use std::path::PathBuf;
///
/// let explicit = Some(PathBuf::from("./curriculum/flowsheet.toml"));
/// let path = find_flowsheet_with_optional(explicit)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_flowsheet_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Ok(path);
        }
        return Err(FlowsheetError::FlowsheetNotFound.into());
    }

    if let Ok(env_path) = std::env::var(FLOWSHEET_FILE_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            debug!(file = %path.display(), "flowsheet path taken from {FLOWSHEET_FILE_ENV}");
            return Ok(path);
        }
        return Err(FlowsheetError::FlowsheetNotFound.into());
    }

    find_flowsheet()
}

/// Find a flowsheet by searching up from a specific starting directory.
///
/// Within each directory `flowsheet.toml` takes precedence over
/// `courses.json`; the search only moves to the parent when neither exists.
pub fn find_flowsheet_from(mut current: PathBuf) -> Result<PathBuf> {
    loop {
        for name in [FLOWSHEET_TOML, COURSES_JSON] {
            let candidate = current.join(name);
            if candidate.exists() {
                debug!(file = %candidate.display(), "found flowsheet file");
                return Ok(candidate);
            }
        }

        if !current.pop() {
            return Err(FlowsheetError::FlowsheetNotFound.into());
        }
    }
}
