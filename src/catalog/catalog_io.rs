//! I/O operations for flowsheet files.
//!
//! Loading dispatches on file extension: `.toml` parses the native format,
//! `.json` parses the original `courses.json` export (a top-level array of
//! year objects). Saving always writes the native TOML format with
//! `[[years]]` section headers.
//!
//! Load performs no prerequisite reference validation - dangling ids are
//! legal data that the graph layer degrades on silently.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::{Flowsheet, Year};
use crate::core::FlowsheetError;

impl Flowsheet {
    /// Load and parse a flowsheet from a TOML or JSON file.
    ///
    /// The format is chosen by extension. JSON input is expected in the
    /// original export shape (top-level array of years, `yearName` /
    /// `quarterName` field names), which the serde aliases accept.
    ///
    /// # Errors
    ///
    /// - [`FlowsheetError::UnsupportedFormat`] for unrecognized extensions
    /// - [`FlowsheetError::FlowsheetParseError`] for syntax errors
    /// - [`FlowsheetError::IoError`] when the file cannot be read
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use flowsheet_cli::catalog::Flowsheet;
    /// use std::path::Path;
    ///
    /// let flowsheet = Flowsheet::load(Path::new("flowsheet.toml"))?;
    /// println!("{} courses", flowsheet.course_count());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read flowsheet file: {}", path.display()))?;

        let flowsheet = match extension(path) {
            Some("toml") => toml::from_str::<Self>(&content).map_err(|e| {
                FlowsheetError::FlowsheetParseError {
                    file: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?,
            Some("json") => {
                // Original export shape: a top-level array of years
                let years: Vec<Year> = serde_json::from_str(&content).map_err(|e| {
                    FlowsheetError::FlowsheetParseError {
                        file: path.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Self {
                    years,
                }
            }
            _ => {
                return Err(FlowsheetError::UnsupportedFormat {
                    path: path.display().to_string(),
                }
                .into());
            }
        };

        debug!(
            file = %path.display(),
            years = flowsheet.years.len(),
            courses = flowsheet.course_count(),
            "loaded flowsheet"
        );

        Ok(flowsheet)
    }

    /// Save the flowsheet to a TOML file with section-style formatting.
    ///
    /// Serializes through a `toml_edit` document so the top-level `years`
    /// array renders as `[[years]]` section headers; nested quarters and
    /// courses stay inline.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut doc = toml_edit::ser::to_document(self)
            .with_context(|| "Failed to serialize flowsheet to TOML format")?;

        // Promote the top-level array of inline tables to [[years]] sections
        for (_key, item) in doc.iter_mut() {
            let Some(array) = item.as_array() else { continue };
            if array.is_empty() || !array.iter().all(toml_edit::Value::is_inline_table) {
                continue;
            }
            let mut sections = toml_edit::ArrayOfTables::new();
            for value in array.iter() {
                if let Some(inline) = value.as_inline_table() {
                    sections.push(inline.clone().into_table());
                }
            }
            *item = toml_edit::Item::ArrayOfTables(sections);
        }

        std::fs::write(path, doc.to_string())
            .with_context(|| format!("Failed to write flowsheet file: {}", path.display()))?;

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
