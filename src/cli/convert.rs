//! Translate between the original `courses.json` shape and the native
//! TOML flowsheet format.
//!
//! Direction is chosen by the output extension; the input loads through
//! the usual extension dispatch, so any supported format converts to any
//! other.
//!
//! ```bash
//! flowsheet convert courses.json flowsheet.toml
//! flowsheet convert flowsheet.toml courses.json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::catalog::Flowsheet;
use crate::core::FlowsheetError;

/// Command to convert a flowsheet between formats.
#[derive(Args)]
pub struct ConvertCommand {
    /// Input file (.toml or .json)
    input: PathBuf,

    /// Output file (.toml or .json)
    output: PathBuf,
}

impl ConvertCommand {
    /// Load the input and write it in the output's format.
    pub fn execute(self) -> Result<()> {
        let flowsheet = Flowsheet::load(&self.input)?;

        match self.output.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => flowsheet.save(&self.output)?,
            Some("json") => {
                let wire: Vec<JsonYear<'_>> = flowsheet.years.iter().map(JsonYear::from).collect();
                let content = serde_json::to_string_pretty(&wire)?;
                std::fs::write(&self.output, content)?;
            }
            _ => {
                return Err(FlowsheetError::UnsupportedFormat {
                    path: self.output.display().to_string(),
                }
                .into());
            }
        }

        println!(
            "{} Converted {} course(s): {} -> {}",
            "✓".green(),
            flowsheet.course_count(),
            self.input.display(),
            self.output.display()
        );

        Ok(())
    }
}

// Wire structs reproducing the original export's field names, used only
// when writing JSON (loading already accepts them via serde aliases).

#[derive(Serialize)]
struct JsonYear<'a> {
    #[serde(rename = "yearName")]
    year_name: &'a str,
    quarters: Vec<JsonQuarter<'a>>,
}

#[derive(Serialize)]
struct JsonQuarter<'a> {
    #[serde(rename = "quarterName")]
    quarter_name: &'a str,
    courses: Vec<JsonCourse<'a>>,
}

#[derive(Serialize)]
struct JsonCourse<'a> {
    id: &'a str,
    title: &'a str,
    subtitle: &'a str,
    prereqs: &'a [String],
}

impl<'a> From<&'a crate::catalog::Year> for JsonYear<'a> {
    fn from(year: &'a crate::catalog::Year) -> Self {
        Self {
            year_name: &year.name,
            quarters: year
                .quarters
                .iter()
                .map(|quarter| JsonQuarter {
                    quarter_name: &quarter.name,
                    courses: quarter
                        .courses
                        .iter()
                        .map(|course| JsonCourse {
                            id: &course.id,
                            title: &course.title,
                            subtitle: &course.subtitle,
                            prereqs: &course.prereqs,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
