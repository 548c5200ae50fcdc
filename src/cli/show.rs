//! Render the whole flowsheet in the neutral state.
//!
//! The CLI counterpart of the original page's initial render: every course
//! visible, nothing highlighted.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::load_flowsheet;
use crate::graph::CourseRegistry;
use crate::highlight::HighlightBoard;
use crate::render::render_flowsheet;

/// Command to display the flowsheet.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format (tree, json)
    #[arg(short = 'f', long, default_value = "tree")]
    format: String,
}

impl ShowCommand {
    /// Execute the show command with an optional flowsheet path.
    pub fn execute_with_flowsheet_path(self, flowsheet_path: Option<PathBuf>) -> Result<()> {
        let flowsheet = load_flowsheet(flowsheet_path)?;

        // Surface duplicate-id defects here too, before rendering
        CourseRegistry::build(&flowsheet)?;

        match self.format.as_str() {
            "json" => {
                println!("{}", serde_json::to_string_pretty(&flowsheet)?);
            }
            "tree" => {
                let board = HighlightBoard::new(&flowsheet);
                print!("{}", render_flowsheet(&flowsheet, &board));
            }
            other => {
                return Err(anyhow::anyhow!(
                    "Invalid format '{other}'. Valid formats are: tree, json"
                ));
            }
        }

        Ok(())
    }
}
