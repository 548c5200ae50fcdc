//! Focus one course: the CLI rendition of a single hover interaction.
//!
//! Classifies the course's neighborhood, applies the result to a highlight
//! board, and renders the flowsheet with the board's tokens. With
//! `--format json` the classification value itself is emitted instead.
//!
//! An unknown course id renders the flowsheet all-neutral with a notice,
//! matching the core's silent-degradation contract; `--strict` upgrades
//! that to an error with a did-you-mean suggestion.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::{course_not_found, load_flowsheet};
use crate::highlight::Highlighter;
use crate::render::{render_flowsheet, render_legend};

/// Command to highlight one course's prerequisites and unlocks.
#[derive(Args)]
pub struct FocusCommand {
    /// The course id to focus
    course_id: String,

    /// Output format (tree, json)
    #[arg(short = 'f', long, default_value = "tree")]
    format: String,

    /// Fail with an error when the course id is unknown
    #[arg(long)]
    strict: bool,
}

impl FocusCommand {
    /// Execute the focus command with an optional flowsheet path.
    pub fn execute_with_flowsheet_path(self, flowsheet_path: Option<PathBuf>) -> Result<()> {
        let flowsheet = load_flowsheet(flowsheet_path)?;
        let mut highlighter = Highlighter::new(&flowsheet)?;

        let classification = highlighter.focus_enter(&self.course_id);

        if classification.focal.is_none() {
            if self.strict {
                return Err(course_not_found(&self.course_id, highlighter.registry()));
            }
            eprintln!(
                "{}: course '{}' not found; nothing to highlight",
                "note".yellow(),
                self.course_id
            );
        }

        match self.format.as_str() {
            "json" => {
                println!("{}", serde_json::to_string_pretty(&classification)?);
            }
            "tree" => {
                print!("{}", render_flowsheet(&flowsheet, highlighter.board()));
                if classification.focal.is_some() {
                    println!("\n{}", render_legend());
                }
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
