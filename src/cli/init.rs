//! Create a starter flowsheet file.
//!
//! The `init` command writes a `flowsheet.toml` containing a small worked
//! curriculum, playing the role the populated `courses.json` plays for the
//! original page: something to explore immediately.
//!
//! ```bash
//! flowsheet init
//! flowsheet init --path ./my-curriculum
//! flowsheet init --force
//! ```

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::constants::FLOWSHEET_TOML;

/// Command to create a starter `flowsheet.toml`.
#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the flowsheet in (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing flowsheet file
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    /// Write the starter flowsheet, creating the target directory if
    /// needed. Fails on an existing file unless `--force` is given.
    pub fn execute(self) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let flowsheet_path = target_dir.join(FLOWSHEET_TOML);

        if flowsheet_path.exists() && !self.force {
            return Err(anyhow!(
                "Flowsheet already exists at {}. Use --force to overwrite",
                flowsheet_path.display()
            ));
        }

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir)?;
        }

        fs::write(&flowsheet_path, STARTER_FLOWSHEET)?;

        println!("{} Initialized {} at {}", "✓".green(), FLOWSHEET_TOML, flowsheet_path.display());

        println!("\n{}", "Next steps:".cyan());
        println!("  View the curriculum with {}", "flowsheet show".bright_white());
        println!(
            "  Explore a course's prerequisites with {}",
            "flowsheet focus CS201".bright_white()
        );

        Ok(())
    }
}

/// A small two-year curriculum with chained and shared prerequisites, so
/// `focus` has something interesting to highlight out of the box.
const STARTER_FLOWSHEET: &str = r#"# Curriculum flowsheet
# Each course lists the ids of its direct prerequisites.
# Years and quarters are display order only.

[[years]]
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
"#;
