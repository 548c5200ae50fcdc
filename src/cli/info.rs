//! Course card: declared prerequisites with resolution status, plus
//! computed unlocks.
//!
//! Unlike `focus`, this command looks a course up by id explicitly, so an
//! unknown id is a real error here (with a did-you-mean suggestion).
//! Dangling prerequisite ids are flagged inline but never fail the
//! command - reporting malformed references is not this tool's job.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::{course_not_found, load_flowsheet};
use crate::graph::{CourseRegistry, UnlockIndex};

/// Command to show details for one course.
#[derive(Args)]
pub struct InfoCommand {
    /// The course id to describe
    course_id: String,
}

impl InfoCommand {
    /// Execute the info command with an optional flowsheet path.
    pub fn execute_with_flowsheet_path(self, flowsheet_path: Option<PathBuf>) -> Result<()> {
        let flowsheet = load_flowsheet(flowsheet_path)?;
        let registry = CourseRegistry::build(&flowsheet)?;
        let unlock_index = UnlockIndex::derive(&registry);

        let Some(record) = registry.lookup(&self.course_id) else {
            return Err(course_not_found(&self.course_id, &registry));
        };

        println!("{} {}", self.course_id.cyan().bold(), record.title.bold());
        if !record.subtitle.is_empty() {
            println!("  {}", record.subtitle);
        }

        println!("\n{}", "Prerequisites:".bold());
        if record.prereqs.is_empty() {
            println!("  (none)");
        }
        for prereq in &record.prereqs {
            match registry.lookup(prereq) {
                Some(prereq_record) => {
                    println!("  {} {}  {}", "✓".green(), prereq, prereq_record.title);
                }
                None => {
                    println!("  {} {}  {}", "?".yellow(), prereq, "(unknown id)".bright_black());
                }
            }
        }

        println!("\n{}", "Unlocks:".bold());
        let unlocks = unlock_index.unlocks_of(&self.course_id);
        if unlocks.is_empty() {
            println!("  (none)");
        }
        for unlocked in &unlocks {
            // Unlockers always come from the registry, so the lookup holds
            if let Some(unlocked_record) = registry.lookup(unlocked) {
                println!("  {} {}  {}", "→".cyan(), unlocked, unlocked_record.title);
            }
        }

        Ok(())
    }
}
