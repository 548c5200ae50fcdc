//! Display the transitive prerequisite chain of a course.
//!
//! A separate, explicit traversal command: the hover path (`focus`) stays
//! strictly two-hop, but `tree` follows prerequisite edges all the way
//! down (or dependent edges all the way up with `--invert`), with a
//! visited-set guard so cyclic defect data terminates.
//!
//! ```bash
//! flowsheet tree CS201
//! flowsheet tree CS101 --invert     # what eventually requires CS101
//! flowsheet tree CS201 --depth 2
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::HashSet;
use std::path::PathBuf;

use super::{course_not_found, load_flowsheet};
use crate::graph::{CourseRegistry, UnlockIndex};

/// Command to display a transitive prerequisite or dependent tree.
#[derive(Args)]
pub struct TreeCommand {
    /// The course id to start from
    course_id: String,

    /// Show what depends on the course instead of what it requires
    #[arg(short = 'i', long)]
    invert: bool,

    /// Maximum depth to display (unlimited if not specified)
    #[arg(short = 'd', long)]
    depth: Option<usize>,
}

impl TreeCommand {
    /// Execute the tree command with an optional flowsheet path.
    pub fn execute_with_flowsheet_path(self, flowsheet_path: Option<PathBuf>) -> Result<()> {
        if let Some(depth) = self.depth
            && depth == 0
        {
            return Err(anyhow::anyhow!("Depth must be at least 1"));
        }

        let flowsheet = load_flowsheet(flowsheet_path)?;
        let registry = CourseRegistry::build(&flowsheet)?;
        let unlock_index = UnlockIndex::derive(&registry);

        let Some(record) = registry.lookup(&self.course_id) else {
            return Err(course_not_found(&self.course_id, &registry));
        };

        println!("{} {}", self.course_id.cyan().bold(), record.title);

        let mut printed = HashSet::new();
        printed.insert(self.course_id.clone());

        let children = self.children_of(&self.course_id, &registry, &unlock_index);
        let mut any_repeats = false;
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            any_repeats |= self.print_node(
                child,
                "",
                is_last,
                &mut printed,
                &registry,
                &unlock_index,
                1,
            );
        }

        if any_repeats {
            println!();
            println!("{}", "(*) = already shown above".bright_black());
        }

        Ok(())
    }

    /// Outgoing edges for the traversal direction: declared prereqs, or
    /// unlockers when inverted.
    fn children_of(
        &self,
        id: &str,
        registry: &CourseRegistry,
        unlock_index: &UnlockIndex,
    ) -> Vec<String> {
        if self.invert {
            unlock_index.unlocks_of(id).into_iter().collect()
        } else {
            registry.lookup(id).map(|record| record.prereqs.clone()).unwrap_or_default()
        }
    }

    /// Print one node and recurse; returns whether any repeat marker was
    /// emitted in this subtree.
    #[allow(clippy::too_many_arguments)]
    fn print_node(
        &self,
        id: &str,
        prefix: &str,
        is_last: bool,
        printed: &mut HashSet<String>,
        registry: &CourseRegistry,
        unlock_index: &UnlockIndex,
        current_depth: usize,
    ) -> bool {
        let connector = if is_last { "└── " } else { "├── " };

        let Some(record) = registry.lookup(id) else {
            // Dangling reference: shown, flagged, never recursed into
            println!("{prefix}{connector}{} {}", id, "(unknown id)".yellow());
            return false;
        };

        // Visited-set guard: repeats (including cycles) print once with a
        // marker and stop
        let is_repeat = !printed.insert(id.to_string());
        let marker = if is_repeat {
            " (*)".bright_black().to_string()
        } else {
            String::new()
        };

        println!("{prefix}{connector}{}  {}{}", id.cyan(), record.title, marker);

        if is_repeat {
            return true;
        }

        if let Some(max_depth) = self.depth
            && current_depth >= max_depth
        {
            return false;
        }

        let child_prefix =
            if is_last { format!("{prefix}    ") } else { format!("{prefix}│   ") };

        let children = self.children_of(id, registry, unlock_index);
        let mut any_repeats = false;
        for (i, child) in children.iter().enumerate() {
            let is_last_child = i == children.len() - 1;
            any_repeats |= self.print_node(
                child,
                &child_prefix,
                is_last_child,
                printed,
                registry,
                unlock_index,
                current_depth + 1,
            );
        }

        any_repeats
    }
}
