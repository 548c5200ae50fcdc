//! Flowsheet CLI entry point
//!
//! This is the main executable for the curriculum flowsheet explorer.
//! It handles command-line argument parsing, error display, and command execution.
//!
//! The CLI supports various commands for exploring a flowsheet:
//! - `init` - Initialize a starter flowsheet.toml
//! - `show` - Render the whole flowsheet
//! - `focus` - Highlight a course's prerequisites and unlocks
//! - `info` - Show one course's details
//! - `tree` - Display a transitive prerequisite chain
//! - `convert` - Translate between JSON and TOML formats

use anyhow::Result;
use clap::Parser;
use flowsheet_cli::cli;
use flowsheet_cli::core::user_friendly_error;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
