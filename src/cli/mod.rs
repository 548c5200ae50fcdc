//! Command-line interface for the flowsheet explorer.
//!
//! Each command lives in its own module with its own argument struct and
//! execution logic:
//!
//! - `init` - create a starter `flowsheet.toml` with a worked curriculum
//! - `show` - render the whole flowsheet in the neutral state
//! - `focus` - one hover interaction: classify a course and render the
//!   highlighted flowsheet
//! - `info` - course card with prerequisite resolution status and unlocks
//! - `tree` - transitive prerequisite (or dependent) chain
//! - `convert` - translate between `courses.json` and `flowsheet.toml`
//!
//! # Global Options
//!
//! All commands support:
//! - `--flowsheet <PATH>` - explicit flowsheet file, bypassing discovery
//! - `--verbose` / `--quiet` - log verbosity
//! - `--color <auto|always|never>` - terminal color control
//!
//! # Example
//!
//! ```bash
//! flowsheet init
//! flowsheet show
//! flowsheet focus CS201
//! flowsheet info CS210
//! flowsheet tree CS201 --invert
//! ```

mod convert;
mod focus;
mod info;
mod init;
mod show;
mod tree;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::catalog::{Flowsheet, find_flowsheet_with_optional};
use crate::graph::CourseRegistry;

/// Terminal color control for all output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal (default)
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Main CLI structure for the flowsheet explorer.
///
/// Global options are available to every subcommand; the `--flowsheet`
/// path flows into each command's file discovery.
#[derive(Parser)]
#[command(
    name = "flowsheet",
    about = "Curriculum flowsheet explorer - visualize course prerequisites and unlocks",
    version,
    long_about = "Loads a curriculum flowsheet of courses grouped by year and quarter, derives \
                  the prerequisite graph, and answers what each course requires and what it unlocks."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose (debug) log output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the flowsheet file (flowsheet.toml or courses.json).
    ///
    /// By default the file is discovered via the FLOWSHEET_FILE environment
    /// variable or by searching the current directory and its parents.
    #[arg(long, global = true)]
    flowsheet: Option<PathBuf>,

    /// When to use terminal colors
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Create a starter flowsheet.toml with a small worked curriculum.
    Init(init::InitCommand),

    /// Render the whole flowsheet in the neutral state.
    Show(show::ShowCommand),

    /// Focus one course: highlight its prerequisites and unlocks.
    Focus(focus::FocusCommand),

    /// Show a course card with prerequisites and unlocks.
    Info(info::InfoCommand),

    /// Show the transitive prerequisite chain of a course.
    Tree(tree::TreeCommand),

    /// Convert between courses.json and flowsheet.toml formats.
    Convert(convert::ConvertCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging and color handling once, then dispatches.
    pub fn execute(self) -> Result<()> {
        self.init_logging();
        self.apply_color_choice();

        match self.command {
            Commands::Init(cmd) => cmd.execute(),
            Commands::Show(cmd) => cmd.execute_with_flowsheet_path(self.flowsheet),
            Commands::Focus(cmd) => cmd.execute_with_flowsheet_path(self.flowsheet),
            Commands::Info(cmd) => cmd.execute_with_flowsheet_path(self.flowsheet),
            Commands::Tree(cmd) => cmd.execute_with_flowsheet_path(self.flowsheet),
            Commands::Convert(cmd) => cmd.execute(),
        }
    }

    fn init_logging(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    }

    fn apply_color_choice(&self) {
        match self.color {
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
            ColorChoice::Auto => {}
        }
    }
}

/// Discover and load the flowsheet for a command.
///
/// Shared by every command that reads curriculum data.
pub(crate) fn load_flowsheet(flowsheet_path: Option<PathBuf>) -> Result<Flowsheet> {
    let path = find_flowsheet_with_optional(flowsheet_path)?;
    Flowsheet::load(&path)
}

/// Maximum Levenshtein distance, as a percentage of the id length, for a
/// did-you-mean suggestion.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Find the known course id closest to a mistyped one.
///
/// Returns `None` when nothing is close enough to be a plausible typo.
pub(crate) fn suggest_course_id(id: &str, registry: &CourseRegistry) -> Option<String> {
    let max_distance = (id.len() * SIMILARITY_THRESHOLD_PERCENT).div_ceil(100).max(1);

    registry
        .iter()
        .map(|(candidate, _)| (candidate, strsim::levenshtein(id, candidate)))
        .filter(|(_, distance)| *distance <= max_distance)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate.clone())
}

/// Build the standard "course not found" error with a did-you-mean
/// suggestion when one exists.
pub(crate) fn course_not_found(id: &str, registry: &CourseRegistry) -> anyhow::Error {
    use crate::core::{ErrorContext, FlowsheetError};

    let context = ErrorContext::new(FlowsheetError::CourseNotFound {
        id: id.to_string(),
    });

    let context = match suggest_course_id(id, registry) {
        Some(suggestion) => context.with_suggestion(format!("Did you mean '{suggestion}'?")),
        None => context.with_suggestion("Run 'flowsheet show' to list all course ids"),
    };

    anyhow::Error::new(context)
}
