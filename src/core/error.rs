//! Error handling for the flowsheet CLI.
//!
//! The error system is built around two types:
//! - [`FlowsheetError`] - strongly-typed errors for every failure case
//! - [`ErrorContext`] - wrapper adding user-friendly suggestions and details
//!
//! Common standard library and parser errors convert automatically:
//! - [`std::io::Error`] → [`FlowsheetError::IoError`]
//! - [`toml::de::Error`] → [`FlowsheetError::TomlError`]
//! - [`serde_json::Error`] → [`FlowsheetError::JsonError`]
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into a
//! displayable [`ErrorContext`] with actionable suggestions. The binary's
//! `main` routes every failure through it before exiting.
//!
//! Note that the highlight path itself never produces errors: unknown or
//! stale course ids degrade to empty contributions at every lookup site.
//! The variants here cover the outer CLI surface - file discovery, parsing,
//! and explicit by-id lookups (`info`, `tree`, `focus --strict`).
//!
//! # Examples
//!
//! ```rust,no_run
//! use flowsheet_cli::core::{FlowsheetError, ErrorContext, user_friendly_error};
//!
//! fn load_something() -> Result<(), FlowsheetError> {
//!     Err(FlowsheetError::FlowsheetNotFound)
//! }
//!
//! match load_something() {
//!     Ok(()) => println!("loaded"),
//!     Err(e) => {
//!         let ctx = user_friendly_error(anyhow::Error::from(e));
//!         ctx.display(); // colored error + suggestion on stderr
//!     }
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for flowsheet operations.
///
/// Each variant represents a specific failure mode with enough context to
/// produce an actionable message. Variants carrying foreign error types
/// (`IoError`, `TomlError`, `JsonError`) lose their payload when cloned and
/// collapse into [`FlowsheetError::Other`].
#[derive(Error, Debug)]
pub enum FlowsheetError {
    /// Two courses in the flowsheet declare the same id.
    ///
    /// Raised while building the course registry. An id collision always
    /// means the curriculum data is wrong, and a silent winner would make
    /// every later classification lie, so registry construction fails
    /// instead of applying last-write-wins.
    #[error("Duplicate course id '{id}' in flowsheet")]
    DuplicateCourseId {
        /// The course id that appeared more than once
        id: String,
    },

    /// No flowsheet file found via flag, environment, or ancestor search.
    ///
    /// Discovery walks up from the current directory looking for
    /// `flowsheet.toml` and then `courses.json`, similar to how Cargo
    /// searches for `Cargo.toml`.
    #[error(
        "No flowsheet file (flowsheet.toml or courses.json) found in current directory or any parent directory"
    )]
    FlowsheetNotFound,

    /// Flowsheet file exists but could not be parsed.
    #[error("Invalid flowsheet file syntax in {file}")]
    FlowsheetParseError {
        /// Path to the file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// File extension is neither `.toml` nor `.json`.
    #[error("Unsupported flowsheet format: {path}")]
    UnsupportedFormat {
        /// The path with the unrecognized extension
        path: String,
    },

    /// A course id given on the command line does not exist.
    ///
    /// Only raised by explicit by-id commands (`info`, `tree`,
    /// `focus --strict`). The classifier itself never errors on unknown
    /// ids.
    #[error("Course '{id}' not found in flowsheet")]
    CourseNotFound {
        /// The course id that could not be resolved
        id: String,
    },

    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing or serialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error with a custom message
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

impl Clone for FlowsheetError {
    fn clone(&self) -> Self {
        match self {
            Self::DuplicateCourseId {
                id,
            } => Self::DuplicateCourseId {
                id: id.clone(),
            },
            Self::FlowsheetNotFound => Self::FlowsheetNotFound,
            Self::FlowsheetParseError {
                file,
                reason,
            } => Self::FlowsheetParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::UnsupportedFormat {
                path,
            } => Self::UnsupportedFormat {
                path: path.clone(),
            },
            Self::CourseNotFound {
                id,
            } => Self::CourseNotFound {
                id: id.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::JsonError(e) => Self::Other {
                message: format!("JSON error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// Wraps a [`FlowsheetError`] and adds an optional suggestion and optional
/// details. When displayed, the error message prints in red, details in
/// yellow, and the suggestion in green, all to stderr.
///
/// # Examples
///
/// ```rust,no_run
/// use flowsheet_cli::core::{FlowsheetError, ErrorContext};
///
/// let context = ErrorContext::new(FlowsheetError::FlowsheetNotFound)
///     .with_suggestion("Run 'flowsheet init' to create a starter flowsheet.toml")
///     .with_details("Discovery searches current and parent directories");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying flowsheet error
    pub error: FlowsheetError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: FlowsheetError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green to draw attention.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining why the error occurred.
    ///
    /// Details are displayed in yellow, less prominent than the error or
    /// suggestion.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// Recognizes [`FlowsheetError`] variants, [`std::io::Error`], and
/// [`toml::de::Error`] and maps each to tailored guidance. Anything else
/// falls through to a generic context that preserves the full error chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // A command may have already attached its own context (e.g. a
    // did-you-mean suggestion); pass it through untouched.
    let error = match error.downcast::<ErrorContext>() {
        Ok(context) => return context,
        Err(error) => error,
    };

    if let Some(fs_error) = error.downcast_ref::<FlowsheetError>() {
        return create_error_context(fs_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(FlowsheetError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check file ownership and permissions on the flowsheet file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(FlowsheetError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(FlowsheetError::FlowsheetParseError {
            file: "flowsheet.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion(
            "Check the TOML syntax in your flowsheet file. Verify quotes, brackets, and [[years]] section headers",
        )
        .with_details(
            "TOML parsing errors are usually caused by syntax issues like missing quotes or mismatched brackets",
        );
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(FlowsheetError::Other {
        message,
    })
}

/// Map each [`FlowsheetError`] variant to a context with tailored suggestions.
fn create_error_context(error: FlowsheetError) -> ErrorContext {
    match &error {
        FlowsheetError::DuplicateCourseId { id } => {
            let id = id.clone();
            ErrorContext::new(error)
                .with_suggestion(format!(
                    "Remove or rename one of the courses with id '{id}' in your flowsheet file"
                ))
                .with_details(
                    "Every course id must be unique so that prerequisite references are unambiguous",
                )
        }

        FlowsheetError::FlowsheetNotFound => ErrorContext::new(error)
            .with_suggestion(
                "Run 'flowsheet init' to create a starter flowsheet.toml, or pass --flowsheet <PATH>",
            )
            .with_details(
                "Discovery checks --flowsheet, then the FLOWSHEET_FILE environment variable, then searches current and parent directories",
            ),

        FlowsheetError::FlowsheetParseError { file, .. } => {
            let suggestion = if file.ends_with(".json") {
                "Check the JSON syntax - the file should be an array of year objects with quarters and courses"
            } else {
                "Check the TOML syntax - years, quarters, and courses are [[years]] style array-of-table sections"
            };
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        FlowsheetError::UnsupportedFormat { .. } => ErrorContext::new(error)
            .with_suggestion("Use a .toml or .json file extension")
            .with_details("The flowsheet format is chosen by file extension: TOML (native) or JSON (original courses.json shape)"),

        FlowsheetError::CourseNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'flowsheet show' to list all course ids in the flowsheet"),

        FlowsheetError::IoError(_)
        | FlowsheetError::TomlError(_)
        | FlowsheetError::JsonError(_)
        | FlowsheetError::Other { .. } => ErrorContext::new(error),
    }
}
