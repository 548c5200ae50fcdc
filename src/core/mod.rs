//! Core types and error handling shared across the flowsheet CLI.
//!
//! This module hosts the error taxonomy ([`FlowsheetError`]) and the
//! user-facing error reporting layer ([`ErrorContext`],
//! [`user_friendly_error`]) used by the binary's top-level error handler.

pub mod error;

pub use error::{ErrorContext, FlowsheetError, user_friendly_error};
