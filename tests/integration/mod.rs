//! Integration test suite for the flowsheet CLI
//!
//! End-to-end tests that run the compiled binary against temporary project
//! directories and assert on its output and exit status.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! Tests are organized by functionality area:
//! - **init**: Starter flowsheet creation
//! - **show**: Neutral flowsheet rendering and JSON output
//! - **focus**: Hover-style highlighting and classification output
//! - **info**: Per-course prerequisite and unlock cards
//! - **tree**: Transitive prerequisite and dependent chains
//! - **convert**: JSON/TOML format translation
//! - **error_scenarios**: Discovery failures, malformed data, unknown ids

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

// Integration tests
mod convert;
mod error_scenarios;
mod focus;
mod info;
mod init;
mod show;
mod tree;
