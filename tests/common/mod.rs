//! Common test utilities for flowsheet integration tests
//!
//! Consolidates the temp-project setup every end-to-end test needs: a
//! directory, a flowsheet file, and a command rooted in it.

// Allow dead code because these utilities are used across different test files
// and not all utilities are used in every test file
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use flowsheet_cli::test_utils::{sample_courses_json, sample_flowsheet_toml};

/// A temporary project directory holding a flowsheet file.
///
/// Commands built with [`TestProject::cmd`] run with the project as their
/// working directory, so discovery finds the project's own files and
/// nothing from the host environment leaks in.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: TempDir::new()?,
        })
    }

    /// Create a project seeded with the standard sample `flowsheet.toml`.
    pub fn with_sample_flowsheet() -> Result<Self> {
        let project = Self::new()?;
        project.write_flowsheet(&sample_flowsheet_toml())?;
        Ok(project)
    }

    /// The project directory path.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `flowsheet.toml` with the given content.
    pub fn write_flowsheet(&self, content: &str) -> Result<PathBuf> {
        self.write_file("flowsheet.toml", content)
    }

    /// Write the sample curriculum as the original `courses.json` export.
    pub fn write_sample_courses_json(&self) -> Result<PathBuf> {
        self.write_file("courses.json", &sample_courses_json())
    }

    /// Write an arbitrary file into the project directory.
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Read a file from the project directory.
    pub fn read_file(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.temp.path().join(name))?)
    }

    /// Build a `flowsheet` command rooted in this project.
    ///
    /// Clears `FLOWSHEET_FILE` and disables colors so assertions see
    /// plain text regardless of the host environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("flowsheet").expect("flowsheet binary should build");
        cmd.current_dir(self.temp.path());
        cmd.env_remove("FLOWSHEET_FILE");
        cmd.env("NO_COLOR", "1");
        cmd
    }
}
