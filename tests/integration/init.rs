//! Integration tests for the `init` command.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_init_creates_starter_flowsheet() {
    let project = TestProject::new().unwrap();

    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized flowsheet.toml"));

    assert!(project.path().join("flowsheet.toml").exists());

    // The starter must be immediately explorable
    project
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("CS201"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let project = TestProject::new().unwrap();
    project.write_flowsheet("years = []").unwrap();

    project
        .cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // Original content untouched
    assert_eq!(project.read_file("flowsheet.toml").unwrap(), "years = []");
}

#[test]
fn test_init_force_overwrites() {
    let project = TestProject::new().unwrap();
    project.write_flowsheet("years = []").unwrap();

    project.cmd().args(["init", "--force"]).assert().success();

    assert!(project.read_file("flowsheet.toml").unwrap().contains("CS101"));
}

#[test]
fn test_init_into_new_directory() {
    let project = TestProject::new().unwrap();

    project
        .cmd()
        .args(["init", "--path", "curriculum"])
        .assert()
        .success();

    assert!(project.path().join("curriculum").join("flowsheet.toml").exists());
}
