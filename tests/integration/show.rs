//! Integration tests for the `show` command.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_show_renders_full_layout() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project.cmd().arg("show").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for expected in ["Year 1", "Year 2", "Fall", "Winter"] {
        assert!(output.contains(expected), "missing {expected}");
    }
    for id in ["CS101", "MATH101", "CS102", "MATH102", "CS201", "CS210"] {
        assert!(output.contains(id), "missing {id}");
    }
    assert!(output.contains("└── "));
}

#[test]
fn test_show_json_output() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project.cmd().args(["show", "--format", "json"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["years"][0]["name"], "Year 1");
    assert_eq!(
        value["years"][0]["quarters"][0]["courses"][0]["id"],
        "CS101"
    );
}

#[test]
fn test_show_invalid_format() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .args(["show", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_show_reads_original_json_export() {
    let project = TestProject::new().unwrap();
    project.write_sample_courses_json().unwrap();

    project
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("CS201"));
}

#[test]
fn test_show_with_explicit_flowsheet_flag() {
    let data = TestProject::with_sample_flowsheet().unwrap();
    let elsewhere = TestProject::new().unwrap();

    elsewhere
        .cmd()
        .arg("show")
        .arg("--flowsheet")
        .arg(data.path().join("flowsheet.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("CS101"));
}
