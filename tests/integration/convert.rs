//! Integration tests for the `convert` command.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_convert_json_to_toml() {
    let project = TestProject::new().unwrap();
    project.write_sample_courses_json().unwrap();

    project
        .cmd()
        .args(["convert", "courses.json", "flowsheet.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 6 course(s)"));

    let toml_content = project.read_file("flowsheet.toml").unwrap();
    assert!(toml_content.contains("[[years]]"));
    assert!(toml_content.contains("CS201"));

    // The converted file discovers and renders like any flowsheet
    project
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("CS201"));
}

#[test]
fn test_convert_toml_to_original_json_shape() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .args(["convert", "flowsheet.toml", "export.json"])
        .assert()
        .success();

    let json_content = project.read_file("export.json").unwrap();
    assert!(json_content.contains("yearName"));
    assert!(json_content.contains("quarterName"));

    let value: serde_json::Value = serde_json::from_str(&json_content).unwrap();
    assert_eq!(value[0]["yearName"], "Year 1");
    assert_eq!(value[1]["quarters"][0]["courses"][0]["id"], "CS201");
}

#[test]
fn test_convert_rejects_unknown_output_format() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .args(["convert", "flowsheet.toml", "out.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported flowsheet format"));
}

#[test]
fn test_convert_missing_input_fails() {
    let project = TestProject::new().unwrap();

    project
        .cmd()
        .args(["convert", "missing.json", "out.toml"])
        .assert()
        .failure();
}
