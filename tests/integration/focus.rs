//! Integration tests for the `focus` command.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_focus_renders_flowsheet_with_legend() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project.cmd().args(["focus", "CS102"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // Every course stays visible while highlighted
    for id in ["CS101", "MATH101", "CS102", "MATH102", "CS201", "CS210"] {
        assert!(output.contains(id), "missing {id}");
    }
    assert!(output.contains("legend"));
}

#[test]
fn test_focus_json_classification() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project
        .cmd()
        .args(["focus", "CS102", "--format", "json"])
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["focal"], "CS102");
    assert_eq!(value["primary"], serde_json::json!(["CS101"]));
    assert_eq!(value["secondary"], serde_json::json!([]));
    assert_eq!(value["unlocks"], serde_json::json!(["CS201"]));
}

#[test]
fn test_focus_two_hop_chain() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project
        .cmd()
        .args(["focus", "CS201", "--format", "json"])
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["primary"], serde_json::json!(["CS102"]));
    // CS101 is a prereq of CS102, so it lands in the second tier
    assert_eq!(value["secondary"], serde_json::json!(["CS101"]));
    assert_eq!(value["unlocks"], serde_json::json!([]));
}

#[test]
fn test_focus_unknown_course_degrades_to_neutral() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project
        .cmd()
        .args(["focus", "NOPE999"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // The flowsheet still renders, but there is nothing to explain
    assert!(output.contains("CS101"));
    assert!(!output.contains("legend"));
}

#[test]
fn test_focus_unknown_course_json_is_empty_classification() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project
        .cmd()
        .args(["focus", "NOPE999", "--format", "json"])
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["focal"], serde_json::Value::Null);
    assert_eq!(value["primary"], serde_json::json!([]));
    assert_eq!(value["secondary"], serde_json::json!([]));
    assert_eq!(value["unlocks"], serde_json::json!([]));
}

#[test]
fn test_focus_strict_fails_with_suggestion() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .args(["focus", "CS20X", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("CS201"));
}
