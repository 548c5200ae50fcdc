//! Integration tests for the `tree` command.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_tree_follows_prereq_chain() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project.cmd().args(["tree", "CS201"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // CS201 -> CS102 -> CS101, all the way down
    assert!(output.contains("CS201"));
    assert!(output.contains("CS102"));
    assert!(output.contains("CS101"));
    assert!(output.contains("└── "));
}

#[test]
fn test_tree_inverted_shows_dependents() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project
        .cmd()
        .args(["tree", "CS101", "--invert"])
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.contains("CS102"));
    assert!(output.contains("CS210"));
    // Transitive: CS201 needs CS102 which needs CS101
    assert!(output.contains("CS201"));
}

#[test]
fn test_tree_depth_limits_recursion() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project
        .cmd()
        .args(["tree", "CS201", "--depth", "1"])
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.contains("CS102"));
    assert!(!output.contains("CS101"));
}

#[test]
fn test_tree_depth_zero_is_rejected() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .args(["tree", "CS201", "--depth", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_tree_terminates_on_cycle() {
    let project = TestProject::new().unwrap();
    project
        .write_flowsheet(
            r#"[[years]]
name = "Year 1"

[[years.quarters]]
name = "Fall"
courses = [
    { id = "A1", title = "Course A", prereqs = ["B1"] },
    { id = "B1", title = "Course B", prereqs = ["A1"] },
]
"#,
        )
        .unwrap();

    project
        .cmd()
        .args(["tree", "A1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(*)"))
        .stdout(predicate::str::contains("already shown above"));
}

#[test]
fn test_tree_unknown_course_fails() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .args(["tree", "NOPE999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
