//! Integration tests for the `info` command.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_info_shows_prereqs_and_unlocks() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project.cmd().args(["info", "CS102"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.contains("CS 102"));
    assert!(output.contains("Program Design"));
    assert!(output.contains("Prerequisites:"));
    assert!(output.contains("CS101"));
    assert!(output.contains("Unlocks:"));
    assert!(output.contains("CS201"));
}

#[test]
fn test_info_course_without_edges() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    let assert = project.cmd().args(["info", "MATH102"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // MATH102 requires MATH101 and unlocks nothing
    assert!(output.contains("MATH101"));
    assert!(output.contains("(none)"));
}

#[test]
fn test_info_flags_dangling_prereq() {
    let project = TestProject::new().unwrap();
    project
        .write_flowsheet(
            r#"[[years]]
name = "Year 1"

[[years.quarters]]
name = "Fall"
courses = [
    { id = "CS500", title = "CS 500", prereqs = ["GHOST1"] },
]
"#,
        )
        .unwrap();

    project
        .cmd()
        .args(["info", "CS500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GHOST1"))
        .stdout(predicate::str::contains("(unknown id)"));
}

#[test]
fn test_info_unknown_course_fails_with_suggestion() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .args(["info", "MATH10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("Did you mean"));
}
