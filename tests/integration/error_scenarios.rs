//! Integration tests for error handling and edge cases.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_no_flowsheet_found() {
    let project = TestProject::new().unwrap();

    project
        .cmd()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No flowsheet file"));
}

#[test]
fn test_malformed_toml_reports_file_and_reason() {
    let project = TestProject::new().unwrap();
    project.write_flowsheet("this is not [ valid toml").unwrap();

    project
        .cmd()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid flowsheet file syntax"))
        .stderr(predicate::str::contains("flowsheet.toml"));
}

#[test]
fn test_malformed_json_reports_file() {
    let project = TestProject::new().unwrap();
    project.write_file("courses.json", "{ not json").unwrap();

    project
        .cmd()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid flowsheet file syntax"))
        .stderr(predicate::str::contains("courses.json"));
}

#[test]
fn test_duplicate_course_id_fails_loudly() {
    let project = TestProject::new().unwrap();
    project
        .write_flowsheet(
            r#"[[years]]
name = "Year 1"

[[years.quarters]]
name = "Fall"
courses = [
    { id = "CS101", title = "CS 101", prereqs = [] },
    { id = "CS101", title = "CS 101 again", prereqs = [] },
]
"#,
        )
        .unwrap();

    project
        .cmd()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate course id 'CS101'"));
}

#[test]
fn test_flowsheet_file_env_variable() {
    let data = TestProject::with_sample_flowsheet().unwrap();
    let elsewhere = TestProject::new().unwrap();

    elsewhere
        .cmd()
        .env("FLOWSHEET_FILE", data.path().join("flowsheet.toml"))
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("CS101"));
}

#[test]
fn test_flowsheet_file_env_must_exist() {
    // A dangling env path errors instead of falling through to discovery
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .env("FLOWSHEET_FILE", project.path().join("missing.toml"))
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No flowsheet file"));
}

#[test]
fn test_explicit_flowsheet_flag_must_exist() {
    let project = TestProject::with_sample_flowsheet().unwrap();

    project
        .cmd()
        .args(["show", "--flowsheet", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No flowsheet file"));
}
