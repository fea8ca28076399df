//! End-to-end tests for the `init` command.
//!
//! These tests invoke the actual CLI binary and validate the behavior of
//! the `init` subcommand from a user's perspective.

mod common;

use common::TestFixture;
use predicates::prelude::*;
use std::fs;

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_init_scaffolds_project_from_template() {
    let fixture = TestFixture::new().with_default_registry();

    fixture
        .command()
        .arg("init")
        .arg("my-app")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized successfully"))
        .stdout(predicate::str::contains("cd my-app"))
        .stdout(predicate::str::contains("bun install"));

    let project = fixture.project_file("my-app");
    assert!(project.join("turbo.json").exists());
    assert!(project.join(".claude/settings.json").exists());

    // The template manifest was copied and renamed for the new project.
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(manifest["dependencies"]["react"], "18.0.0");
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_init_refuses_existing_directory() {
    let fixture = TestFixture::new()
        .with_default_registry()
        .with_project_file("my-app/keep.txt", "precious");

    fixture
        .command()
        .arg("init")
        .arg("my-app")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(fixture.project_file("my-app/keep.txt")).unwrap(),
        "precious"
    );
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_init_without_registry_fails_with_hint() {
    // Empty source root: no registry.json.
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("init")
        .arg("my-app")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Registry error"))
        .stderr(predicate::str::contains("hint:"));

    assert!(!fixture.project_file("my-app").exists());
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_init_warns_on_missing_template_entry() {
    // Registry names a template entry that is not on disk.
    let fixture = TestFixture::new()
        .with_registry(
            r#"{
            "template": {"path": "template", "files": ["package.json", "missing.json"]},
            "apps": {},
            "packages": {}
        }"#,
        )
        .with_template_file("package.json", r#"{"name":"template"}"#);

    fixture
        .command()
        .arg("init")
        .arg("my-app")
        .assert()
        .success()
        .stderr(predicate::str::contains("missing.json"))
        .stderr(predicate::str::contains("not available locally"));

    assert!(fixture.project_file("my-app/package.json").exists());
}
