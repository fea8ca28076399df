//! End-to-end tests for the `add` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;
use std::fs;

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_add_app_copies_template_and_renames() {
    let fixture = TestFixture::new().with_default_registry();

    fixture
        .command()
        .arg("add")
        .arg("app")
        .arg("web-template")
        .arg("storefront")
        .assert()
        .success()
        .stdout(predicate::str::contains("added successfully"));

    let app_dir = fixture.project_file("apps/storefront");
    assert!(app_dir.join("src/index.ts").exists());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(app_dir.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "storefront");
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_add_package_merges_dependencies_into_root() {
    let fixture = TestFixture::new().with_default_registry();

    fixture
        .command()
        .arg("add")
        .arg("package")
        .arg("ui")
        .arg("design-system")
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 2 dependency entries"));

    let root: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(fixture.project_file("package.json")).unwrap())
            .unwrap();
    assert_eq!(root["dependencies"]["react"], "18.2.0");
    assert_eq!(root["devDependencies"]["typescript"], "^5.0.0");

    let copied: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(fixture.project_file("packages/design-system/package.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(copied["name"], "design-system");
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_add_unknown_template_lists_available() {
    let fixture = TestFixture::new().with_default_registry();

    fixture
        .command()
        .arg("add")
        .arg("app")
        .arg("desktop-template")
        .arg("desktop")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown app 'desktop-template'"))
        .stderr(predicate::str::contains("web-template"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_add_refuses_existing_target() {
    let fixture = TestFixture::new()
        .with_default_registry()
        .with_project_file("apps/storefront/keep.txt", "precious");

    fixture
        .command()
        .arg("add")
        .arg("app")
        .arg("web-template")
        .arg("storefront")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_add_unavailable_source_reports_per_item() {
    let fixture = TestFixture::new().with_registry(common::registries::GHOST_PACKAGE);

    fixture
        .command()
        .arg("add")
        .arg("package")
        .arg("ghost")
        .arg("spooky")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available locally"));

    assert!(!fixture.project_file("packages/spooky").exists());
}
