//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that lays out a template source root
//! (registry.json plus the bundled `template/` tree) next to a project
//! directory, which is the on-disk shape every command operates on.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then:
//!
//! ```rust,ignore
//! let fixture = TestFixture::new()
//!     .with_default_registry()
//!     .with_template_file("packages/ui/src/button.ts", "export {}");
//!
//! fixture.command().arg("sync").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Registry documents used across tests.
#[allow(dead_code)]
pub mod registries {
    /// A registry with one app template, one package, and a template root
    /// carrying a manifest plus one skill directory.
    pub const DEFAULT: &str = r#"{
        "template": {
            "path": "template",
            "files": ["package.json", "turbo.json", ".claude"]
        },
        "apps": {
            "web-template": {
                "name": "web-template",
                "path": "template/apps/web-template",
                "description": "Web app starter",
                "type": "app",
                "dependencies": ["react"],
                "devDependencies": ["vite"]
            }
        },
        "packages": {
            "ui": {
                "name": "ui",
                "path": "template/packages/ui",
                "description": "Shared UI components",
                "type": "package",
                "dependencies": ["react"]
            }
        }
    }"#;

    /// A registry whose only package points at a directory that does not
    /// exist on disk.
    pub const GHOST_PACKAGE: &str = r#"{
        "template": {"path": "template", "files": []},
        "apps": {},
        "packages": {
            "ghost": {
                "name": "ghost",
                "path": "template/packages/ghost",
                "type": "package"
            }
        }
    }"#;
}

/// A test fixture holding a template source root and a project directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a fixture with an empty source root and an empty project
    /// directory containing a minimal root manifest.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("source")
            .create_dir_all()
            .expect("Failed to create source root");
        temp_dir
            .child("project/package.json")
            .write_str(r#"{"name":"proj","dependencies":{"react":"18.0.0"}}"#)
            .expect("Failed to write project manifest");
        Self { temp_dir }
    }

    /// Write a registry document into the source root.
    pub fn with_registry(self, content: &str) -> Self {
        self.temp_dir
            .child("source/registry.json")
            .write_str(content)
            .expect("Failed to write registry");
        self
    }

    /// Write the default registry plus matching template content.
    pub fn with_default_registry(self) -> Self {
        self.with_registry(registries::DEFAULT)
            .with_template_file(
                "package.json",
                r#"{"name":"template","dependencies":{"react":"18.0.0"}}"#,
            )
            .with_template_file("turbo.json", r#"{"tasks":{}}"#)
            .with_template_file(".claude/settings.json", r#"{"skill":true}"#)
            .with_template_file(
                "apps/web-template/package.json",
                r#"{"name":"web-template","dependencies":{"react":"18.0.0"}}"#,
            )
            .with_template_file("apps/web-template/src/index.ts", "console.log('web');\n")
            .with_template_file(
                "packages/ui/package.json",
                r#"{"name":"ui","dependencies":{"react":"18.2.0"},"devDependencies":{"typescript":"^5.0.0"}}"#,
            )
            .with_template_file("packages/ui/src/button.ts", "export const Button = 1;\n")
    }

    /// Write a file under the source root's `template/` directory.
    pub fn with_template_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(format!("source/template/{}", path))
            .write_str(content)
            .expect("Failed to write template file");
        self
    }

    /// Write a file under the project directory.
    pub fn with_project_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(format!("project/{}", path))
            .write_str(content)
            .expect("Failed to write project file");
        self
    }

    /// Path of the template source root (holds registry.json).
    pub fn source_root(&self) -> PathBuf {
        self.temp_dir.path().join("source")
    }

    /// Path of the project directory.
    pub fn project_path(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// Path of a file inside the project directory.
    pub fn project_file(&self, path: &str) -> PathBuf {
        self.project_path().join(path)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create an `oc` command running in the project directory with the
    /// fixture's template source root.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("oc").expect("binary under test");
        cmd.current_dir(self.project_path())
            .env("OC_TEMPLATE_ROOT", self.source_root())
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
