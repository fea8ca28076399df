//! Default values for oc configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// File name of the registry document produced by the registry build step.
pub const REGISTRY_FILENAME: &str = "registry.json";

/// File name of a project or package manifest.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Top-level configuration directories ("skills") synced verbatim from the
/// template root into a project.
pub const SKILL_DIRS: &[&str] = [".claude", ".opencode", ".github"].as_slice();

/// Directory under the project root that holds added/synced packages.
pub const PACKAGES_DIR: &str = "packages";

/// Directory under the project root that holds added apps.
pub const APPS_DIR: &str = "apps";

/// Returns the default template source root: the directory containing
/// `registry.json` and the bundled `template/` tree.
///
/// Uses the platform-appropriate data directory:
/// - Linux: `~/.local/share/oc` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/oc`
/// - Windows: `{FOLDERID_RoamingAppData}\oc`
///
/// Falls back to `.oc` in the current directory if the platform data
/// directory cannot be determined.
///
/// This can be overridden by the `--template-root` CLI flag or the
/// `OC_TEMPLATE_ROOT` environment variable.
pub fn default_template_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".oc"))
        .join("oc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_root_returns_path() {
        let root = default_template_root();
        assert!(root.ends_with("oc"));
    }

    #[test]
    fn test_default_template_root_is_absolute_or_fallback() {
        let root = default_template_root();
        assert!(
            root.is_absolute() || root.starts_with(".oc"),
            "Expected absolute path or fallback, got: {:?}",
            root
        );
    }

    #[test]
    fn test_skill_dirs_are_hidden_directories() {
        for dir in SKILL_DIRS {
            assert!(dir.starts_with('.'));
        }
    }
}
