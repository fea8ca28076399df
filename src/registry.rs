//! # Registry Document
//!
//! The registry (`registry.json`) is the catalog produced by an external
//! build step that scans the bundled template tree. It lists the template
//! root entries plus every named app and package with its logical path and
//! dependency names. Commands treat the loaded document as read-only for
//! the lifetime of one CLI invocation.
//!
//! Logical paths in the document (e.g. `template/packages/ui`) are resolved
//! against the template source root, the directory holding `registry.json`,
//! by [`Registry::resolve_local`]. Resolution returns an explicit
//! [`Resolution`] so callers must handle the "not available" case instead
//! of proceeding with an invalid path; remote fetch is a stub that always
//! reports [`Resolution::NotFound`].

use crate::defaults::REGISTRY_FILENAME;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    App,
    Package,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::App => write!(f, "app"),
            ItemKind::Package => write!(f, "package"),
        }
    }
}

/// One named template or shared package in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryItem {
    pub name: String,
    /// Logical path relative to the template source root.
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Names (not versions) of the item's runtime dependencies, as recorded
    /// by the registry build step.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Vec<String>,
}

/// The template root: baseline files copied during `init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRoot {
    /// Logical path of the template directory, relative to the source root.
    pub path: String,
    /// Ordered top-level entry names to copy into a new project.
    pub files: Vec<String>,
}

/// The full registry document.
///
/// Maps are ordered so that "sync all packages" walks them in a stable
/// order from run to run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub template: TemplateRoot,
    #[serde(default)]
    pub apps: BTreeMap<String, RegistryItem>,
    #[serde(default)]
    pub packages: BTreeMap<String, RegistryItem>,
}

/// Outcome of resolving a logical path to a concrete source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The source exists on disk at this path.
    Found(PathBuf),
    /// Not present locally, and remote fetch is not supported.
    NotFound,
}

impl Registry {
    /// Load the registry document from a template source root.
    pub fn load(source_root: &Path) -> Result<Self> {
        let path = source_root.join(REGISTRY_FILENAME);
        if !path.exists() {
            return Err(Error::Registry {
                message: format!("'{}' not found", path.display()),
                hint: Some(
                    "Point --template-root (or OC_TEMPLATE_ROOT) at a directory containing \
                     registry.json and the bundled template"
                        .to_string(),
                ),
            });
        }
        let content = fs::read_to_string(&path).map_err(|e| Error::Registry {
            message: format!("failed to read '{}': {}", path.display(), e),
            hint: None,
        })?;
        serde_json::from_str(&content).map_err(|e| Error::Registry {
            message: format!("failed to parse '{}': {}", path.display(), e),
            hint: Some("Re-run the registry build step to regenerate the document".to_string()),
        })
    }

    /// Look up a catalog item by kind and name.
    pub fn find(&self, kind: ItemKind, name: &str) -> Result<&RegistryItem> {
        let catalog = match kind {
            ItemKind::App => &self.apps,
            ItemKind::Package => &self.packages,
        };
        catalog.get(name).ok_or_else(|| Error::UnknownItem {
            kind: kind.to_string(),
            name: name.to_string(),
        })
    }

    /// Resolve a logical path against the local template source root.
    pub fn resolve_local(source_root: &Path, logical_path: &str) -> Resolution {
        let candidate = source_root.join(logical_path);
        if candidate.exists() {
            Resolution::Found(candidate)
        } else {
            debug!("no local source at {}", candidate.display());
            Self::fetch_remote(logical_path)
        }
    }

    // Remote template fetching is out of scope; everything unavailable
    // locally stays unavailable.
    fn fetch_remote(_logical_path: &str) -> Resolution {
        Resolution::NotFound
    }
}
