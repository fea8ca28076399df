//! # Workspace Manifest Editing
//!
//! Targeted edits to `package.json` documents. The merge is the final step
//! of syncing a package: fold the package's declared dependency ranges into
//! the root project manifest so a single install satisfies every synced
//! package.
//!
//! The documents are edited as raw [`serde_json::Value`] trees rather than
//! typed structs, so every field this module does not touch (`name`,
//! `scripts`, unknown tool sections) survives a rewrite byte-for-byte in
//! meaning and (thanks to `preserve_order`) in key order.

use crate::defaults::MANIFEST_FILENAME;
use crate::error::{Error, Result};
use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The two dependency mappings the merger is allowed to touch.
const DEPENDENCY_KEYS: &[&str] = &["dependencies", "devDependencies"];

/// Merge the dependency mappings of the manifest in `source_pkg_dir` into
/// the root manifest in `root_dir`, additively.
///
/// Per key, the source package's declared version range wins over the
/// root's prior value; keys only present in the root are preserved. Returns
/// the number of entries written into the root manifest.
///
/// No-op (returning 0, and leaving the root manifest file untouched) when
/// either side has no manifest file.
pub fn merge_deps(source_pkg_dir: &Path, root_dir: &Path) -> Result<usize> {
    let source_path = source_pkg_dir.join(MANIFEST_FILENAME);
    let root_path = root_dir.join(MANIFEST_FILENAME);
    if !source_path.exists() || !root_path.exists() {
        debug!(
            "dependency merge skipped: manifest missing ({} / {})",
            source_path.display(),
            root_path.display()
        );
        return Ok(0);
    }

    let source = read_manifest(&source_path)?;
    let mut root = read_manifest(&root_path)?;

    let mut merged = 0;
    for key in DEPENDENCY_KEYS {
        let Some(source_deps) = source.get(*key).and_then(Value::as_object) else {
            continue;
        };
        if source_deps.is_empty() {
            continue;
        }
        let root_obj = root.as_object_mut().ok_or_else(|| Error::Manifest {
            path: root_path.display().to_string(),
            message: "manifest root is not a JSON object".to_string(),
        })?;
        let root_deps = root_obj
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let root_deps = root_deps.as_object_mut().ok_or_else(|| Error::Manifest {
            path: root_path.display().to_string(),
            message: format!("'{}' is not a JSON object", key),
        })?;
        for (name, version) in source_deps {
            root_deps.insert(name.clone(), version.clone());
            merged += 1;
        }
    }

    if merged > 0 {
        write_manifest(&root_path, &root)?;
    }
    Ok(merged)
}

/// Overwrite the `name` field of the manifest in `dir`.
///
/// Used by `add` (and `init`) so the copied template identifies as the new
/// target. No-op when the directory has no manifest.
pub fn set_name(dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(MANIFEST_FILENAME);
    if !path.exists() {
        return Ok(());
    }
    let mut manifest = read_manifest(&path)?;
    let obj = manifest.as_object_mut().ok_or_else(|| Error::Manifest {
        path: path.display().to_string(),
        message: "manifest root is not a JSON object".to_string(),
    })?;
    obj.insert("name".to_string(), Value::String(name.to_string()));
    write_manifest(&path, &manifest)
}

fn read_manifest(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| Error::Manifest {
        path: path.display().to_string(),
        message: format!("read failed: {}", e),
    })?;
    serde_json::from_str(&content).map_err(|e| Error::Manifest {
        path: path.display().to_string(),
        message: format!("parse failed: {}", e),
    })
}

fn write_manifest(path: &Path, manifest: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(manifest)?;
    content.push('\n');
    fs::write(path, content).map_err(|e| Error::Manifest {
        path: path.display().to_string(),
        message: format!("write failed: {}", e),
    })
}
