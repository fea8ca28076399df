//! # Tree Reconciliation
//!
//! The core of the sync engine: walk a template source tree and a target
//! tree in lock-step, making the target contain every file from the source.
//! The walk is depth-first and pre-order (a directory is created before its
//! contents are visited), and strictly sequential; the shared
//! [`SyncSession`](crate::strategy::SyncSession) state machine only gives
//! the "applies to all remaining files" guarantee because no two subtrees
//! are ever reconciled concurrently.
//!
//! Per regular source file, exactly one of three things happens:
//!
//! - the target file does not exist → copied unconditionally,
//! - the target file is byte-identical → skipped silently,
//! - the target file differs → the session decides overwrite vs. skip.
//!
//! Reconciliation is additive only. Nothing in the target that lacks a
//! source counterpart is ever deleted; this is a sync, not a mirror.
//!
//! ## Abort propagation
//!
//! Choosing "abort" at any prompt sets the session's terminal state. Every
//! recursive call (and every sibling iteration) re-checks it before doing
//! any I/O, so the abort halts the entire remaining traversal without
//! unwinding through errors.
//!
//! ## Failure semantics
//!
//! Errors from directory listing, directory creation, or file copy are
//! fatal for the whole run and surface as [`Error::Filesystem`]. Only the
//! identity *comparison* is forgiving (see [`crate::fingerprint`]).

use crate::error::{Error, Result};
use crate::fingerprint::files_identical;
use crate::strategy::SyncSession;
use log::debug;
use std::fs;
use std::path::Path;

/// Reconcile `target` against `source`, recursively.
///
/// `display` is the logical, project-relative label for `source` shown in
/// prompts and notices; it grows as the recursion descends and is distinct
/// from the filesystem paths.
pub fn reconcile(
    session: &mut SyncSession<'_>,
    source: &Path,
    target: &Path,
    display: &str,
) -> Result<()> {
    if session.aborted() {
        return Ok(());
    }

    if source.is_dir() {
        reconcile_dir(session, source, target, display)
    } else {
        reconcile_file(session, source, target, display)
    }
}

fn reconcile_dir(
    session: &mut SyncSession<'_>,
    source: &Path,
    target: &Path,
    display: &str,
) -> Result<()> {
    fs::create_dir_all(target).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", target.display(), e),
    })?;

    // Sort children by name so one run's prompt order is deterministic.
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(source)
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to list directory '{}': {}", source.display(), e),
        })?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to list directory '{}': {}", source.display(), e),
        })?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        if session.aborted() {
            return Ok(());
        }
        let name = entry.file_name();
        let child_display = format!("{}/{}", display, name.to_string_lossy());
        reconcile(
            session,
            &entry.path(),
            &target.join(&name),
            &child_display,
        )?;
    }

    Ok(())
}

fn reconcile_file(
    session: &mut SyncSession<'_>,
    source: &Path,
    target: &Path,
    display: &str,
) -> Result<()> {
    if !target.exists() {
        // Pure addition, always safe.
        copy_file(source, target)?;
        session.stats.created += 1;
        debug!("created {}", display);
        return Ok(());
    }

    if files_identical(source, target) {
        session.stats.unchanged += 1;
        return Ok(());
    }

    if session.resolve(display)? {
        copy_file(source, target)?;
        session.stats.overwritten += 1;
        debug!("overwrote {}", display);
    } else if !session.aborted() {
        session.stats.skipped += 1;
    }

    Ok(())
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to copy '{}' to '{}': {}",
            source.display(),
            target.display(),
            e
        ),
    })?;
    Ok(())
}
