//! # oc Library
//!
//! Core functionality for the `oc` command-line tool: scaffold a monorepo
//! from a bundled template and keep its shared packages and configuration
//! directories ("skills") in sync with the template source.
//!
//! ## Core Concepts
//!
//! - **Registry (`registry`)**: the `registry.json` catalog produced by an
//!   external build step, mapping app/package names to logical paths under
//!   the template source root.
//! - **Fingerprinting (`fingerprint`)**: SHA-256 content digests used to
//!   detect files that are already in sync, so unchanged files never
//!   trigger a prompt.
//! - **Overwrite strategy (`strategy`)**: a run-scoped state machine that
//!   batches conflict decisions: one "overwrite all remaining" answer can
//!   settle a whole run.
//! - **Reconciliation (`reconcile`)**: the recursive, additive source/target
//!   tree merge. Never deletes, copies byte-identically, and aborts
//!   cooperatively.
//! - **Manifests (`manifest`)**: targeted `package.json` edits, folding a
//!   synced package's dependency ranges into the root manifest.
//!
//! ## Execution Flow
//!
//! A `sync` invocation loads the registry, creates one
//! [`strategy::SyncSession`], and then for each selected item resolves the
//! logical path to a local source directory, reconciles the target subtree,
//! and (for packages) merges dependencies into the root manifest. Items are
//! processed strictly one after another because the session's strategy is
//! shared mutable state for the whole run.

pub mod defaults;
pub mod error;
pub mod fingerprint;
pub mod manifest;
pub mod output;
pub mod reconcile;
pub mod registry;
pub mod strategy;
pub mod suggestions;
