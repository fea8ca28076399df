//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `oc` application. It uses the `thiserror` library to create an `Error`
//! enum that covers the anticipated failure modes, providing clear and
//! descriptive error messages.
//!
//! Two failure classes matter to callers:
//!
//! - **Lookup failures** (`Registry`, `UnknownItem`, `Unavailable`): a single
//!   template, package, or skill could not be found. Commands report these
//!   per item and keep going, or abort gracefully with a message.
//! - **Filesystem failures** (`Filesystem`, `Manifest`, `Io`): an actual
//!   copy, create, or manifest write went wrong. These are fatal for the
//!   current run and propagate to the caller untouched.
//!
//! Note that the identity comparison in [`crate::fingerprint`] deliberately
//! does *not* produce errors: a file that cannot be read is treated as "not
//! identical" so a transient read failure degrades to a user prompt instead
//! of ending the run.

use thiserror::Error;

/// Main error type for oc operations
#[derive(Error, Debug)]
pub enum Error {
    /// The registry document could not be loaded or parsed.
    ///
    /// Includes an optional hint about how to fix the problem.
    #[error("Registry error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Registry {
        message: String,
        /// Optional hint for how to resolve the registry issue
        hint: Option<String>,
    },

    /// A template, app, or package name was not found in the registry catalog.
    #[error("Unknown {kind} '{name}'")]
    UnknownItem { kind: String, name: String },

    /// A registry item exists in the catalog but its source directory is not
    /// available locally (remote fetch is not supported).
    #[error("{kind} '{name}' is not available locally (looked in '{path}')")]
    Unavailable {
        kind: String,
        name: String,
        path: String,
    },

    /// An error occurred while creating directories or copying files.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A project manifest (package.json) could not be read, parsed, or written.
    #[error("Manifest error in '{path}': {message}")]
    Manifest { path: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
