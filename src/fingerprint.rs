//! # Content Fingerprinting
//!
//! Stable content digests used by the sync engine to decide whether a
//! target file already matches its template source. Two files are declared
//! identical iff their SHA-256 digests match; collision risk is treated as
//! negligible and not handled specially.
//!
//! ## Failure semantics
//!
//! [`files_identical`] swallows read errors and reports `false`. A file that
//! vanished or cannot be read is "not identical", which routes the entry
//! through the normal conflict decision instead of crashing the sync run.
//! This is intentionally different from the copy path in
//! [`crate::reconcile`], where I/O errors are fatal.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Compute the hex-encoded SHA-256 digest of a byte slice.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Report whether two files have byte-identical content.
///
/// Reads both files fully and compares their digests. Any read failure
/// (missing file, permission error, race with a concurrent delete) yields
/// `false` so the caller treats the pair as "needs a decision".
pub fn files_identical(a: &Path, b: &Path) -> bool {
    match (fs::read(a), fs::read(b)) {
        (Ok(left), Ok(right)) => fingerprint(&left) == fingerprint(&right),
        _ => false,
    }
}
