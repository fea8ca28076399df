//! # Error Suggestions
//!
//! Helper functions for generating error messages with hints. Errors
//! should tell users what went wrong AND how to fix it.

use crate::registry::ItemKind;

/// Generate an error for an unknown catalog name, listing what is available.
pub fn unknown_item(kind: ItemKind, name: &str, available: Vec<&str>) -> anyhow::Error {
    let listing = if available.is_empty() {
        "  (none registered)".to_string()
    } else {
        available
            .iter()
            .map(|n| format!("  - {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    };
    anyhow::anyhow!(
        "Unknown {kind} '{name}'\n\nAvailable {kind}s:\n{listing}",
        kind = kind,
        name = name,
        listing = listing
    )
}

/// Generate an error for a `sync package` invocation that is missing the
/// package name.
pub fn package_name_required() -> anyhow::Error {
    anyhow::anyhow!(
        "A package name is required when syncing a single package\n\n\
         hint: Run `oc sync package <name>`\n\
         hint: Or run `oc sync` with no arguments to sync everything"
    )
}
