//! # Add Command Implementation
//!
//! This module implements the `add` subcommand, which instantiates a named
//! template from the registry catalog as a new app or package directory in
//! the current project.
//!
//! ## Functionality
//!
//! - Looks up the template in the registry catalog (`apps` or `packages`)
//! - Refuses an already-existing target directory
//! - Copies the template source byte-identically
//! - Rewrites the copied manifest's `name` to the target name
//! - For packages, merges the template's dependency ranges into the root
//!   project manifest

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use oc_cli::defaults;
use oc_cli::error::Error;
use oc_cli::manifest;
use oc_cli::output::{emoji, OutputConfig};
use oc_cli::reconcile::reconcile;
use oc_cli::registry::{ItemKind, Registry, Resolution};
use oc_cli::strategy::{InteractivePrompter, SyncSession};
use oc_cli::suggestions;

/// Kind of resource to add.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum AddKind {
    App,
    Package,
}

/// Add an app or package instance to the project
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Type of resource to add
    #[arg(value_enum, value_name = "TYPE")]
    pub kind: AddKind,

    /// Name of the template in the registry catalog
    #[arg(value_name = "TEMPLATE_NAME")]
    pub template_name: String,

    /// Name of the target directory (also written into its manifest)
    #[arg(value_name = "TARGET_NAME")]
    pub target_name: String,

    /// Template source root containing registry.json
    #[arg(long, value_name = "DIR", env = "OC_TEMPLATE_ROOT")]
    pub template_root: Option<PathBuf>,
}

/// Execute the `add` command.
pub fn execute(args: AddArgs, out: &OutputConfig) -> Result<()> {
    let source_root = args
        .template_root
        .unwrap_or_else(defaults::default_template_root);
    let project_root = std::env::current_dir()?;
    let registry = Registry::load(&source_root)?;

    let (kind, catalog, parent_dir) = match args.kind {
        AddKind::App => (ItemKind::App, &registry.apps, defaults::APPS_DIR),
        AddKind::Package => (ItemKind::Package, &registry.packages, defaults::PACKAGES_DIR),
    };

    let item = registry.find(kind, &args.template_name).map_err(|_| {
        suggestions::unknown_item(
            kind,
            &args.template_name,
            catalog.keys().map(String::as_str).collect(),
        )
    })?;

    let source = match Registry::resolve_local(&source_root, &item.path) {
        Resolution::Found(path) => path,
        Resolution::NotFound => {
            return Err(Error::Unavailable {
                kind: kind.to_string(),
                name: item.name.clone(),
                path: item.path.clone(),
            }
            .into());
        }
    };

    let display = format!("{}/{}", parent_dir, args.target_name);
    let target_dir = project_root.join(parent_dir).join(&args.target_name);
    if target_dir.exists() {
        anyhow::bail!("Directory '{}' already exists.", display);
    }

    println!(
        "{} Adding {} {} as {}...",
        emoji(out, "🎯", "[ADD]"),
        kind,
        args.template_name,
        args.target_name
    );

    // A fresh directory cannot conflict, so the prompter is never consulted.
    let mut prompter = InteractivePrompter;
    let mut session = SyncSession::new(&mut prompter);
    reconcile(&mut session, &source, &target_dir, &display)?;

    manifest::set_name(&target_dir, &args.target_name)?;

    if matches!(kind, ItemKind::Package) {
        let merged = manifest::merge_deps(&source, &project_root)?;
        if merged > 0 {
            println!(
                "  {} Merged {} dependency entr{} into package.json",
                emoji(out, "📦", "[DEPS]"),
                merged,
                if merged == 1 { "y" } else { "ies" }
            );
        } else {
            println!("  No dependencies to merge");
        }
    }

    println!(
        "{} {} added successfully! ({} files)",
        emoji(out, "✅", "[OK]"),
        kind,
        session.stats.created
    );

    Ok(())
}
