//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which scaffolds a new
//! monorepo project directory from the bundled template root.
//!
//! ## Functionality
//!
//! - Refuses to touch a directory that already exists
//! - Copies the registry's template root entries into the new directory
//! - Missing template entries are reported per item, never fatal
//! - Rewrites the new project manifest's `name` field
//! - Prints the follow-up install instructions

use anyhow::Result;
use clap::Args;
use indicatif::ProgressBar;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use oc_cli::defaults;
use oc_cli::manifest;
use oc_cli::output::{emoji, OutputConfig};
use oc_cli::reconcile::reconcile;
use oc_cli::registry::{Registry, Resolution};
use oc_cli::strategy::{InteractivePrompter, SyncSession};

/// Initialize a new monorepo project
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Template source root containing registry.json
    #[arg(long, value_name = "DIR", env = "OC_TEMPLATE_ROOT")]
    pub template_root: Option<PathBuf>,
}

/// Execute the `init` command.
pub fn execute(args: InitArgs, out: &OutputConfig) -> Result<()> {
    let source_root = args
        .template_root
        .unwrap_or_else(defaults::default_template_root);
    let target_dir = std::env::current_dir()?.join(&args.project_name);

    if target_dir.exists() {
        anyhow::bail!("Directory '{}' already exists.", args.project_name);
    }

    let registry = Registry::load(&source_root)?;

    println!(
        "{} Initializing project {}...",
        emoji(out, "🎯", "[INIT]"),
        args.project_name
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Copying template files...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    fs::create_dir_all(&target_dir)?;

    // A fresh directory cannot conflict, so the prompter is never consulted.
    let mut prompter = InteractivePrompter;
    let mut session = SyncSession::new(&mut prompter);
    for entry in &registry.template.files {
        let logical = format!("{}/{}", registry.template.path, entry);
        match Registry::resolve_local(&source_root, &logical) {
            Resolution::Found(source) => {
                reconcile(&mut session, &source, &target_dir.join(entry), entry)?;
            }
            Resolution::NotFound => {
                spinner.suspend(|| {
                    eprintln!(
                        "  {} Template entry '{}' is not available locally, skipped",
                        emoji(out, "⚠️", "[WARN]"),
                        entry
                    );
                });
            }
        }
    }
    spinner.finish_and_clear();

    manifest::set_name(&target_dir, &args.project_name)?;

    println!(
        "{} Project {} initialized successfully! ({} files)",
        emoji(out, "✅", "[OK]"),
        args.project_name,
        session.stats.created
    );
    println!();
    println!("  cd {}", args.project_name);
    println!("  bun install");
    println!();

    Ok(())
}
