//! # Sync Command Implementation
//!
//! This module implements the `sync` subcommand, which reconciles shared
//! packages and skill directories in an existing project against the
//! template source.
//!
//! ## Functionality
//!
//! - `oc sync`: sync every skill directory and every registry package
//! - `oc sync skill [name]`: sync one skill directory, or all of them
//! - `oc sync package <name>`: sync one package, then merge its
//!   dependencies into the root manifest
//! - `--overwrite` / `--skip-existing` preset the conflict strategy for
//!   non-interactive use; otherwise each first conflict prompts, and
//!   "all remaining" answers carry across packages within the run
//! - Items missing from the local template source are reported one line
//!   each and skipped; they never fail the run

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

use oc_cli::defaults;
use oc_cli::manifest;
use oc_cli::output::{emoji, OutputConfig};
use oc_cli::reconcile::reconcile;
use oc_cli::registry::{ItemKind, Registry, RegistryItem, Resolution};
use oc_cli::strategy::{InteractivePrompter, OverwriteStrategy, SyncSession};
use oc_cli::suggestions;

/// What category of resource to sync.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SyncKind {
    Skill,
    Package,
}

/// Sync shared packages or skill directories from the template source
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// What to sync; omit to sync skills and all packages
    #[arg(value_enum, value_name = "TYPE")]
    pub kind: Option<SyncKind>,

    /// Name of the skill or package (required for `package`)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Overwrite every conflicting file without prompting
    #[arg(long)]
    pub overwrite: bool,

    /// Keep every conflicting file without prompting
    #[arg(long)]
    pub skip_existing: bool,

    /// Template source root containing registry.json
    #[arg(long, value_name = "DIR", env = "OC_TEMPLATE_ROOT")]
    pub template_root: Option<PathBuf>,
}

/// One unit of sync work, resolved from the command arguments.
enum SyncItem<'a> {
    Skill(String),
    Package(&'a RegistryItem),
}

/// Execute the `sync` command.
pub fn execute(args: SyncArgs, out: &OutputConfig) -> Result<()> {
    if args.overwrite && args.skip_existing {
        anyhow::bail!("--overwrite and --skip-existing are mutually exclusive");
    }

    let source_root = args
        .template_root
        .unwrap_or_else(defaults::default_template_root);
    let project_root = std::env::current_dir()?;
    let registry = Registry::load(&source_root)?;

    if !project_root.join(defaults::MANIFEST_FILENAME).exists() {
        eprintln!(
            "  {} No {} here; this does not look like a project root",
            emoji(out, "⚠️", "[WARN]"),
            defaults::MANIFEST_FILENAME
        );
    }

    let items = select_items(&registry, args.kind, args.name.as_deref())?;

    let strategy = if args.overwrite {
        OverwriteStrategy::OverwriteAll
    } else if args.skip_existing {
        OverwriteStrategy::SkipAll
    } else {
        OverwriteStrategy::Ask
    };
    let mut prompter = InteractivePrompter;
    let mut session = SyncSession::with_strategy(&mut prompter, strategy);

    // Strictly one item after another: the session's strategy is shared
    // state for the whole run.
    for item in items {
        if session.aborted() {
            break;
        }
        match item {
            SyncItem::Skill(skill) => {
                sync_skill(&mut session, &registry, &source_root, &project_root, &skill, out)?;
            }
            SyncItem::Package(item) => {
                sync_package(&mut session, &source_root, &project_root, item, out)?;
            }
        }
    }

    let stats = session.stats;
    if session.aborted() {
        println!(
            "{} Sync aborted: {} created, {} overwritten, {} skipped",
            emoji(out, "⏹", "[ABORT]"),
            stats.created,
            stats.overwritten,
            stats.skipped
        );
        return Ok(());
    }

    println!(
        "{} Sync complete: {} created, {} overwritten, {} skipped, {} already up to date",
        emoji(out, "✅", "[OK]"),
        stats.created,
        stats.overwritten,
        stats.skipped,
        stats.unchanged
    );
    Ok(())
}

/// Resolve the command arguments into an ordered work list.
fn select_items<'a>(
    registry: &'a Registry,
    kind: Option<SyncKind>,
    name: Option<&str>,
) -> Result<Vec<SyncItem<'a>>> {
    let mut items = Vec::new();
    match kind {
        None => {
            for skill in defaults::SKILL_DIRS {
                items.push(SyncItem::Skill(skill.to_string()));
            }
            items.extend(registry.packages.values().map(SyncItem::Package));
        }
        Some(SyncKind::Skill) => match name {
            Some(name) => items.push(SyncItem::Skill(name.to_string())),
            None => {
                for skill in defaults::SKILL_DIRS {
                    items.push(SyncItem::Skill(skill.to_string()));
                }
            }
        },
        Some(SyncKind::Package) => {
            let name = name.ok_or_else(suggestions::package_name_required)?;
            let item = registry.find(ItemKind::Package, name).map_err(|_| {
                suggestions::unknown_item(
                    ItemKind::Package,
                    name,
                    registry.packages.keys().map(String::as_str).collect(),
                )
            })?;
            items.push(SyncItem::Package(item));
        }
    }
    Ok(items)
}

fn sync_skill(
    session: &mut SyncSession<'_>,
    registry: &Registry,
    source_root: &Path,
    project_root: &Path,
    skill: &str,
    out: &OutputConfig,
) -> Result<()> {
    let logical = format!("{}/{}", registry.template.path, skill);
    match Registry::resolve_local(source_root, &logical) {
        Resolution::Found(source) => {
            println!("{} Syncing {}...", emoji(out, "🔄", "[SYNC]"), skill);
            Ok(reconcile(session, &source, &project_root.join(skill), skill)?)
        }
        Resolution::NotFound => {
            eprintln!(
                "  {} Skill '{}' is not available locally, skipped",
                emoji(out, "⚠️", "[WARN]"),
                skill
            );
            Ok(())
        }
    }
}

fn sync_package(
    session: &mut SyncSession<'_>,
    source_root: &Path,
    project_root: &Path,
    item: &RegistryItem,
    out: &OutputConfig,
) -> Result<()> {
    let source = match Registry::resolve_local(source_root, &item.path) {
        Resolution::Found(source) => source,
        Resolution::NotFound => {
            eprintln!(
                "  {} Package '{}' is not available locally, skipped",
                emoji(out, "⚠️", "[WARN]"),
                item.name
            );
            return Ok(());
        }
    };

    let display = format!("{}/{}", defaults::PACKAGES_DIR, item.name);
    println!("{} Syncing {}...", emoji(out, "🔄", "[SYNC]"), display);
    let target = project_root.join(defaults::PACKAGES_DIR).join(&item.name);
    reconcile(session, &source, &target, &display)?;

    // The dependency merge runs once per package, after its files.
    if !session.aborted() {
        let merged = manifest::merge_deps(&source, project_root)?;
        if merged > 0 {
            println!(
                "  {} Merged {} dependency entr{} into package.json",
                emoji(out, "📦", "[DEPS]"),
                merged,
                if merged == 1 { "y" } else { "ies" }
            );
        }
    }
    Ok(())
}
