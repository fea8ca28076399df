//! # Overwrite Decision State Machine
//!
//! A sync run reconciles many files, and several of them may conflict with
//! local edits. Prompting once per file would be hostile, so the run carries
//! a single [`OverwriteStrategy`] that batches decisions: the first prompt
//! can answer for every remaining file ("overwrite all", "skip all", or
//! "abort"), while "overwrite" / "skip" keep the strategy at `Ask` for
//! per-file control.
//!
//! The strategy lives in a [`SyncSession`] created at the start of each
//! top-level sync invocation and threaded by reference through the recursive
//! reconciliation, never in process-global state. The session also owns the
//! injected [`ConflictPrompter`], so tests can script decision sequences
//! without a terminal.
//!
//! ## State transitions
//!
//! | Current strategy | Conflict outcome | Proceed? | Next strategy |
//! |---|---|---|---|
//! | `Abort` | (no prompt) | no | `Abort` |
//! | `SkipAll` | (no prompt) | no | `SkipAll` |
//! | `OverwriteAll` | (no prompt) | yes | `OverwriteAll` |
//! | `Ask` | `Overwrite` | yes | `Ask` |
//! | `Ask` | `Skip` | no | `Ask` |
//! | `Ask` | `OverwriteAll` | yes | `OverwriteAll` |
//! | `Ask` | `SkipAll` | no | `SkipAll` |
//! | `Ask` | `Abort` / cancelled | no | `Abort` |

use crate::error::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use log::debug;

/// Run-scoped policy for conflicting files.
///
/// Initialized to `Ask` at the start of each top-level sync invocation and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteStrategy {
    /// Consult the prompter for each conflicting file.
    Ask,
    /// Overwrite every remaining conflicting file without prompting.
    OverwriteAll,
    /// Skip every remaining conflicting file without prompting.
    SkipAll,
    /// Terminal state: stop touching the filesystem entirely.
    Abort,
}

/// The resolved outcome of one conflict prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Overwrite this file only.
    Overwrite,
    /// Skip this file only.
    Skip,
    /// Overwrite this file and every remaining conflict.
    OverwriteAll,
    /// Skip this file and every remaining conflict.
    SkipAll,
    /// Stop the sync run.
    Abort,
}

/// Capability for answering conflict prompts.
///
/// The interactive implementation blocks on a terminal menu; tests inject a
/// scripted sequence instead.
pub trait ConflictPrompter {
    /// Ask what to do about a conflicting file, identified by its
    /// project-relative display path.
    fn prompt(&mut self, display_path: &str) -> Result<ConflictDecision>;
}

/// Interactive prompter backed by a `dialoguer` select menu.
pub struct InteractivePrompter;

const PROMPT_CHOICES: &[(&str, ConflictDecision)] = &[
    ("Overwrite this file", ConflictDecision::Overwrite),
    ("Skip this file", ConflictDecision::Skip),
    ("Overwrite all remaining", ConflictDecision::OverwriteAll),
    ("Skip all remaining", ConflictDecision::SkipAll),
    ("Abort sync", ConflictDecision::Abort),
];

impl ConflictPrompter for InteractivePrompter {
    fn prompt(&mut self, display_path: &str) -> Result<ConflictDecision> {
        let labels: Vec<&str> = PROMPT_CHOICES.iter().map(|(label, _)| *label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("'{}' differs from the template", display_path))
            .items(&labels)
            .default(0)
            .interact_opt();
        match selection {
            Ok(Some(index)) => Ok(PROMPT_CHOICES[index].1),
            // Dismissed (Esc) counts as "no answer" and aborts the run.
            Ok(None) => Ok(ConflictDecision::Abort),
            Err(e) => {
                debug!("conflict prompt unavailable: {}", e);
                Ok(ConflictDecision::Abort)
            }
        }
    }
}

/// Counters for the end-of-command summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Files that did not exist in the target and were copied.
    pub created: usize,
    /// Conflicting files replaced with the template version.
    pub overwritten: usize,
    /// Conflicting files left untouched.
    pub skipped: usize,
    /// Files skipped silently because they already matched the source.
    pub unchanged: usize,
}

impl SyncStats {
    /// Total number of files examined.
    pub fn total(&self) -> usize {
        self.created + self.overwritten + self.skipped + self.unchanged
    }
}

/// Mutable context for one top-level sync invocation.
///
/// Holds the overwrite strategy, the injected prompter, and the running
/// file counters. Shared across every package reconciled in the run so that
/// "overwrite all remaining" spans package boundaries.
pub struct SyncSession<'a> {
    strategy: OverwriteStrategy,
    prompter: &'a mut dyn ConflictPrompter,
    pub stats: SyncStats,
}

impl<'a> SyncSession<'a> {
    /// Create a session that starts in the `Ask` state.
    pub fn new(prompter: &'a mut dyn ConflictPrompter) -> Self {
        Self::with_strategy(prompter, OverwriteStrategy::Ask)
    }

    /// Create a session with a preset strategy (used by the `--overwrite`
    /// and `--skip-existing` flags).
    pub fn with_strategy(
        prompter: &'a mut dyn ConflictPrompter,
        strategy: OverwriteStrategy,
    ) -> Self {
        Self {
            strategy,
            prompter,
            stats: SyncStats::default(),
        }
    }

    /// Current strategy, mainly for assertions in tests.
    pub fn strategy(&self) -> OverwriteStrategy {
        self.strategy
    }

    /// Whether the run has entered the terminal abort state.
    pub fn aborted(&self) -> bool {
        self.strategy == OverwriteStrategy::Abort
    }

    /// Resolve one conflict into "proceed to overwrite" (`true`) or "leave
    /// the target alone" (`false`), consulting the prompter only when the
    /// strategy is still `Ask`.
    pub fn resolve(&mut self, display_path: &str) -> Result<bool> {
        match self.strategy {
            OverwriteStrategy::Abort => Ok(false),
            OverwriteStrategy::OverwriteAll => Ok(true),
            OverwriteStrategy::SkipAll => {
                println!("  ⏭️  Skipped {}", display_path);
                Ok(false)
            }
            OverwriteStrategy::Ask => {
                let decision = self.prompter.prompt(display_path)?;
                debug!("conflict on {}: {:?}", display_path, decision);
                match decision {
                    ConflictDecision::Overwrite => Ok(true),
                    ConflictDecision::Skip => {
                        println!("  ⏭️  Skipped {}", display_path);
                        Ok(false)
                    }
                    ConflictDecision::OverwriteAll => {
                        self.strategy = OverwriteStrategy::OverwriteAll;
                        Ok(true)
                    }
                    ConflictDecision::SkipAll => {
                        self.strategy = OverwriteStrategy::SkipAll;
                        println!("  ⏭️  Skipped {}", display_path);
                        Ok(false)
                    }
                    ConflictDecision::Abort => {
                        self.strategy = OverwriteStrategy::Abort;
                        println!("  ⏹   Aborted at {}", display_path);
                        Ok(false)
                    }
                }
            }
        }
    }
}
