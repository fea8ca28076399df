//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use oc_cli::output::OutputConfig;

/// oc - Scaffold a monorepo and keep its shared packages in sync
#[derive(Parser, Debug)]
#[command(name = "oc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new monorepo project from the bundled template
    Init(commands::init::InitArgs),
    /// Add an app or package instance from a named template
    Add(commands::add::AddArgs),
    /// Sync shared packages and skill directories from the template source
    Sync(commands::sync::SyncArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Init(args) => commands::init::execute(args, &output),
            Commands::Add(args) => commands::add::execute(args, &output),
            Commands::Sync(args) => commands::sync::execute(args, &output),
        }
    }
}
