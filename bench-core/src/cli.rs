//! CLI argument parsing for bench-setup.
//!
//! The interactive UI is the only mode; flags tune where it looks and how
//! selections are applied.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 900;

#[derive(Parser, Debug, Clone)]
#[command(name = "bench-setup")]
#[command(about = "WorkBenches Configuration Manager")]
#[command(long_about = "WorkBenches Configuration Manager\n\n\
    Pick dev benches, AI CLI assistants and desktop tools to install or remove.\n\n\
    Navigation: arrows / hjkl, Space toggles, Enter applies changes, Q quits.")]
pub struct Cli {
    /// Root of the workBenches project (benches are cloned below it)
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Bench configuration file (default: <project-root>/config/bench-config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the commands that would run instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Append log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Timeout for each external command, in seconds
    #[arg(long, default_value_t = DEFAULT_COMMAND_TIMEOUT_SECS)]
    pub command_timeout_secs: u64,

    /// Load components, print the rendered screen as text and exit
    #[arg(long)]
    pub dump_ui: bool,
}
