//! Bench configuration file (`config/bench-config.json`) and resolved
//! runtime settings.

use crate::cli::Cli;
use bench_error::{SetupError, SetupResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the bench config, relative to the project root.
pub const DEFAULT_CONFIG_RELATIVE: &str = "config/bench-config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Checkout directory relative to the project root (defaults to the bench name).
    #[serde(default)]
    pub path: Option<String>,
    /// Git URL to clone from.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    #[serde(default)]
    pub benches: BTreeMap<String, BenchConfig>,
}

impl WorkbenchConfig {
    pub fn bench(&self, name: &str) -> Option<&BenchConfig> {
        self.benches.get(name)
    }

    /// Checkout directory for `name`, relative to the project root.
    pub fn bench_path(&self, name: &str) -> String {
        self.bench(name)
            .and_then(|b| b.path.clone())
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| name.to_string())
    }

    pub fn bench_url(&self, name: &str) -> Option<&str> {
        self.bench(name)
            .and_then(|b| b.url.as_deref())
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

/// Parse the config file strictly.
pub fn parse_bench_config(path: &Path) -> SetupResult<WorkbenchConfig> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| SetupError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the config file, degrading to an empty config when it is missing or
/// unreadable. The setup UI must still come up with the built-in catalogue.
pub fn load_bench_config(path: &Path) -> WorkbenchConfig {
    if !path.exists() {
        log::warn!("Config file not found: {}", path.display());
        return WorkbenchConfig::default();
    }
    match parse_bench_config(path) {
        Ok(config) => {
            log::info!(
                "Loaded {} bench definition(s) from {}",
                config.benches.len(),
                path.display()
            );
            config
        }
        Err(err) => {
            log::warn!("Failed to load bench config: {}", err);
            WorkbenchConfig::default()
        }
    }
}

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSettings {
    pub project_root: PathBuf,
    pub config_path: PathBuf,
    pub dry_run: bool,
    pub command_timeout: Duration,
}

impl SetupSettings {
    pub fn new(project_root: PathBuf) -> Self {
        let config_path = project_root.join(DEFAULT_CONFIG_RELATIVE);
        Self {
            project_root,
            config_path,
            dry_run: false,
            command_timeout: Duration::from_secs(crate::cli::DEFAULT_COMMAND_TIMEOUT_SECS),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let project_root = cli.project_root.clone();
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| project_root.join(DEFAULT_CONFIG_RELATIVE));
        Self {
            project_root,
            config_path,
            dry_run: cli.dry_run,
            command_timeout: Duration::from_secs(cli.command_timeout_secs),
        }
    }
}
