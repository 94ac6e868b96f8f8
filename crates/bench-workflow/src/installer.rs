//! Apply the pending actions chosen in the setup UI.
//!
//! Each non-separator entry with an action becomes one [`ItemOutcome`]; the
//! collected [`InstallReport`] is printed once the terminal is restored.

use anyhow::{bail, Context, Result};
use bench_core::catalogue::{bench_name, find_assistant, find_tool, AssistantDefinition};
use bench_core::config::{SetupSettings, WorkbenchConfig};
use bench_core::{ComponentAction, ComponentCategory, Entry, Sections};
use bench_error::HalError;
use bench_hal::SystemHal;
use std::fmt;
use std::path::Path;

use crate::status::bench_search_dirs;

/// Result of applying one entry's action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub id: String,
    pub name: String,
    pub action: ComponentAction,
    pub success: bool,
    pub message: String,
    /// A fresh install that still needs a login before it is usable.
    pub needs_credentials: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl InstallReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.success).count()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Login hints for assistants installed in this run.
    pub fn credential_hints(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter(|o| o.success && o.needs_credentials)
            .filter_map(|o| find_assistant(&o.id).and_then(|def| def.credential_hint))
            .collect()
    }
}

impl fmt::Display for InstallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outcomes.is_empty() {
            return writeln!(f, "No changes to apply.");
        }
        for outcome in &self.outcomes {
            let mark = if outcome.success { "✓" } else { "✗" };
            writeln!(f, "{} {}", mark, outcome.message)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} succeeded, {} failed",
            self.succeeded(),
            self.failed()
        )?;
        let hints = self.credential_hints();
        if !hints.is_empty() {
            writeln!(f)?;
            writeln!(f, "Some tools need credentials:")?;
            for hint in hints {
                writeln!(f, "  {}", hint)?;
            }
        }
        Ok(())
    }
}

/// Runs install/uninstall operations through the HAL.
pub struct Installer<'a, H: SystemHal + ?Sized> {
    hal: &'a H,
    settings: &'a SetupSettings,
    config: &'a WorkbenchConfig,
}

impl<'a, H: SystemHal + ?Sized> Installer<'a, H> {
    pub fn new(hal: &'a H, settings: &'a SetupSettings, config: &'a WorkbenchConfig) -> Self {
        Self {
            hal,
            settings,
            config,
        }
    }

    /// Apply one entry's pending action. `None` when there is nothing to do.
    pub fn apply(&self, entry: &Entry) -> Option<ItemOutcome> {
        if entry.is_separator || entry.action == ComponentAction::None {
            return None;
        }
        let action = entry.action;
        let outcome = |success: bool, message: String, needs_credentials: bool| ItemOutcome {
            id: entry.id.clone(),
            name: entry.name.clone(),
            action,
            success,
            message,
            needs_credentials,
        };

        match (entry.category, action) {
            (ComponentCategory::Bench, _) => {
                let Some(name) = bench_name(&entry.id) else {
                    return Some(outcome(false, format!("Unknown bench {}", entry.id), false));
                };
                let result = if action == ComponentAction::Install {
                    self.install_bench(name)
                } else {
                    self.uninstall_bench(name)
                };
                Some(match result {
                    Ok(message) => outcome(true, message, false),
                    Err(err) => outcome(false, format!("{:#}", err), false),
                })
            }
            (ComponentCategory::Assistant, _) => {
                let Some(def) = find_assistant(&entry.id) else {
                    return Some(outcome(false, format!("Unknown assistant {}", entry.id), false));
                };
                Some(if action == ComponentAction::Install {
                    match self.install_assistant(def) {
                        Ok(message) => outcome(true, message, def.credential_hint.is_some()),
                        Err(err) => outcome(
                            false,
                            format!("Failed to install {}: {}", def.name, err),
                            false,
                        ),
                    }
                } else {
                    match self.uninstall_assistant(def) {
                        Ok(message) => outcome(true, message, false),
                        Err(err) => outcome(false, format!("{:#}", err), false),
                    }
                })
            }
            (ComponentCategory::Tool, ComponentAction::Install) => match find_tool(&entry.id) {
                Some(def) => Some(outcome(true, def.install_instructions.to_string(), false)),
                None => Some(outcome(false, format!("Unknown tool {}", entry.id), false)),
            },
            (ComponentCategory::Tool, _) => {
                log::info!("Uninstall of {} is manual, skipping", entry.id);
                None
            }
        }
    }

    pub fn install_bench(&self, name: &str) -> Result<String> {
        let Some(url) = self.config.bench_url(name) else {
            bail!("No URL configured for {}", name);
        };
        let dest = self.settings.project_root.join(self.config.bench_path(name));
        let dest_arg = dest.to_string_lossy().to_string();
        if self.settings.dry_run {
            return Ok(format!("Would run: git clone {} {}", url, dest_arg));
        }

        log::info!("Cloning {} into {}", url, dest.display());
        self.run("git", &["clone", url, &dest_arg], None)
            .with_context(|| format!("Failed to clone {}", name))?;

        let setup = dest.join("setup.sh");
        if self.hal.file_exists(&setup) {
            log::info!("Running setup.sh for {}", name);
            if let Err(err) = self.run("bash", &["setup.sh"], Some(&dest)) {
                log::warn!("setup.sh for {} failed: {}", name, err);
                return Ok(format!("Installed {} (setup.sh failed: {})", name, err));
            }
        }
        Ok(format!("Installed {}", name))
    }

    pub fn uninstall_bench(&self, name: &str) -> Result<String> {
        let dirs = bench_search_dirs(&self.settings.project_root, self.config, name);
        let Some(dir) = dirs.into_iter().find(|d| self.hal.dir_exists(d)) else {
            bail!("Could not find {} to uninstall", name);
        };
        if self.settings.dry_run {
            return Ok(format!("Would remove {}", dir.display()));
        }
        log::info!("Removing {}", dir.display());
        self.hal
            .remove_dir_all(&dir)
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
        Ok(format!("Uninstalled {}", name))
    }

    pub fn install_assistant(&self, def: &AssistantDefinition) -> Result<String> {
        let argv = command_argv(def.install_cmd);
        if self.settings.dry_run {
            return Ok(format!("Would run: {}", argv.join(" ")));
        }
        self.run_argv(&argv)?;
        Ok(format!("Installed {}", def.name))
    }

    pub fn uninstall_assistant(&self, def: &AssistantDefinition) -> Result<String> {
        if def.uninstall_cmd.trim().is_empty() {
            bail!("Cannot uninstall {}", def.id);
        }
        let argv = command_argv(def.uninstall_cmd);
        if self.settings.dry_run {
            return Ok(format!("Would run: {}", argv.join(" ")));
        }
        self.run_argv(&argv)
            .with_context(|| format!("Failed to uninstall {}", def.name))?;
        Ok(format!("Uninstalled {}", def.name))
    }

    fn run_argv(&self, argv: &[String]) -> Result<()> {
        let Some((program, args)) = argv.split_first() else {
            bail!("Empty command line");
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(program, &args, None)
    }

    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        log::info!("Running: {} {}", program, args.join(" "));
        let output = self.hal.command_output_with_cwd(
            program,
            args,
            cwd,
            self.settings.command_timeout,
        )?;
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stderr = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        Err(HalError::CommandFailed {
            program: program.to_string(),
            code: output.status.code(),
            stderr,
        }
        .into())
    }
}

/// Split a catalogue command line; global npm operations need root.
pub fn command_argv(command_line: &str) -> Vec<String> {
    let mut argv: Vec<String> = command_line.split_whitespace().map(String::from).collect();
    if argv.first().map(String::as_str) == Some("npm") && argv.iter().any(|a| a == "-g") {
        argv.insert(0, "sudo".to_string());
    }
    argv
}

/// Apply every pending action in section order.
pub fn process_selections<H: SystemHal + ?Sized>(
    sections: &Sections,
    installer: &Installer<'_, H>,
) -> InstallReport {
    let mut report = InstallReport::default();
    for (section, entry) in sections.iter() {
        if let Some(outcome) = installer.apply(entry) {
            log::info!(
                "{} {}: {}",
                section,
                entry.id,
                if outcome.success { "ok" } else { "failed" }
            );
            report.outcomes.push(outcome);
        }
    }
    report
}
