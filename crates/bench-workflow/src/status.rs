//! Component status probes.
//!
//! Every probe is read-only and goes through [`HostOps`]. `load_all_statuses`
//! fans the probes out over scoped threads, then writes the results back and
//! auto-checks anything already present.

use bench_core::catalogue::{
    bench_candidate_dirs, bench_name, find_assistant, find_tool, initialize_components,
};
use bench_core::config::WorkbenchConfig;
use bench_core::{ComponentCategory, ComponentStatus, Entry, Sections, SetupResult};
use bench_hal::HostOps;
use std::path::{Path, PathBuf};
use std::thread;

const WINDOWS_USERS: &str = "/mnt/c/Users";
const VSCODE_WINDOWS_EXE: &str = "/mnt/c/Program Files/Microsoft VS Code/Code.exe";
const WARP_WINDOWS_EXE: &str = "/mnt/c/Program Files/Warp/Warp.exe";
const WAVE_WINDOWS_EXE: &str = "/mnt/c/Program Files/Wave/Wave.exe";

/// Everything a probe needs besides the host itself.
pub struct StatusProbe<'a, H: HostOps + ?Sized> {
    host: &'a H,
    project_root: &'a Path,
    config: &'a WorkbenchConfig,
}

impl<'a, H: HostOps + ?Sized> StatusProbe<'a, H> {
    pub fn new(host: &'a H, project_root: &'a Path, config: &'a WorkbenchConfig) -> Self {
        Self {
            host,
            project_root,
            config,
        }
    }

    pub fn check(&self, entry: &Entry) -> ComponentStatus {
        if entry.is_separator {
            return ComponentStatus::Unknown;
        }
        match entry.category {
            ComponentCategory::Bench => match bench_name(&entry.id) {
                Some(name) => self.check_bench(name),
                None => ComponentStatus::Unknown,
            },
            ComponentCategory::Assistant => self.check_assistant(&entry.id),
            ComponentCategory::Tool => self.check_tool(&entry.id),
        }
    }

    /// Directories a bench checkout may live in: the configured path first,
    /// then the conventional layouts.
    pub fn bench_dirs(&self, name: &str) -> Vec<PathBuf> {
        bench_search_dirs(self.project_root, self.config, name)
    }

    fn check_bench(&self, name: &str) -> ComponentStatus {
        let expected_url = self.config.bench_url(name);
        let found = self.bench_dirs(name).into_iter().find(|dir| {
            if !self.host.dir_exists(&dir.join(".git")) {
                return false;
            }
            match expected_url {
                Some(url) => self
                    .host
                    .git_remote(dir)
                    .is_some_and(|remote| remote.trim() == url),
                None => true,
            }
        });

        match found {
            Some(dir) => {
                log::debug!("{} found at {}", name, dir.display());
                if self.host.command_exists(&project_command(name)) {
                    ComponentStatus::Installed
                } else {
                    ComponentStatus::NeedsCredentials
                }
            }
            None => ComponentStatus::NotInstalled,
        }
    }

    fn check_assistant(&self, id: &str) -> ComponentStatus {
        let Some(def) = find_assistant(id) else {
            return ComponentStatus::Unknown;
        };
        if !self.host.command_exists(def.command) {
            return ComponentStatus::NotInstalled;
        }
        let credentials = match id {
            "claude_cli" => Some(("ANTHROPIC_API_KEY", ".claude/config.json")),
            "codex_cli" => Some(("OPENAI_API_KEY", ".codex/auth.json")),
            _ => None,
        };
        match credentials {
            Some((env_key, relative)) if !self.has_credentials(env_key, relative) => {
                ComponentStatus::NeedsCredentials
            }
            _ => ComponentStatus::Installed,
        }
    }

    fn has_credentials(&self, env_key: &str, relative: &str) -> bool {
        if self.host.env_var(env_key).is_some_and(|v| !v.is_empty()) {
            return true;
        }
        self.host
            .home_dir()
            .is_some_and(|home| self.host.file_exists(&home.join(relative)))
    }

    fn check_tool(&self, id: &str) -> ComponentStatus {
        if find_tool(id).is_none() {
            return ComponentStatus::Unknown;
        }
        let wsl = self.host.is_wsl();
        let present = match (id, wsl) {
            ("vscode", true) => {
                let present = self.host.command_exists("code")
                    || self.host.file_exists(Path::new(VSCODE_WINDOWS_EXE));
                if !present {
                    return ComponentStatus::NotInstalled;
                }
                // The Windows side is installed; WSL use needs the server half.
                return if self.home_dir_exists(".vscode-server") {
                    ComponentStatus::Installed
                } else {
                    ComponentStatus::NeedsCredentials
                };
            }
            ("vscode", false) => self.host.command_exists("code"),
            ("warp", true) => {
                self.host.file_exists(Path::new(WARP_WINDOWS_EXE))
                    || self
                        .host
                        .find_file(Path::new(WINDOWS_USERS), 4, "Warp.exe", None)
            }
            ("warp", false) => {
                self.host.command_exists("warp-terminal") || self.home_dir_exists(".warp")
            }
            ("wave", true) => {
                self.host.file_exists(Path::new(WAVE_WINDOWS_EXE))
                    || self.host.find_file(
                        Path::new(WINDOWS_USERS),
                        5,
                        "Wave.exe",
                        Some("waveterm"),
                    )
            }
            ("wave", false) => {
                self.host.command_exists("wave") || self.home_dir_exists(".waveterm")
            }
            _ => return ComponentStatus::Unknown,
        };
        if present {
            ComponentStatus::Installed
        } else {
            ComponentStatus::NotInstalled
        }
    }

    fn home_dir_exists(&self, relative: &str) -> bool {
        self.host
            .home_dir()
            .is_some_and(|home| self.host.dir_exists(&home.join(relative)))
    }
}

/// Configured checkout path followed by the conventional bench locations,
/// without duplicates.
pub fn bench_search_dirs(project_root: &Path, config: &WorkbenchConfig, name: &str) -> Vec<PathBuf> {
    let mut dirs = vec![project_root.join(config.bench_path(name))];
    for dir in bench_candidate_dirs(project_root, name) {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// `flutterBench` -> `new-flutter-project`.
pub fn project_command(bench: &str) -> String {
    let short = bench.to_lowercase().replace("bench", "");
    format!("new-{}-project", short)
}

/// Record a probe result on an entry, auto-checking present components.
pub fn apply_status(entry: &mut Entry, status: ComponentStatus) {
    if entry.is_separator {
        return;
    }
    entry.status = status;
    entry.checked = status.is_installed();
}

/// Probe every entry concurrently and write the results back in place.
pub fn load_all_statuses<H>(sections: &mut Sections, probe: &StatusProbe<'_, H>)
where
    H: HostOps + Sync + ?Sized,
{
    let statuses: Vec<ComponentStatus> = thread::scope(|scope| {
        let handles: Vec<_> = sections
            .iter()
            .map(|(_, entry)| scope.spawn(move || probe.check(entry)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(ComponentStatus::Unknown))
            .collect()
    });

    for (entry, status) in sections.entries_mut().zip(statuses) {
        if !entry.is_separator {
            log::info!("Status for {}: {:?}", entry.id, status);
        }
        apply_status(entry, status);
    }
}

/// Build the component sections from `config` and probe all of them.
pub fn load_components<H>(
    host: &H,
    project_root: &Path,
    config: &WorkbenchConfig,
) -> SetupResult<Sections>
where
    H: HostOps + Sync + ?Sized,
{
    let mut sections = initialize_components(config)?;
    let probe = StatusProbe::new(host, project_root, config);
    load_all_statuses(&mut sections, &probe);
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_core::config::BenchConfig;
    use bench_core::Section;
    use bench_hal::FakeHal;

    fn entry(id: &str, category: ComponentCategory) -> Entry {
        Entry::new(id, id, id, category)
    }

    #[test]
    fn project_command_strips_bench_suffix() {
        assert_eq!(project_command("flutterBench"), "new-flutter-project");
        assert_eq!(project_command("dotNetBench"), "new-dotnet-project");
    }

    #[test]
    fn bench_without_checkout_is_not_installed() {
        let hal = FakeHal::new();
        let config = WorkbenchConfig::default();
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(
            probe.check(&entry("bench_javaBench", ComponentCategory::Bench)),
            ComponentStatus::NotInstalled
        );
    }

    #[test]
    fn bench_checkout_without_project_command_needs_setup() {
        let hal = FakeHal::new().with_dir("/wb/devBenches/javaBench/.git");
        let config = WorkbenchConfig::default();
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(
            probe.check(&entry("bench_javaBench", ComponentCategory::Bench)),
            ComponentStatus::NeedsCredentials
        );

        let hal = hal.with_command("new-java-project");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(
            probe.check(&entry("bench_javaBench", ComponentCategory::Bench)),
            ComponentStatus::Installed
        );
    }

    #[test]
    fn bench_remote_must_match_configured_url() {
        let mut config = WorkbenchConfig::default();
        config.benches.insert(
            "javaBench".to_string(),
            BenchConfig {
                path: None,
                url: Some("https://example.com/javaBench.git".to_string()),
                description: None,
            },
        );
        let hal = FakeHal::new()
            .with_dir("/wb/javaBench/.git")
            .with_git_remote("/wb/javaBench", "https://example.com/other.git");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(
            probe.check(&entry("bench_javaBench", ComponentCategory::Bench)),
            ComponentStatus::NotInstalled
        );
    }

    #[test]
    fn claude_needs_key_or_config_file() {
        let config = WorkbenchConfig::default();
        let claude = entry("claude_cli", ComponentCategory::Assistant);

        let hal = FakeHal::new().with_command("claude").with_env("HOME", "/home/dev");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(probe.check(&claude), ComponentStatus::NeedsCredentials);

        let hal = hal.with_file("/home/dev/.claude/config.json");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(probe.check(&claude), ComponentStatus::Installed);

        let hal = FakeHal::new()
            .with_command("claude")
            .with_env("ANTHROPIC_API_KEY", "sk-test");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(probe.check(&claude), ComponentStatus::Installed);
    }

    #[test]
    fn plain_assistant_only_needs_command() {
        let config = WorkbenchConfig::default();
        let hal = FakeHal::new().with_command("gemini");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(
            probe.check(&entry("gemini_cli", ComponentCategory::Assistant)),
            ComponentStatus::Installed
        );
        assert_eq!(
            probe.check(&entry("opencode_cli", ComponentCategory::Assistant)),
            ComponentStatus::NotInstalled
        );
        assert_eq!(
            probe.check(&entry("mystery", ComponentCategory::Assistant)),
            ComponentStatus::Unknown
        );
    }

    #[test]
    fn vscode_under_wsl_needs_server_dir() {
        let config = WorkbenchConfig::default();
        let vscode = entry("vscode", ComponentCategory::Tool);
        let hal = FakeHal::new()
            .with_wsl(true)
            .with_env("HOME", "/home/dev")
            .with_file(VSCODE_WINDOWS_EXE);
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(probe.check(&vscode), ComponentStatus::NeedsCredentials);

        let hal = hal.with_dir("/home/dev/.vscode-server");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(probe.check(&vscode), ComponentStatus::Installed);
    }

    #[test]
    fn wave_under_wsl_searches_user_profiles() {
        let config = WorkbenchConfig::default();
        let hal = FakeHal::new()
            .with_wsl(true)
            .with_found_file(WINDOWS_USERS, "Wave.exe");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(
            probe.check(&entry("wave", ComponentCategory::Tool)),
            ComponentStatus::Installed
        );
        assert_eq!(
            probe.check(&entry("warp", ComponentCategory::Tool)),
            ComponentStatus::NotInstalled
        );
    }

    #[test]
    fn native_warp_accepts_home_dir() {
        let config = WorkbenchConfig::default();
        let hal = FakeHal::new()
            .with_env("HOME", "/home/dev")
            .with_dir("/home/dev/.warp");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);
        assert_eq!(
            probe.check(&entry("warp", ComponentCategory::Tool)),
            ComponentStatus::Installed
        );
    }

    #[test]
    fn load_all_statuses_auto_checks_present_entries() {
        let config = WorkbenchConfig::default();
        let mut sections = initialize_components(&config).unwrap();
        let hal = FakeHal::new()
            .with_command("claude")
            .with_command("gemini")
            .with_dir("/wb/pythonBench/.git");
        let probe = StatusProbe::new(&hal, Path::new("/wb"), &config);

        load_all_statuses(&mut sections, &probe);

        let claude = sections.get(Section::Assistants, 0).unwrap();
        assert_eq!(claude.status, ComponentStatus::NeedsCredentials);
        assert!(claude.checked);

        let python = sections
            .entries(Section::Benches)
            .iter()
            .find(|e| e.id == "bench_pythonBench")
            .unwrap();
        assert_eq!(python.status, ComponentStatus::NeedsCredentials);
        assert!(python.checked);

        let separator = sections.get(Section::Assistants, 5).unwrap();
        assert!(separator.is_separator);
        assert_eq!(separator.status, ComponentStatus::Unknown);
        assert!(!separator.checked);

        let copilot = sections.get(Section::Assistants, 1).unwrap();
        assert_eq!(copilot.status, ComponentStatus::NotInstalled);
        assert!(!copilot.checked);
    }
}
