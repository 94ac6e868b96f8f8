use bench_core::catalogue::initialize_components;
use bench_core::config::{BenchConfig, SetupSettings, WorkbenchConfig};
use bench_core::{ComponentAction, ComponentStatus, Entry, Section, Sections};
use bench_hal::{FakeHal, Operation};
use bench_workflow::{process_selections, Installer};
use std::path::PathBuf;

fn config_with_url(name: &str, url: &str) -> WorkbenchConfig {
    let mut config = WorkbenchConfig::default();
    config.benches.insert(
        name.to_string(),
        BenchConfig {
            path: Some(format!("devBenches/{}", name)),
            url: Some(url.to_string()),
            description: None,
        },
    );
    config
}

fn mark(sections: &mut Sections, section: Section, id: &str, action: ComponentAction) {
    let index = sections
        .entries(section)
        .iter()
        .position(|e| e.id == id)
        .unwrap();
    let mut entry: Entry = sections.get(section, index).unwrap().clone();
    entry.checked = true;
    entry.action = action;
    sections.replace(section, index, entry).unwrap();
}

#[test]
fn bench_install_clones_and_runs_setup() {
    let config = config_with_url("rustBench", "https://example.com/rustBench.git");
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new().with_file("/wb/devBenches/rustBench/setup.sh");
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Benches, "bench_rustBench", ComponentAction::Install);

    let installer = Installer::new(&hal, &settings, &config);
    let report = process_selections(&sections, &installer);

    assert_eq!(report.succeeded(), 1);
    assert_eq!(
        hal.command_lines(),
        vec![
            "git clone https://example.com/rustBench.git /wb/devBenches/rustBench".to_string(),
            "bash setup.sh".to_string(),
        ]
    );
    assert!(hal.has_operation(|op| matches!(
        op,
        Operation::Command { program, cwd: Some(cwd), .. }
            if program == "bash" && cwd == &PathBuf::from("/wb/devBenches/rustBench")
    )));
}

#[test]
fn bench_install_without_url_fails() {
    let config = WorkbenchConfig::default();
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new();
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Benches, "bench_javaBench", ComponentAction::Install);

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert_eq!(report.failed(), 1);
    assert_eq!(report.outcomes[0].message, "No URL configured for javaBench");
    assert_eq!(hal.operation_count(), 0);
}

#[test]
fn failing_setup_script_only_warns() {
    let config = config_with_url("rustBench", "https://example.com/rustBench.git");
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new()
        .with_file("/wb/devBenches/rustBench/setup.sh")
        .failing("bash");
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Benches, "bench_rustBench", ComponentAction::Install);

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert_eq!(report.succeeded(), 1);
    assert_eq!(
        report.outcomes[0].message,
        "Installed rustBench (setup.sh failed: Command failed: bash (exit=Some(1)): bash failed)"
    );
}

#[test]
fn bench_uninstall_removes_first_existing_checkout() {
    let config = WorkbenchConfig::default();
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new().with_dir("/wb/adminBenches/pythonBench");
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Benches, "bench_pythonBench", ComponentAction::Uninstall);
    mark(&mut sections, Section::Benches, "bench_javaBench", ComponentAction::Uninstall);

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert!(hal.has_operation(|op| matches!(
        op,
        Operation::RemoveDir { path } if path == &PathBuf::from("/wb/adminBenches/pythonBench")
    )));
    let java = report
        .outcomes
        .iter()
        .find(|o| o.id == "bench_javaBench")
        .unwrap();
    assert!(!java.success);
    assert_eq!(java.message, "Could not find javaBench to uninstall");
}

#[test]
fn assistants_install_with_sudo_and_flag_credentials() {
    let config = WorkbenchConfig::default();
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new();
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Assistants, "claude_cli", ComponentAction::Install);
    mark(&mut sections, Section::Assistants, "opencode_cli", ComponentAction::Install);
    mark(&mut sections, Section::Assistants, "spec_kit", ComponentAction::Uninstall);

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert_eq!(
        hal.command_lines(),
        vec![
            "sudo npm install -g @anthropic-ai/claude-code".to_string(),
            "sudo npm install -g opencode".to_string(),
        ]
    );
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.outcomes[2].message, "Cannot uninstall spec_kit");
    assert_eq!(
        report.credential_hints(),
        vec!["Claude CLI: Run `claude login` or set ANTHROPIC_API_KEY"]
    );
}

#[test]
fn failed_assistant_install_reports_output() {
    let config = WorkbenchConfig::default();
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new().failing("uvx");
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Assistants, "spec_kit", ComponentAction::Install);

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert_eq!(
        report.outcomes[0].message,
        "Failed to install spec-kit: Command failed: uvx (exit=Some(1)): uvx failed"
    );
    assert!(report.to_string().contains("Summary: 0 succeeded, 1 failed"));
}

#[test]
fn tools_report_instructions_and_ignore_uninstall() {
    let config = WorkbenchConfig::default();
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new();
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Tools, "vscode", ComponentAction::Install);
    mark(&mut sections, Section::Tools, "wave", ComponentAction::Uninstall);

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(
        report.outcomes[0].message,
        "Install VS Code from https://code.visualstudio.com/"
    );
    assert_eq!(hal.operation_count(), 0);
}

#[test]
fn dry_run_reports_without_touching_host() {
    let config = config_with_url("rustBench", "https://example.com/rustBench.git");
    let mut settings = SetupSettings::new(PathBuf::from("/wb"));
    settings.dry_run = true;
    let hal = FakeHal::new().with_dir("/wb/devBenches/rustBench");
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Benches, "bench_rustBench", ComponentAction::Uninstall);
    mark(&mut sections, Section::Assistants, "gemini_cli", ComponentAction::Install);

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert_eq!(hal.operation_count(), 0);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(
        report.outcomes[1].message,
        "Would run: sudo npm install -g @google/gemini-cli"
    );
}

#[test]
fn untouched_entries_produce_no_outcomes() {
    let config = WorkbenchConfig::default();
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new();
    let mut sections = initialize_components(&config).unwrap();
    let index = 0;
    let mut kept = sections.get(Section::Assistants, index).unwrap().clone();
    kept.status = ComponentStatus::Installed;
    kept.checked = true;
    sections.replace(Section::Assistants, index, kept).unwrap();

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert!(report.is_empty());
    assert_eq!(report.to_string(), "No changes to apply.\n");
}

#[test]
fn failed_clone_keeps_command_error() {
    let config = config_with_url("rustBench", "https://example.com/rustBench.git");
    let settings = SetupSettings::new(PathBuf::from("/wb"));
    let hal = FakeHal::new().failing("git");
    let mut sections = initialize_components(&config).unwrap();
    mark(&mut sections, Section::Benches, "bench_rustBench", ComponentAction::Install);

    let report = process_selections(&sections, &Installer::new(&hal, &settings, &config));

    assert_eq!(report.failed(), 1);
    assert_eq!(
        report.outcomes[0].message,
        "Failed to clone rustBench: Command failed: git (exit=Some(1)): git failed"
    );
    assert_eq!(hal.command_lines().len(), 1);
}
