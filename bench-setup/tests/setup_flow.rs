use bench_core::config::{parse_bench_config, SetupSettings};
use bench_core::{ComponentAction, Section};
use bench_hal::FakeHal;
use bench_setup::{apply_selections, dump_ui};
use bench_tui::{App, Key, KeyInput, SetupHooks};
use bench_workflow::load_components;
use std::fs;
use std::path::Path;

struct Capture(Option<bench_core::Sections>);

impl SetupHooks for Capture {
    fn on_confirm(&mut self, sections: &bench_core::Sections) {
        self.0 = Some(sections.clone());
    }
    fn on_quit(&mut self) {}
    fn request_render(&mut self) {}
}

fn write_config(root: &Path) {
    fs::create_dir_all(root.join("config")).unwrap();
    fs::write(
        root.join("config/bench-config.json"),
        r#"{
            "benches": {
                "javaBench": {
                    "path": "devBenches/javaBench",
                    "url": "https://example.com/javaBench.git",
                    "description": "Java bench"
                }
            }
        }"#,
    )
    .unwrap();
}

#[test]
fn dump_ui_shows_probed_statuses() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path());
    let settings = SetupSettings::new(dir.path().to_path_buf());
    let config = parse_bench_config(&settings.config_path).unwrap();
    let hal = FakeHal::new().with_command("gemini");

    let dump = dump_ui(&hal, &settings, &config).unwrap();

    assert!(dump.contains("▶ [ ] ✗ javaBench"));
    assert!(dump.contains("  [✓] ✓ Gemini CLI"));
    assert!(dump.contains("Changes selected: 1"));
}

#[test]
fn confirmed_selection_is_installed() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path());
    let settings = SetupSettings::new(dir.path().to_path_buf());
    let config = parse_bench_config(&settings.config_path).unwrap();
    let hal = FakeHal::new();

    let sections = load_components(&hal, &settings.project_root, &config).unwrap();
    let mut app = App::loaded(sections);
    let mut hooks = Capture(None);
    for key in [Key::Space, Key::Right, Key::Down, Key::Space, Key::Enter] {
        app.handle_key(KeyInput::new(key), &mut hooks);
    }
    let snapshot = hooks.0.expect("confirmed");
    assert_eq!(
        snapshot.get(Section::Assistants, 1).unwrap().action,
        ComponentAction::Install
    );

    let report = apply_selections(&hal, &settings, &config, &snapshot);

    let dest = dir.path().join("devBenches/javaBench");
    assert_eq!(
        hal.command_lines(),
        vec![
            format!("git clone https://example.com/javaBench.git {}", dest.display()),
            "sudo npm install -g @github/copilot".to_string(),
        ]
    );
    assert_eq!(report.succeeded(), 2);
    assert!(report
        .to_string()
        .contains("Copilot CLI: Run `copilot auth login`"));
}
