use anyhow::Context;
use bench_core::cli::Cli;
use bench_core::config::{load_bench_config, SetupSettings, WorkbenchConfig};
use bench_core::Sections;
use bench_hal::{HostOps, LinuxHal, SystemHal};
use bench_tui::session::{self, SessionOutcome};
use bench_tui::App;
use bench_workflow::{load_components, process_selections, InstallReport, Installer};
use clap::Parser;
use std::io::IsTerminal;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = !cli.dump_ui && std::io::stdout().is_terminal();
    bench_core::logging::init_with(cli.log_file.clone(), interactive);

    let settings = SetupSettings::from_cli(&cli);
    let config = load_bench_config(&settings.config_path);
    let hal = LinuxHal::new();

    if cli.dump_ui {
        print!("{}", dump_ui(&hal, &settings, &config)?);
        return Ok(());
    }

    log::info!("🧰 Launching setup UI for {}", settings.project_root.display());
    let loader = {
        let hal = hal.clone();
        let root = settings.project_root.clone();
        let config = config.clone();
        move || load_components(&hal, &root, &config).context("Failed to load components")
    };

    match session::run(loader)? {
        SessionOutcome::Quit => {
            println!("Setup cancelled. No changes made.");
        }
        SessionOutcome::Confirmed(sections) => {
            if settings.dry_run {
                println!("Dry run: nothing will be changed.\n");
            }
            let report = apply_selections(&hal, &settings, &config, &sections);
            print!("{}", report);
            if report.failed() > 0 {
                log::warn!("{} change(s) failed", report.failed());
            }
        }
    }
    Ok(())
}

/// Load and probe components, then render the screen as text.
pub fn dump_ui<H>(
    host: &H,
    settings: &SetupSettings,
    config: &WorkbenchConfig,
) -> anyhow::Result<String>
where
    H: HostOps + Sync + ?Sized,
{
    let sections = load_components(host, &settings.project_root, config)
        .context("Failed to load components")?;
    Ok(bench_tui::dump_screen(&App::loaded(sections)))
}

/// Run every pending action from the confirmed snapshot.
pub fn apply_selections<H>(
    hal: &H,
    settings: &SetupSettings,
    config: &WorkbenchConfig,
    sections: &Sections,
) -> InstallReport
where
    H: SystemHal + ?Sized,
{
    let changes = sections.pending_changes();
    log::info!(
        "Applying {} install(s) and {} uninstall(s)",
        changes.installs,
        changes.uninstalls
    );
    let installer = Installer::new(hal, settings, config);
    process_selections(sections, &installer)
}
