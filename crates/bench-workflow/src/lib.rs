//! bench-setup workflows.
//!
//! Status probing runs once before the UI becomes interactive; the installer
//! runs once after the user confirms. Both talk to the host only through
//! `bench-hal`.

pub mod installer;
pub mod status;

pub use installer::{command_argv, process_selections, InstallReport, Installer, ItemOutcome};
pub use status::{
    apply_status, load_all_statuses, load_components, project_command, StatusProbe,
};
