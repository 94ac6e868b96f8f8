//! WorkBenches setup core library.
//!
//! `bench-core` holds the shared data model (entries and sections), the
//! built-in catalogue, the bench config file and CLI, used by the workflow,
//! TUI and binary crates.

pub mod catalogue;
pub mod cli;
pub mod component;
pub mod config;
pub mod logging;

pub use bench_error::{SetupError, SetupResult};
pub use component::{
    ComponentAction, ComponentCategory, ComponentStatus, Entry, PendingChanges, Section, Sections,
};
