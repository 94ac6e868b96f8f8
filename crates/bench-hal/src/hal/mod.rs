//! HAL trait definitions and implementations.
//!
//! This module defines the core traits for host operations and provides
//! both real (LinuxHal) and fake (FakeHal) implementations.

pub mod fake_hal;
pub mod file_ops;
pub mod host_ops;
pub mod linux_hal;
pub mod process_ops;

pub use fake_hal::{FakeHal, Operation};
pub use file_ops::FileOps;
pub use host_ops::HostOps;
pub use linux_hal::{LinuxHal, PROBE_TIMEOUT};
pub use process_ops::ProcessOps;

/// Complete HAL combining all host operation traits.
pub trait SystemHal: ProcessOps + HostOps + FileOps + Send + Sync {}

/// Automatically implement SystemHal for any type implementing all required traits.
impl<T> SystemHal for T where T: ProcessOps + HostOps + FileOps + Send + Sync {}
