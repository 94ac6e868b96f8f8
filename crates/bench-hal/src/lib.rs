//! bench-setup host abstraction layer (HAL).
//!
//! Everything that touches the outside world (spawning processes, probing
//! PATH and the filesystem, deleting directories) goes through these traits so
//! status probing and the installer can be tested without a real host.

pub mod hal;

pub use bench_error::{HalError, HalResult};
pub use hal::{
    FakeHal, FileOps, HostOps, LinuxHal, Operation, ProcessOps, SystemHal, PROBE_TIMEOUT,
};
