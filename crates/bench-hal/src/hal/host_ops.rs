//! Host probes (read-only).
//!
//! Used by status checks to decide whether a component is present. Probes are
//! best-effort: failures read as "absent", never as errors.

use std::path::{Path, PathBuf};

pub trait HostOps {
    /// True when `name` resolves to an executable on PATH.
    fn command_exists(&self, name: &str) -> bool;

    fn file_exists(&self, path: &Path) -> bool;

    fn dir_exists(&self, path: &Path) -> bool;

    fn env_var(&self, key: &str) -> Option<String>;

    /// True when running under Windows Subsystem for Linux.
    fn is_wsl(&self) -> bool;

    /// `origin` remote URL of the git checkout at `dir`.
    fn git_remote(&self, dir: &Path) -> Option<String>;

    /// Search `root` (up to `max_depth` levels) for a file called `file_name`
    /// whose path also contains `path_hint`, when one is given.
    fn find_file(
        &self,
        root: &Path,
        max_depth: usize,
        file_name: &str,
        path_hint: Option<&str>,
    ) -> bool;

    fn home_dir(&self) -> Option<PathBuf> {
        self.env_var("HOME").map(PathBuf::from)
    }
}
