//! Fake HAL implementation for testing.
//!
//! This implementation records all operations without executing them and
//! answers host probes from a scripted world, allowing CI-safe tests of the
//! status checks and the installer.

use super::{FileOps, HostOps, ProcessOps};
use crate::{HalError, HalResult};
use std::collections::{HashMap, HashSet};
#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Command {
        program: String,
        args: Vec<String>,
        cwd: Option<PathBuf>,
        timeout_secs: u64,
    },
    RemoveDir {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Default)]
struct FakeHalState {
    /// All operations that were recorded
    operations: Vec<Operation>,
    commands: HashSet<String>,
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
    env: HashMap<String, String>,
    git_remotes: HashMap<PathBuf, String>,
    /// (root, file name) pairs `find_file` reports as present.
    found_files: Vec<(PathBuf, String)>,
    failing_programs: HashSet<String>,
    wsl: bool,
}

/// Fake HAL implementation that records operations without executing them.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeHalState> {
        // A panicking test thread must not hide the recorded operations.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn with_command(self, name: &str) -> Self {
        self.state().commands.insert(name.to_string());
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.state().files.insert(path.into());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.state().dirs.insert(path.into());
        self
    }

    pub fn with_env(self, key: &str, value: &str) -> Self {
        self.state().env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_git_remote(self, dir: impl Into<PathBuf>, url: &str) -> Self {
        self.state().git_remotes.insert(dir.into(), url.to_string());
        self
    }

    pub fn with_found_file(self, root: impl Into<PathBuf>, file_name: &str) -> Self {
        self.state()
            .found_files
            .push((root.into(), file_name.to_string()));
        self
    }

    pub fn with_wsl(self, wsl: bool) -> Self {
        self.state().wsl = wsl;
        self
    }

    /// Make every invocation of `program` exit non-zero.
    pub fn failing(self, program: &str) -> Self {
        self.state().failing_programs.insert(program.to_string());
        self
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.state().operations.clone()
    }

    /// Get the number of operations recorded.
    pub fn operation_count(&self) -> usize {
        self.state().operations.len()
    }

    /// Check if a specific operation was recorded.
    pub fn has_operation(&self, check: impl Fn(&Operation) -> bool) -> bool {
        self.state().operations.iter().any(check)
    }

    /// Recorded command lines, rendered as `program arg1 arg2`.
    pub fn command_lines(&self) -> Vec<String> {
        self.state()
            .operations
            .iter()
            .filter_map(|op| match op {
                Operation::Command { program, args, .. } => {
                    let mut line = program.clone();
                    for arg in args {
                        line.push(' ');
                        line.push_str(arg);
                    }
                    Some(line)
                }
                _ => None,
            })
            .collect()
    }

    /// Clear all recorded operations.
    pub fn clear(&self) {
        self.state().operations.clear();
    }

    fn record_operation(&self, op: Operation) {
        self.state().operations.push(op);
    }
}

fn exit_status(code: i32) -> std::process::ExitStatus {
    #[cfg(unix)]
    {
        std::process::ExitStatus::from_raw(code << 8)
    }
    #[cfg(not(unix))]
    {
        use std::os::windows::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code as u32)
    }
}

impl ProcessOps for FakeHal {
    fn command_output_with_cwd(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
        timeout: Duration,
    ) -> HalResult<Output> {
        self.record_operation(Operation::Command {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
            timeout_secs: timeout.as_secs(),
        });

        let failing = self.state().failing_programs.contains(program);
        if failing {
            return Ok(Output {
                status: exit_status(1),
                stdout: Vec::new(),
                stderr: format!("{} failed", program).into_bytes(),
            });
        }
        Ok(Output {
            status: exit_status(0),
            stdout: Vec::new(),
            stderr: Vec::new(),
        })
    }
}

impl FileOps for FakeHal {
    fn remove_dir_all(&self, path: &Path) -> HalResult<()> {
        self.record_operation(Operation::RemoveDir {
            path: path.to_path_buf(),
        });
        let mut state = self.state();
        if !state.dirs.contains(path) {
            return Err(HalError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )));
        }
        state.dirs.retain(|dir| !dir.starts_with(path));
        Ok(())
    }
}

impl HostOps for FakeHal {
    fn command_exists(&self, name: &str) -> bool {
        self.state().commands.contains(name)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.state().files.contains(path)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.state().dirs.contains(path)
    }

    fn env_var(&self, key: &str) -> Option<String> {
        self.state().env.get(key).cloned()
    }

    fn is_wsl(&self) -> bool {
        self.state().wsl
    }

    fn git_remote(&self, dir: &Path) -> Option<String> {
        self.state().git_remotes.get(dir).cloned()
    }

    fn find_file(
        &self,
        root: &Path,
        _max_depth: usize,
        file_name: &str,
        _path_hint: Option<&str>,
    ) -> bool {
        self.state()
            .found_files
            .iter()
            .any(|(r, name)| r == root && name == file_name)
    }
}
