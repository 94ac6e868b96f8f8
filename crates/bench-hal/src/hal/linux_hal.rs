//! Linux HAL implementation using real processes and the real filesystem.

use super::{FileOps, HostOps, ProcessOps};
use crate::{HalError, HalResult};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;
use walkdir::WalkDir;

/// Real HAL implementation for Linux systems.
#[derive(Debug, Clone, Default)]
pub struct LinuxHal;

impl LinuxHal {
    pub fn new() -> Self {
        Self
    }
}

/// Upper bound for read-only probe commands (`which`, `git remote`).
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

fn map_command_err(program: &str, err: std::io::Error) -> HalError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return HalError::CommandNotFound(program.to_string());
    }
    HalError::Io(err)
}

fn output_with_timeout(program: &str, cmd: &mut Command, timeout: Duration) -> HalResult<Output> {
    // Avoid commands hanging waiting for input.
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().map_err(|e| map_command_err(program, e))?;

    let mut stdout = child.stdout.take();
    let mut stderr = child.stderr.take();

    // Drain pipes concurrently to avoid deadlocks on large output.
    let stdout_handle = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut out) = stdout.take() {
            let _ = out.read_to_end(&mut buf);
        }
        buf
    });
    let stderr_handle = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut err) = stderr.take() {
            let _ = err.read_to_end(&mut buf);
        }
        buf
    });

    let status = match child.wait_timeout(timeout).map_err(HalError::Io)? {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            let _ = stdout_handle.join();
            let _ = stderr_handle.join();
            return Err(HalError::CommandTimeout {
                program: program.to_string(),
                timeout_secs: timeout.as_secs(),
            });
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    Ok(Output {
        status,
        stdout,
        stderr,
    })
}

impl ProcessOps for LinuxHal {
    fn command_output_with_cwd(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
        timeout: Duration,
    ) -> HalResult<Output> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        log::debug!("exec: {} {}", program, args.join(" "));
        output_with_timeout(program, &mut cmd, timeout)
    }
}

impl FileOps for LinuxHal {
    fn remove_dir_all(&self, path: &Path) -> HalResult<()> {
        fs::remove_dir_all(path)?;
        Ok(())
    }
}

impl HostOps for LinuxHal {
    fn command_exists(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.command_output("which", &[name], PROBE_TIMEOUT)
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }

    fn is_wsl(&self) -> bool {
        if self.env_var("WSL_DISTRO_NAME").is_some() {
            return true;
        }
        fs::read_to_string("/proc/version")
            .map(|v| is_wsl_kernel(&v))
            .unwrap_or(false)
    }

    fn git_remote(&self, dir: &Path) -> Option<String> {
        let out = self
            .command_output_with_cwd(
                "git",
                &["remote", "get-url", "origin"],
                Some(dir),
                PROBE_TIMEOUT,
            )
            .ok()?;
        if !out.status.success() {
            return None;
        }
        String::from_utf8(out.stdout)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn find_file(
        &self,
        root: &Path,
        max_depth: usize,
        file_name: &str,
        path_hint: Option<&str>,
    ) -> bool {
        WalkDir::new(root)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .any(|entry| {
                entry.file_name().to_string_lossy() == file_name
                    && path_hint
                        .map(|hint| entry.path().to_string_lossy().contains(hint))
                        .unwrap_or(true)
            })
    }
}

/// `/proc/version` on WSL kernels mentions Microsoft.
fn is_wsl_kernel(proc_version: &str) -> bool {
    proc_version.to_ascii_lowercase().contains("microsoft")
}
