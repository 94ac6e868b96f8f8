use env_logger::Target;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Initialise `env_logger`.
///
/// Records go to `log_file` when given. Without one, or when it cannot be
/// opened, an interactive session discards records (stderr would draw over
/// the TUI); a non-interactive run logs to stderr. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_with(log_file: Option<PathBuf>, interactive: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(log_target(log_file.as_deref(), interactive))
        .try_init();
}

fn log_target(log_file: Option<&Path>, interactive: bool) -> Target {
    match log_file.map(open_log_file) {
        Some(Ok(file)) => Target::Pipe(Box::new(file)),
        Some(Err(err)) if !interactive => {
            eprintln!("Cannot open log file: {}", err);
            Target::Stderr
        }
        _ if interactive => Target::Pipe(Box::new(io::sink())),
        _ => Target::Stderr,
    }
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/setup.log");
        assert!(matches!(log_target(Some(&path), true), Target::Pipe(_)));
        assert!(path.exists());
    }

    #[test]
    fn unopenable_log_file_never_reaches_stderr_when_interactive() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("setup.log");

        assert!(matches!(log_target(Some(&path), true), Target::Pipe(_)));
        assert!(matches!(log_target(Some(&path), false), Target::Stderr));
    }

    #[test]
    fn no_log_file_depends_on_terminal() {
        assert!(matches!(log_target(None, true), Target::Pipe(_)));
        assert!(matches!(log_target(None, false), Target::Stderr));
    }
}
