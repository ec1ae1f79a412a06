//! Log output setup
//!
//! The terminal belongs to the TUI, so tracing output goes to a file. The
//! level is taken from `TICKETHUB_LOG` (an `EnvFilter` directive), defaulting
//! to `info`.

use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "TICKETHUB_LOG";

/// Errors that can occur while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file or its directory could not be created
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber was already installed
    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Returns the default log file location
///
/// Uses `~/.local/share/tickethub/tickethub.log` on Linux, or the equivalent
/// platform data directory. Returns `None` if no home directory is known.
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "tickethub")?;
    Some(project_dirs.data_local_dir().join("tickethub.log"))
}

/// Opens the log file for appending, creating parent directories as needed
fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Installs the global tracing subscriber writing to `path`
pub fn init(path: &Path) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert_eq!(path.file_name().unwrap(), "tickethub.log");
        }
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("logs").join("tickethub.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::Write;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tickethub.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = open_log_file(&blocker.join("tickethub.log"));
        assert!(matches!(result, Err(LoggingError::Io(_))));
    }

    // The only test that installs the global subscriber
    #[test]
    fn test_init_writes_events_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("tickethub.log");

        init(&path).unwrap();
        tracing::info!(marker = "log-file-check", "logging ready");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("log-file-check"), "log file was: {}", content);
        assert!(matches!(init(&path), Err(LoggingError::Install(_))));
    }
}
