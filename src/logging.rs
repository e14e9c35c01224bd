//! Tracing setup
//!
//! Logs go to a file because the TUI owns the terminal. If no log file can
//! be opened, events are filtered but dropped.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{APP_NAME, LOG_FILE};

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "SALUDMENTE_LOG";

/// Install the global subscriber. Returns the log file path when one was opened.
pub fn init_tracing() -> Option<PathBuf> {
    let (log_file, init_warnings) = open_log_file(log_file_candidates());

    if let Some((log_path, file)) = log_file {
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter())
            .try_init()
            .is_ok();

        if installed {
            tracing::info!(path = %log_path.display(), "logging initialized");
            for warning in init_warnings {
                tracing::warn!("{warning}");
            }
        }
        return Some(log_path);
    }

    let _ = tracing_subscriber::registry().with(env_filter()).try_init();
    None
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(candidates: Vec<PathBuf>) -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!(
                    "Failed to create log dir {}: {e}",
                    parent.display()
                ));
                continue;
            }
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

/// Data dir first, then a local fallback
fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(data_dir) = dirs::data_dir() {
        candidates.push(data_dir.join(APP_NAME).join(LOG_FILE));
    }
    candidates.push(PathBuf::from(format!(".{}", APP_NAME)).join(LOG_FILE));

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_candidates_end_with_log_file() {
        let candidates = log_file_candidates();
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|p| p.ends_with(LOG_FILE)));
    }

    #[test]
    fn test_open_log_file_skips_bad_candidates() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let bad = blocker.join("logs").join(LOG_FILE);
        let good = dir.path().join("logs").join(LOG_FILE);
        let (opened, warnings) = open_log_file(vec![bad, good.clone()]);

        let (path, _file) = opened.unwrap();
        assert_eq!(path, good);
        assert_eq!(warnings.len(), 1);
    }
}
