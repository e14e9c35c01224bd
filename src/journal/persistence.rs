//! Journal persistence
//!
//! Saves journal entries to a versioned JSON file, keeping at most
//! `MAX_JOURNAL_ENTRIES` of the newest ones.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::JournalEntry;
use crate::{Result, SaludMenteError, APP_NAME, JOURNAL_FILE, MAX_JOURNAL_ENTRIES};

/// Journal file storage
#[derive(Debug)]
pub struct JournalStorage {
    journal_path: PathBuf,
}

/// Current on-disk format
const FORMAT_VERSION: u32 = 1;

/// On-disk layout
#[derive(Debug, Serialize, Deserialize)]
struct JournalFile {
    version: u32,
    entries: Vec<JournalEntry>,
}

impl JournalStorage {
    /// Storage at the standard data location
    pub fn new() -> Result<Self> {
        Ok(Self {
            journal_path: Self::journal_file_path()?,
        })
    }

    /// Storage at an explicit path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            journal_path: path.into(),
        }
    }

    /// $DATA_HOME/saludmente/journal.json
    pub fn journal_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            SaludMenteError::PersistenceError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(JOURNAL_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.journal_path
    }

    /// Load all stored entries; a missing file is an empty journal
    pub fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        if !self.journal_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.journal_path).map_err(|e| {
            SaludMenteError::PersistenceError(format!(
                "Failed to read journal file {}: {}",
                self.journal_path.display(),
                e
            ))
        })?;

        let file: JournalFile = serde_json::from_str(&content).map_err(|e| {
            SaludMenteError::PersistenceError(format!(
                "Failed to parse journal file {}: {}",
                self.journal_path.display(),
                e
            ))
        })?;

        if file.version != FORMAT_VERSION {
            return Err(SaludMenteError::PersistenceError(format!(
                "Unsupported journal format version {} in {}",
                file.version,
                self.journal_path.display()
            )));
        }

        Ok(file.entries)
    }

    /// Replace the stored entries. `entries` must be newest first; older
    /// entries beyond the history limit are dropped.
    pub fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        if let Some(parent) = self.journal_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SaludMenteError::PersistenceError(format!(
                    "Failed to create journal directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let kept = entries.len().min(MAX_JOURNAL_ENTRIES);
        let file = JournalFile {
            version: FORMAT_VERSION,
            entries: entries[..kept].to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        fs::write(&self.journal_path, content).map_err(|e| {
            SaludMenteError::PersistenceError(format!(
                "Failed to write journal file {}: {}",
                self.journal_path.display(),
                e
            ))
        })?;

        tracing::debug!(count = kept, path = %self.journal_path.display(), "journal saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{Journal, Mood};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> JournalStorage {
        JournalStorage::with_path(dir.path().join("nested").join("journal.json"))
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(storage(&dir).load_entries().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let mut journal = Journal::new();
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        journal.add("Hoy medité", Some(Mood::Calm), now).unwrap();

        storage.save_entries(journal.entries()).unwrap();
        let loaded = storage.load_entries().unwrap();
        assert_eq!(loaded, journal.entries());
    }

    #[test]
    fn test_rotation_keeps_newest() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let mut journal = Journal::new();
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        for i in 0..(MAX_JOURNAL_ENTRIES + 5) {
            let when = base + chrono::Duration::minutes(i as i64);
            journal.add(&format!("entrada {}", i), Some(Mood::Happy), when).unwrap();
        }

        storage.save_entries(journal.entries()).unwrap();
        let loaded = storage.load_entries().unwrap();
        assert_eq!(loaded.len(), MAX_JOURNAL_ENTRIES);
        assert_eq!(loaded[0].text, format!("entrada {}", MAX_JOURNAL_ENTRIES + 4));
        assert_eq!(loaded.last().unwrap().text, "entrada 5");
    }

    #[test]
    fn test_file_format_version() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        storage.save_entries(&[]).unwrap();

        let content = fs::read_to_string(storage.path()).unwrap();
        let file: JournalFile = serde_json::from_str(&content).unwrap();
        assert_eq!(file.version, FORMAT_VERSION);
    }

    #[test]
    fn test_unknown_version_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), r#"{ "version": 99, "entries": [] }"#).unwrap();
        assert!(matches!(
            storage.load_entries(),
            Err(SaludMenteError::PersistenceError(_))
        ));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), "{ not json").unwrap();
        assert!(matches!(
            storage.load_entries(),
            Err(SaludMenteError::PersistenceError(_))
        ));
    }
}
