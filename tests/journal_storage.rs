use chrono::{TimeZone, Utc};
use saludmente::config::{Preference, Settings};
use saludmente::journal::{Journal, JournalStorage, Mood, INCOMPLETE_FORM_MESSAGE};
use saludmente::error::user_friendly_message;
use tempfile::TempDir;

#[test]
fn test_entries_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let storage = JournalStorage::with_path(dir.path().join("journal.json"));

    let mut journal = Journal::new();
    let morning = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2026, 10, 19, 21, 0, 0).unwrap();
    journal.add("Desperté con energía", Some(Mood::Happy), morning).unwrap();
    journal.add("Un día pesado", Some(Mood::Tired), evening).unwrap();
    storage.save_entries(journal.entries()).unwrap();

    let reloaded = Journal::from_entries(storage.load_entries().unwrap());
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.entries()[0].text, "Un día pesado");
    assert_eq!(reloaded.entries()[1].mood, Some(Mood::Happy));
}

#[test]
fn test_validation_message_is_user_facing() {
    let mut journal = Journal::new();
    let err = journal.add("", Some(Mood::Calm), Utc::now()).unwrap_err();
    assert_eq!(user_friendly_message(&err), INCOMPLETE_FORM_MESSAGE);
}

#[test]
fn test_persist_flag_round_trips_through_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saludmente.toml");

    let mut settings = Settings::default();
    assert!(!settings.persist_journal);
    assert!(settings.toggle(Preference::PersistJournal));
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert!(loaded.is_enabled(Preference::PersistJournal));
}
