//! Configuration management module
//!
//! Handles loading, saving, and validation of user settings: profile
//! details, notification preferences and UI options.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Result, SaludMenteError, APP_NAME, CONFIG_FILE};

const MIN_UI_TICK_MS: u64 = 50;
const MAX_UI_TICK_MS: u64 = 1000;

/// User settings persisted as TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name shown on the profile screen
    pub display_name: String,
    pub email: String,
    /// Free-form label, e.g. "Enero 2025"
    pub member_since: String,
    /// Receive alerts and reminders
    pub notifications_enabled: bool,
    /// Daily reminder to write in the journal
    pub daily_reminder: bool,
    /// Play sounds with notifications
    pub sound_enabled: bool,
    /// Keep journal entries on disk between sessions
    pub persist_journal: bool,
    /// UI redraw interval in milliseconds
    pub ui_tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_name: "Usuario".to_string(),
            email: "usuario@saludmente.com".to_string(),
            member_since: "Enero 2025".to_string(),
            notifications_enabled: true,
            daily_reminder: true,
            sound_enabled: false,
            persist_journal: false,
            ui_tick_ms: 250,
        }
    }
}

/// Toggleable preferences shown on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Notifications,
    DailyReminder,
    Sound,
    PersistJournal,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Preference::Notifications,
        Preference::DailyReminder,
        Preference::Sound,
        Preference::PersistJournal,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Preference::Notifications => "Notificaciones",
            Preference::DailyReminder => "Recordatorios Diarios",
            Preference::Sound => "Sonidos",
            Preference::PersistJournal => "Guardar Diario",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preference::Notifications => "Recibir alertas y recordatorios",
            Preference::DailyReminder => "Notificaciones para escribir en el diario",
            Preference::Sound => "Reproducir sonidos en las notificaciones",
            Preference::PersistJournal => "Conservar las entradas del diario entre sesiones",
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the settings values
    pub fn validate(&self) -> Result<()> {
        if self.display_name.trim().is_empty() {
            return Err(SaludMenteError::ConfigError(
                "Display name must not be empty".to_string(),
            ));
        }

        if !(MIN_UI_TICK_MS..=MAX_UI_TICK_MS).contains(&self.ui_tick_ms) {
            return Err(SaludMenteError::ConfigError(format!(
                "UI tick must be between {} and {} ms (got {})",
                MIN_UI_TICK_MS, MAX_UI_TICK_MS, self.ui_tick_ms
            )));
        }

        Ok(())
    }

    pub fn ui_tick(&self) -> Duration {
        Duration::from_millis(self.ui_tick_ms)
    }

    pub fn is_enabled(&self, preference: Preference) -> bool {
        match preference {
            Preference::Notifications => self.notifications_enabled,
            Preference::DailyReminder => self.daily_reminder,
            Preference::Sound => self.sound_enabled,
            Preference::PersistJournal => self.persist_journal,
        }
    }

    /// Flip a preference; returns the new value
    pub fn toggle(&mut self, preference: Preference) -> bool {
        let flag = match preference {
            Preference::Notifications => &mut self.notifications_enabled,
            Preference::DailyReminder => &mut self.daily_reminder,
            Preference::Sound => &mut self.sound_enabled,
            Preference::PersistJournal => &mut self.persist_journal,
        };
        *flag = !*flag;
        *flag
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_persist_journal(mut self, persist: bool) -> Self {
        self.persist_journal = persist;
        self
    }

    /// Load settings from the standard config file location.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SaludMenteError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            SaludMenteError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SaludMenteError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| {
            SaludMenteError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// $CONFIG_HOME/saludmente/saludmente.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SaludMenteError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
