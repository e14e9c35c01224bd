//! SaludMente - terminal wellness companion
//!
//! Guided relaxation exercises, an emotional journal, self-care routines,
//! educational capsules and a scripted support chatbot, rendered as a TUI.

use std::time::Duration;
use thiserror::Error;

pub mod app;
pub mod chat;
pub mod config;
pub mod content;
pub mod exercise;
pub mod habits;
pub mod journal;
pub mod logging;
pub mod simple;
pub mod util;

/// Common error type
#[derive(Debug, Error)]
pub enum SaludMenteError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Settings validation or parsing error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Exercise definition violates the player's preconditions
    #[error("Invalid exercise: {0}")]
    InvalidExercise(String),
    /// User input rejected by a form
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Journal persistence error
    #[error("Persistence error: {0}")]
    PersistenceError(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    TuiError(String),
    /// Lookup of a catalog item by id failed
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for SaludMenteError {
    fn from(err: serde_json::Error) -> Self {
        SaludMenteError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for SaludMenteError {
    fn from(err: toml::de::Error) -> Self {
        SaludMenteError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for SaludMenteError {
    fn from(err: toml::ser::Error) -> Self {
        SaludMenteError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for SaludMente operations
pub type Result<T> = std::result::Result<T, SaludMenteError>;

/// Error presentation helpers
pub mod error {
    use super::SaludMenteError;

    /// Convert error to the message shown in the UI
    pub fn user_friendly_message(error: &SaludMenteError) -> String {
        match error {
            SaludMenteError::ValidationError(msg) => msg.clone(),
            SaludMenteError::PersistenceError(_) => {
                "No se pudo guardar tu información. Revisa el espacio y los permisos del disco."
                    .to_string()
            }
            SaludMenteError::ConfigError(msg) => {
                format!("Error de configuración: {}. Se usarán los valores por defecto.", msg)
            }
            SaludMenteError::InvalidExercise(_) => {
                "Este ejercicio no tiene pasos válidos.".to_string()
            }
            SaludMenteError::NotFound(what) => format!("No encontrado: {}", what),
            _ => error.to_string(),
        }
    }
}

pub const APP_NAME: &str = "saludmente";
pub const CONFIG_FILE: &str = "saludmente.toml";
pub const JOURNAL_FILE: &str = "journal.json";
pub const LOG_FILE: &str = "saludmente.log";
pub const MAX_JOURNAL_ENTRIES: usize = 500;
/// Period of the guided exercise timer
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
