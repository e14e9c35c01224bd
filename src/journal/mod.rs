//! Emotional journal
//!
//! Entries pair a free-text reflection with a mood and are kept newest
//! first. Saving requires both fields.

pub mod persistence;

use chrono::{DateTime, Local, Utc};
use ratatui::style::Color;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::util::format::spanish_long_date;
use crate::{Result, SaludMenteError};

pub use persistence::JournalStorage;

/// Message shown when the form is incomplete
pub const INCOMPLETE_FORM_MESSAGE: &str = "Por favor completa todos los campos";

/// Mood attached to a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "feliz")]
    Happy,
    #[serde(rename = "triste")]
    Sad,
    #[serde(rename = "ansioso")]
    Anxious,
    #[serde(rename = "cansado")]
    Tired,
    #[serde(rename = "tranquilo")]
    Calm,
    #[serde(rename = "enojado")]
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Tired,
        Mood::Calm,
        Mood::Angry,
    ];

    /// Stored value
    pub fn value(&self) -> &'static str {
        match self {
            Mood::Happy => "feliz",
            Mood::Sad => "triste",
            Mood::Anxious => "ansioso",
            Mood::Tired => "cansado",
            Mood::Calm => "tranquilo",
            Mood::Angry => "enojado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "😊 Feliz",
            Mood::Sad => "😢 Triste",
            Mood::Anxious => "😰 Ansioso",
            Mood::Tired => "😴 Cansado",
            Mood::Calm => "😌 Tranquilo",
            Mood::Angry => "😤 Enojado",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Mood::Happy => Color::Green,
            Mood::Sad => Color::Blue,
            Mood::Anxious => Color::LightRed,
            Mood::Tired => Color::Magenta,
            Mood::Calm => Color::Cyan,
            Mood::Angry => Color::Red,
        }
    }
}

impl FromStr for Mood {
    type Err = SaludMenteError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.value() == wanted)
            .ok_or_else(|| SaludMenteError::ValidationError(format!("estado de ánimo desconocido: {}", s)))
    }
}

/// Label for a possibly unknown mood
pub fn mood_label(mood: Option<Mood>) -> &'static str {
    mood.map(|m| m.label()).unwrap_or("😐 Neutral")
}

/// Color for a possibly unknown mood
pub fn mood_color(mood: Option<Mood>) -> Color {
    mood.map(|m| m.color()).unwrap_or(Color::Gray)
}

/// Unknown stored mood values load as `None` instead of failing the file
fn lenient_mood<'de, D>(deserializer: D) -> std::result::Result<Option<Mood>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

/// A single journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub text: String,
    #[serde(default, deserialize_with = "lenient_mood")]
    pub mood: Option<Mood>,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Long Spanish date in local time, e.g. "lunes, 19 de octubre de 2026"
    pub fn date_label(&self) -> String {
        spanish_long_date(self.created_at.with_timezone(&Local).date_naive())
    }
}

/// In-memory journal, newest entry first
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from previously stored entries
    pub fn from_entries(mut entries: Vec<JournalEntry>) -> Self {
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Self { entries }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate and prepend a new entry
    pub fn add(&mut self, text: &str, mood: Option<Mood>, now: DateTime<Utc>) -> Result<&JournalEntry> {
        let mood = match mood {
            Some(mood) if !text.trim().is_empty() => mood,
            _ => {
                return Err(SaludMenteError::ValidationError(
                    INCOMPLETE_FORM_MESSAGE.to_string(),
                ))
            }
        };

        let candidate = now.timestamp_millis().max(0) as u64;
        let id = match self.entries.iter().map(|e| e.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        };

        self.entries.insert(
            0,
            JournalEntry {
                id,
                text: text.to_string(),
                mood: Some(mood),
                created_at: now,
            },
        );
        tracing::info!(id, mood = mood.value(), "journal entry saved");
        Ok(&self.entries[0])
    }
}
