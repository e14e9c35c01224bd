//! Guided exercise module
//!
//! Exercise definitions, the step-by-step playback state machine and the
//! one-second timer that drives it.

pub mod player;
pub mod ticker;

use crate::{Result, SaludMenteError};

pub use player::{ExercisePlayer, PlaybackState, TickOutcome};
pub use ticker::{ExerciseTicker, PlaybackEvent};

/// One instruction phase of an exercise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseStep {
    /// Instruction shown while the step is active
    pub text: String,
    /// How long the step lasts, in seconds
    pub duration_seconds: u32,
}

impl ExerciseStep {
    pub fn new(text: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            text: text.into(),
            duration_seconds,
        }
    }
}

/// A named relaxation routine composed of ordered timed steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Human label for the whole routine, e.g. "5 minutos"
    pub total_duration_label: String,
    pub icon: String,
    pub steps: Vec<ExerciseStep>,
}

impl Exercise {
    /// Check the player's preconditions: at least one step, no zero-length step
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(SaludMenteError::InvalidExercise(format!(
                "exercise {} ({}) has no steps",
                self.id, self.title
            )));
        }

        if let Some(index) = self.steps.iter().position(|s| s.duration_seconds == 0) {
            return Err(SaludMenteError::InvalidExercise(format!(
                "step {} of exercise {} ({}) has zero duration",
                index + 1,
                self.id,
                self.title
            )));
        }

        Ok(())
    }

    /// Sum of all step durations in seconds
    pub fn total_seconds(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.duration_seconds)).sum()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(steps: Vec<ExerciseStep>) -> Exercise {
        Exercise {
            id: 42,
            title: "Prueba".to_string(),
            description: String::new(),
            total_duration_label: "1 minuto".to_string(),
            icon: "*".to_string(),
            steps,
        }
    }

    #[test]
    fn test_validate_rejects_empty_steps() {
        let err = exercise(Vec::new()).validate().unwrap_err();
        assert!(matches!(err, SaludMenteError::InvalidExercise(_)));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let ex = exercise(vec![ExerciseStep::new("a", 3), ExerciseStep::new("b", 0)]);
        let err = ex.validate().unwrap_err();
        assert!(err.to_string().contains("step 2"));
    }

    #[test]
    fn test_total_seconds() {
        let ex = exercise(vec![ExerciseStep::new("a", 3), ExerciseStep::new("b", 4)]);
        assert!(ex.validate().is_ok());
        assert_eq!(ex.total_seconds(), 7);
        assert_eq!(ex.step_count(), 2);
    }
}
