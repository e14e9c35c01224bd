//! Guided exercise playback
//!
//! A countdown state machine over an exercise's steps. Each `tick` is one
//! elapsed second; the player advances to the next step when the current
//! step's duration is reached and reports completion after the last one.

use super::{Exercise, ExerciseStep};
use crate::Result;

/// Mutable record of which exercise and step is active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub active_exercise: Option<Exercise>,
    pub current_step_index: usize,
    pub elapsed_in_step: u32,
    pub is_running: bool,
}

impl PlaybackState {
    /// The step currently being played, if any
    pub fn current_step(&self) -> Option<&ExerciseStep> {
        self.active_exercise
            .as_ref()
            .and_then(|ex| ex.steps.get(self.current_step_index))
    }

    /// Fraction of the current step already elapsed, in [0, 1)
    pub fn progress_fraction(&self) -> f64 {
        match self.current_step() {
            Some(step) if step.duration_seconds > 0 => {
                f64::from(self.elapsed_in_step) / f64::from(step.duration_seconds)
            }
            _ => 0.0,
        }
    }

    /// "Paso 2 de 6"
    pub fn step_label(&self) -> Option<String> {
        let exercise = self.active_exercise.as_ref()?;
        Some(format!(
            "Paso {} de {}",
            self.current_step_index + 1,
            exercise.steps.len()
        ))
    }

    /// "3s / 8s"
    pub fn timer_label(&self) -> Option<String> {
        self.current_step()
            .map(|step| format!("{}s / {}s", self.elapsed_in_step, step.duration_seconds))
    }

    pub fn is_idle(&self) -> bool {
        !self.is_running
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is playing; the tick was ignored
    Idle,
    /// Still inside the current step
    InStep,
    /// The previous step finished and playback moved to `step_index`
    Advanced { step_index: usize },
    /// The final step finished; playback is now idle
    Completed,
}

/// Guided exercise player
#[derive(Debug, Default)]
pub struct ExercisePlayer {
    state: PlaybackState,
}

impl ExercisePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Begin playing `exercise` from its first step.
    ///
    /// Fails without touching the current state if the exercise has no steps
    /// or contains a zero-length step.
    pub fn start(&mut self, exercise: Exercise) -> Result<()> {
        exercise.validate()?;
        tracing::info!(exercise = exercise.id, title = %exercise.title, "exercise started");
        self.state = PlaybackState {
            active_exercise: Some(exercise),
            current_step_index: 0,
            elapsed_in_step: 0,
            is_running: true,
        };
        Ok(())
    }

    /// Advance playback by one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome::Idle;
        }

        let (duration, step_count) = match &self.state.active_exercise {
            Some(exercise) => (
                exercise.steps[self.state.current_step_index].duration_seconds,
                exercise.steps.len(),
            ),
            None => {
                // Unreachable through the public API: running implies an exercise.
                self.state.is_running = false;
                return TickOutcome::Idle;
            }
        };

        self.state.elapsed_in_step += 1;
        if self.state.elapsed_in_step < duration {
            return TickOutcome::InStep;
        }

        self.state.elapsed_in_step = 0;
        if self.state.current_step_index + 1 < step_count {
            self.state.current_step_index += 1;
            tracing::debug!(step = self.state.current_step_index, "exercise step advanced");
            TickOutcome::Advanced {
                step_index: self.state.current_step_index,
            }
        } else {
            self.state.is_running = false;
            tracing::info!("exercise completed");
            TickOutcome::Completed
        }
    }

    /// Stop playback and clear the active exercise. Idempotent.
    pub fn stop(&mut self) {
        if self.state.active_exercise.is_some() {
            tracing::info!("exercise stopped");
        }
        self.state = PlaybackState::default();
    }

    pub fn progress_fraction(&self) -> f64 {
        self.state.progress_fraction()
    }
}
