//! Daily self-care habit tracker

use std::collections::HashSet;

use crate::content::routines::{Routine, ROUTINES};
use crate::{Result, SaludMenteError};

/// Completion state of today's routines
#[derive(Debug, Clone)]
pub struct HabitTracker {
    routines: Vec<Routine>,
    completed: HashSet<u32>,
}

impl HabitTracker {
    /// Tracker over the standard routine catalog
    pub fn new() -> Self {
        Self::with_routines(ROUTINES.to_vec())
    }

    pub fn with_routines(routines: Vec<Routine>) -> Self {
        Self {
            routines,
            completed: HashSet::new(),
        }
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn is_completed(&self, id: u32) -> bool {
        self.completed.contains(&id)
    }

    /// Flip a routine's completion; returns the new state
    pub fn toggle(&mut self, id: u32) -> Result<bool> {
        if !self.routines.iter().any(|r| r.id == id) {
            return Err(SaludMenteError::NotFound(format!("rutina {}", id)));
        }

        let done = if self.completed.remove(&id) {
            false
        } else {
            self.completed.insert(id);
            true
        };
        tracing::debug!(routine = id, done, "routine toggled");
        Ok(done)
    }

    /// Start the day over
    pub fn reset(&mut self) {
        self.completed.clear();
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total(&self) -> usize {
        self.routines.len()
    }

    /// Fraction of routines completed, 0 when there are none
    pub fn progress(&self) -> f64 {
        if self.routines.is_empty() {
            0.0
        } else {
            self.completed_count() as f64 / self.total() as f64
        }
    }
}

impl Default for HabitTracker {
    fn default() -> Self {
        Self::new()
    }
}
