//! Exercise timer
//!
//! Drives an [`ExercisePlayer`] from a tokio task that ticks once per
//! period. At most one timer task is armed at any time: `start` disarms the
//! previous task before spawning a new one, `stop` disarms and resets, and
//! the task disarms itself after the completion tick.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::{Exercise, ExercisePlayer, PlaybackState, TickOutcome};
use crate::{Result, TICK_PERIOD};

/// Updates published by the timer task
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// Snapshot of the playback state after start or a tick
    Progress(PlaybackState),
    /// The exercise finished naturally. Sent once per run.
    Completed { exercise_id: u32, title: String },
}

/// Handle to the running timer task
struct ArmedTimer {
    cancel_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Owner of the player and its single timer
pub struct ExerciseTicker {
    player: Arc<Mutex<ExercisePlayer>>,
    period: Duration,
    armed: Option<ArmedTimer>,
}

impl ExerciseTicker {
    /// Create a ticker with the standard one-second period
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            player: Arc::new(Mutex::new(ExercisePlayer::new())),
            period,
            armed: None,
        }
    }

    /// Whether a timer task is currently live
    pub fn is_armed(&self) -> bool {
        self.armed
            .as_ref()
            .map(|timer| !timer.handle.is_finished())
            .unwrap_or(false)
    }

    /// Current playback state
    pub async fn snapshot(&self) -> PlaybackState {
        self.player.lock().await.state().clone()
    }

    /// Start `exercise`, replacing whatever was playing.
    ///
    /// An invalid exercise is rejected before the current run is touched.
    pub async fn start(
        &mut self,
        exercise: Exercise,
        events: mpsc::Sender<PlaybackEvent>,
    ) -> Result<()> {
        exercise.validate()?;
        self.disarm().await;

        let initial = {
            let mut player = self.player.lock().await;
            player.start(exercise)?;
            player.state().clone()
        };
        match events.try_send(PlaybackEvent::Progress(initial)) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!("playback channel full, initial snapshot skipped");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::debug!("playback receiver dropped before start");
            }
        }

        self.arm(events);
        Ok(())
    }

    /// Stop playback and disarm the timer. Idempotent.
    pub async fn stop(&mut self) {
        self.disarm().await;
        self.player.lock().await.stop();
    }

    async fn disarm(&mut self) {
        if let Some(timer) = self.armed.take() {
            // The task may already have exited after completion.
            let _ = timer.cancel_tx.send(());
            if let Err(e) = timer.handle.await {
                tracing::warn!(error = %e, "exercise timer task failed");
            }
        }
    }

    fn arm(&mut self, events: mpsc::Sender<PlaybackEvent>) {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let player = Arc::clone(&self.player);
        let period = self.period;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut cancel_rx => {
                        tracing::debug!("exercise timer disarmed");
                        return;
                    }
                    _ = interval.tick() => {}
                }

                let (outcome, state) = {
                    let mut player = player.lock().await;
                    let outcome = player.tick();
                    (outcome, player.state().clone())
                };

                let mut batch = Vec::with_capacity(2);
                let finished = match outcome {
                    TickOutcome::Idle => true,
                    TickOutcome::Completed => {
                        let completed = state.active_exercise.as_ref().map(|ex| {
                            PlaybackEvent::Completed {
                                exercise_id: ex.id,
                                title: ex.title.clone(),
                            }
                        });
                        batch.push(PlaybackEvent::Progress(state));
                        batch.extend(completed);
                        true
                    }
                    TickOutcome::InStep | TickOutcome::Advanced { .. } => {
                        batch.push(PlaybackEvent::Progress(state));
                        false
                    }
                };

                // A full channel must not keep the cancel signal waiting
                for event in batch {
                    tokio::select! {
                        biased;
                        _ = &mut cancel_rx => {
                            tracing::debug!("exercise timer disarmed while publishing");
                            return;
                        }
                        sent = events.send(event) => {
                            if sent.is_err() {
                                tracing::trace!("playback receiver dropped");
                            }
                        }
                    }
                }

                if finished {
                    break;
                }
            }
        });

        self.armed = Some(ArmedTimer { cancel_tx, handle });
    }
}

impl Default for ExerciseTicker {
    fn default() -> Self {
        Self::new()
    }
}
