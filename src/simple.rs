//! Plain terminal mode
//!
//! Prints the exercise catalog and plays an exercise headlessly with an
//! indicatif progress bar, without taking over the screen.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::content::exercises;
use crate::exercise::{Exercise, ExerciseTicker, PlaybackEvent};
use crate::Result;

/// Summary of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub exercise_id: u32,
    pub title: String,
    pub steps_played: usize,
    pub completed: bool,
}

/// Write the exercise catalog, one exercise per line
pub fn write_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    for exercise in exercises::catalog() {
        let total = Duration::from_secs(exercise.total_seconds());
        writeln!(
            out,
            "{:>2}  {} {:<28} {:>10}  ({} pasos, {})",
            exercise.id,
            exercise.icon,
            exercise.title,
            exercise.total_duration_label,
            exercise.step_count(),
            humantime::format_duration(total)
        )?;
    }
    Ok(())
}

/// Print the exercise catalog to stdout
pub fn print_catalog() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&mut out)?;
    Ok(())
}

/// Play the catalog exercise `id` to completion
pub async fn play_exercise(id: u32) -> Result<PlaybackSummary> {
    let exercise = exercises::find(id)?;
    println!("{} {}", exercise.icon, exercise.title);
    println!("{}\n", exercise.description);

    let summary = run_playback(exercise, ExerciseTicker::new(), true).await?;
    if summary.completed {
        println!("\n¡Completado! Has terminado \"{}\".", summary.title);
    }
    Ok(summary)
}

/// Drive `ticker` through `exercise`, rendering one bar per step
pub async fn run_playback(
    exercise: Exercise,
    mut ticker: ExerciseTicker,
    visible: bool,
) -> Result<PlaybackSummary> {
    let (tx, mut rx) = mpsc::channel(32);
    let exercise_id = exercise.id;
    let title = exercise.title.clone();
    let step_count = exercise.step_count();
    ticker.start(exercise, tx).await?;

    let style = ProgressStyle::with_template("{prefix} [{bar:30.cyan/blue}] {pos}/{len}s {msg}")
        .map_err(|e| crate::SaludMenteError::TuiError(e.to_string()))?
        .progress_chars("=> ");

    let mut bar: Option<ProgressBar> = None;
    let mut current_step: Option<usize> = None;
    let mut steps_played = 0;
    let mut completed = false;

    while let Some(event) = rx.recv().await {
        match event {
            PlaybackEvent::Progress(state) => {
                if !state.is_running {
                    continue;
                }
                let Some(step) = state.current_step() else {
                    continue;
                };

                if current_step != Some(state.current_step_index) {
                    if let Some(done) = bar.take() {
                        done.finish();
                    }
                    let next = if visible {
                        ProgressBar::new(u64::from(step.duration_seconds))
                    } else {
                        ProgressBar::hidden()
                    };
                    next.set_style(style.clone());
                    next.set_prefix(state.step_label().unwrap_or_default());
                    next.set_message(step.text.clone());
                    bar = Some(next);
                    current_step = Some(state.current_step_index);
                    steps_played += 1;
                }

                if let Some(bar) = &bar {
                    bar.set_position(u64::from(state.elapsed_in_step));
                }
            }
            PlaybackEvent::Completed { .. } => {
                if let Some(done) = bar.take() {
                    done.set_position(done.length().unwrap_or(0));
                    done.finish();
                }
                completed = true;
                break;
            }
        }
    }

    ticker.stop().await;
    tracing::info!(exercise = exercise_id, completed, "headless playback finished");

    Ok(PlaybackSummary {
        exercise_id,
        title,
        steps_played: steps_played.min(step_count),
        completed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::ExerciseStep;

    #[test]
    fn test_catalog_listing() {
        let mut out = Vec::new();
        write_catalog(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), exercises::catalog().len());
        assert!(text.contains("1m 45s"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_playback_completes() {
        let exercise = Exercise {
            id: 42,
            title: "Prueba".to_string(),
            description: String::new(),
            total_duration_label: "3 segundos".to_string(),
            icon: "🧪".to_string(),
            steps: vec![ExerciseStep::new("A", 2), ExerciseStep::new("B", 1)],
        };

        let summary = run_playback(exercise, ExerciseTicker::new(), false)
            .await
            .unwrap();
        assert!(summary.completed);
        assert_eq!(summary.steps_played, 2);
        assert_eq!(summary.exercise_id, 42);
    }

    #[tokio::test]
    async fn test_play_unknown_exercise() {
        assert!(play_exercise(999).await.is_err());
    }
}
