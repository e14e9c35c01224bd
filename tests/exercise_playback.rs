use saludmente::content::exercises;
use saludmente::exercise::{
    Exercise, ExercisePlayer, ExerciseStep, ExerciseTicker, PlaybackEvent, TickOutcome,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use saludmente::SaludMenteError;
use std::time::Duration;
use tokio::sync::mpsc;

fn exercise(steps: &[(&str, u32)]) -> Exercise {
    Exercise {
        id: 7,
        title: "Prueba".to_string(),
        description: "Ejercicio de prueba".to_string(),
        total_duration_label: "1 minuto".to_string(),
        icon: "🧪".to_string(),
        steps: steps
            .iter()
            .map(|(text, secs)| ExerciseStep::new(*text, *secs))
            .collect(),
    }
}

/// Step-duration vectors drawn from a fixed seed
fn generated_durations(count: usize) -> Vec<Vec<u32>> {
    let mut rng = SmallRng::seed_from_u64(0x5a1d);
    (0..count)
        .map(|_| {
            let steps = rng.gen_range(1..=6);
            (0..steps).map(|_| rng.gen_range(1..=9)).collect()
        })
        .collect()
}

fn exercise_from(durations: &[u32]) -> Exercise {
    let steps: Vec<(&str, u32)> = durations.iter().map(|d| ("paso", *d)).collect();
    exercise(&steps)
}

#[test]
fn test_generated_exercises_complete_exactly_once() {
    for durations in generated_durations(200) {
        let total: u32 = durations.iter().sum();
        let mut player = ExercisePlayer::new();
        player.start(exercise_from(&durations)).unwrap();

        let mut completions = 0;
        let mut last_index = 0;
        let mut last_progress = player.progress_fraction();
        for _ in 0..total {
            let state = player.state();
            assert!(state.is_running, "{:?} stopped early", durations);
            assert!(state.current_step_index < durations.len());
            assert!(state.elapsed_in_step < durations[state.current_step_index]);

            let outcome = player.tick();
            let progress = player.progress_fraction();
            assert!((0.0..1.0).contains(&progress));
            match outcome {
                TickOutcome::Completed => completions += 1,
                TickOutcome::Advanced { step_index } => {
                    assert_eq!(step_index, last_index + 1);
                    assert_eq!(progress, 0.0);
                    last_index = step_index;
                }
                TickOutcome::InStep => assert!(progress >= last_progress),
                TickOutcome::Idle => panic!("{:?} went idle while running", durations),
            }
            last_progress = progress;
        }

        assert_eq!(completions, 1, "{:?}", durations);
        assert!(!player.is_running());
        assert_eq!(player.tick(), TickOutcome::Idle);
    }
}

#[test]
fn test_generated_stop_mid_sequence_resets() {
    let mut rng = SmallRng::seed_from_u64(7);
    for durations in generated_durations(50) {
        let total: u32 = durations.iter().sum();
        let mut player = ExercisePlayer::new();
        player.start(exercise_from(&durations)).unwrap();
        for _ in 0..rng.gen_range(0..total) {
            player.tick();
        }

        player.stop();
        assert!(player.state().is_idle());
        assert_eq!(player.state().current_step_index, 0);
        assert_eq!(player.state().elapsed_in_step, 0);
        assert_eq!(player.progress_fraction(), 0.0);
    }
}

#[test]
fn test_every_catalog_exercise_completes_once() {
    for ex in exercises::catalog() {
        let total = ex.total_seconds();
        let step_count = ex.step_count();
        let mut player = ExercisePlayer::new();
        player.start(ex).unwrap();

        let mut completions = 0;
        for _ in 0..total {
            let state = player.state();
            if state.is_running {
                assert!(state.current_step_index < step_count);
                let duration = state.current_step().unwrap().duration_seconds;
                assert!(state.elapsed_in_step < duration);
            }
            if player.tick() == TickOutcome::Completed {
                completions += 1;
            }
        }

        assert_eq!(completions, 1);
        assert!(!player.is_running());
        assert_eq!(player.tick(), TickOutcome::Idle);
    }
}

#[test]
fn test_progress_resets_on_step_change() {
    let mut player = ExercisePlayer::new();
    player.start(exercise(&[("A", 4), ("B", 4)])).unwrap();

    let mut last = player.progress_fraction();
    for _ in 0..3 {
        player.tick();
        let now = player.progress_fraction();
        assert!(now >= last);
        assert!(now < 1.0);
        last = now;
    }
    player.tick();
    assert_eq!(player.progress_fraction(), 0.0);
}

#[test]
fn test_stop_is_total_and_idempotent() {
    let mut player = ExercisePlayer::new();
    player.stop();
    assert!(player.state().is_idle());

    player.start(exercise(&[("A", 3)])).unwrap();
    player.tick();
    player.stop();
    player.stop();
    assert!(player.state().active_exercise.is_none());
    assert_eq!(player.state().elapsed_in_step, 0);
    assert_eq!(player.progress_fraction(), 0.0);
}

#[test]
fn test_invalid_exercises_rejected() {
    let mut player = ExercisePlayer::new();
    assert!(matches!(
        player.start(exercise(&[])),
        Err(SaludMenteError::InvalidExercise(_))
    ));
    assert!(matches!(
        player.start(exercise(&[("A", 1), ("B", 0)])),
        Err(SaludMenteError::InvalidExercise(_))
    ));
    assert!(player.state().is_idle());
}

#[tokio::test(start_paused = true)]
async fn test_ticker_runs_single_step_to_completion() {
    let mut ticker = ExerciseTicker::with_period(Duration::from_secs(1));
    let (tx, mut rx) = mpsc::channel(16);
    ticker.start(exercise(&[("Único", 1)]), tx).await.unwrap();

    let mut completed = 0;
    while let Some(event) = rx.recv().await {
        if let PlaybackEvent::Completed { exercise_id, .. } = event {
            assert_eq!(exercise_id, 7);
            completed += 1;
        }
    }

    assert_eq!(completed, 1);
    assert!(!ticker.is_armed());
    assert!(!ticker.snapshot().await.is_running);
}

#[tokio::test(start_paused = true)]
async fn test_ticker_stop_silences_run() {
    let mut ticker = ExerciseTicker::new();
    let (tx, mut rx) = mpsc::channel(16);
    ticker.start(exercise(&[("A", 10)]), tx).await.unwrap();
    assert!(matches!(rx.recv().await, Some(PlaybackEvent::Progress(_))));

    ticker.stop().await;
    assert!(!ticker.is_armed());

    tokio::time::sleep(Duration::from_secs(5)).await;
    // The task dropped its sender, so the channel is closed and empty
    assert!(rx.recv().await.is_none());
    assert!(ticker.snapshot().await.is_idle());
}
