// Integration tests for the playback controller

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sortty::algorithms::Algorithm;
use sortty::error::VisualizerError;
use sortty::playback::{Phase, PlaybackConfig, PlaybackState, Visualizer};

const TICK: Duration = Duration::from_millis(500);

fn session(algorithm: Algorithm, input: &[i64]) -> Visualizer {
    Visualizer::new(algorithm, input.to_vec(), PlaybackConfig::default())
}

/// Poll once per tick until the visualizer stops running, returning the final time
fn run_to_completion(viz: &mut Visualizer, mut now: Instant) -> Instant {
    let mut guard = 0;
    while viz.is_running() {
        now += Duration::from_secs(1);
        viz.poll(now);
        guard += 1;
        assert!(guard < 10_000, "playback never finished");
    }
    now
}

#[test]
fn test_stop_then_resume_continues_from_same_step() {
    let t0 = Instant::now();
    let mut viz = session(Algorithm::BubbleSort, &[9, 8, 7, 6, 5]);
    viz.start(t0).unwrap();
    let total = viz.total_steps();
    assert!(total > 4);

    let mut now = t0;
    let mut seen = vec![viz.position()];
    for _ in 0..3 {
        now += TICK;
        viz.poll(now);
        seen.push(viz.position());
    }
    assert_eq!(seen, vec![0, 1, 2, 3]);

    viz.stop();
    // time passes while paused
    now += TICK * 20;
    assert!(!viz.poll(now));
    assert_eq!(viz.position(), 3);

    viz.start(now).unwrap();
    assert_eq!(viz.position(), 3);
    now += TICK;
    viz.poll(now);
    assert_eq!(viz.position(), 4);
}

#[test]
fn test_full_playback_visits_every_snapshot() {
    let t0 = Instant::now();
    let mut viz = session(Algorithm::HeapSort, &[4, 1, 3, 9, 7]);
    viz.start(t0).unwrap();
    let total = viz.total_steps();

    let mut now = t0;
    let mut visited = vec![viz.position()];
    while viz.state() == PlaybackState::Running(Phase::Replay) {
        now += TICK;
        viz.poll(now);
        if viz.state() == PlaybackState::Running(Phase::Replay) {
            visited.push(viz.position());
        }
    }
    assert_eq!(visited, (0..total).collect::<Vec<_>>());
    assert_eq!(viz.current_values(), &[1, 3, 4, 7, 9]);

    run_to_completion(&mut viz, now);
    assert_eq!(viz.state(), PlaybackState::Finished);
    assert_eq!(viz.finalized(), 5);
}

#[test]
fn test_new_input_cancels_pending_tick() {
    let t0 = Instant::now();
    let mut viz = session(Algorithm::SelectionSort, &[3, 2, 1]);
    viz.start(t0).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    viz.randomize(&mut rng, 20);

    assert_eq!(viz.state(), PlaybackState::Idle);
    assert_eq!(viz.input().len(), 20);
    assert!(viz.next_tick().is_none());
    assert!(!viz.poll(t0 + TICK * 100));
    assert_eq!(viz.position(), 0);
}

#[test]
fn test_paused_highlight_resumes_highlighting() {
    let t0 = Instant::now();
    let mut viz = session(Algorithm::BubbleSort, &[1, 2, 3]);
    viz.start(t0).unwrap();
    // already sorted: a single snapshot, so the first tick enters highlighting
    viz.poll(t0 + TICK);
    assert_eq!(
        viz.state(),
        PlaybackState::Running(Phase::Highlight { finalized: 0 })
    );

    viz.poll(t0 + TICK + Duration::from_secs(1));
    assert_eq!(viz.finalized(), 1);

    viz.stop();
    assert_eq!(
        viz.state(),
        PlaybackState::Paused(Phase::Highlight { finalized: 1 })
    );

    let now = t0 + Duration::from_secs(10);
    viz.start(now).unwrap();
    viz.poll(now + TICK);
    assert_eq!(viz.finalized(), 2);
}

#[test]
fn test_search_playback_reports_found_index() {
    let t0 = Instant::now();
    let mut viz = session(Algorithm::BinarySearch, &[5, 3, 8, 1]);
    viz.set_target_text("8");
    viz.start(t0).unwrap();

    assert_eq!(viz.current_values(), &[1, 3, 5, 8]);
    assert_eq!(viz.found(), Some(3));

    let mut now = t0;
    while !viz.at_last_step() {
        now += TICK;
        viz.poll(now);
    }
    assert_eq!(viz.current_snapshot().unwrap().probe, Some(3));
}

#[test]
fn test_validation_errors_do_not_start_playback() {
    let t0 = Instant::now();
    let mut viz = session(Algorithm::RadixSort, &[3, -1]);
    assert!(matches!(
        viz.start(t0),
        Err(VisualizerError::NegativeRadixInput { .. })
    ));
    assert_eq!(viz.state(), PlaybackState::Idle);
    assert!(matches!(
        viz.step_forward(),
        Err(VisualizerError::NegativeRadixInput { .. })
    ));
    assert_eq!(viz.state(), PlaybackState::Idle);

    viz.load_input(vec![3, 1]).unwrap();
    viz.start(t0).unwrap();
    assert!(viz.is_running());
}

#[test]
fn test_toggle_alternates() {
    let t0 = Instant::now();
    let mut viz = session(Algorithm::QuickSort, &[3, 1, 2]);
    viz.toggle(t0).unwrap();
    assert!(viz.is_running());
    viz.toggle(t0).unwrap();
    assert_eq!(viz.state(), PlaybackState::Paused(Phase::Replay));
    viz.toggle(t0).unwrap();
    assert!(viz.is_running());
}
