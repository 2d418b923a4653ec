//! Playback controller
//!
//! [`Visualizer`] owns everything one visualization session needs: the selected
//! algorithm, the input sequence, the search target text, the recorded
//! snapshot history and the playback position. The UI drives it with commands
//! (`start`, `stop`, `step_forward`, ...) and calls [`Visualizer::poll`] with
//! the current time on every loop iteration; it only ever reads the state back.
//!
//! # States
//!
//! ```text
//!            start                  last snapshot shown
//!   Idle ───────────▶ Running(Replay) ─────────────▶ Running(Highlight)
//!    ▲                  │      ▲                          │
//!    │             stop │      │ start                    │ every position
//!    │                  ▼      │                          ▼ finalized
//!    │               Paused(phase)                     Finished
//!    │
//!    └── select algorithm / new input / new target (from any state)
//! ```
//!
//! The highlight phase marks positions finalized left to right, one per tick,
//! after the replay has run out of snapshots. It is tracked as its own phase
//! rather than by pushing the step index past the end of the history.

pub mod ticker;

use std::time::{Duration, Instant};

use rand::Rng;

use crate::algorithms::{self, parse_target, Algorithm};
use crate::error::{Result, VisualizerError};
use crate::sequence;
use crate::snapshot::{Recording, Snapshot};
use ticker::Ticker;

/// Fastest supported tick interval
pub const MIN_INTERVAL: Duration = Duration::from_millis(50);
/// Slowest supported tick interval
pub const MAX_INTERVAL: Duration = Duration::from_millis(1000);
/// Amount `faster`/`slower` adjust the interval by
pub const INTERVAL_STEP: Duration = Duration::from_millis(50);

/// Playback tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Time between ticks
    pub interval: Duration,
    /// Pause between the last snapshot and the first highlight tick
    pub highlight_delay: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            interval: Duration::from_millis(500),
            highlight_delay: Duration::from_secs(1),
        }
    }
}

/// Check that `interval` lies within the supported tick range
pub fn validate_interval(interval: Duration) -> Result<Duration> {
    if interval < MIN_INTERVAL || interval > MAX_INTERVAL {
        return Err(VisualizerError::SpeedOutOfRange {
            millis: interval.as_millis() as u64,
            min: MIN_INTERVAL.as_millis() as u64,
            max: MAX_INTERVAL.as_millis() as u64,
        });
    }
    Ok(interval)
}

/// What a running or paused playback is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Stepping through the recorded snapshots
    Replay,
    /// Marking positions finalized after the last snapshot
    Highlight { finalized: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running(Phase),
    Paused(Phase),
    Finished,
}

/// One visualization session
#[derive(Debug)]
pub struct Visualizer {
    algorithm: Algorithm,
    input: Vec<i64>,
    /// What the chart shows before a recording exists
    preview: Vec<i64>,
    target_text: String,
    recording: Option<Recording>,
    position: usize,
    state: PlaybackState,
    config: PlaybackConfig,
    ticker: Ticker,
}

impl Visualizer {
    /// Create an idle session over `input`
    ///
    /// An input longer than [`sequence::MAX_LEN`] is accepted here but fails
    /// when playback tries to record it; use [`Visualizer::load_input`] to
    /// check up front.
    pub fn new(algorithm: Algorithm, input: Vec<i64>, config: PlaybackConfig) -> Self {
        Visualizer {
            preview: preview(algorithm, &input),
            algorithm,
            input,
            target_text: String::new(),
            recording: None,
            position: 0,
            state: PlaybackState::Idle,
            config,
            ticker: Ticker::new(),
        }
    }

    // ========== Selection ==========

    /// Switch algorithm, discarding any recorded playback
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.reset();
    }

    /// Replace the input sequence, discarding any recorded playback.
    ///
    /// Fails without touching any state when the input is too long.
    pub fn load_input(&mut self, input: Vec<i64>) -> Result<()> {
        sequence::check_len(input.len())?;
        self.input = input;
        self.reset();
        Ok(())
    }

    /// Replace the input with `len` random values in `0..100`, at most [`sequence::MAX_LEN`]
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, len: usize) {
        self.input = sequence::random_sequence(rng, len.min(sequence::MAX_LEN));
        self.reset();
    }

    /// Set the search target text. A different target invalidates the recording.
    pub fn set_target_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.target_text {
            self.target_text = text;
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.ticker.cancel();
        self.recording = None;
        self.preview = preview(self.algorithm, &self.input);
        self.position = 0;
        self.state = PlaybackState::Idle;
        tracing::debug!(algorithm = self.algorithm.name(), "playback reset");
    }

    /// Generate the recording if there is none yet.
    ///
    /// Fails without touching any state when the search target is missing or
    /// invalid, or the input is unsupported by the algorithm.
    fn prepare(&mut self) -> Result<()> {
        if self.recording.is_some() {
            return Ok(());
        }

        let target = if self.algorithm.is_search() {
            Some(parse_target(&self.target_text)?)
        } else {
            None
        };
        let recording = algorithms::generate(self.algorithm, &self.input, target)?;

        self.recording = Some(recording);
        self.position = 0;
        Ok(())
    }

    // ========== Playback commands ==========

    /// Start or resume playback.
    ///
    /// From `Idle` this generates the snapshot history and shows the first
    /// snapshot. From `Paused` it continues at the current position. From
    /// `Finished` it replays from the first snapshot.
    pub fn start(&mut self, now: Instant) -> Result<()> {
        let delay = match self.state {
            PlaybackState::Running(_) => return Ok(()),
            // paused during the lead-in: the delay starts over
            PlaybackState::Paused(phase @ Phase::Highlight { finalized: 0 }) => {
                self.state = PlaybackState::Running(phase);
                self.config.highlight_delay
            }
            PlaybackState::Paused(phase) => {
                self.state = PlaybackState::Running(phase);
                self.config.interval
            }
            PlaybackState::Idle | PlaybackState::Finished => {
                self.prepare()?;
                self.position = 0;
                self.state = PlaybackState::Running(Phase::Replay);
                self.config.interval
            }
        };

        self.ticker.schedule(now + delay);
        tracing::info!(
            algorithm = self.algorithm.name(),
            step = self.position,
            total = self.total_steps(),
            "playback started"
        );
        Ok(())
    }

    /// Pause playback at the current position
    pub fn stop(&mut self) {
        if let PlaybackState::Running(phase) = self.state {
            self.ticker.cancel();
            self.state = PlaybackState::Paused(phase);
            tracing::info!(step = self.position, "playback paused");
        }
    }

    /// Start when not running, stop when running
    pub fn toggle(&mut self, now: Instant) -> Result<()> {
        if self.is_running() {
            self.stop();
            Ok(())
        } else {
            self.start(now)
        }
    }

    /// Fire the pending tick if it is due. Returns whether anything advanced.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.ticker.fire(now) {
            self.tick(now);
            true
        } else {
            false
        }
    }

    /// Advance playback by one tick
    fn tick(&mut self, now: Instant) {
        let PlaybackState::Running(phase) = self.state else {
            return;
        };

        match phase {
            Phase::Replay => {
                if self.position + 1 < self.total_steps() {
                    self.position += 1;
                    self.ticker.schedule(now + self.config.interval);
                } else if self.sequence_len() == 0 {
                    self.finish();
                } else {
                    self.state = PlaybackState::Running(Phase::Highlight { finalized: 0 });
                    self.ticker.schedule(now + self.config.highlight_delay);
                    tracing::debug!(step = self.position, "replay complete, highlighting");
                }
            }
            Phase::Highlight { finalized } => {
                let finalized = finalized + 1;
                if finalized >= self.sequence_len() {
                    self.finish();
                } else {
                    self.state = PlaybackState::Running(Phase::Highlight { finalized });
                    self.ticker.schedule(now + self.config.interval);
                }
            }
        }
    }

    fn finish(&mut self) {
        self.ticker.cancel();
        self.state = PlaybackState::Finished;
        tracing::info!(
            algorithm = self.algorithm.name(),
            steps = self.total_steps(),
            found = ?self.found(),
            "playback finished"
        );
    }

    // ========== Manual stepping ==========

    /// Pause any playback and make sure there is a recording to step through
    fn take_manual_control(&mut self) -> Result<()> {
        self.prepare()?;
        self.ticker.cancel();
        self.state = PlaybackState::Paused(Phase::Replay);
        Ok(())
    }

    /// Show the next snapshot. Returns `false` at the last snapshot.
    pub fn step_forward(&mut self) -> Result<bool> {
        self.take_manual_control()?;
        if self.position + 1 < self.total_steps() {
            self.position += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Show the previous snapshot. Returns `false` at the first snapshot.
    pub fn step_backward(&mut self) -> Result<bool> {
        self.take_manual_control()?;
        if self.position > 0 {
            self.position -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Jump to the first snapshot
    pub fn jump_to_start(&mut self) -> Result<()> {
        self.take_manual_control()?;
        self.position = 0;
        Ok(())
    }

    /// Jump to the last snapshot
    pub fn jump_to_end(&mut self) -> Result<()> {
        self.take_manual_control()?;
        self.position = self.total_steps().saturating_sub(1);
        Ok(())
    }

    // ========== Speed ==========

    /// Change the tick interval. A tick that is already scheduled keeps its deadline.
    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        self.config.interval = validate_interval(interval)?;
        tracing::debug!(interval_ms = interval.as_millis() as u64, "speed changed");
        Ok(())
    }

    /// Shorten the interval by one step, stopping at the minimum
    pub fn faster(&mut self) {
        let interval = self
            .config
            .interval
            .saturating_sub(INTERVAL_STEP)
            .max(MIN_INTERVAL);
        self.config.interval = interval;
    }

    /// Lengthen the interval by one step, stopping at the maximum
    pub fn slower(&mut self) {
        let interval = (self.config.interval + INTERVAL_STEP).min(MAX_INTERVAL);
        self.config.interval = interval;
    }

    // ========== Getters for UI ==========

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, PlaybackState::Running(_))
    }

    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    pub fn recording(&self) -> Option<&Recording> {
        self.recording.as_ref()
    }

    /// Snapshot at the current position, if a history has been recorded
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.recording
            .as_ref()
            .and_then(|r| r.history.get(self.position))
    }

    /// Snapshot before the current one, if any
    pub fn previous_snapshot(&self) -> Option<&Snapshot> {
        let previous = self.position.checked_sub(1)?;
        self.recording
            .as_ref()
            .and_then(|r| r.history.get(previous))
    }

    /// Values to draw: the current snapshot, or the input before recording.
    ///
    /// Binary search shows the input already sorted, since that is the order
    /// it searches in.
    pub fn current_values(&self) -> &[i64] {
        self.current_snapshot()
            .map_or(self.preview.as_slice(), |s| s.values.as_slice())
    }

    /// Current step index (0-based)
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of snapshots; an unrecorded input counts as one
    pub fn total_steps(&self) -> usize {
        self.recording.as_ref().map_or(1, |r| r.history.len())
    }

    /// Whether the last snapshot is being shown
    pub fn at_last_step(&self) -> bool {
        self.position + 1 >= self.total_steps()
    }

    /// Where the search found its target, if it did
    pub fn found(&self) -> Option<usize> {
        self.recording.as_ref().and_then(|r| r.found)
    }

    /// Number of leading positions marked finalized by the highlight phase
    pub fn finalized(&self) -> usize {
        match self.state {
            PlaybackState::Running(Phase::Highlight { finalized })
            | PlaybackState::Paused(Phase::Highlight { finalized }) => finalized,
            PlaybackState::Finished => self.sequence_len(),
            _ => 0,
        }
    }

    /// Deadline of the pending tick, if one is scheduled
    pub fn next_tick(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    fn sequence_len(&self) -> usize {
        self.recording
            .as_ref()
            .map_or(self.input.len(), Recording::sequence_len)
    }
}

fn preview(algorithm: Algorithm, input: &[i64]) -> Vec<i64> {
    let mut values = input.to_vec();
    if algorithm == Algorithm::BinarySearch {
        values.sort_unstable();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(500);

    fn session(algorithm: Algorithm, input: &[i64]) -> Visualizer {
        Visualizer::new(algorithm, input.to_vec(), PlaybackConfig::default())
    }

    #[test]
    fn test_start_shows_first_snapshot() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::BubbleSort, &[3, 2, 1]);
        viz.start(t0).unwrap();

        assert_eq!(viz.state(), PlaybackState::Running(Phase::Replay));
        assert_eq!(viz.position(), 0);
        assert_eq!(viz.current_values(), &[3, 2, 1]);
        assert_eq!(viz.next_tick(), Some(t0 + TICK));
    }

    #[test]
    fn test_tick_waits_for_deadline() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::BubbleSort, &[3, 2, 1]);
        viz.start(t0).unwrap();

        assert!(!viz.poll(t0 + TICK - Duration::from_millis(1)));
        assert_eq!(viz.position(), 0);
        assert!(viz.poll(t0 + TICK));
        assert_eq!(viz.position(), 1);
    }

    #[test]
    fn test_missing_target_leaves_state_idle() {
        let mut viz = session(Algorithm::LinearSearch, &[1, 2, 3]);
        let err = viz.start(Instant::now()).unwrap_err();
        assert!(matches!(err, VisualizerError::MissingTarget));
        assert_eq!(viz.state(), PlaybackState::Idle);
        assert!(viz.recording().is_none());
        assert!(viz.next_tick().is_none());

        viz.set_target_text("two");
        assert!(matches!(
            viz.start(Instant::now()),
            Err(VisualizerError::InvalidTarget { .. })
        ));
        assert_eq!(viz.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::BubbleSort, &[3, 2, 1]);
        viz.start(t0).unwrap();
        viz.stop();

        assert_eq!(viz.state(), PlaybackState::Paused(Phase::Replay));
        assert!(!viz.poll(t0 + TICK * 10));
        assert_eq!(viz.position(), 0);
    }

    #[test]
    fn test_reselect_discards_recording() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::BubbleSort, &[3, 2, 1]);
        viz.start(t0).unwrap();
        viz.poll(t0 + TICK);

        viz.select_algorithm(Algorithm::QuickSort);
        assert_eq!(viz.state(), PlaybackState::Idle);
        assert_eq!(viz.position(), 0);
        assert!(viz.recording().is_none());
        assert!(!viz.poll(t0 + TICK * 2));
    }

    #[test]
    fn test_highlight_phase_then_finished() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::BubbleSort, &[2, 1]);
        viz.start(t0).unwrap();
        assert_eq!(viz.total_steps(), 2);

        let mut now = t0 + TICK;
        viz.poll(now);
        assert_eq!(viz.position(), 1);

        now += TICK;
        viz.poll(now);
        assert_eq!(
            viz.state(),
            PlaybackState::Running(Phase::Highlight { finalized: 0 })
        );
        assert_eq!(viz.position(), 1);
        // first highlight tick waits for the longer delay
        assert!(!viz.poll(now + TICK));

        now += Duration::from_secs(1);
        viz.poll(now);
        assert_eq!(viz.finalized(), 1);

        now += TICK;
        viz.poll(now);
        assert_eq!(viz.state(), PlaybackState::Finished);
        assert_eq!(viz.finalized(), 2);
        assert!(viz.next_tick().is_none());
    }

    #[test]
    fn test_empty_input_finishes_without_highlight() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::MergeSort, &[]);
        viz.start(t0).unwrap();
        assert_eq!(viz.total_steps(), 1);
        viz.poll(t0 + TICK);
        assert_eq!(viz.state(), PlaybackState::Finished);
    }

    #[test]
    fn test_restart_after_finish_replays() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::MergeSort, &[]);
        viz.start(t0).unwrap();
        viz.poll(t0 + TICK);
        viz.start(t0 + TICK).unwrap();
        assert_eq!(viz.state(), PlaybackState::Running(Phase::Replay));
        assert_eq!(viz.position(), 0);
    }

    #[test]
    fn test_interval_range() {
        let mut viz = session(Algorithm::BubbleSort, &[1]);
        assert!(viz.set_interval(Duration::from_millis(49)).is_err());
        assert!(viz.set_interval(Duration::from_millis(1001)).is_err());
        assert_eq!(viz.interval(), TICK);

        viz.set_interval(MIN_INTERVAL).unwrap();
        viz.faster();
        assert_eq!(viz.interval(), MIN_INTERVAL);

        viz.set_interval(MAX_INTERVAL).unwrap();
        viz.slower();
        assert_eq!(viz.interval(), MAX_INTERVAL);
    }

    #[test]
    fn test_speed_change_applies_from_next_tick() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::BubbleSort, &[4, 3, 2, 1]);
        viz.start(t0).unwrap();
        viz.set_interval(Duration::from_millis(100)).unwrap();

        // already scheduled tick keeps the old deadline
        assert_eq!(viz.next_tick(), Some(t0 + TICK));
        viz.poll(t0 + TICK);
        assert_eq!(viz.next_tick(), Some(t0 + TICK + Duration::from_millis(100)));
    }

    #[test]
    fn test_manual_stepping_pauses() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::InsertionSort, &[3, 2, 1]);
        viz.start(t0).unwrap();

        assert!(viz.step_forward().unwrap());
        assert_eq!(viz.state(), PlaybackState::Paused(Phase::Replay));
        assert!(viz.next_tick().is_none());

        viz.jump_to_end().unwrap();
        assert!(viz.at_last_step());
        assert!(!viz.step_forward().unwrap());

        viz.jump_to_start().unwrap();
        assert!(!viz.step_backward().unwrap());
        assert_eq!(viz.position(), 0);
    }

    #[test]
    fn test_resume_during_lead_in_waits_full_delay() {
        let t0 = Instant::now();
        let mut viz = session(Algorithm::BubbleSort, &[2, 1]);
        viz.start(t0).unwrap();
        viz.poll(t0 + TICK);
        viz.poll(t0 + TICK * 2);
        assert_eq!(
            viz.state(),
            PlaybackState::Running(Phase::Highlight { finalized: 0 })
        );

        viz.stop();
        let resumed = t0 + Duration::from_secs(5);
        viz.start(resumed).unwrap();
        assert_eq!(viz.next_tick(), Some(resumed + Duration::from_secs(1)));
        assert!(!viz.poll(resumed + TICK));
        assert_eq!(viz.finalized(), 0);
        assert!(viz.poll(resumed + Duration::from_secs(1)));
        assert_eq!(viz.finalized(), 1);
    }

    #[test]
    fn test_load_input_length_cap() {
        let mut viz = session(Algorithm::BubbleSort, &[2, 1]);
        let err = viz.load_input(vec![0; sequence::MAX_LEN + 1]).unwrap_err();
        assert!(matches!(err, VisualizerError::InputTooLong { len: 65, max: 64 }));
        assert_eq!(viz.input(), &[2, 1]);

        viz.load_input(vec![0; sequence::MAX_LEN]).unwrap();
        assert_eq!(viz.input().len(), sequence::MAX_LEN);
    }

    #[test]
    fn test_oversized_input_from_new_fails_to_start() {
        let mut viz = session(Algorithm::BubbleSort, &[1; 65]);
        assert!(matches!(
            viz.start(Instant::now()),
            Err(VisualizerError::InputTooLong { .. })
        ));
        assert_eq!(viz.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_randomize_clamps_length() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(9);
        let mut viz = session(Algorithm::BubbleSort, &[2, 1]);
        viz.randomize(&mut rng, 500);
        assert_eq!(viz.input().len(), sequence::MAX_LEN);
    }

    #[test]
    fn test_binary_search_previews_sorted_input() {
        let mut viz = session(Algorithm::BinarySearch, &[5, 3, 8, 1]);
        assert_eq!(viz.current_values(), &[1, 3, 5, 8]);
        assert_eq!(viz.input(), &[5, 3, 8, 1]);

        viz.select_algorithm(Algorithm::LinearSearch);
        assert_eq!(viz.current_values(), &[5, 3, 8, 1]);

        viz.select_algorithm(Algorithm::BinarySearch);
        viz.load_input(vec![9, 4]).unwrap();
        assert_eq!(viz.current_values(), &[4, 9]);
    }

    #[test]
    fn test_target_change_resets() {
        let mut viz = session(Algorithm::LinearSearch, &[1, 2, 3]);
        viz.set_target_text("2");
        viz.start(Instant::now()).unwrap();
        viz.set_target_text("2");
        assert!(viz.is_running());

        viz.set_target_text("3");
        assert_eq!(viz.state(), PlaybackState::Idle);
    }
}
