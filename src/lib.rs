//! # Introduction
//!
//! Sortty animates classic sorting and searching algorithms as a bar chart in
//! the terminal. Each algorithm runs once, eagerly, recording a snapshot of the
//! sequence every time it changes; the recorded history is then played back one
//! snapshot per tick through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Generator → Snapshots → Playback → TUI
//! ```
//!
//! 1. [`sequence`]: random input generation (values in `0..100`).
//! 2. [`algorithms`]: one snapshot generator per algorithm, plus the
//!    descriptive metadata shown next to the chart.
//! 3. [`snapshot`]: [`snapshot::Snapshot`], the [`snapshot::History`] that
//!    collects them and the [`snapshot::Recording`] a generator returns.
//! 4. [`playback`]: [`playback::Visualizer`], the timer-driven state machine
//!    that owns a recording and steps through it.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, quick (Lomuto, last-element pivot), merge, insertion,
//! selection, heap, radix (non-negative values only).
//! Searching: linear, binary (over a sorted copy of the input).

pub mod algorithms;
pub mod error;
pub mod playback;
pub mod sequence;
pub mod snapshot;
pub mod ui;

pub use error::{Result, VisualizerError};
