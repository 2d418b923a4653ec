//! Snapshot generators for the supported algorithms
//!
//! Every algorithm exists exactly once, as a function that runs the textbook
//! version over a working copy of the input and records a [`Snapshot`] into a
//! [`History`] whenever the working sequence changes. Searches record one
//! snapshot per probe instead, since they never mutate the sequence.
//!
//! The descriptive text shown in the info pane is static metadata keyed by
//! [`Algorithm`]; see [`Algorithm::info`].
//!
//! [`Snapshot`]: crate::snapshot::Snapshot
//! [`History`]: crate::snapshot::History

pub mod info;
pub mod search;
pub mod sorts;

use crate::error::{Result, VisualizerError};
use crate::sequence;
use crate::snapshot::Recording;

pub use info::{AlgorithmInfo, Complexity};

/// The algorithm variants the visualizer can animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    BubbleSort,
    QuickSort,
    MergeSort,
    InsertionSort,
    SelectionSort,
    HeapSort,
    RadixSort,
    LinearSearch,
    BinarySearch,
}

/// Whether an algorithm reorders the sequence or looks something up in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Sort,
    Search,
}

impl Algorithm {
    /// All variants, in the order the algorithm list shows them
    pub const ALL: [Algorithm; 9] = [
        Algorithm::BubbleSort,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::InsertionSort,
        Algorithm::SelectionSort,
        Algorithm::HeapSort,
        Algorithm::RadixSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
    ];

    pub fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::LinearSearch | Algorithm::BinarySearch => AlgorithmKind::Search,
            _ => AlgorithmKind::Sort,
        }
    }

    pub fn is_search(self) -> bool {
        self.kind() == AlgorithmKind::Search
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Position of this variant in [`Algorithm::ALL`]
    pub fn index(self) -> usize {
        Algorithm::ALL
            .iter()
            .position(|&a| a == self)
            .unwrap_or_default()
    }

    /// Next variant in list order, wrapping around
    pub fn next(self) -> Self {
        Algorithm::ALL[(self.index() + 1) % Algorithm::ALL.len()]
    }

    /// Previous variant in list order, wrapping around
    pub fn prev(self) -> Self {
        let len = Algorithm::ALL.len();
        Algorithm::ALL[(self.index() + len - 1) % len]
    }
}

/// Parse user-entered search target text.
///
/// Surrounding whitespace is ignored; an empty string means no target was given.
pub fn parse_target(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(VisualizerError::MissingTarget);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| VisualizerError::InvalidTarget {
            input: trimmed.to_string(),
        })
}

/// Parse a comma-separated list of at most [`sequence::MAX_LEN`] integers, e.g. `5,3,8`
pub fn parse_values(text: &str) -> Result<Vec<i64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let values = text
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| VisualizerError::InvalidValues {
            input: text.to_string(),
        })?;
    sequence::check_len(values.len())?;
    Ok(values)
}

/// Run `algorithm` over `input` and record its snapshot history.
///
/// `target` is required for the search variants and ignored by sorts. The input
/// is never modified; generators work on their own copy. Inputs longer than
/// [`sequence::MAX_LEN`] are rejected.
pub fn generate(algorithm: Algorithm, input: &[i64], target: Option<i64>) -> Result<Recording> {
    sequence::check_len(input.len())?;
    let recording = match algorithm {
        Algorithm::BubbleSort => Recording::sorted(sorts::bubble_sort(input)),
        Algorithm::QuickSort => Recording::sorted(sorts::quick_sort(input)),
        Algorithm::MergeSort => Recording::sorted(sorts::merge_sort(input)),
        Algorithm::InsertionSort => Recording::sorted(sorts::insertion_sort(input)),
        Algorithm::SelectionSort => Recording::sorted(sorts::selection_sort(input)),
        Algorithm::HeapSort => Recording::sorted(sorts::heap_sort(input)),
        Algorithm::RadixSort => Recording::sorted(sorts::radix_sort(input)?),
        Algorithm::LinearSearch => {
            search::linear_search(input, target.ok_or(VisualizerError::MissingTarget)?)
        }
        Algorithm::BinarySearch => {
            search::binary_search(input, target.ok_or(VisualizerError::MissingTarget)?)
        }
    };

    tracing::debug!(
        algorithm = algorithm.name(),
        len = input.len(),
        steps = recording.history.len(),
        found = ?recording.found,
        "generated snapshot history"
    );

    Ok(recording)
}
