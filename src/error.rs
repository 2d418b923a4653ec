//! Error types for the visualizer
//!
//! [`VisualizerError`] covers every failure the core can report. All of them are
//! raised synchronously, before any state is mutated, so a caller can show the
//! message and carry on with the previous state intact.

use thiserror::Error;

/// Result type for visualizer operations
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Errors reported by the snapshot generators, the playback controller and the CLI
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// A search algorithm was started without a target
    #[error("Please enter a search element")]
    MissingTarget,

    /// The search target text is not an integer
    #[error("Search element '{input}' is not a valid number")]
    InvalidTarget {
        /// Text the user entered
        input: String,
    },

    /// Radix sort only buckets non-negative values
    #[error("Radix sort does not support negative values (found {value})")]
    NegativeRadixInput {
        /// First negative value in the input
        value: i64,
    },

    /// Tick interval outside the supported range
    #[error("Speed {millis}ms is outside the supported range of {min}-{max}ms")]
    SpeedOutOfRange {
        /// Requested interval
        millis: u64,
        /// Smallest accepted interval
        min: u64,
        /// Largest accepted interval
        max: u64,
    },

    /// More values than the bar chart can show
    #[error("Input has {len} values; at most {max} are supported")]
    InputTooLong {
        /// Number of values given
        len: usize,
        /// Largest accepted length
        max: usize,
    },

    /// An explicit input list could not be parsed
    #[error("Invalid input values '{input}': expected comma-separated integers")]
    InvalidValues {
        /// Text that failed to parse
        input: String,
    },

    /// Terminal or log file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisualizerError {
    /// Whether this error came from user input rather than the environment
    pub fn is_validation(&self) -> bool {
        !matches!(self, VisualizerError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = VisualizerError::InvalidTarget {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Search element 'abc' is not a valid number");

        let err = VisualizerError::NegativeRadixInput { value: -4 };
        assert!(err.to_string().contains("-4"));

        let err = VisualizerError::InputTooLong { len: 65, max: 64 };
        assert_eq!(err.to_string(), "Input has 65 values; at most 64 are supported");
    }

    #[test]
    fn test_io_is_not_validation() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(!VisualizerError::from(io).is_validation());
        assert!(VisualizerError::MissingTarget.is_validation());
    }
}
