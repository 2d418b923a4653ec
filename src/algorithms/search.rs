//! Search generators
//!
//! Searches never mutate the sequence, so their snapshots only differ in the
//! `probe` marker: the position compared at that step.

use crate::snapshot::{History, Recording, Snapshot};

/// Scan left to right, stopping at the first match.
///
/// One snapshot per probe. An empty input yields a single empty snapshot.
pub fn linear_search(input: &[i64], target: i64) -> Recording {
    let mut history = History::new();

    for (i, &value) in input.iter().enumerate() {
        history.push(Snapshot::probe(input, i));
        if value == target {
            return Recording {
                history,
                found: Some(i),
            };
        }
    }

    if history.is_empty() {
        history.push(Snapshot::new(input));
    }

    Recording {
        history,
        found: None,
    }
}

/// Binary search over a sorted copy of the input.
///
/// The first snapshot is the sorted sequence; each probe after it uses the
/// midpoint `floor((left + right) / 2)` of the inclusive window. The found
/// index refers to the sorted sequence. With duplicates any matching index
/// may be reported.
pub fn binary_search(input: &[i64], target: i64) -> Recording {
    let mut sorted = input.to_vec();
    sorted.sort_unstable();
    let mut history = History::starting_at(&sorted);

    // `right` is exclusive so the window can close without underflow
    let (mut left, mut right) = (0, sorted.len());
    while left < right {
        let mid = (left + right - 1) / 2;
        history.push(Snapshot::probe(&sorted, mid));

        if sorted[mid] == target {
            return Recording {
                history,
                found: Some(mid),
            };
        }
        if sorted[mid] < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    Recording {
        history,
        found: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probes(recording: &Recording) -> Vec<Option<usize>> {
        recording.history.iter().map(|s| s.probe).collect()
    }

    #[test]
    fn test_linear_search_reports_first_match() {
        let result = linear_search(&[4, 2, 7, 2], 2);
        assert_eq!(result.found, Some(1));
        assert_eq!(probes(&result), vec![Some(0), Some(1)]);
        assert!(result.history.iter().all(|s| s.values == vec![4, 2, 7, 2]));
    }

    #[test]
    fn test_linear_search_absent() {
        let result = linear_search(&[1, 2, 3], 99);
        assert_eq!(result.found, None);
        assert_eq!(result.history.len(), 3);
    }

    #[test]
    fn test_binary_search_sorts_first() {
        let result = binary_search(&[5, 3, 8, 1], 8);
        assert_eq!(result.history.first().unwrap().values, vec![1, 3, 5, 8]);
        assert_eq!(result.history.first().unwrap().probe, None);
        assert_eq!(result.found, Some(3));
        assert_eq!(probes(&result), vec![None, Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_binary_search_absent() {
        let result = binary_search(&[1, 2, 3], 99);
        assert_eq!(result.found, None);
        assert_eq!(probes(&result), vec![None, Some(1), Some(2)]);

        let result = binary_search(&[1, 2, 3], 0);
        assert_eq!(probes(&result), vec![None, Some(1), Some(0)]);
    }

    #[test]
    fn test_empty_input() {
        for result in [linear_search(&[], 1), binary_search(&[], 1)] {
            assert_eq!(result.found, None);
            assert_eq!(result.history.len(), 1);
            assert!(result.history.first().unwrap().is_empty());
        }
    }
}
