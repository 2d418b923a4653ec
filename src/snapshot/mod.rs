// Snapshot history recorded by the algorithm generators

/// One captured state of the working sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub values: Vec<i64>,
    /// Position a search compared against at this step
    pub probe: Option<usize>,
}

impl Snapshot {
    pub fn new(values: &[i64]) -> Self {
        Snapshot {
            values: values.to_vec(),
            probe: None,
        }
    }

    pub fn probe(values: &[i64], index: usize) -> Self {
        Snapshot {
            values: values.to_vec(),
            probe: Some(index),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Positions whose value differs from `previous`
    pub fn changed_positions(&self, previous: &Snapshot) -> Vec<usize> {
        self.values
            .iter()
            .zip(previous.values.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Ordered list of snapshots for one algorithm run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Start a history whose first entry is `initial`
    pub fn starting_at(initial: &[i64]) -> Self {
        History {
            snapshots: vec![Snapshot::new(initial)],
        }
    }

    pub fn new() -> Self {
        History {
            snapshots: Vec::new(),
        }
    }

    /// Add a snapshot to history unconditionally
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Record `values` if they differ from the latest snapshot.
    ///
    /// Returns whether a snapshot was added. Writes that leave the sequence
    /// unchanged (self-swaps, equal-value swaps) are not steps.
    pub fn record(&mut self, values: &[i64]) -> bool {
        if self
            .snapshots
            .last()
            .is_some_and(|last| last.values.as_slice() == values)
        {
            return false;
        }
        self.snapshots.push(Snapshot::new(values));
        true
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}

/// Generator output: the snapshot history and, for searches, where the target was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    pub history: History,
    pub found: Option<usize>,
}

impl Recording {
    pub fn sorted(history: History) -> Self {
        Recording {
            history,
            found: None,
        }
    }

    /// Length of the sequence every snapshot carries
    pub fn sequence_len(&self) -> usize {
        self.history.first().map_or(0, Snapshot::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_skips_unchanged_state() {
        let mut history = History::starting_at(&[3, 1, 2]);
        assert!(!history.record(&[3, 1, 2]));
        assert!(history.record(&[1, 3, 2]));
        assert!(!history.record(&[1, 3, 2]));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_changed_positions() {
        let before = Snapshot::new(&[5, 3, 8]);
        let after = Snapshot::new(&[3, 5, 8]);
        assert_eq!(after.changed_positions(&before), vec![0, 1]);
        assert!(after.changed_positions(&after).is_empty());
    }

    #[test]
    fn test_sequence_len_of_empty_history() {
        let recording = Recording::sorted(History::new());
        assert_eq!(recording.sequence_len(), 0);
    }
}
