//! Descriptive metadata shown alongside the visualization

use super::{Algorithm, AlgorithmKind};

/// Best, average and worst case bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

impl Complexity {
    const fn uniform(bound: &'static str) -> Self {
        Complexity {
            best: bound,
            average: bound,
            worst: bound,
        }
    }
}

/// Static description of one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub kind: AlgorithmKind,
    pub description: &'static str,
    pub time: Complexity,
    pub space: Complexity,
}

const BUBBLE_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    kind: AlgorithmKind::Sort,
    description: "Repeatedly steps through the list, swapping adjacent elements \
                  that are in the wrong order until no swaps are needed.",
    time: Complexity {
        best: "O(n)",
        average: "O(n^2)",
        worst: "O(n^2)",
    },
    space: Complexity::uniform("O(1)"),
};

const QUICK_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    kind: AlgorithmKind::Sort,
    description: "Divide and conquer: picks the last element as pivot, partitions \
                  smaller elements to its left and larger to its right, then \
                  sorts both sides recursively.",
    time: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n^2)",
    },
    space: Complexity::uniform("O(log n)"),
};

const MERGE_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    kind: AlgorithmKind::Sort,
    description: "Stable divide and conquer: splits the list in half, sorts each \
                  half recursively, then merges the two sorted halves.",
    time: Complexity::uniform("O(n log n)"),
    space: Complexity::uniform("O(n)"),
};

const INSERTION_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    kind: AlgorithmKind::Sort,
    description: "Builds the sorted list one item at a time, moving each new \
                  element left past every larger neighbour.",
    time: Complexity {
        best: "O(n)",
        average: "O(n^2)",
        worst: "O(n^2)",
    },
    space: Complexity::uniform("O(1)"),
};

const SELECTION_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    kind: AlgorithmKind::Sort,
    description: "Splits the list into a sorted front and an unsorted back, and \
                  repeatedly swaps the smallest unsorted element to the front.",
    time: Complexity::uniform("O(n^2)"),
    space: Complexity::uniform("O(1)"),
};

const HEAP_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Heap Sort",
    kind: AlgorithmKind::Sort,
    description: "Arranges the list as a binary max-heap, then repeatedly moves \
                  the root to the end and restores the heap over the rest.",
    time: Complexity::uniform("O(n log n)"),
    space: Complexity::uniform("O(1)"),
};

const RADIX_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Radix Sort",
    kind: AlgorithmKind::Sort,
    description: "Non-comparison sort that distributes numbers into buckets by \
                  each decimal digit, least significant first. Non-negative \
                  values only.",
    time: Complexity::uniform("O(nk)"),
    space: Complexity::uniform("O(n + k)"),
};

const LINEAR_SEARCH: AlgorithmInfo = AlgorithmInfo {
    name: "Linear Search",
    kind: AlgorithmKind::Search,
    description: "Checks each element in turn until a match is found or the \
                  whole list has been searched.",
    time: Complexity {
        best: "O(1)",
        average: "O(n)",
        worst: "O(n)",
    },
    space: Complexity::uniform("O(1)"),
};

const BINARY_SEARCH: AlgorithmInfo = AlgorithmInfo {
    name: "Binary Search",
    kind: AlgorithmKind::Search,
    description: "Sorts the list, then repeatedly halves the search interval by \
                  comparing the target against the middle element.",
    time: Complexity {
        best: "O(1)",
        average: "O(log n)",
        worst: "O(log n)",
    },
    space: Complexity::uniform("O(1)"),
};

impl Algorithm {
    /// Name, description and complexity bounds for this algorithm
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Algorithm::BubbleSort => &BUBBLE_SORT,
            Algorithm::QuickSort => &QUICK_SORT,
            Algorithm::MergeSort => &MERGE_SORT,
            Algorithm::InsertionSort => &INSERTION_SORT,
            Algorithm::SelectionSort => &SELECTION_SORT,
            Algorithm::HeapSort => &HEAP_SORT,
            Algorithm::RadixSort => &RADIX_SORT,
            Algorithm::LinearSearch => &LINEAR_SEARCH,
            Algorithm::BinarySearch => &BINARY_SEARCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_kind_matches_algorithm_kind() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.info().kind, algorithm.kind(), "{:?}", algorithm);
        }
    }
}
