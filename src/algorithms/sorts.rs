//! Sorting generators
//!
//! Each function copies its input, sorts the copy ascending and returns the
//! [`History`] of every distinct state the copy went through. The first entry is
//! always the unmodified input and the last is the sorted result.
//!
//! A snapshot is taken after each swap or write, never after a bare
//! comparison. Every intermediate snapshot is a permutation of the input: the
//! merge step lays out its partially merged output followed by the unconsumed
//! remainder of both runs, and insertion sort moves its key with adjacent swaps,
//! so no value is ever duplicated or dropped mid-step.

use crate::error::{Result, VisualizerError};
use crate::snapshot::History;

/// Bubble sort: repeatedly swap adjacent out-of-order pairs
pub fn bubble_sort(input: &[i64]) -> History {
    let mut arr = input.to_vec();
    let mut history = History::starting_at(&arr);
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                history.record(&arr);
            }
        }
    }

    history
}

/// Quick sort with a last-element pivot and Lomuto partitioning (not stable)
pub fn quick_sort(input: &[i64]) -> History {
    let mut arr = input.to_vec();
    let mut history = History::starting_at(&arr);

    if !arr.is_empty() {
        let high = arr.len() - 1;
        quick_sort_range(&mut arr, 0, high, &mut history);
    }

    history
}

fn quick_sort_range(arr: &mut [i64], low: usize, high: usize, history: &mut History) {
    if low >= high {
        return;
    }

    let pivot = partition(arr, low, high, history);
    if pivot > low {
        quick_sort_range(arr, low, pivot - 1, history);
    }
    quick_sort_range(arr, pivot + 1, high, history);
}

/// Partition `arr[low..=high]` around `arr[high]`, returning the pivot's final index
fn partition(arr: &mut [i64], low: usize, high: usize, history: &mut History) -> usize {
    let pivot = arr[high];
    let mut store = low;

    for j in low..high {
        if arr[j] < pivot {
            arr.swap(store, j);
            history.record(arr);
            store += 1;
        }
    }

    arr.swap(store, high);
    history.record(arr);
    store
}

/// Top-down merge sort; ties keep their relative order
pub fn merge_sort(input: &[i64]) -> History {
    let mut arr = input.to_vec();
    let mut history = History::starting_at(&arr);

    if !arr.is_empty() {
        let high = arr.len() - 1;
        merge_sort_range(&mut arr, 0, high, &mut history);
    }

    history
}

fn merge_sort_range(arr: &mut [i64], low: usize, high: usize, history: &mut History) {
    if low >= high {
        return;
    }

    let mid = low + (high - low) / 2;
    merge_sort_range(arr, low, mid, history);
    merge_sort_range(arr, mid + 1, high, history);
    merge(arr, low, mid, high, history);
}

/// Merge the sorted runs `arr[low..=mid]` and `arr[mid+1..=high]`
fn merge(arr: &mut [i64], low: usize, mid: usize, high: usize, history: &mut History) {
    let left = arr[low..=mid].to_vec();
    let right = arr[mid + 1..=high].to_vec();
    let mut merged = Vec::with_capacity(high - low + 1);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }

        // merged output, then what is left of each run
        let region = merged
            .iter()
            .chain(&left[i..])
            .chain(&right[j..])
            .copied();
        for (slot, value) in arr[low..=high].iter_mut().zip(region) {
            *slot = value;
        }
        history.record(arr);
    }
    // Once one run is exhausted the other's tail is already in place.
}

/// Insertion sort: sink each element left past every larger neighbour
pub fn insertion_sort(input: &[i64]) -> History {
    let mut arr = input.to_vec();
    let mut history = History::starting_at(&arr);

    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            history.record(&arr);
            j -= 1;
        }
    }

    history
}

/// Selection sort: swap the minimum of the unsorted suffix into place
pub fn selection_sort(input: &[i64]) -> History {
    let mut arr = input.to_vec();
    let mut history = History::starting_at(&arr);
    let n = arr.len();

    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
            history.record(&arr);
        }
    }

    history
}

/// Heap sort over a max-heap
pub fn heap_sort(input: &[i64]) -> History {
    let mut arr = input.to_vec();
    let mut history = History::starting_at(&arr);
    let n = arr.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut arr, n, i, &mut history);
    }

    for end in (1..n).rev() {
        arr.swap(0, end);
        history.record(&arr);
        sift_down(&mut arr, end, 0, &mut history);
    }

    history
}

/// Restore the max-heap property for the subtree at `i` within `arr[..n]`
fn sift_down(arr: &mut [i64], n: usize, i: usize, history: &mut History) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && arr[left] > arr[largest] {
        largest = left;
    }
    if right < n && arr[right] > arr[largest] {
        largest = right;
    }

    if largest != i {
        arr.swap(i, largest);
        history.record(arr);
        sift_down(arr, n, largest, history);
    }
}

/// LSD base-10 radix sort, one snapshot per digit pass.
///
/// Only non-negative values can be bucketed by digit; any negative input is
/// rejected before a history is produced.
pub fn radix_sort(input: &[i64]) -> Result<History> {
    if let Some(&value) = input.iter().find(|&&v| v < 0) {
        return Err(VisualizerError::NegativeRadixInput { value });
    }

    let mut arr = input.to_vec();
    let mut history = History::starting_at(&arr);
    let max = arr.iter().copied().max().unwrap_or(0);

    let mut exp: i64 = 1;
    while max / exp > 0 {
        counting_sort_by_digit(&mut arr, exp);
        history.record(&arr);
        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }

    Ok(history)
}

/// Stable counting sort on the decimal digit selected by `exp`
fn counting_sort_by_digit(arr: &mut [i64], exp: i64) {
    let digit = |v: i64| ((v / exp) % 10) as usize;
    let mut count = [0usize; 10];

    for &v in arr.iter() {
        count[digit(v)] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }

    let mut output = vec![0; arr.len()];
    for &v in arr.iter().rev() {
        let d = digit(v);
        count[d] -= 1;
        output[count[d]] = v;
    }

    arr.copy_from_slice(&output);
}
