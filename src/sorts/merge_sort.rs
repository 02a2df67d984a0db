//! `merge_sort` records a top-down recursive merge sort.
//!
//! Every call first highlights the range it is about to divide, recurses into both halves, then
//! merges them through two temporary runs. Once a merge completes, every index in its range is
//! marked sorted, so the sorted set grows bottom-up from the leaves.
//!
//! The swap counter does not count exchanges. It counts elements placed from the right run,
//! whether they win a comparison or are drained after the left run empties. This keeps the
//! figure comparable with the other engines as a measure of how much data moved.
//!
//! ## Characteristics
//!
//!  * recursive
//!  * out-of-place merge
//!  * stable (ties are taken from the left run)

use crate::recorder::Recorder;
use crate::trace::{StepKind, Trace};
use crate::Algorithm;

pub fn merge_sort(values: &[i64]) -> Trace {
    let mut rec = Recorder::new(Algorithm::Merge, values);

    rec.start("Starting Merge Sort algorithm");

    if !rec.is_empty() {
        let right = rec.len() - 1;
        sort_range(&mut rec, 0, right);
    }

    rec.finish("Array is now fully sorted");

    rec.into_trace()
}

fn sort_range(rec: &mut Recorder, left: usize, right: usize) {
    if left < right {
        let mid = left + (right - left) / 2;
        let range: Vec<usize> = (left..=right).collect();

        rec.record(
            StepKind::Highlight,
            &range,
            &[],
            format!(
                "Dividing array from index {} to {} at midpoint {}",
                left, right, mid
            ),
        );

        sort_range(rec, left, mid);
        sort_range(rec, mid + 1, right);
        merge(rec, left, mid, right);
    } else if left == right && rec.mark_sorted(left) {
        rec.record(
            StepKind::Settle,
            &[],
            &[],
            format!("Single element at index {} is already sorted", left),
        );
    }
}

fn merge(rec: &mut Recorder, left: usize, mid: usize, right: usize) {
    let left_run = rec.values[left..=mid].to_vec();
    let right_run = rec.values[(mid + 1)..=right].to_vec();
    let range: Vec<usize> = (left..=right).collect();

    rec.record(
        StepKind::Highlight,
        &range,
        &[],
        format!(
            "Merging subarrays: [{}] and [{}]",
            join(&left_run),
            join(&right_run)
        ),
    );

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        rec.compare(
            &[left + i, mid + 1 + j],
            format!(
                "Comparing {} at index {} with {} at index {}",
                left_run[i],
                left + i,
                right_run[j],
                mid + 1 + j
            ),
        );

        if left_run[i] <= right_run[j] {
            place(rec, k, left_run[i], format!("Placing {} at index {}", left_run[i], k));
            i += 1;
        } else {
            place(rec, k, right_run[j], format!("Placing {} at index {}", right_run[j], k));
            rec.count_swap();
            j += 1;
        }

        k += 1;
    }

    while i < left_run.len() {
        place(
            rec,
            k,
            left_run[i],
            format!(
                "Placing remaining left subarray element {} at index {}",
                left_run[i], k
            ),
        );
        i += 1;
        k += 1;
    }

    while j < right_run.len() {
        place(
            rec,
            k,
            right_run[j],
            format!(
                "Placing remaining right subarray element {} at index {}",
                right_run[j], k
            ),
        );
        rec.count_swap();
        j += 1;
        k += 1;
    }

    rec.sorted.insert_range(left..=right);
    rec.record(
        StepKind::Settle,
        &[],
        &[],
        format!(
            "Merged subarray from index {} to {}: [{}]",
            left,
            right,
            join(&rec.values[left..=right])
        ),
    );
}

/// The placing step is recorded before the write lands.
#[inline]
fn place(rec: &mut Recorder, index: usize, value: i64, description: String) {
    rec.record(StepKind::Swap, &[], &[index], description);
    rec.values[index] = value;
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
