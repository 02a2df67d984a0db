//! `quick_sort` records a recursive quick sort using the Lomuto partition scheme with the
//! rightmost element as pivot.
//!
//! After each partition the pivot's final index joins the sorted set; singleton ranges are
//! marked sorted as soon as the recursion reaches them. The closing pivot placement is always
//! recorded and counted as a swap, even when the pivot is already in place and the exchange is
//! with itself.
//!
//! ## Characteristics
//!
//!  * recursive
//!  * in-place
//!  * unstable
//!  * quadratic on sorted and all-equal input

use crate::recorder::Recorder;
use crate::trace::{StepKind, Trace};
use crate::Algorithm;

pub fn quick_sort(values: &[i64]) -> Trace {
    let mut rec = Recorder::new(Algorithm::Quick, values);

    rec.start("Starting Quick Sort algorithm");

    if !rec.is_empty() {
        let high = rec.len() - 1;
        sort_range(&mut rec, 0, high);
    }

    rec.finish("Array is now fully sorted");

    rec.into_trace()
}

fn sort_range(rec: &mut Recorder, low: usize, high: usize) {
    if low < high {
        let pivot_index = partition(rec, low, high);

        rec.mark_sorted(pivot_index);
        rec.record(
            StepKind::Settle,
            &[],
            &[],
            format!(
                "Pivot {} is now in its correct position at index {}",
                rec.values[pivot_index], pivot_index
            ),
        );

        if pivot_index > low {
            sort_range(rec, low, pivot_index - 1);
        }

        if pivot_index < high {
            sort_range(rec, pivot_index + 1, high);
        }
    } else if low == high && rec.mark_sorted(low) {
        rec.record(
            StepKind::Settle,
            &[],
            &[],
            format!("Single element at index {} is already sorted", low),
        );
    }
}

/// Returns the pivot's final index.
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.values[high];

    rec.record(
        StepKind::Highlight,
        &[high],
        &[],
        format!(
            "Partitioning subarray from index {} to {}. Pivot: {}",
            low, high, pivot
        ),
    );

    // Next slot for a value smaller than the pivot
    let mut boundary = low;

    for j in low..high {
        rec.compare(
            &[j, high],
            format!(
                "Comparing element {} at index {} with pivot {}",
                rec.values[j], j, pivot
            ),
        );

        if rec.values[j] < pivot {
            let i = boundary;
            boundary += 1;

            if i != j {
                rec.record(
                    StepKind::Swap,
                    &[],
                    &[i, j],
                    format!(
                        "Swapping {} at index {} with {} at index {}",
                        rec.values[i], i, rec.values[j], j
                    ),
                );
                rec.exchange(i, j);
            } else {
                rec.record(
                    StepKind::Highlight,
                    &[i],
                    &[],
                    format!(
                        "Element {} at index {} is already in the correct side of the pivot",
                        rec.values[i], i
                    ),
                );
            }
        }
    }

    rec.record(
        StepKind::Swap,
        &[],
        &[boundary, high],
        format!(
            "Placing pivot {} in its correct position by swapping with element at index {}",
            pivot, boundary
        ),
    );
    rec.exchange(boundary, high);

    boundary
}

#[cfg(test)]
mod tests {
    use crate::sorts::quick_sort::quick_sort;
    use crate::test_utils::trace_comparison_suite;
    use crate::trace::StepKind;

    #[test]
    pub fn test_suite() {
        trace_comparison_suite(quick_sort);
    }

    #[test]
    pub fn test_all_equal() {
        let trace = quick_sort(&[4, 4, 4]);

        // Two partitions ([0, 2] and [1, 2]), each ending in a self-exchange of equal values
        assert_eq!(trace.stats.comparisons, 3);
        assert_eq!(trace.stats.swaps, 2);
        assert_eq!(
            trace.count_kind(StepKind::Swap),
            2,
            "only the mandated pivot placements are recorded as swaps"
        );
        assert_eq!(trace.final_values(), vec![4, 4, 4]);
    }

    #[test]
    pub fn test_pivot_already_in_place_still_counts() {
        let trace = quick_sort(&[1, 2]);

        // 1 < 2 lands on its own slot, then the pivot swaps with itself
        assert_eq!(trace.stats.comparisons, 1);
        assert_eq!(trace.stats.swaps, 1);

        let placement = trace
            .steps
            .iter()
            .find(|s| s.kind == StepKind::Swap)
            .unwrap();
        assert_eq!(placement.swapping, vec![1, 1]);
        assert!(trace.steps.iter().any(|s| s.description
            == "Element 1 at index 0 is already in the correct side of the pivot"));
    }

    #[test]
    pub fn test_descriptions() {
        let trace = quick_sort(&[3, 1, 2]);
        let descriptions: Vec<&str> = trace.steps.iter().map(|s| s.description.as_str()).collect();

        assert_eq!(
            descriptions,
            vec![
                "Starting Quick Sort algorithm",
                "Partitioning subarray from index 0 to 2. Pivot: 2",
                "Comparing element 3 at index 0 with pivot 2",
                "Comparing element 1 at index 1 with pivot 2",
                "Swapping 3 at index 0 with 1 at index 1",
                "Placing pivot 2 in its correct position by swapping with element at index 1",
                "Pivot 2 is now in its correct position at index 1",
                "Single element at index 0 is already sorted",
                "Single element at index 2 is already sorted",
                "Array is now fully sorted",
            ]
        );
        assert_eq!(trace.stats.comparisons, 2);
        assert_eq!(trace.stats.swaps, 2);
    }
}
