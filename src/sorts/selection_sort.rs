//! `selection_sort` records a min-finding selection sort.
//!
//! For each position the unsorted tail is scanned for its minimum, which is then exchanged
//! into place. Discovering a new minimum emits a highlight step but is not a comparison in its
//! own right. When the minimum is already in place no swap step is emitted.
//!
//! ## Characteristics
//!
//!  * iterative
//!  * unstable
//!  * at most n - 1 swaps

use crate::recorder::Recorder;
use crate::trace::{StepKind, Trace};
use crate::Algorithm;

pub fn selection_sort(values: &[i64]) -> Trace {
    let mut rec = Recorder::new(Algorithm::Selection, values);
    let n = rec.len();

    rec.start("Starting Selection Sort algorithm");

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

        rec.record(
            StepKind::Highlight,
            &[min_index],
            &[],
            format!("Finding the minimum element to place at position {}", i),
        );

        for j in (i + 1)..n {
            rec.compare(
                &[min_index, j],
                format!(
                    "Comparing current minimum {} with {}",
                    rec.values[min_index], rec.values[j]
                ),
            );

            if rec.values[j] < rec.values[min_index] {
                min_index = j;

                rec.record(
                    StepKind::Highlight,
                    &[min_index],
                    &[],
                    format!(
                        "Found new minimum value {} at position {}",
                        rec.values[min_index], min_index
                    ),
                );
            }
        }

        if min_index != i {
            rec.record(
                StepKind::Swap,
                &[],
                &[i, min_index],
                format!(
                    "Swapping {} at position {} with minimum {} at position {}",
                    rec.values[i], i, rec.values[min_index], min_index
                ),
            );
            rec.exchange(i, min_index);
        }

        rec.mark_sorted(i);
        rec.record(
            StepKind::Settle,
            &[],
            &[],
            format!(
                "Element {} is now in its sorted position at index {}",
                rec.values[i], i
            ),
        );
    }

    // The last index is sorted by elimination
    if n > 0 {
        rec.mark_sorted(n - 1);
    }

    rec.finish("Array is now fully sorted");

    rec.into_trace()
}

#[cfg(test)]
mod tests {
    use crate::sorts::selection_sort::selection_sort;
    use crate::test_utils::trace_comparison_suite;
    use crate::trace::StepKind;

    #[test]
    pub fn test_suite() {
        trace_comparison_suite(selection_sort);
    }

    #[test]
    pub fn test_empty() {
        let trace = selection_sort(&[]);

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().kind, StepKind::Finish);
        assert!(trace.last().unwrap().sorted.is_empty());
    }

    #[test]
    pub fn test_comparisons_are_quadratic() {
        let trace = selection_sort(&[9, 4, 7, 1, 3]);

        assert_eq!(trace.stats.comparisons, 10);
        assert_eq!(trace.final_values(), vec![1, 3, 4, 7, 9]);
    }

    #[test]
    pub fn test_new_minimum_is_not_a_comparison() {
        let trace = selection_sort(&[3, 2, 1]);

        // 2 then 1 become the minimum on the first pass, nothing changes on the second
        let found = trace
            .steps
            .iter()
            .filter(|s| s.description.starts_with("Found new minimum"))
            .count();

        assert_eq!(found, 2);
        assert_eq!(trace.stats.comparisons, 3);
        assert_eq!(trace.stats.swaps, 1);
    }

    #[test]
    pub fn test_no_swap_step_when_minimum_in_place() {
        let trace = selection_sort(&[1, 2, 3]);

        assert_eq!(trace.stats.swaps, 0);
        assert_eq!(trace.count_kind(StepKind::Swap), 0);
    }
}
