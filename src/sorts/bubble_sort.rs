//! `bubble_sort` records a classic adjacent-pair bubble sort.
//!
//! Each pass bubbles the largest remaining value to the end of the unsorted region, which then
//! joins the sorted set. A pass that makes no swaps proves the rest of the array is already in
//! order: every remaining index is marked sorted at once and the run ends there. Because the
//! last possible pass has nothing to compare, this early exit is also how every non-empty run
//! terminates.
//!
//! ## Characteristics
//!
//!  * iterative
//!  * stable
//!  * short-circuits on already-sorted input

use crate::recorder::Recorder;
use crate::trace::{StepKind, Trace};
use crate::Algorithm;

pub fn bubble_sort(values: &[i64]) -> Trace {
    let mut rec = Recorder::new(Algorithm::Bubble, values);
    let n = rec.len();

    rec.start("Starting Bubble Sort algorithm");

    for i in 0..n {
        let mut swapped = false;

        for j in 0..(n - i - 1) {
            let (a, b) = (rec.values[j], rec.values[j + 1]);

            rec.compare(
                &[j, j + 1],
                format!(
                    "Comparing elements at positions {} ({}) and {} ({})",
                    j,
                    a,
                    j + 1,
                    b
                ),
            );

            if a > b {
                rec.record(
                    StepKind::Swap,
                    &[],
                    &[j, j + 1],
                    format!(
                        "Swapping elements at positions {} ({}) and {} ({})",
                        j,
                        a,
                        j + 1,
                        b
                    ),
                );
                rec.exchange(j, j + 1);
                swapped = true;
            }
        }

        let last = n - i - 1;
        rec.mark_sorted(last);
        rec.record(
            StepKind::Settle,
            &[],
            &[],
            format!("Element {} is now in its sorted position", rec.values[last]),
        );

        if !swapped {
            rec.finish("Array is now fully sorted. No swaps needed in the last pass.");
            break;
        }
    }

    rec.into_trace()
}
