//! `insertion_sort` records a shift-based insertion sort.
//!
//! Index 0 starts out sorted. Each following value is lifted out as the key, larger
//! predecessors are shifted one slot right, and the key is dropped into the hole. Each shift
//! is recorded as a comparison step followed by a shifting step. While a pair is being shifted
//! it is removed from the displayed sorted set so it is never shown as both sorted and moving.
//!
//! Only comparisons that cause a shift are counted. The final comparison that ends the scan
//! is implicit.
//!
//! ## Characteristics
//!
//!  * iterative
//!  * stable
//!  * the sorted region is always a prefix

use crate::recorder::Recorder;
use crate::trace::{StepKind, Trace};
use crate::Algorithm;

pub fn insertion_sort(values: &[i64]) -> Trace {
    let mut rec = Recorder::new(Algorithm::Insertion, values);
    let n = rec.len();

    if n > 0 {
        rec.mark_sorted(0);
    }

    rec.start("Starting Insertion Sort algorithm. First element is considered sorted.");

    for i in 1..n {
        let key = rec.values[i];

        rec.record(
            StepKind::Highlight,
            &[i],
            &[],
            format!(
                "Inserting element {} at position {} into the sorted portion",
                key, i
            ),
        );

        // `hole` is the slot the key would currently drop into
        let mut hole = i;

        while hole > 0 && rec.values[hole - 1] > key {
            let j = hole - 1;
            let pair = [j, hole];

            rec.record_masked(
                StepKind::Compare,
                &pair,
                &[],
                &pair,
                format!("Comparing {} with {}", rec.values[j], key),
            );
            rec.count_comparison();

            rec.record_masked(
                StepKind::Swap,
                &[],
                &pair,
                &pair,
                format!("Shifting {} one position to the right", rec.values[j]),
            );

            rec.values[hole] = rec.values[j];
            rec.count_swap();
            hole = j;
        }

        rec.values[hole] = key;
        rec.mark_sorted(i);

        rec.record(
            StepKind::Settle,
            &[],
            &[],
            format!(
                "Inserted {} into correct position. First {} elements are now sorted.",
                key,
                i + 1
            ),
        );
    }

    rec.finish("Array is now fully sorted");

    rec.into_trace()
}
