use crate::sorts::*;
use crate::trace::Trace;
use crate::Algorithm;
#[cfg(feature = "multi-threaded")]
use rayon::prelude::*;

#[inline]
pub(crate) fn run_trace(algorithm: Algorithm, values: &[i64]) -> Trace {
    match algorithm {
        Algorithm::Bubble => bubble_sort(values),
        Algorithm::Selection => selection_sort(values),
        Algorithm::Insertion => insertion_sort(values),
        Algorithm::Merge => merge_sort(values),
        Algorithm::Quick => quick_sort(values),
    }
}

/// Traces `values` with every algorithm, in `Algorithm::ALL` order.
///
/// Each engine still runs single-threaded on its own copy of the input; `parallel` only
/// decides whether the five engines run side by side.
pub(crate) fn run_all(values: &[i64], parallel: bool) -> Vec<Trace> {
    if parallel {
        return par_run_all(values);
    }

    Algorithm::ALL
        .iter()
        .map(|a| run_trace(*a, values))
        .collect()
}

#[cfg(feature = "multi-threaded")]
fn par_run_all(values: &[i64]) -> Vec<Trace> {
    Algorithm::ALL[..]
        .par_iter()
        .map(|a| run_trace(*a, values))
        .collect()
}

#[cfg(not(feature = "multi-threaded"))]
fn par_run_all(values: &[i64]) -> Vec<Trace> {
    run_all(values, false)
}
