use crate::trace::Trace;
use crate::trace_builder::TraceBuilder;
use crate::Algorithm;

pub trait SortTrace {
    /// sort_trace runs the chosen engine over a copy of the values and returns its full trace.
    /// The values themselves are left untouched.
    ///
    /// ```
    /// use sortrace::{Algorithm, SortTrace};
    ///
    /// let values: Vec<i64> = vec![5, 3, 8, 1, 9];
    /// let trace = values.sort_trace(Algorithm::Bubble);
    ///
    /// assert_eq!(trace.final_values(), vec![1, 3, 5, 8, 9]);
    /// assert_eq!(values, vec![5, 3, 8, 1, 9]);
    /// ```
    fn sort_trace(&self, algorithm: Algorithm) -> Trace;

    fn trace_builder(&'_ self) -> TraceBuilder<'_>;
}

impl SortTrace for [i64] {
    fn sort_trace(&self, algorithm: Algorithm) -> Trace {
        algorithm.trace(self)
    }

    fn trace_builder(&'_ self) -> TraceBuilder<'_> {
        TraceBuilder::new(self)
    }
}

impl SortTrace for Vec<i64> {
    fn sort_trace(&self, algorithm: Algorithm) -> Trace {
        algorithm.trace(self)
    }

    fn trace_builder(&'_ self) -> TraceBuilder<'_> {
        TraceBuilder::new(self)
    }
}
