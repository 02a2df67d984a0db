//! `Recorder` is the trace accumulator every engine writes into.
//!
//! It owns the working copy of the input, the step log, the running counters and the set of
//! indices the running algorithm considers final. Recursive engines thread a single
//! `&mut Recorder` through every call so steps land in the log in exactly the order they are
//! emitted.
//!
//! Every recorded step snapshots the working array and resolves each element's status with
//! the priority `sorted > comparing > swapping > unsorted`.

use crate::trace::{Element, ElementStatus, Stats, Step, StepKind, Trace};
use crate::Algorithm;
use std::ops::RangeInclusive;
use tracing::debug;

/// Set of finalized indices, stored as a presence array of the input length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct SortedSet {
    present: Vec<bool>,
}

impl SortedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            present: vec![false; len],
        }
    }

    /// Returns `true` if `index` was not already present.
    #[inline]
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        if self.present[index] {
            return false;
        }

        self.present[index] = true;

        true
    }

    pub(crate) fn insert_range(&mut self, range: RangeInclusive<usize>) {
        for index in range {
            self.insert(index);
        }
    }

    pub(crate) fn fill(&mut self) {
        self.present.iter_mut().for_each(|p| *p = true);
    }

    #[inline]
    pub(crate) fn contains(&self, index: usize) -> bool {
        self.present.get(index).copied().unwrap_or(false)
    }

    /// Member indices in ascending order.
    pub(crate) fn indices(&self) -> Vec<usize> {
        self.present
            .iter()
            .enumerate()
            .filter_map(|(i, p)| if *p { Some(i) } else { None })
            .collect()
    }
}

pub(crate) struct Recorder {
    algorithm: Algorithm,
    pub(crate) values: Vec<i64>,
    pub(crate) sorted: SortedSet,
    steps: Vec<Step>,
    stats: Stats,
}

impl Recorder {
    pub(crate) fn new(algorithm: Algorithm, values: &[i64]) -> Self {
        debug!(
            target: "sortrace::sorts",
            algorithm = %algorithm,
            len = values.len(),
            "recording trace"
        );

        Self {
            algorithm,
            values: values.to_vec(),
            sorted: SortedSet::new(values.len()),
            steps: Vec::new(),
            stats: Stats::default(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Initializer step. Carries whatever is already in the sorted set.
    pub(crate) fn start(&mut self, description: impl Into<String>) {
        self.record(StepKind::Start, &[], &[], description);
    }

    pub(crate) fn record(
        &mut self,
        kind: StepKind,
        comparing: &[usize],
        swapping: &[usize],
        description: impl Into<String>,
    ) {
        self.record_masked(kind, comparing, swapping, &[], description);
    }

    /// Like `record`, but the indices in `masked` are dropped from the displayed sorted set
    /// for this step only. The sorted set itself is untouched.
    pub(crate) fn record_masked(
        &mut self,
        kind: StepKind,
        comparing: &[usize],
        swapping: &[usize],
        masked: &[usize],
        description: impl Into<String>,
    ) {
        let shows_sorted = |i: usize| self.sorted.contains(i) && !masked.contains(&i);

        let array = self
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let status = if shows_sorted(i) {
                    ElementStatus::Sorted
                } else if comparing.contains(&i) {
                    ElementStatus::Comparing
                } else if swapping.contains(&i) {
                    ElementStatus::Swapping
                } else {
                    ElementStatus::Unsorted
                };

                Element { value, status }
            })
            .collect();

        let sorted = self
            .sorted
            .indices()
            .into_iter()
            .filter(|i| !masked.contains(i))
            .collect();

        self.steps.push(Step {
            kind,
            array,
            comparing: comparing.to_vec(),
            swapping: swapping.to_vec(),
            sorted,
            description: description.into(),
        });
    }

    /// Records a counted comparison between the given indices.
    #[inline]
    pub(crate) fn compare(&mut self, comparing: &[usize], description: impl Into<String>) {
        self.record(StepKind::Compare, comparing, &[], description);
        self.stats.comparisons += 1;
    }

    /// Exchanges two working values and counts the swap. `a == b` still counts.
    #[inline]
    pub(crate) fn exchange(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.stats.swaps += 1;
    }

    #[inline]
    pub(crate) fn count_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    #[inline]
    pub(crate) fn count_swap(&mut self) {
        self.stats.swaps += 1;
    }

    /// Returns `true` if `index` was newly marked.
    #[inline]
    pub(crate) fn mark_sorted(&mut self, index: usize) -> bool {
        self.sorted.insert(index)
    }

    /// Marks every index sorted and emits the terminal step.
    pub(crate) fn finish(&mut self, description: impl Into<String>) {
        self.sorted.fill();
        self.record(StepKind::Finish, &[], &[], description);
    }

    pub(crate) fn into_trace(self) -> Trace {
        debug!(
            target: "sortrace::sorts",
            algorithm = %self.algorithm,
            len = self.values.len(),
            steps = self.steps.len(),
            comparisons = self.stats.comparisons,
            swaps = self.stats.swaps,
            "trace complete"
        );

        Trace {
            algorithm: self.algorithm,
            steps: self.steps,
            stats: self.stats,
        }
    }
}
