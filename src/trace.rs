//! The trace data model shared by every engine.
//!
//! A [`Trace`] is produced once per sort invocation and is never mutated afterwards. Each
//! [`Step`] owns a full snapshot of the working array, so steps can be replayed in any order
//! without reference to the engine that produced them.

use crate::Algorithm;
use serde::{Deserialize, Serialize};

/// Presentation role of a single element within one step.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementStatus {
    Unsorted,
    Comparing,
    Swapping,
    Sorted,
}

/// One value of a snapshot together with its status.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub value: i64,
    pub status: ElementStatus,
}

/// The micro-operation a step models.
///
/// Only `Compare` steps correspond to a counted comparison. `Highlight` steps use the
/// comparing colour without comparing anything (a candidate minimum, a pivot, a range about
/// to be divided or merged).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Start,
    Compare,
    Highlight,
    Swap,
    Settle,
    Finish,
}

/// A full snapshot of the working array plus the indices highlighted at that moment.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub array: Vec<Element>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    /// Ascending.
    pub sorted: Vec<usize>,
    pub description: String,
}

impl Step {
    /// The raw values of this snapshot, without statuses.
    pub fn values(&self) -> Vec<i64> {
        self.array.iter().map(|e| e.value).collect()
    }

    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.binary_search(&index).is_ok()
    }
}

/// Running comparison and swap counters of a single sort invocation.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
}

/// The ordered step log of one sort invocation and its final counters.
///
/// ```
/// use sortrace::{Algorithm, StepKind};
///
/// let trace = Algorithm::Selection.trace(&[2, 1]);
///
/// assert_eq!(trace.first().unwrap().kind, StepKind::Start);
/// assert_eq!(trace.final_values(), vec![1, 2]);
/// assert_eq!(trace.stats.swaps, 1);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub algorithm: Algorithm,
    pub steps: Vec<Step>,
    pub stats: Stats,
}

impl Trace {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for traces produced by an engine, which start with an initializer step.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Values held by the final snapshot; this is the input sorted ascending.
    pub fn final_values(&self) -> Vec<i64> {
        self.last().map(Step::values).unwrap_or_default()
    }

    pub fn count_kind(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }
}
