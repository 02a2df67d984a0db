use crate::error::TraceError;
use crate::trace::Trace;
use crate::tracer::run_trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the instrumented engines.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Short identifier, e.g. `"bubble"`.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Display name, e.g. `"Bubble Sort"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Runs this algorithm's engine over `values`.
    ///
    /// ```
    /// use sortrace::Algorithm;
    ///
    /// let trace = Algorithm::Quick.trace(&[3, 1, 2]);
    ///
    /// assert_eq!(trace.final_values(), vec![1, 2, 3]);
    /// ```
    pub fn trace(self, values: &[i64]) -> Trace {
        run_trace(self, values)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    /// Accepts the identifier or the display name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        let needle = needle.strip_suffix(" sort").unwrap_or(&needle);

        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == needle)
            .ok_or_else(|| TraceError::UnknownAlgorithm(s.to_string()))
    }
}
