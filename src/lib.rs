//! # sortrace
//!
//! sortrace runs classical comparison sorts over a sequence of integers and records every
//! observable micro-operation as a replayable step, ready to be drawn by a visualizer.
//!
//! ## Usage
//!
//! In the simplest case, call `sort_trace` on a `Vec<i64>` or `[i64]` with the algorithm you want
//! to watch. The input is copied; the returned `Trace` holds the full step log and the running
//! comparison and swap counters.
//!
//! ```
//! use sortrace::{Algorithm, SortTrace};
//!
//! let values: Vec<i64> = vec![5, 3, 8, 1, 9];
//! let trace = values.sort_trace(Algorithm::Bubble);
//!
//! assert_eq!(trace.stats.comparisons, 10);
//! assert_eq!(trace.final_values(), vec![1, 3, 5, 8, 9]);
//! ```
//!
//! For more control, use the builder:
//!
//! ```
//! use sortrace::{Algorithm, SortTrace};
//!
//! let values: Vec<i64> = vec![4, 4, 1];
//! let traces = values.trace_builder().with_max_len(512).trace_all().unwrap();
//!
//! assert_eq!(traces.len(), Algorithm::ALL.len());
//! ```
//!
//! ## Algorithms
//!
//!  * `Bubble` - adjacent-pair bubbling with an early exit after a pass without swaps
//!  * `Selection` - min-finding, one exchange per position at most
//!  * `Insertion` - shift-based insertion into a sorted prefix
//!  * `Merge` - recursive top-down merge sort
//!  * `Quick` - recursive quick sort, Lomuto partition with the rightmost pivot
//!
//! ## Steps
//!
//! Each `Step` is a full snapshot of the working array, the index sets the step highlights
//! (`comparing`, `swapping`, `sorted`) and a human-readable description. Every element carries a
//! status resolved with the priority `sorted > comparing > swapping > unsorted`. Snapshots of
//! swapping steps are taken before the exchange lands; the following step shows the result.
//!
//! The trace is computed eagerly. Bound the input size with `TraceBuilder::with_max_len` when
//! accepting input from users; the step log of the quadratic algorithms grows with n² snapshots.
//!
//! ## Logging
//!
//! Engines emit `tracing` events at debug level under the `sortrace::sorts` target. No
//! subscriber is installed by this crate.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.


mod algorithm;
mod algorithm_info;
mod cursor;
mod error;
pub mod generator;
mod recorder;
mod sort_trace;
pub mod sorts;
mod trace;
mod trace_builder;
mod tracer;
mod utils;

#[cfg(test)]
pub(crate) use utils::test_utils;

pub use algorithm::Algorithm;
pub use algorithm_info::{describe, AlgorithmInfo, TimeComplexity};
pub use cursor::Cursor;
pub use error::{Result, TraceError};
pub use generator::generate;
pub use sort_trace::SortTrace;
pub use trace::{Element, ElementStatus, Stats, Step, StepKind, Trace};
pub use trace_builder::TraceBuilder;
