use crate::error::{Result, TraceError};
use crate::trace::Trace;
use crate::tracer::{run_all, run_trace};
use crate::Algorithm;
use tracing::warn;

pub struct TraceBuilder<'a> {
    data: &'a [i64],
    algorithm: Algorithm,
    max_len: Option<usize>,
    parallel: bool,
}

impl<'a> TraceBuilder<'a> {
    pub(crate) fn new(data: &'a [i64]) -> Self {
        Self {
            data,
            algorithm: Algorithm::default(),
            max_len: None,
            parallel: cfg!(feature = "multi-threaded"),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;

        self
    }

    /// Rejects inputs longer than `max_len`. Traces hold a full snapshot per step, so their
    /// size grows with n² for the quadratic engines.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);

        self
    }

    /// Whether `trace_all` may run the engines concurrently. Has no effect without the
    /// `multi-threaded` feature.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;

        self
    }

    fn check_len(&self) -> Result<()> {
        match self.max_len {
            Some(max) if self.data.len() > max => {
                warn!(
                    target: "sortrace::builder",
                    len = self.data.len(),
                    max,
                    "rejecting oversized input"
                );

                Err(TraceError::InputTooLarge {
                    len: self.data.len(),
                    max,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn trace(self) -> Result<Trace> {
        self.check_len()?;

        Ok(run_trace(self.algorithm, self.data))
    }

    /// One trace per algorithm, in `Algorithm::ALL` order. The configured algorithm is ignored.
    pub fn trace_all(self) -> Result<Vec<Trace>> {
        self.check_len()?;

        Ok(run_all(self.data, self.parallel))
    }
}
