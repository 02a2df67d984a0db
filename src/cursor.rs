//! `Cursor` walks a finished trace one step at a time.
//!
//! It holds no timers and never re-runs an engine. Driving it on a schedule is up to the
//! caller.

use crate::trace::{Step, Trace};

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    trace: &'a Trace,
    index: usize,
    // Set once iteration has yielded the last step
    exhausted: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self {
            trace,
            index: 0,
            exhausted: false,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a Step> {
        self.trace.get(self.index)
    }

    /// Advances one step. Returns the new step, or `None` if already at the end.
    pub fn step_forward(&mut self) -> Option<&'a Step> {
        if self.index + 1 >= self.trace.len() {
            return None;
        }

        self.index += 1;
        self.current()
    }

    /// Rewinds one step. Returns the new step, or `None` if already at the start.
    pub fn step_back(&mut self) -> Option<&'a Step> {
        if self.index == 0 {
            return None;
        }

        self.index -= 1;
        self.exhausted = false;
        self.current()
    }

    /// Moves to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) -> Option<&'a Step> {
        self.index = index.min(self.trace.len().saturating_sub(1));
        self.exhausted = false;
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.exhausted = false;
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.trace.len()
    }

    /// Fraction of the trace played, from 0.0 at the first step to 1.0 at the last.
    pub fn progress(&self) -> f64 {
        match self.trace.len() {
            0 | 1 => 1.0,
            n => self.index as f64 / (n - 1) as f64,
        }
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Step;

    /// Yields the current step, then advances. Exhausted once the last step has been yielded;
    /// the cursor stays on that step.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let step = self.current()?;

        if self.is_at_end() {
            self.exhausted = true;
        } else {
            self.index += 1;
        }

        Some(step)
    }
}
