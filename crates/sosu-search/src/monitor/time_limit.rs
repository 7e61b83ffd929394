// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Time Limit Monitor
//!
//! Stops a search once a wall-clock budget is spent.
//!
//! Near the top of the fixed-precision range a single prime takes close to a
//! hundred million trial divisions, and above it the work has no upper bound
//! at all. Reading the clock on every division would dominate the loop, so
//! the clock is only read when the step counter has all bits of
//! `clock_check_mask` clear. The default mask `0x3FFF` reads it once every
//! 16,384 divisions.
//!
//! The budget starts when the search starts (`on_enter_search`), not when
//! the monitor is built.
//!
//! ```rust
//! use sosu_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
//! use sosu_search::monitor::time_limit::TimeLimitMonitor;
//! use std::time::Duration;
//!
//! let mut monitor = TimeLimitMonitor::new(Duration::from_secs(5));
//! SearchMonitor::<u64>::on_enter_search(&mut monitor, &100);
//! SearchMonitor::<u64>::on_step(&mut monitor);
//! assert_eq!(SearchMonitor::<u64>::search_command(&monitor), SearchCommand::Continue);
//! ```

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SearchNumeric,
};
use std::time::{Duration, Instant};

/// Reason reported when the budget runs out.
pub const TIME_LIMIT_REACHED: &str = "time limit reached";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    time_limit: Duration,
    deadline: Option<Instant>,
    clock_check_mask: u64,
    steps: u64,
}

impl TimeLimitMonitor {
    /// Reads the clock every 2^14 steps.
    pub const DEFAULT_CLOCK_CHECK_MASK: u64 = 0x3FFF;

    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self::with_clock_check_mask(time_limit, Self::DEFAULT_CLOCK_CHECK_MASK)
    }

    /// Creates a monitor that reads the clock whenever
    /// `steps & clock_check_mask == 0`. A mask of `0` reads it every step.
    #[inline]
    pub fn with_clock_check_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            time_limit,
            deadline: Instant::now().checked_add(time_limit),
            clock_check_mask,
            steps: 0,
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    #[inline]
    pub fn clock_check_mask(&self) -> u64 {
        self.clock_check_mask
    }

    #[inline(always)]
    fn is_clock_check_step(&self) -> bool {
        self.steps & self.clock_check_mask == 0
    }

    fn is_expired(&self) -> bool {
        // A deadline past the end of `Instant` never expires.
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _start: &T) {
        self.deadline = Instant::now().checked_add(self.time_limit);
        self.steps = 0;
    }

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.is_clock_check_step() && self.is_expired() {
            return SearchCommand::Terminate(TIME_LIMIT_REACHED.to_string());
        }
        SearchCommand::Continue
    }
}
