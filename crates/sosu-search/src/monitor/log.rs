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

//! # Progress Log Monitor
//!
//! Reports on a long search through `tracing` at `info` level: one event
//! when it starts, one every `interval` while it runs, and one when it ends.
//! Each progress event carries the elapsed time, the number of candidates
//! tested, the number of trial divisions, and the candidate under test.
//!
//! The clock is read only on steps where `steps & clock_check_mask == 0`,
//! the same filter the time limit monitor uses. An interval too large to
//! schedule disables the periodic events.

use crate::{monitor::search_monitor::SearchMonitor, num::SearchNumeric};
use std::time::{Duration, Instant};

/// Default interval between progress events.
pub const DEFAULT_LOG_INTERVAL: Duration = Duration::from_secs(1);

/// Default clock check mask: once every 65,536 trial divisions.
pub const DEFAULT_CLOCK_CHECK_MASK: u64 = 0xFFFF;

/// Counters for the search in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress<T> {
    pub candidates: u64,
    pub divisions: u64,
    pub candidate: Option<T>,
}

#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    interval: Duration,
    clock_check_mask: u64,
    started: Instant,
    next_log_at: Option<Instant>,
    progress: Progress<T>,
}

impl<T> LogMonitor<T>
where
    T: SearchNumeric,
{
    pub fn new(interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            interval,
            clock_check_mask,
            started: now,
            next_log_at: now.checked_add(interval),
            progress: Progress {
                candidates: 0,
                divisions: 0,
                candidate: None,
            },
        }
    }

    #[inline]
    pub fn log_interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn progress(&self) -> &Progress<T> {
        &self.progress
    }

    fn report(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.started).as_secs_f64();
        let Progress {
            candidates,
            divisions,
            candidate,
        } = &self.progress;

        match candidate {
            Some(candidate) => tracing::info!(
                elapsed = format_args!("{elapsed:.1}s"),
                candidates,
                divisions,
                %candidate,
                "search in progress"
            ),
            None => tracing::info!(
                elapsed = format_args!("{elapsed:.1}s"),
                divisions,
                "search in progress"
            ),
        }

        self.next_log_at = now.checked_add(self.interval);
    }
}

impl<T> Default for LogMonitor<T>
where
    T: SearchNumeric,
{
    fn default() -> Self {
        Self::new(DEFAULT_LOG_INTERVAL, DEFAULT_CLOCK_CHECK_MASK)
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(every {:.3}s)", self.interval.as_secs_f64())
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, start: &T) {
        self.started = Instant::now();
        self.next_log_at = self.started.checked_add(self.interval);
        self.progress = Progress {
            candidates: 0,
            divisions: 0,
            candidate: None,
        };
        tracing::info!(%start, "searching for the next prime");
    }

    fn on_candidate(&mut self, candidate: &T) {
        self.progress.candidates = self.progress.candidates.wrapping_add(1);
        match &mut self.progress.candidate {
            Some(current) => current.clone_from(candidate),
            slot => *slot = Some(candidate.clone()),
        }
    }

    #[inline(always)]
    fn on_step(&mut self) {
        self.progress.divisions = self.progress.divisions.wrapping_add(1);
        if self.progress.divisions & self.clock_check_mask != 0 {
            return;
        }
        let Some(next_log_at) = self.next_log_at else {
            return;
        };
        let now = Instant::now();
        if now >= next_log_at {
            self.report(now);
        }
    }

    fn on_prime_found(&mut self, prime: &T) {
        tracing::info!(%prime, candidates = self.progress.candidates, "prime found");
    }

    fn on_exit_search(&mut self) {
        tracing::info!(
            elapsed = format_args!("{:.5}s", self.started.elapsed().as_secs_f64()),
            candidates = self.progress.candidates,
            divisions = self.progress.divisions,
            "search finished"
        );
    }
}
