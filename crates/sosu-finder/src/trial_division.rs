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

//! # Trial Division Engine
//!
//! The prime search loop, written once and instantiated per arithmetic
//! regime. Starting at `n + 1`, each candidate is divided by every integer
//! from `2` up to and including `floor(sqrt(candidate))`. The first exact
//! division marks the candidate composite and the search moves on to the
//! next one; a candidate with no divisor in that range is prime.
//!
//! ## Highlights
//!
//! - Generic over `SearchNumeric`, so `u64` and `BigUint` share the loop.
//! - Candidates below `2` are never accepted, so searching above `0` yields `2`.
//! - The square-root bound is computed once per candidate.
//! - The monitor is polled on every trial division and may stop the search.
//!   With `NoOpMonitor` the loop is unbounded and the polling compiles away.
//! - Fixed-width types report an overflow instead of wrapping when the next
//!   candidate is not representable.

use sosu_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use sosu_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SearchNumeric,
};

/// Why a search stopped without a prime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchAbort {
    /// The next candidate does not fit the arithmetic type.
    #[error("candidate exceeded the range of {type_name}")]
    Overflow {
        /// The name of the arithmetic type.
        type_name: &'static str,
    },
    /// A monitor requested termination.
    #[error("{0}")]
    Terminated(String),
}

/// The primality verdict for a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Prime,
    Composite,
    Interrupted(String),
}

/// Trial-division search state over numbers of type `T`.
///
/// Keeps running totals across calls, so one engine can be reused for
/// several searches when aggregate counts are wanted.
#[derive(Debug, Clone)]
pub struct TrialDivision<T> {
    first_divisor: T,
    candidates_examined: u64,
    trial_divisions: u64,
}

impl<T> Default for TrialDivision<T>
where
    T: SearchNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TrialDivision<T>
where
    T: SearchNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            first_divisor: T::first_divisor(),
            candidates_examined: 0,
            trial_divisions: 0,
        }
    }

    /// Number of candidates tested so far.
    #[inline]
    pub fn candidates_examined(&self) -> u64 {
        self.candidates_examined
    }

    /// Number of trial divisions performed so far.
    #[inline]
    pub fn trial_divisions(&self) -> u64 {
        self.trial_divisions
    }

    /// Tests a single candidate for primality.
    pub fn test_candidate<M>(&mut self, candidate: &T, monitor: &mut M) -> Verdict
    where
        M: SearchMonitor<T> + ?Sized,
    {
        if *candidate < self.first_divisor {
            return Verdict::Composite;
        }

        let bound = candidate.floor_sqrt();
        let mut divisor = self.first_divisor.clone();
        while divisor <= bound {
            self.trial_divisions = self.trial_divisions.saturating_add_val(1);
            monitor.on_step();
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                return Verdict::Interrupted(reason);
            }

            if candidate.is_divisible_by(&divisor) {
                return Verdict::Composite;
            }

            // `divisor <= floor(sqrt(candidate))`, so its successor always fits.
            if !divisor.try_increment() {
                break;
            }
        }

        Verdict::Prime
    }

    /// Returns the smallest prime strictly greater than `n`.
    ///
    /// # Errors
    ///
    /// - [`SearchAbort::Terminated`] if the monitor stops the search.
    /// - [`SearchAbort::Overflow`] if the next candidate is not representable
    ///   in `T`. Never returned for `BigUint`.
    pub fn next_prime_after<M>(&mut self, n: &T, monitor: &mut M) -> Result<T, SearchAbort>
    where
        M: SearchMonitor<T> + ?Sized,
    {
        let mut candidate = n.clone();
        loop {
            if !candidate.try_increment() {
                return Err(SearchAbort::Overflow {
                    type_name: std::any::type_name::<T>(),
                });
            }

            self.candidates_examined = self.candidates_examined.saturating_add_val(1);
            monitor.on_candidate(&candidate);

            match self.test_candidate(&candidate, monitor) {
                Verdict::Prime => {
                    monitor.on_prime_found(&candidate);
                    return Ok(candidate);
                }
                Verdict::Composite => {}
                Verdict::Interrupted(reason) => return Err(SearchAbort::Terminated(reason)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use sosu_search::monitor::{
        interrupt::InterruptMonitor, no_op::NoOpMonitor, time_limit::TimeLimitMonitor,
    };
    use std::sync::{Arc, atomic::AtomicBool};
    use std::time::Duration;

    fn is_prime_naive(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_small_values_are_classified() {
        let mut engine = TrialDivision::<u64>::new();
        let mut monitor = NoOpMonitor::new();
        assert_eq!(engine.test_candidate(&0, &mut monitor), Verdict::Composite);
        assert_eq!(engine.test_candidate(&1, &mut monitor), Verdict::Composite);
        assert_eq!(engine.test_candidate(&2, &mut monitor), Verdict::Prime);
        assert_eq!(engine.test_candidate(&3, &mut monitor), Verdict::Prime);
        assert_eq!(engine.test_candidate(&4, &mut monitor), Verdict::Composite);
        assert_eq!(engine.test_candidate(&25, &mut monitor), Verdict::Composite);
        assert_eq!(engine.test_candidate(&104_729, &mut monitor), Verdict::Prime);
    }

    #[test]
    fn test_verdicts_match_naive_primality() {
        let mut engine = TrialDivision::<u64>::new();
        let mut big_engine = TrialDivision::<BigUint>::new();
        let mut monitor = NoOpMonitor::new();
        for n in 0u64..2_000 {
            let expected = if is_prime_naive(n) {
                Verdict::Prime
            } else {
                Verdict::Composite
            };
            assert_eq!(engine.test_candidate(&n, &mut monitor), expected, "n={n}");
            assert_eq!(
                big_engine.test_candidate(&BigUint::from(n), &mut monitor),
                expected,
                "n={n}"
            );
        }
    }

    #[test]
    fn test_next_prime_after_small_values() {
        let mut engine = TrialDivision::<u64>::new();
        let mut monitor = NoOpMonitor::new();
        let cases = [(0, 2), (1, 2), (2, 3), (3, 5), (10, 11), (13, 17), (7900, 7901)];
        for (n, expected) in cases {
            assert_eq!(engine.next_prime_after(&n, &mut monitor), Ok(expected), "n={n}");
        }
    }

    #[test]
    fn test_counters_accumulate() {
        let mut engine = TrialDivision::<u64>::new();
        let mut monitor = NoOpMonitor::new();
        // 8 (divided by 2), 9 (2, 3), 10 (2), 11 (2, 3): four candidates, six divisions.
        assert_eq!(engine.next_prime_after(&7, &mut monitor), Ok(11));
        assert_eq!(engine.candidates_examined(), 4);
        assert_eq!(engine.trial_divisions(), 6);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut engine = TrialDivision::<u32>::new();
        let mut monitor = NoOpMonitor::new();
        // u32::MAX - 4 = 4294967291 is the largest 32-bit prime.
        assert_eq!(
            engine.next_prime_after(&(u32::MAX - 4), &mut monitor),
            Err(SearchAbort::Overflow { type_name: "u32" })
        );
        assert_eq!(
            engine.next_prime_after(&(u32::MAX - 5), &mut monitor),
            Ok(u32::MAX - 4)
        );
    }

    #[test]
    fn test_interrupt_stops_the_search() {
        let flag = Arc::new(AtomicBool::new(true));
        let mut engine = TrialDivision::<BigUint>::new();
        let mut monitor = InterruptMonitor::new(flag);
        assert_eq!(
            engine.next_prime_after(&BigUint::from(1_000u32), &mut monitor),
            Err(SearchAbort::Terminated("interrupted".to_string()))
        );
    }

    #[test]
    fn test_time_limit_stops_the_search() {
        let mut engine = TrialDivision::<u64>::new();
        let mut monitor = TimeLimitMonitor::with_clock_check_mask(Duration::ZERO, 0);
        let result = engine.next_prime_after(&100, &mut monitor);
        assert!(
            matches!(result, Err(SearchAbort::Terminated(ref reason)) if reason.contains("time limit")),
            "got {:?}",
            result
        );
    }

    #[test]
    fn test_abort_display() {
        assert_eq!(
            SearchAbort::Overflow { type_name: "u64" }.to_string(),
            "candidate exceeded the range of u64"
        );
        assert_eq!(
            SearchAbort::Terminated("time limit reached".into()).to_string(),
            "time limit reached"
        );
    }
}
