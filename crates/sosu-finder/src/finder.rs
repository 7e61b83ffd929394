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

//! # Next-Prime Finder
//!
//! Strategy dispatch on top of the trial-division engine.
//!
//! ## Entry points
//!
//! - [`find_next_prime`]: the plain search. Selects the strategy from the
//!   magnitude of the input, runs until a prime is found, and returns the
//!   prime with its digit count and the elapsed wall-clock time. There is no
//!   timeout: very large inputs can take arbitrarily long.
//! - [`find_next_prime_with`]: the same search with the strategy forced,
//!   which is how the two regimes are cross-checked against each other.
//! - [`NextPrimeFinder`]: a configured search. Optional time limit, optional
//!   interrupt flag, optional progress logging, optional strategy override.
//!   Returns a [`SearchOutcome`] with statistics, which may be aborted.
//!
//! ## Usage
//!
//! ```rust
//! use sosu_finder::finder::NextPrimeFinder;
//! use sosu_model::number::ValidatedNumber;
//! use std::time::Duration;
//!
//! let finder = NextPrimeFinder::builder()
//!     .with_time_limit(Duration::from_secs(30))
//!     .build();
//!
//! let outcome = finder.search(&ValidatedNumber::from(10u64));
//! assert!(outcome.is_found());
//! assert_eq!(outcome.result().unwrap().prime().to_string(), "11");
//! ```

use crate::trial_division::{SearchAbort, TrialDivision};
use num_bigint::BigUint;
use sosu_core::num::ops::trial_arithmetic::TrialArithmetic;
use sosu_model::number::ValidatedNumber;
use sosu_search::{
    monitor::{
        composite::CompositeMonitor,
        interrupt::InterruptMonitor,
        log::{self, LogMonitor},
        no_op::NoOpMonitor,
        search_monitor::SearchMonitor,
        time_limit::TimeLimitMonitor,
    },
    num::SearchNumeric,
    result::{SearchOutcome, SearchResult},
    stats::SearchStatisticsBuilder,
    strategy::Strategy,
};
use std::sync::{Arc, atomic::AtomicBool};
use std::time::{Duration, Instant};

/// The error type for a search with a forced strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinderError {
    /// The input does not fit the arithmetic of the forced strategy.
    #[error("{value} is outside the range of the {strategy} strategy")]
    OutOfRange { value: BigUint, strategy: Strategy },
    /// The search stopped before finding a prime.
    #[error(transparent)]
    Aborted(#[from] SearchAbort),
}

/// Returns the smallest prime strictly greater than `n`.
///
/// Values at or below the safe-integer threshold are searched in `u64`,
/// larger values in `BigUint`. The search is deterministic and unbounded.
///
/// # Panics
///
/// Never for a [`ValidatedNumber`]: native values sit far enough below
/// `u64::MAX` that no candidate overflows, `BigUint` cannot overflow, and no
/// monitor is installed that could stop the search.
pub fn find_next_prime(n: &ValidatedNumber) -> SearchResult {
    let strategy = Strategy::for_number(n);
    match find_next_prime_with(n, strategy) {
        Ok(result) => result,
        Err(error) => unreachable!("unbounded {strategy} search above {n} failed: {error}"),
    }
}

/// Returns the smallest prime strictly greater than `n`, searching with the
/// given strategy regardless of the magnitude of `n`.
///
/// # Errors
///
/// - [`FinderError::OutOfRange`] if `strategy` is fixed precision and `n`
///   does not fit in a `u64`.
/// - [`FinderError::Aborted`] if the fixed-precision search runs past
///   `u64::MAX`.
pub fn find_next_prime_with(
    n: &ValidatedNumber,
    strategy: Strategy,
) -> Result<SearchResult, FinderError> {
    tracing::debug!(%n, %strategy, "searching for the next prime");

    let started = Instant::now();
    let mut monitor = NoOpMonitor::new();
    let prime = match strategy {
        Strategy::FixedPrecision => {
            let value = n
                .magnitude()
                .to_u64()
                .ok_or_else(|| FinderError::OutOfRange {
                    value: n.to_biguint(),
                    strategy,
                })?;
            TrialDivision::<u64>::new()
                .next_prime_after(&value, &mut monitor)?
                .to_biguint()
        }
        Strategy::ArbitraryPrecision => {
            TrialDivision::<BigUint>::new().next_prime_after(&n.to_biguint(), &mut monitor)?
        }
    };
    let result = SearchResult::new(prime, started.elapsed());

    tracing::debug!(
        prime = %result.prime(),
        digits = result.digit_count(),
        elapsed = format_args!("{:.5}s", result.elapsed_seconds()),
        "next prime found"
    );
    Ok(result)
}

/// A configured next-prime search.
///
/// Without any options set, a search behaves like [`find_next_prime`] and
/// runs until it finds a prime.
#[derive(Debug, Clone, Default)]
pub struct NextPrimeFinder {
    time_limit: Option<Duration>,
    interrupt: Option<Arc<AtomicBool>>,
    progress_interval: Option<Duration>,
    strategy: Option<Strategy>,
}

impl NextPrimeFinder {
    /// Creates a finder with no limits, no logging, and automatic strategy
    /// selection.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn builder() -> NextPrimeFinderBuilder {
        NextPrimeFinderBuilder::new()
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn has_time_limit(&self) -> bool {
        self.time_limit.is_some()
    }

    #[inline]
    pub fn interrupt(&self) -> Option<&Arc<AtomicBool>> {
        self.interrupt.as_ref()
    }

    #[inline]
    pub fn progress_interval(&self) -> Option<Duration> {
        self.progress_interval
    }

    #[inline]
    pub fn strategy_override(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Searches for the smallest prime strictly greater than `n`.
    pub fn search(&self, n: &ValidatedNumber) -> SearchOutcome {
        let strategy = self.strategy.unwrap_or_else(|| Strategy::for_number(n));
        match strategy {
            Strategy::FixedPrecision => match n.magnitude().to_u64() {
                Some(value) => self.run(value, strategy),
                None => {
                    let error = FinderError::OutOfRange {
                        value: n.to_biguint(),
                        strategy,
                    };
                    let stats = SearchStatisticsBuilder::new().strategy(strategy).build();
                    SearchOutcome::aborted(error.to_string(), stats)
                }
            },
            Strategy::ArbitraryPrecision => self.run(n.to_biguint(), strategy),
        }
    }

    fn build_monitor<T>(&self) -> CompositeMonitor<'_, T>
    where
        T: SearchNumeric,
    {
        let mut monitor = CompositeMonitor::with_capacity(3);

        if let Some(flag) = &self.interrupt {
            monitor.add_monitor(InterruptMonitor::new(Arc::clone(flag)));
        }

        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }

        if let Some(interval) = self.progress_interval {
            monitor.add_monitor(LogMonitor::<T>::new(interval, log::DEFAULT_CLOCK_CHECK_MASK));
        }

        monitor
    }

    fn run<T>(&self, start: T, strategy: Strategy) -> SearchOutcome
    where
        T: SearchNumeric,
    {
        let mut monitor = self.build_monitor::<T>();
        tracing::debug!(%start, %strategy, monitors = %monitor, "starting configured search");

        let started = Instant::now();
        monitor.on_enter_search(&start);
        let mut engine = TrialDivision::<T>::new();
        let found = engine.next_prime_after(&start, &mut monitor);
        monitor.on_exit_search();
        let elapsed = started.elapsed();

        let stats = SearchStatisticsBuilder::new()
            .strategy(strategy)
            .candidates_examined(engine.candidates_examined())
            .trial_divisions(engine.trial_divisions())
            .search_duration(elapsed)
            .build();

        match found {
            Ok(prime) => SearchOutcome::found(SearchResult::new(prime.to_biguint(), elapsed), stats),
            Err(abort) => {
                tracing::debug!(%abort, "search aborted");
                SearchOutcome::aborted(abort.to_string(), stats)
            }
        }
    }
}

/// Builder for [`NextPrimeFinder`].
#[derive(Debug, Clone, Default)]
pub struct NextPrimeFinderBuilder {
    time_limit: Option<Duration>,
    interrupt: Option<Arc<AtomicBool>>,
    progress_interval: Option<Duration>,
    strategy: Option<Strategy>,
}

impl NextPrimeFinderBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the search once `limit` has elapsed.
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Stops the search once `flag` is set to `true`.
    #[inline]
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Emits a `tracing` progress event every `interval`.
    #[inline]
    pub fn with_progress_log(mut self, interval: Duration) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    /// Forces a strategy instead of selecting it from the input magnitude.
    #[inline]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    #[inline]
    pub fn build(self) -> NextPrimeFinder {
        NextPrimeFinder {
            time_limit: self.time_limit,
            interrupt: self.interrupt,
            progress_interval: self.progress_interval,
            strategy: self.strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sosu_core::num::constants::SAFE_INTEGER_THRESHOLD;
    use sosu_search::result::TerminationReason;
    use std::sync::atomic::Ordering;

    fn prime_after(n: u64) -> String {
        find_next_prime(&ValidatedNumber::from(n)).prime().to_string()
    }

    #[test]
    fn test_ten_yields_eleven() {
        let n = ValidatedNumber::from(10u64);
        assert_eq!(Strategy::for_number(&n), Strategy::FixedPrecision);

        let result = find_next_prime(&n);
        assert_eq!(result.prime(), &BigUint::from(11u32));
        assert_eq!(n.input_len(), 2);
        assert_eq!(result.digit_count(), 2);
    }

    #[test]
    fn test_seven_thousand_nine_hundred_yields_7901() {
        assert_eq!(prime_after(7900), "7901");
    }

    #[test]
    fn test_smallest_inputs() {
        assert_eq!(prime_after(0), "2");
        assert_eq!(prime_after(1), "2");
        assert_eq!(prime_after(2), "3");
        assert_eq!(prime_after(3), "5");
    }

    #[test]
    fn test_search_is_idempotent() {
        let n = ValidatedNumber::from(1_000_000u64);
        let first = find_next_prime(&n);
        let second = find_next_prime(&n);
        assert_eq!(first.prime(), second.prime());
        assert_eq!(first.prime(), &BigUint::from(1_000_003u32));
    }

    #[test]
    fn test_threshold_uses_fixed_precision() {
        let n = ValidatedNumber::from(SAFE_INTEGER_THRESHOLD);
        assert_eq!(Strategy::for_number(&n), Strategy::FixedPrecision);

        let result = find_next_prime(&n);
        assert_eq!(result.prime().to_string(), "9007199254740881");
        assert_eq!(result.digit_count(), 16);
    }

    #[test]
    #[ignore = "about 10^8 big-integer divisions; run with --ignored"]
    fn test_above_threshold_uses_arbitrary_precision() {
        let n = ValidatedNumber::from(SAFE_INTEGER_THRESHOLD + 1);
        assert_eq!(Strategy::for_number(&n), Strategy::ArbitraryPrecision);

        let result = find_next_prime(&n);
        assert_eq!(result.prime().to_string(), "9007199254740997");
        assert_eq!(result.digit_count(), 16);
    }

    #[test]
    fn test_beyond_u64_uses_arbitrary_precision() {
        // The next prime is 10^20 + 39, which takes ~10^10 divisions to
        // confirm; the time limit keeps the test short.
        let n = ValidatedNumber::from(BigUint::from(10u32).pow(20));
        assert_eq!(Strategy::for_number(&n), Strategy::ArbitraryPrecision);

        let finder = NextPrimeFinder::builder()
            .with_time_limit(Duration::from_millis(200))
            .build();
        let outcome = finder.search(&n);
        assert_eq!(outcome.statistics().strategy, Strategy::ArbitraryPrecision);
        assert!(outcome.is_aborted());
        assert!(outcome.statistics().candidates_examined >= 1);
    }

    #[test]
    fn test_forced_strategies_agree() {
        for n in [0u64, 1, 2, 10, 89, 7900, 65_521, 999_983] {
            let number = ValidatedNumber::from(n);
            let fixed = find_next_prime_with(&number, Strategy::FixedPrecision).unwrap();
            let arbitrary = find_next_prime_with(&number, Strategy::ArbitraryPrecision).unwrap();
            assert_eq!(fixed.prime(), arbitrary.prime(), "n={n}");
            assert_eq!(fixed.digit_count(), arbitrary.digit_count(), "n={n}");
        }
    }

    #[test]
    fn test_forced_fixed_precision_out_of_range() {
        let value = BigUint::from(u64::MAX) + 1u32;
        let n = ValidatedNumber::from(value.clone());
        assert_eq!(
            find_next_prime_with(&n, Strategy::FixedPrecision),
            Err(FinderError::OutOfRange {
                value,
                strategy: Strategy::FixedPrecision
            })
        );
    }

    #[test]
    fn test_unconfigured_finder_matches_plain_search() {
        let finder = NextPrimeFinder::new();
        assert!(!finder.has_time_limit());
        assert!(finder.interrupt().is_none());

        let outcome = finder.search(&ValidatedNumber::from(7900u64));
        assert!(outcome.is_found());
        assert_eq!(outcome.reason(), &TerminationReason::PrimeFound);
        assert_eq!(
            outcome.result().map(|r| r.prime().to_string()),
            Some("7901".to_string())
        );

        let stats = outcome.statistics();
        assert_eq!(stats.strategy, Strategy::FixedPrecision);
        assert_eq!(stats.candidates_examined, 1);
        // floor(sqrt(7901)) = 88
        assert_eq!(stats.trial_divisions, 87);
    }

    #[test]
    fn test_finder_strategy_override() {
        let finder = NextPrimeFinder::builder()
            .with_strategy(Strategy::ArbitraryPrecision)
            .with_progress_log(Duration::from_secs(60))
            .build();
        assert_eq!(finder.strategy_override(), Some(Strategy::ArbitraryPrecision));
        assert_eq!(finder.progress_interval(), Some(Duration::from_secs(60)));

        let outcome = finder.search(&ValidatedNumber::from(10u64));
        assert_eq!(outcome.statistics().strategy, Strategy::ArbitraryPrecision);
        assert_eq!(
            outcome.result().map(|r| r.prime().clone()),
            Some(BigUint::from(11u32))
        );
    }

    #[test]
    fn test_finder_forced_fixed_precision_out_of_range_aborts() {
        let finder = NextPrimeFinder::builder()
            .with_strategy(Strategy::FixedPrecision)
            .build();
        let outcome = finder.search(&ValidatedNumber::from(BigUint::from(10u32).pow(25)));
        assert!(outcome.is_aborted());
        assert_eq!(outcome.statistics().candidates_examined, 0);
    }

    #[test]
    fn test_finder_interrupt_aborts() {
        let flag = Arc::new(AtomicBool::new(false));
        let finder = NextPrimeFinder::builder()
            .with_interrupt(Arc::clone(&flag))
            .build();

        flag.store(true, Ordering::Relaxed);
        let outcome = finder.search(&ValidatedNumber::from(1_000u64));
        assert!(outcome.is_aborted());
        assert!(outcome.result().is_none());
        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("interrupted".to_string())
        );
    }

    #[test]
    fn test_finder_time_limit_aborts_long_search() {
        let finder = NextPrimeFinder::builder()
            .with_time_limit(Duration::ZERO)
            .build();
        assert_eq!(finder.time_limit(), Some(Duration::ZERO));

        // The first candidate is prime and needs ~9.5 * 10^7 divisions; the
        // limit is checked every 16,384 of them.
        let outcome = finder.search(&ValidatedNumber::from(SAFE_INTEGER_THRESHOLD));
        assert!(outcome.is_aborted());
        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("time limit reached".to_string())
        );
        assert_eq!(outcome.statistics().trial_divisions, 16_384);
    }
}
