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

use crate::stats::SearchStatistics;
use num_bigint::BigUint;
use sosu_core::num::ops::trial_arithmetic::TrialArithmetic;

/// A prime found by a search, with its digit count and the wall-clock time
/// the search took.
///
/// Created once per successful search and never mutated; the next search
/// produces a new value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    prime: BigUint,
    digit_count: usize,
    elapsed: std::time::Duration,
}

impl SearchResult {
    /// Creates a result for `prime`. The digit count is the length of its
    /// decimal rendering.
    #[inline]
    pub fn new(prime: BigUint, elapsed: std::time::Duration) -> Self {
        let digit_count = prime.decimal_digits();
        Self {
            prime,
            digit_count,
            elapsed,
        }
    }

    /// The prime that was found.
    #[inline]
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// The number of decimal digits of the prime.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// The wall-clock duration of the search.
    #[inline]
    pub fn elapsed(&self) -> std::time::Duration {
        self.elapsed
    }

    /// The wall-clock duration of the search in seconds.
    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Consumes the result and returns the prime.
    #[inline]
    pub fn into_prime(self) -> BigUint {
        self.prime
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} digits, {:.5}s)",
            self.prime,
            self.digit_count,
            self.elapsed_seconds()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search found the next prime.
    PrimeFound,
    /// The search was stopped before finding a prime (time limit,
    /// interrupt, or a candidate outside the range of the arithmetic).
    /// The string describes the cause.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::PrimeFound => write!(f, "Prime Found"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Everything a configurable search run reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    result: Option<SearchResult>,
    reason: TerminationReason,
    statistics: SearchStatistics,
}

impl SearchOutcome {
    /// Creates an outcome for a run that found a prime.
    #[inline]
    pub fn found(result: SearchResult, statistics: SearchStatistics) -> Self {
        Self {
            result: Some(result),
            reason: TerminationReason::PrimeFound,
            statistics,
        }
    }

    /// Creates an outcome for a run that stopped without a prime.
    #[inline]
    pub fn aborted<R>(reason: R, statistics: SearchStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: None,
            reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self.reason, TerminationReason::PrimeFound)
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }

    #[inline]
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    #[inline]
    pub fn into_result(self) -> Option<SearchResult> {
        self.result
    }

    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Some(result) => write!(f, "SearchOutcome({}, prime: {})", self.reason, result),
            None => write!(f, "SearchOutcome({})", self.reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SearchStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn test_search_result_counts_digits() {
        let result = SearchResult::new(BigUint::from(7901u32), Duration::from_millis(3));
        assert_eq!(result.prime(), &BigUint::from(7901u32));
        assert_eq!(result.digit_count(), 4);
        assert_eq!(result.elapsed(), Duration::from_millis(3));
    }

    #[test]
    fn test_search_result_elapsed_seconds() {
        let result = SearchResult::new(BigUint::from(11u32), Duration::from_micros(1_500));
        assert!((result.elapsed_seconds() - 0.0015).abs() < 1e-12);
        assert_eq!(result.to_string(), "11 (2 digits, 0.00150s)");
    }

    #[test]
    fn test_outcome_found() {
        let stats = SearchStatisticsBuilder::new().candidates_examined(1).build();
        let outcome = SearchOutcome::found(
            SearchResult::new(BigUint::from(11u32), Duration::ZERO),
            stats.clone(),
        );
        assert!(outcome.is_found());
        assert!(!outcome.is_aborted());
        assert_eq!(outcome.reason(), &TerminationReason::PrimeFound);
        assert_eq!(outcome.statistics(), &stats);
        assert_eq!(
            outcome.into_result().map(SearchResult::into_prime),
            Some(BigUint::from(11u32))
        );
    }

    #[test]
    fn test_outcome_aborted() {
        let outcome = SearchOutcome::aborted("time limit reached", SearchStatisticsBuilder::new().build());
        assert!(outcome.is_aborted());
        assert!(outcome.result().is_none());
        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("time limit reached".to_string())
        );
        assert_eq!(outcome.to_string(), "SearchOutcome(Aborted: time limit reached)");
    }
}
