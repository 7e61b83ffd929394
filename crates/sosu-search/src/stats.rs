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

use crate::strategy::Strategy;

/// Statistics collected during a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The arithmetic regime the run used.
    pub strategy: Strategy,
    /// Number of candidates tested for primality, including the prime.
    pub candidates_examined: u64,
    /// Number of trial divisions performed across all candidates.
    pub trial_divisions: u64,
    /// Total duration of the search.
    pub search_duration: std::time::Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Strategy: {}", self.strategy)?;
        writeln!(f, "  Candidates Examined: {}", self.candidates_examined)?;
        writeln!(f, "  Trial Divisions: {}", self.trial_divisions)?;
        writeln!(
            f,
            "  Search Duration (secs): {:.5}",
            self.search_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    strategy: Strategy,
    candidates_examined: u64,
    trial_divisions: u64,
    search_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategy: Strategy::FixedPrecision,
            candidates_examined: 0,
            trial_divisions: 0,
            search_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the strategy used.
    #[inline]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the number of candidates examined.
    #[inline]
    pub fn candidates_examined(mut self, candidates_examined: u64) -> Self {
        self.candidates_examined = candidates_examined;
        self
    }

    /// Sets the number of trial divisions performed.
    #[inline]
    pub fn trial_divisions(mut self, trial_divisions: u64) -> Self {
        self.trial_divisions = trial_divisions;
        self
    }

    /// Sets the total search duration.
    #[inline]
    pub fn search_duration(mut self, search_duration: std::time::Duration) -> Self {
        self.search_duration = search_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            strategy: self.strategy,
            candidates_examined: self.candidates_examined,
            trial_divisions: self.trial_divisions,
            search_duration: self.search_duration,
        }
    }
}
