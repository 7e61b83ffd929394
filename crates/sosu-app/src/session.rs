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

//! # Session State
//!
//! The state of the interactive front end, held explicitly instead of in
//! globals: the text in the input field, whether a search is running, and
//! the last result with its report.
//!
//! ## Search lifecycle
//!
//! 1. `begin_search` validates the current input and hands out a
//!    `SearchTicket` tagged with a fresh `Generation`. The session is busy
//!    until that generation completes, fails, or is cancelled, and refuses a
//!    second search in the meantime.
//! 2. The caller runs the search (see `worker`) and passes the outcome back
//!    to `complete` together with the ticket's generation.
//! 3. `complete` acts on the outcome only if the generation is the one still
//!    pending. A completion for anything else is stale and dropped.
//!
//! A validation failure leaves the session idle and the previous result in
//! place.

use sosu_format::report::{Report, format_report};
use sosu_model::{
    number::ValidatedNumber,
    parsing::{ValidationError, validate},
};
use sosu_search::result::{SearchOutcome, SearchResult, TerminationReason};

/// Minimum width of the input field, in columns.
pub const MIN_INPUT_FIELD_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A search is already running.
    #[error("a search is already running")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SessionError {
    /// The alert shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::Busy => "計算中です。終わるまでお待ちください。",
            SessionError::Validation(error) => error.user_message(),
        }
    }
}

/// Identifies one initiated search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[inline]
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A validated number cleared to be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: Generation,
    number: ValidatedNumber,
}

impl SearchTicket {
    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[inline]
    pub fn number(&self) -> &ValidatedNumber {
        &self.number
    }
}

/// What `Session::complete` did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStatus {
    /// The prime replaced the current result.
    Accepted,
    /// The search stopped without a prime. The current result is unchanged.
    Aborted(String),
    /// The outcome belongs to a search that is no longer pending.
    Stale,
}

/// The last successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    number: ValidatedNumber,
    result: SearchResult,
    report: Report,
}

impl Completed {
    #[inline]
    pub fn number(&self) -> &ValidatedNumber {
        &self.number
    }

    #[inline]
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    #[inline]
    pub fn report(&self) -> &Report {
        &self.report
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    pending: Option<SearchTicket>,
    last_generation: u64,
    current: Option<Completed>,
}

impl Session {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw text of the input field.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the raw text of the input field. Validation happens when a
    /// search begins, not here.
    pub fn set_input<S>(&mut self, input: S)
    where
        S: Into<String>,
    {
        self.input = input.into();
    }

    /// Width of the input field in columns: one per character typed, but at
    /// least [`MIN_INPUT_FIELD_WIDTH`].
    #[inline]
    pub fn input_field_width(&self) -> usize {
        self.input.chars().count().max(MIN_INPUT_FIELD_WIDTH)
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// The search currently running, if any.
    #[inline]
    pub fn pending(&self) -> Option<&SearchTicket> {
        self.pending.as_ref()
    }

    #[inline]
    pub fn current(&self) -> Option<&Completed> {
        self.current.as_ref()
    }

    #[inline]
    pub fn current_result(&self) -> Option<&SearchResult> {
        self.current.as_ref().map(Completed::result)
    }

    #[inline]
    pub fn current_report(&self) -> Option<&Report> {
        self.current.as_ref().map(Completed::report)
    }

    /// Validates the input and marks a search as running.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Busy`] if a search is already running.
    /// - [`SessionError::Validation`] if the input is not a non-negative
    ///   integer. The session stays idle.
    pub fn begin_search(&mut self) -> Result<SearchTicket, SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }

        let number = validate(&self.input)?;
        self.last_generation += 1;
        let ticket = SearchTicket {
            generation: Generation(self.last_generation),
            number,
        };

        tracing::debug!(generation = %ticket.generation, number = %ticket.number, "search started");
        self.pending = Some(ticket.clone());
        Ok(ticket)
    }

    /// Records the outcome of the search with the given generation.
    pub fn complete(&mut self, generation: Generation, outcome: SearchOutcome) -> CompletionStatus {
        let Some(ticket) = self.take_pending(generation) else {
            tracing::debug!(%generation, "dropping stale search outcome");
            return CompletionStatus::Stale;
        };

        let reason = outcome.reason().clone();
        match (outcome.into_result(), reason) {
            (Some(result), _) => {
                let report = format_report(&ticket.number, &result);
                self.current = Some(Completed {
                    number: ticket.number,
                    result,
                    report,
                });
                CompletionStatus::Accepted
            }
            (None, TerminationReason::Aborted(reason)) => CompletionStatus::Aborted(reason),
            (None, TerminationReason::PrimeFound) => {
                CompletionStatus::Aborted("search ended without a result".to_string())
            }
        }
    }

    /// Clears the busy state of a search that ended without an outcome.
    /// Returns `false` if `generation` is not the pending search.
    pub fn fail(&mut self, generation: Generation) -> bool {
        self.take_pending(generation).is_some()
    }

    /// Abandons the pending search, if any. Its outcome will be stale.
    pub fn cancel(&mut self) -> Option<Generation> {
        self.pending.take().map(|ticket| ticket.generation)
    }

    fn take_pending(&mut self, generation: Generation) -> Option<SearchTicket> {
        if self
            .pending
            .as_ref()
            .is_some_and(|ticket| ticket.generation == generation)
        {
            self.pending.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use sosu_search::stats::SearchStatisticsBuilder;
    use std::time::Duration;

    fn found(prime: u32) -> SearchOutcome {
        SearchOutcome::found(
            SearchResult::new(BigUint::from(prime), Duration::from_millis(1)),
            SearchStatisticsBuilder::new().build(),
        )
    }

    fn session_with(input: &str) -> Session {
        let mut session = Session::new();
        session.set_input(input);
        session
    }

    #[test]
    fn test_successful_search_replaces_result() {
        let mut session = session_with("10");
        let ticket = session.begin_search().unwrap();
        assert!(session.is_busy());
        assert_eq!(ticket.number().to_biguint(), BigUint::from(10u32));

        assert_eq!(session.complete(ticket.generation(), found(11)), CompletionStatus::Accepted);
        assert!(!session.is_busy());
        assert_eq!(
            session.current_result().map(|r| r.prime().clone()),
            Some(BigUint::from(11u32))
        );
        assert_eq!(
            session.current_report().map(|r| r.result_line().to_string()),
            Some("10 (10) よりも大きい素数: 11 (11), 入力桁数: 2桁, 素数桁数: 2桁".to_string())
        );
    }

    #[test]
    fn test_second_search_is_rejected_while_busy() {
        let mut session = session_with("10");
        let ticket = session.begin_search().unwrap();
        assert_eq!(session.begin_search(), Err(SessionError::Busy));
        assert_eq!(session.pending(), Some(&ticket));
    }

    #[test]
    fn test_validation_failure_keeps_previous_result() {
        let mut session = session_with("10");
        let ticket = session.begin_search().unwrap();
        session.complete(ticket.generation(), found(11));

        session.set_input("abc");
        let error = session.begin_search().unwrap_err();
        assert_eq!(error.user_message(), "正しい数値を入力してください。");
        assert!(!session.is_busy());

        session.set_input("-5");
        let error = session.begin_search().unwrap_err();
        assert_eq!(error.user_message(), "0以上の自然数を入力してください。");

        assert_eq!(
            session.current().map(|c| c.number().text().to_string()),
            Some("10".to_string())
        );
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut session = session_with("10");
        let first = session.begin_search().unwrap();
        assert_eq!(session.cancel(), Some(first.generation()));

        session.set_input("7900");
        let second = session.begin_search().unwrap();
        assert!(second.generation() > first.generation());

        assert_eq!(session.complete(first.generation(), found(11)), CompletionStatus::Stale);
        assert!(session.is_busy());
        assert!(session.current().is_none());

        assert_eq!(session.complete(second.generation(), found(7901)), CompletionStatus::Accepted);
        assert_eq!(
            session.current_result().map(|r| r.prime().clone()),
            Some(BigUint::from(7901u32))
        );
    }

    #[test]
    fn test_aborted_search_keeps_previous_result() {
        let mut session = session_with("10");
        let ticket = session.begin_search().unwrap();
        session.complete(ticket.generation(), found(11));

        session.set_input("9007199254740881");
        let ticket = session.begin_search().unwrap();
        let aborted = SearchOutcome::aborted("time limit reached", SearchStatisticsBuilder::new().build());
        assert_eq!(
            session.complete(ticket.generation(), aborted),
            CompletionStatus::Aborted("time limit reached".to_string())
        );
        assert!(!session.is_busy());
        assert_eq!(
            session.current_result().map(|r| r.prime().clone()),
            Some(BigUint::from(11u32))
        );
    }

    #[test]
    fn test_fail_only_clears_the_pending_generation() {
        let mut session = session_with("10");
        let ticket = session.begin_search().unwrap();
        assert!(!session.fail(Generation(ticket.generation().get() + 1)));
        assert!(session.is_busy());
        assert!(session.fail(ticket.generation()));
        assert!(!session.is_busy());
        assert_eq!(session.cancel(), None);
    }

    #[test]
    fn test_input_field_width() {
        let mut session = Session::new();
        assert_eq!(session.input_field_width(), MIN_INPUT_FIELD_WIDTH);
        session.set_input("7900");
        assert_eq!(session.input_field_width(), MIN_INPUT_FIELD_WIDTH);
        session.set_input("9007199254740881");
        assert_eq!(session.input_field_width(), 16);
        assert_eq!(session.input(), "9007199254740881");
    }

    #[test]
    fn test_generation_display() {
        let mut session = session_with("1");
        let ticket = session.begin_search().unwrap();
        assert_eq!(ticket.generation().to_string(), "#1");
    }
}
