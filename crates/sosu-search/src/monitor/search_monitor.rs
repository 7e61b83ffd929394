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

use crate::num::SearchNumeric;

/// What a monitor tells the search loop after each trial division.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    /// Stop now. The string says why and ends up in the aborted outcome.
    Terminate(String),
}

impl SearchCommand {
    #[inline]
    pub fn is_terminate(&self) -> bool {
        matches!(self, SearchCommand::Terminate(_))
    }
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => f.write_str("Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate ({reason})"),
        }
    }
}

/// Lifecycle hooks of a prime search over numbers of type `T`.
///
/// The search calls `on_enter_search` once with the value it searches above,
/// `on_candidate` for every candidate it tests, `on_step` for every trial
/// division, and `on_prime_found` with the prime before `on_exit_search`.
/// `search_command` is polled after every step.
///
/// Every hook except `name` has an empty default, so a monitor only spells
/// out the events it cares about.
pub trait SearchMonitor<T>
where
    T: SearchNumeric,
{
    fn name(&self) -> &str;

    fn on_enter_search(&mut self, _start: &T) {}

    fn on_exit_search(&mut self) {}

    fn on_candidate(&mut self, _candidate: &T) {}

    fn on_prime_found(&mut self, _prime: &T) {}

    fn on_step(&mut self) {}

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T> + '_
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SearchMonitor").field(&self.name()).finish()
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T> + '_
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
