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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SearchNumeric,
};

/// Fans every event out to a list of monitors.
///
/// The search stops as soon as any member asks it to; the first member (in
/// insertion order) that terminates supplies the reason.
pub struct CompositeMonitor<'a, T> {
    members: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.add_monitor_boxed(Box::new(monitor));
    }

    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.members.push(monitor);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member names, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|member| member.name()).collect()
    }

    #[inline]
    fn each(&mut self, mut event: impl FnMut(&mut (dyn SearchMonitor<T> + 'a))) {
        for member in &mut self.members {
            event(member.as_mut());
        }
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("no monitors");
        }
        f.write_str(&self.names().join(" + "))
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, start: &T) {
        self.each(|member| member.on_enter_search(start));
    }

    fn on_exit_search(&mut self) {
        self.each(|member| member.on_exit_search());
    }

    fn on_candidate(&mut self, candidate: &T) {
        self.each(|member| member.on_candidate(candidate));
    }

    fn on_prime_found(&mut self, prime: &T) {
        self.each(|member| member.on_prime_found(prime));
    }

    #[inline]
    fn on_step(&mut self) {
        self.each(|member| member.on_step());
    }

    #[inline]
    fn search_command(&self) -> SearchCommand {
        self.members
            .iter()
            .map(|member| member.search_command())
            .find(SearchCommand::is_terminate)
            .unwrap_or(SearchCommand::Continue)
    }
}
