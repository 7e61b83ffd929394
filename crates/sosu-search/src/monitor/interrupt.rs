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
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Reason reported when the interrupt flag stops a search.
pub const INTERRUPTED: &str = "interrupted";

/// Stops the search once a shared flag is raised.
///
/// The flag is shared with whoever may want to cancel: another thread, a
/// signal handler, or the front end's cancel action.
#[derive(Debug, Clone)]
pub struct InterruptMonitor {
    flag: Arc<AtomicBool>,
}

impl InterruptMonitor {
    #[inline]
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// The flag this monitor watches.
    #[inline]
    pub fn flag(&self) -> &Arc<AtomicBool> {
        &self.flag
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl<T> SearchMonitor<T> for InterruptMonitor
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "InterruptMonitor"
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.is_raised() {
            return SearchCommand::Terminate(INTERRUPTED.to_string());
        }
        SearchCommand::Continue
    }
}
