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

//! # Background Search Worker
//!
//! Runs one search on a named background thread so the terminal can keep
//! drawing the busy indicator. The outcome comes back over an `mpsc`
//! channel, tagged with the generation of the ticket it was started for.
//!
//! Each search gets its own interrupt flag. `SearchHandle::cancel` sets it,
//! and the search stops at its next trial division.

use crate::{config::SearchConfig, session::{Generation, SearchTicket}};
use sosu_search::result::SearchOutcome;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, RecvTimeoutError},
};
use std::thread::JoinHandle;
use std::time::Duration;

/// Name of the worker thread.
pub const WORKER_THREAD_NAME: &str = "sosu-search";

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("failed to spawn the search thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("search thread {0} ended without reporting an outcome")]
    Disconnected(Generation),
}

/// The outcome of one search and the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub generation: Generation,
    pub outcome: SearchOutcome,
}

/// A search running on the worker thread.
#[derive(Debug)]
pub struct SearchHandle {
    generation: Generation,
    interrupt: Arc<AtomicBool>,
    receiver: Receiver<Completion>,
    thread: JoinHandle<()>,
}

impl SearchHandle {
    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Asks the search to stop. It still delivers an (aborted) outcome.
    pub fn cancel(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits up to `timeout` for the outcome. `Ok(None)` means the search is
    /// still running.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Disconnected`] if the worker thread ended
    /// without sending an outcome.
    pub fn wait_timeout(&self, timeout: Duration) -> Result<Option<Completion>, WorkerError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(completion) => Ok(Some(completion)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(WorkerError::Disconnected(self.generation)),
        }
    }

    /// Blocks until the outcome arrives.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Disconnected`] if the worker thread ended
    /// without sending an outcome.
    pub fn wait(self) -> Result<Completion, WorkerError> {
        let completion = self
            .receiver
            .recv()
            .map_err(|_| WorkerError::Disconnected(self.generation))?;
        if self.thread.join().is_err() {
            tracing::warn!(generation = %self.generation, "search thread panicked after reporting");
        }
        Ok(completion)
    }
}

/// Starts the search for `ticket` on a background thread.
///
/// # Errors
///
/// Returns [`WorkerError::Spawn`] if the thread cannot be created.
pub fn spawn_search(ticket: &SearchTicket, config: &SearchConfig) -> Result<SearchHandle, WorkerError> {
    let generation = ticket.generation();
    let number = ticket.number().clone();
    let interrupt = Arc::new(AtomicBool::new(false));
    let finder = config.finder(Arc::clone(&interrupt));
    let (sender, receiver) = mpsc::channel();

    let thread = std::thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let outcome = finder.search(&number);
            tracing::debug!(%generation, %outcome, "search finished");
            if sender.send(Completion { generation, outcome }).is_err() {
                tracing::debug!(%generation, "search outcome dropped, nobody is waiting");
            }
        })?;

    Ok(SearchHandle {
        generation,
        interrupt,
        receiver,
        thread,
    })
}
