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

//! # Sosu App
//!
//! The presentation layer of the prime search. Everything the terminal
//! front end needs that is not the search itself lives here, so it can be
//! tested without a terminal.
//!
//! ## Modules
//!
//! - `config`: The `clap` command line and the search configuration derived
//!   from it.
//! - `logging`: Installs the `tracing` subscriber.
//! - `session`: Explicit UI state: the current input, the busy flag, the
//!   current result, and the generation counter that filters out stale
//!   completions.
//! - `worker`: Runs a search on a background thread and hands the outcome
//!   back over a channel.
//! - `error`: `AppError`, the union of everything a front-end action can
//!   fail with.

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod worker;
