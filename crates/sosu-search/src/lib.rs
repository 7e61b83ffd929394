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

//! # Sosu Search
//!
//! Plumbing shared by every prime search run: how a run is observed and
//! stopped, what it returns, and what it measured.
//!
//! ## Modules
//!
//! - `monitor`: The `SearchMonitor` lifecycle trait and the stock monitors
//!   (composite, interrupt, time limit, tracing progress log, no-op).
//! - `num`: `SearchNumeric`, the bound collecting everything the search
//!   loop needs from a number type.
//! - `result`: `SearchResult` (the found prime, its digit count, elapsed
//!   time), `TerminationReason`, and `SearchOutcome`.
//! - `stats`: `SearchStatistics` and its builder.
//! - `strategy`: `Strategy`, the arithmetic regime a run uses, selected from
//!   the magnitude of the input.

pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
pub mod strategy;
