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

//! # Numeric Foundations
//!
//! Constants and arithmetic traits for the prime search.
//!
//! ## Submodules
//!
//! - `constants`: The safe-integer threshold that separates the
//!   fixed-precision regime from the arbitrary-precision regime.
//! - `ops`: The `TrialArithmetic` capability (increment, divisibility,
//!   floor square root, decimal digit count) implemented for unsigned
//!   primitives and `BigUint`, and `SaturatingAddVal` for counters.
//!
//! ## Motivation
//!
//! Trial division only needs a handful of operations. Expressing them as a
//! trait lets a single search loop run over `u64` and `BigUint` alike,
//! instead of maintaining two copies of the loop that can drift apart.

pub mod constants;
pub mod ops;
