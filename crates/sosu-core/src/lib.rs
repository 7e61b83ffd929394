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

//! # Sosu Core
//!
//! Numeric foundations for the sosu prime search. The search runs the same
//! trial-division loop over two arithmetic regimes: native fixed-width
//! integers for small inputs and `BigUint` for everything beyond the
//! safe-integer threshold. This crate holds the capability traits both
//! regimes implement, plus the constants that decide between them.
//!
//! ## Modules
//!
//! - `num`: The strategy threshold constant (`constants`) and by-value
//!   arithmetic traits (`ops`): the `TrialArithmetic` capability and
//!   saturating counters for search statistics.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
