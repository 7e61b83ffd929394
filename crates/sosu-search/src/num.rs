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

//! # Search Numeric Trait
//!
//! Unified numeric bounds for the search loop. `SearchNumeric` collects the
//! trial-division capability from `sosu_core` together with the marker
//! traits a search needs to run on a worker thread.
//!
//! Implemented for every type that satisfies the bounds; in practice `u64`
//! for the fixed-precision regime and `BigUint` for the arbitrary-precision
//! regime.

use sosu_core::num::ops::trial_arithmetic::TrialArithmetic;

/// A trait alias for number types that can be searched for primes.
pub trait SearchNumeric:
    TrialArithmetic + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

impl<T> SearchNumeric for T where
    T: TrialArithmetic + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}
