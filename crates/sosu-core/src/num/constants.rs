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

//! # Strategy Constants
//!
//! The boundary between the two arithmetic regimes of the search.
//!
//! Inputs at or below [`SAFE_INTEGER_THRESHOLD`] are searched with native
//! fixed-width integers. Anything above it is searched with arbitrary
//! precision. The cutoff is hard: a value equal to the threshold still takes
//! the fixed-precision path, even though `u64` could go further.

/// The largest integer that `f64` represents exactly, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Inputs strictly greater than this value are searched with
/// arbitrary-precision arithmetic.
///
/// The value sits just below [`MAX_SAFE_INTEGER`] so that every candidate the
/// fixed-precision regime can reach from it (the next prime is
/// `9_007_199_254_740_881`) is still exactly representable as a double.
pub const SAFE_INTEGER_THRESHOLD: u64 = 9_007_199_254_740_880;

/// Returns `true` if `value` must be searched in arbitrary precision.
#[inline(always)]
pub const fn exceeds_safe_threshold(value: u64) -> bool {
    value > SAFE_INTEGER_THRESHOLD
}
