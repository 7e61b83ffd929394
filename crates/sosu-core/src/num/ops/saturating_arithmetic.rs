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

use core::ops::Add;

/// A trait for types that support saturating addition by value (no references).
///
/// Search statistics count trial divisions, which can exceed any fixed bound
/// on an unbounded search. Saturating keeps the counter pinned at the maximum
/// instead of wrapping back to small values.
///
/// # Examples
///
/// ```rust
/// # use sosu_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// let a: u64 = u64::MAX - 1;
/// assert_eq!(a.saturating_add_val(5), u64::MAX);
/// assert_eq!(7u64.saturating_add_val(1), 8);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

macro_rules! saturating_add_impl_val {
    ($t:ty) => {
        impl SaturatingAddVal for $t {
            #[inline(always)]
            fn saturating_add_val(self, v: $t) -> $t {
                <$t>::saturating_add(self, v)
            }
        }
    };
}

saturating_add_impl_val!(u8);
saturating_add_impl_val!(u16);
saturating_add_impl_val!(u32);
saturating_add_impl_val!(u64);
saturating_add_impl_val!(u128);
saturating_add_impl_val!(usize);
