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

//! # Trial Arithmetic
//!
//! The arithmetic capability required to search for primes by trial
//! division. A candidate is prime if no divisor `d` with
//! `2 <= d <= floor(sqrt(candidate))` divides it, so the loop needs exactly
//! four things from its number type:
//!
//! - a first divisor (`2`) and a way to step to the next value,
//! - a divisibility test,
//! - a floor square root to bound the divisors,
//! - a decimal rendering, for the digit count reported with every prime.
//!
//! ## Implementations
//!
//! - Unsigned primitives (`u32`, `u64`, `u128`, `usize`): native, fixed-width
//!   arithmetic. `try_increment` reports `false` at the type bound instead of
//!   wrapping.
//! - `BigUint`: arbitrary precision. Incrementing never fails.
//!
//! ## Usage
//!
//! ```rust
//! use num_bigint::BigUint;
//! use sosu_core::num::ops::trial_arithmetic::TrialArithmetic;
//!
//! let mut candidate = 96u64;
//! assert!(candidate.try_increment());
//! assert_eq!(candidate.floor_sqrt(), 9);
//! assert!(!candidate.is_divisible_by(&u64::first_divisor()));
//!
//! let big = BigUint::from(10u32).pow(20);
//! assert_eq!(big.decimal_digits(), 21);
//! ```

use num_bigint::BigUint;
use num_integer::{Integer, Roots};

/// Arithmetic a number type must provide to be searched by trial division.
pub trait TrialArithmetic: Sized + Clone + Ord + std::fmt::Debug + std::fmt::Display {
    /// The smallest trial divisor, `2`.
    fn first_divisor() -> Self;

    /// Increments `self` by one in place.
    ///
    /// Returns `false` and leaves `self` unchanged if the result is not
    /// representable in the type.
    #[must_use]
    fn try_increment(&mut self) -> bool;

    /// Returns `true` if `divisor` divides `self` without remainder.
    ///
    /// A zero divisor only divides zero.
    fn is_divisible_by(&self, divisor: &Self) -> bool;

    /// Returns the largest integer `r` with `r * r <= self`.
    fn floor_sqrt(&self) -> Self;

    /// Returns the number of digits in the decimal rendering of `self`.
    /// Zero has one digit.
    fn decimal_digits(&self) -> usize;

    /// Converts `self` into an arbitrary-precision value.
    fn to_biguint(&self) -> BigUint;
}

macro_rules! trial_arithmetic_impl_primitive {
    ($t:ty) => {
        impl TrialArithmetic for $t {
            #[inline(always)]
            fn first_divisor() -> Self {
                2
            }

            #[inline(always)]
            fn try_increment(&mut self) -> bool {
                match self.checked_add(1) {
                    Some(next) => {
                        *self = next;
                        true
                    }
                    None => false,
                }
            }

            #[inline(always)]
            fn is_divisible_by(&self, divisor: &Self) -> bool {
                Integer::is_multiple_of(self, divisor)
            }

            #[inline]
            fn floor_sqrt(&self) -> Self {
                Roots::sqrt(self)
            }

            #[inline]
            fn decimal_digits(&self) -> usize {
                self.checked_ilog10().map_or(1, |log| log as usize + 1)
            }

            #[inline]
            fn to_biguint(&self) -> BigUint {
                BigUint::from(*self)
            }
        }
    };
}

trial_arithmetic_impl_primitive!(u32);
trial_arithmetic_impl_primitive!(u64);
trial_arithmetic_impl_primitive!(u128);
trial_arithmetic_impl_primitive!(usize);

impl TrialArithmetic for BigUint {
    #[inline]
    fn first_divisor() -> Self {
        BigUint::from(2u32)
    }

    #[inline]
    fn try_increment(&mut self) -> bool {
        *self += 1u32;
        true
    }

    #[inline]
    fn is_divisible_by(&self, divisor: &Self) -> bool {
        Integer::is_multiple_of(self, divisor)
    }

    #[inline]
    fn floor_sqrt(&self) -> Self {
        Roots::sqrt(self)
    }

    #[inline]
    fn decimal_digits(&self) -> usize {
        self.to_str_radix(10).len()
    }

    #[inline]
    fn to_biguint(&self) -> BigUint {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::TrialArithmetic;
    use num_bigint::BigUint;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_first_divisor_is_two() {
        assert_eq!(u32::first_divisor(), 2);
        assert_eq!(u64::first_divisor(), 2);
        assert_eq!(u128::first_divisor(), 2);
        assert_eq!(BigUint::first_divisor(), big(2));
    }

    #[test]
    fn test_try_increment_steps_by_one() {
        let mut a = 41u64;
        assert!(a.try_increment());
        assert_eq!(a, 42);

        let mut b = big(u64::MAX);
        assert!(b.try_increment());
        assert_eq!(b, BigUint::from(u64::MAX as u128 + 1));
    }

    #[test]
    fn test_try_increment_refuses_to_wrap() {
        let mut a = u32::MAX;
        assert!(!a.try_increment());
        assert_eq!(a, u32::MAX);

        let mut b = u64::MAX;
        assert!(!b.try_increment());
        assert_eq!(b, u64::MAX);
    }

    #[test]
    fn test_is_divisible_by_agrees_across_regimes() {
        for n in 0u64..200 {
            for d in 1u64..20 {
                assert_eq!(
                    n.is_divisible_by(&d),
                    big(n).is_divisible_by(&big(d)),
                    "n={n}, d={d}"
                );
                assert_eq!(n.is_divisible_by(&d), n % d == 0, "n={n}, d={d}");
            }
        }
    }

    #[test]
    fn test_is_divisible_by_zero_divisor() {
        assert!(0u64.is_divisible_by(&0));
        assert!(!5u64.is_divisible_by(&0));
        assert!(!big(5).is_divisible_by(&big(0)));
    }

    #[test]
    fn test_floor_sqrt_rounds_down() {
        assert_eq!(0u64.floor_sqrt(), 0);
        assert_eq!(1u64.floor_sqrt(), 1);
        assert_eq!(3u64.floor_sqrt(), 1);
        assert_eq!(4u64.floor_sqrt(), 2);
        assert_eq!(99u64.floor_sqrt(), 9);
        assert_eq!(100u64.floor_sqrt(), 10);
        assert_eq!(big(99).floor_sqrt(), big(9));
        assert_eq!(big(100).floor_sqrt(), big(10));
    }

    #[test]
    fn test_floor_sqrt_at_threshold() {
        // floor(sqrt(9_007_199_254_740_881)) = 94_906_265
        let n = 9_007_199_254_740_881u64;
        let r = n.floor_sqrt();
        assert_eq!(r, 94_906_265);
        assert!(r * r <= n);
        assert!((r + 1) * (r + 1) > n);
        assert_eq!(big(n).floor_sqrt(), big(r));
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(0u64.decimal_digits(), 1);
        assert_eq!(9u64.decimal_digits(), 1);
        assert_eq!(10u64.decimal_digits(), 2);
        assert_eq!(u64::MAX.decimal_digits(), 20);
        assert_eq!(big(0).decimal_digits(), 1);
        assert_eq!(big(7901).decimal_digits(), 4);
        assert_eq!(BigUint::from(10u32).pow(30).decimal_digits(), 31);
    }

    #[test]
    fn test_to_biguint() {
        assert_eq!(7u32.to_biguint(), big(7));
        assert_eq!(u64::MAX.to_biguint(), big(u64::MAX));
        assert_eq!(big(12).to_biguint(), big(12));
    }
}
