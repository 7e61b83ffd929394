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

//! # Validated Numbers
//!
//! A `ValidatedNumber` is a non-negative integer that has passed input
//! validation. It carries the value in the representation its search regime
//! works with, together with the trimmed text the user typed, which is what
//! the input digit count is reported from.
//!
//! ## Highlights
//!
//! - `Magnitude::Native(u64)` for values at or below
//!   `SAFE_INTEGER_THRESHOLD`, `Magnitude::Arbitrary(BigUint)` above it. The
//!   split is decided once, on construction.
//! - Values are exact. Nothing is ever rounded through a float.
//! - `From<u64>` and `From<BigUint>` build numbers directly from values, using
//!   the decimal rendering as the text.
//!
//! ## Usage
//!
//! ```rust
//! use sosu_model::number::{Magnitude, ValidatedNumber};
//!
//! let n = ValidatedNumber::from(7900u64);
//! assert_eq!(n.magnitude(), &Magnitude::Native(7900));
//! assert_eq!(n.text(), "7900");
//!
//! let big = ValidatedNumber::from(9_007_199_254_740_881u64);
//! assert!(!big.is_native());
//! ```

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use sosu_core::num::constants::exceeds_safe_threshold;

/// The value of a validated number, in the representation of its regime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Magnitude {
    /// A value at or below the safe-integer threshold.
    Native(u64),
    /// A value above the safe-integer threshold.
    Arbitrary(BigUint),
}

impl Magnitude {
    /// Classifies `value` into its regime.
    #[inline]
    pub fn from_biguint(value: BigUint) -> Self {
        match value.to_u64() {
            Some(native) if !exceeds_safe_threshold(native) => Magnitude::Native(native),
            _ => Magnitude::Arbitrary(value),
        }
    }

    /// Returns `true` if the value is searched in fixed precision.
    #[inline]
    pub fn is_native(&self) -> bool {
        matches!(self, Magnitude::Native(_))
    }

    /// Returns the value as a `BigUint`, regardless of regime.
    #[inline]
    pub fn to_biguint(&self) -> BigUint {
        match self {
            Magnitude::Native(value) => BigUint::from(*value),
            Magnitude::Arbitrary(value) => value.clone(),
        }
    }

    /// Returns the value as a `u64` if it fits, regardless of regime.
    #[inline]
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Magnitude::Native(value) => Some(*value),
            Magnitude::Arbitrary(value) => value.to_u64(),
        }
    }
}

impl std::fmt::Display for Magnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Magnitude::Native(value) => write!(f, "{}", value),
            Magnitude::Arbitrary(value) => write!(f, "{}", value),
        }
    }
}

/// A non-negative integer accepted by input validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedNumber {
    magnitude: Magnitude,
    text: String,
}

impl ValidatedNumber {
    /// Creates a validated number from an exact value and the text it was
    /// parsed from. The text is trimmed of surrounding whitespace.
    #[inline]
    pub fn new<S>(value: BigUint, text: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            magnitude: Magnitude::from_biguint(value),
            text: text.as_ref().trim().to_string(),
        }
    }

    /// Returns the value in the representation of its regime.
    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Returns the trimmed input text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the character length of the input text, which is what the
    /// report shows as the input digit count.
    #[inline]
    pub fn input_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the value is at or below the safe-integer threshold.
    #[inline]
    pub fn is_native(&self) -> bool {
        self.magnitude.is_native()
    }

    /// Returns the exact value as a `BigUint`.
    #[inline]
    pub fn to_biguint(&self) -> BigUint {
        self.magnitude.to_biguint()
    }
}

impl From<u64> for ValidatedNumber {
    fn from(value: u64) -> Self {
        Self::new(BigUint::from(value), value.to_string())
    }
}

impl From<BigUint> for ValidatedNumber {
    fn from(value: BigUint) -> Self {
        let text = value.to_string();
        Self::new(value, text)
    }
}

impl std::fmt::Display for ValidatedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.magnitude)
    }
}
