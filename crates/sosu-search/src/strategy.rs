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

use sosu_model::number::{Magnitude, ValidatedNumber};

/// The arithmetic regime a search runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Native `u64` arithmetic, for inputs at or below the safe-integer
    /// threshold.
    #[default]
    FixedPrecision,
    /// `BigUint` arithmetic, for inputs above the safe-integer threshold.
    ArbitraryPrecision,
}

impl Strategy {
    /// Selects the strategy for `number`.
    ///
    /// This is a hard cutoff on the threshold, not a heuristic: a value at
    /// the threshold uses fixed precision even where arbitrary precision
    /// would also work.
    #[inline]
    pub fn for_number(number: &ValidatedNumber) -> Self {
        match number.magnitude() {
            Magnitude::Native(_) => Strategy::FixedPrecision,
            Magnitude::Arbitrary(_) => Strategy::ArbitraryPrecision,
        }
    }

    /// A short human-readable name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FixedPrecision => "fixed-precision",
            Strategy::ArbitraryPrecision => "arbitrary-precision",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
