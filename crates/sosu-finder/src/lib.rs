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

//! # Sosu Finder
//!
//! Finds the smallest prime strictly greater than a validated, non-negative
//! integer by trial division.
//!
//! ## Modules
//!
//! - `trial_division`: The search engine. One loop, generic over the
//!   `TrialArithmetic` capability, shared by both arithmetic regimes.
//! - `finder`: Strategy dispatch. `find_next_prime` is the plain, unbounded
//!   entry point; `NextPrimeFinder` adds optional time limits, interrupts,
//!   and progress logging and reports a full `SearchOutcome`.
//!
//! ## Regimes
//!
//! Inputs at or below the safe-integer threshold run on `u64`. Inputs above
//! it run on `BigUint`. Both produce the same primes wherever both apply;
//! the arbitrary-precision regime is simply slower.
//!
//! ## Usage
//!
//! ```rust
//! use sosu_finder::finder::find_next_prime;
//! use sosu_model::parsing::validate;
//!
//! let n = validate("7900").unwrap();
//! let result = find_next_prime(&n);
//! assert_eq!(result.prime().to_string(), "7901");
//! assert_eq!(result.digit_count(), 4);
//! ```

pub mod finder;
pub mod trial_division;

pub use finder::{NextPrimeFinder, NextPrimeFinderBuilder, find_next_prime, find_next_prime_with};
