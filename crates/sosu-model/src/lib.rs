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

//! # Sosu Model
//!
//! The input side of the prime search: turning raw text into a validated,
//! non-negative integer that knows which arithmetic regime it belongs to.
//!
//! ## Modules
//!
//! - `number`: `ValidatedNumber` and its `Magnitude` (native `u64` at or
//!   below the safe-integer threshold, `BigUint` above it).
//! - `parsing`: Parse-leading-integer semantics (`parse_leading_integer`),
//!   the `validate` entry point, and `ValidationError`.

pub mod number;
pub mod parsing;

pub use number::{Magnitude, ValidatedNumber};
pub use parsing::{ValidationError, validate};
