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

//! Input validation for the prime search.
//!
//! Raw input is read with parse-leading-integer semantics rather than strict
//! whole-string parsing: leading whitespace is skipped, an optional sign and
//! an optional `0x`/`0X` radix prefix are accepted, and then the longest run
//! of digits is taken. Anything after that run is ignored, so `"7.9"` reads as
//! `7` and `"12abc"` as `12`. Text with no leading digits is not a number.
//!
//! The digits are converted exactly into a `BigUint`. A negative sign on a
//! non-zero magnitude is rejected; `"-0"` reads as zero and is accepted.
//!
//! Validation errors carry two renderings: `Display` for logs and
//! diagnostics, and `user_message` for the alert shown to the person typing.

use crate::number::ValidatedNumber;
use num_bigint::BigUint;
use num_traits::{Num, Zero};

/// The reasons input text is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The text does not start with an integer.
    #[error("input '{input}' does not start with an integer")]
    NotANumber {
        /// The rejected input, trimmed.
        input: String,
    },
    /// The text starts with a negative integer.
    #[error("input '{input}' is negative")]
    Negative {
        /// The rejected input, trimmed.
        input: String,
    },
}

impl ValidationError {
    /// The alert text shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::NotANumber { .. } => "正しい数値を入力してください。",
            ValidationError::Negative { .. } => "0以上の自然数を入力してください。",
        }
    }

    /// The input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            ValidationError::NotANumber { input } | ValidationError::Negative { input } => input,
        }
    }
}

/// The integer found at the start of some input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingInteger {
    /// Whether a `-` sign preceded the digits.
    pub negative: bool,
    /// The exact magnitude of the digits.
    pub magnitude: BigUint,
}

impl LeadingInteger {
    /// Returns `true` if the integer is strictly below zero.
    /// A negative sign on zero does not count.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative && !self.magnitude.is_zero()
    }
}

/// Reads the integer at the start of `raw`.
///
/// Returns `None` if no digits follow the optional whitespace, sign, and
/// radix prefix.
///
/// # Examples
///
/// ```rust
/// # use sosu_model::parsing::parse_leading_integer;
/// # use num_bigint::BigUint;
/// let parsed = parse_leading_integer("  -12abc").unwrap();
/// assert!(parsed.negative);
/// assert_eq!(parsed.magnitude, BigUint::from(12u32));
///
/// assert_eq!(parse_leading_integer("0x1f").unwrap().magnitude, BigUint::from(31u32));
/// assert!(parse_leading_integer("abc").is_none());
/// ```
pub fn parse_leading_integer(raw: &str) -> Option<LeadingInteger> {
    let rest = raw.trim_start();

    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = rest
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(rest.len(), |(index, _)| index);
    if digits_len == 0 {
        return None;
    }

    let magnitude = BigUint::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(LeadingInteger {
        negative,
        magnitude,
    })
}

/// Validates raw input text as a non-negative integer.
///
/// # Errors
///
/// - [`ValidationError::NotANumber`] if the text does not start with an
///   integer.
/// - [`ValidationError::Negative`] if the integer is below zero.
///
/// # Examples
///
/// ```rust
/// # use sosu_model::parsing::{validate, ValidationError};
/// assert_eq!(validate("7.9").unwrap().to_string(), "7");
/// assert!(matches!(validate("abc"), Err(ValidationError::NotANumber { .. })));
/// assert!(matches!(validate("-5"), Err(ValidationError::Negative { .. })));
/// ```
pub fn validate(raw: &str) -> Result<ValidatedNumber, ValidationError> {
    let trimmed = raw.trim();
    let parsed = parse_leading_integer(trimmed).ok_or_else(|| ValidationError::NotANumber {
        input: trimmed.to_string(),
    })?;

    if parsed.is_negative() {
        return Err(ValidationError::Negative {
            input: trimmed.to_string(),
        });
    }

    Ok(ValidatedNumber::new(parsed.magnitude, trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::Magnitude;

    fn value_of(raw: &str) -> BigUint {
        validate(raw)
            .unwrap_or_else(|e| panic!("expected '{raw}' to validate, got {e}"))
            .to_biguint()
    }

    #[test]
    fn test_validate_plain_integer() {
        let n = validate("7").unwrap();
        assert_eq!(n.magnitude(), &Magnitude::Native(7));
        assert_eq!(n.text(), "7");
    }

    #[test]
    fn test_validate_truncates_fraction() {
        assert_eq!(value_of("7.9"), BigUint::from(7u32));
        assert_eq!(value_of("0.999"), BigUint::from(0u32));
    }

    #[test]
    fn test_validate_ignores_trailing_garbage() {
        assert_eq!(value_of("12abc"), BigUint::from(12u32));
        assert_eq!(value_of("1e5"), BigUint::from(1u32));
        assert_eq!(value_of("42 43"), BigUint::from(42u32));
    }

    #[test]
    fn test_validate_accepts_sign_and_whitespace() {
        assert_eq!(value_of("  +15"), BigUint::from(15u32));
        assert_eq!(value_of("\t99\n"), BigUint::from(99u32));
    }

    #[test]
    fn test_validate_accepts_negative_zero() {
        assert_eq!(value_of("-0"), BigUint::from(0u32));
        assert_eq!(value_of("-0.5"), BigUint::from(0u32));
    }

    #[test]
    fn test_validate_hex_prefix() {
        assert_eq!(value_of("0x10"), BigUint::from(16u32));
        assert_eq!(value_of("0XfF"), BigUint::from(255u32));
        assert_eq!(value_of("0x1g"), BigUint::from(1u32));
    }

    #[test]
    fn test_validate_rejects_non_numbers() {
        for raw in ["abc", "", "   ", "-", "+", ".5", "0x", "Infinity", "x12"] {
            match validate(raw) {
                Err(ValidationError::NotANumber { input }) => assert_eq!(input, raw.trim()),
                other => panic!("expected NotANumber for '{raw}', got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_negative() {
        for raw in ["-5", " -1", "-0x1", "-7.9"] {
            match validate(raw) {
                Err(ValidationError::Negative { input }) => assert_eq!(input, raw.trim()),
                other => panic!("expected Negative for '{raw}', got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_keeps_full_precision() {
        let raw = "123456789012345678901234567890";
        let n = validate(raw).unwrap();
        assert_eq!(n.to_string(), raw);
        assert!(!n.is_native());
    }

    #[test]
    fn test_validate_selects_regime_at_threshold() {
        assert!(validate("9007199254740880").unwrap().is_native());
        assert!(!validate("9007199254740881").unwrap().is_native());
    }

    #[test]
    fn test_user_messages() {
        let nan = validate("abc").unwrap_err();
        assert_eq!(nan.user_message(), "正しい数値を入力してください。");
        assert_eq!(nan.input(), "abc");

        let negative = validate("-5").unwrap_err();
        assert_eq!(negative.user_message(), "0以上の自然数を入力してください。");
        assert_eq!(negative.to_string(), "input '-5' is negative");
    }

    #[test]
    fn test_parse_leading_integer_non_ascii_digits_stop_the_run() {
        // Full-width digits are not ASCII digits.
        assert!(parse_leading_integer("１２").is_none());
        let parsed = parse_leading_integer("3１").unwrap();
        assert_eq!(parsed.magnitude, BigUint::from(3u32));
    }
}
