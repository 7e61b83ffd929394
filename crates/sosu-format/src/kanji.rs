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

//! # Kanji Unit Names
//!
//! Japanese numbers are read in myriads: every four decimal digits get a
//! unit name (万 = 10^4, 億 = 10^8, 兆 = 10^12, up to 無量大数 = 10^68).
//!
//! ## Rendering
//!
//! The value is cut into four-digit groups from the right. Each non-zero
//! group is written as a plain number followed by its unit; zero groups are
//! left out entirely, so `100000000` is `1億` rather than `1億0000万`.
//!
//! Above 無量大数 the unit list ends. Everything at or above 10^68 is taken
//! as a count of 無量大数 and that count is rendered with the same rules, so
//! `10^72` becomes `1万無量大数`.
//!
//! Zero has no non-zero group and is rendered as `0`.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Unit names for successive powers of 10^4, starting at 10^0.
pub const MYRIAD_UNITS: [&str; 18] = [
    "", "万", "億", "兆", "京", "垓", "𥝱", "穣", "溝", "澗", "正", "載", "極", "恒河沙", "阿僧祇",
    "那由他", "不可思議", "無量大数",
];

const MYRIAD: u32 = 10_000;

/// Renders `value` with myriad-based kanji unit names.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use sosu_format::kanji::to_kanji;
///
/// assert_eq!(to_kanji(&BigUint::from(100_000_000u32)), "1億");
/// assert_eq!(to_kanji(&BigUint::from(7901u32)), "7901");
/// assert_eq!(to_kanji(&BigUint::from(0u32)), "0");
/// ```
pub fn to_kanji(value: &BigUint) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    render_nonzero(value)
}

fn render_nonzero(value: &BigUint) -> String {
    let largest = MYRIAD_UNITS.len() - 1;
    let mut rest = value.clone();
    let mut parts = Vec::with_capacity(MYRIAD_UNITS.len());

    for unit in &MYRIAD_UNITS[..largest] {
        if rest.is_zero() {
            break;
        }
        let (quotient, group) = rest.div_rem(&BigUint::from(MYRIAD));
        if !group.is_zero() {
            parts.push(format!("{group}{unit}"));
        }
        rest = quotient;
    }

    if !rest.is_zero() {
        parts.push(format!("{}{}", render_nonzero(&rest), MYRIAD_UNITS[largest]));
    }

    parts.iter().rev().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kanji(value: u128) -> String {
        to_kanji(&BigUint::from(value))
    }

    fn pow10(exp: u32) -> BigUint {
        BigUint::from(10u32).pow(exp)
    }

    #[test]
    fn test_zero() {
        assert_eq!(kanji(0), "0");
    }

    #[test]
    fn test_below_one_myriad() {
        assert_eq!(kanji(7), "7");
        assert_eq!(kanji(11), "11");
        assert_eq!(kanji(9999), "9999");
    }

    #[test]
    fn test_zero_groups_are_omitted() {
        assert_eq!(kanji(10_000), "1万");
        assert_eq!(kanji(100_000_000), "1億");
        assert_eq!(kanji(100_000_001), "1億1");
        assert_eq!(kanji(1_000_000_000_000), "1兆");
    }

    #[test]
    fn test_mixed_groups() {
        assert_eq!(kanji(123_456_789), "1億2345万6789");
        assert_eq!(kanji(9_007_199_254_740_881), "9007兆1992億5474万881");
        assert_eq!(kanji(9_007_199_254_740_997), "9007兆1992億5474万997");
    }

    #[test]
    fn test_every_unit() {
        for (i, unit) in MYRIAD_UNITS.iter().enumerate().skip(1) {
            let exp = u32::try_from(i * 4).unwrap();
            assert_eq!(to_kanji(&pow10(exp)), format!("1{unit}"), "10^{exp}");
        }
    }

    #[test]
    fn test_largest_unit_count_is_rendered_recursively() {
        assert_eq!(to_kanji(&(pow10(68) * 9999u32)), "9999無量大数");
        assert_eq!(to_kanji(&pow10(72)), "1万無量大数");
        assert_eq!(to_kanji(&(pow10(76) + 5u32)), "1億無量大数5");
        assert_eq!(to_kanji(&pow10(136)), "1無量大数無量大数");
    }
}
