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

use num_bigint::BigUint;

/// Number of digits per group.
pub const GROUP_SIZE: usize = 4;

/// Separator placed between digit groups.
pub const GROUP_SEPARATOR: char = ',';

/// Renders `value` in decimal with a comma between every four digits,
/// counted from the right.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use sosu_format::grouping::group_digits;
///
/// assert_eq!(group_digits(&BigUint::from(123_456_789u32)), "1,2345,6789");
/// assert_eq!(group_digits(&BigUint::from(7901u32)), "7901");
/// ```
pub fn group_digits(value: &BigUint) -> String {
    group_decimal_str(&value.to_str_radix(10))
}

/// Inserts a separator between every four characters of an ASCII digit
/// string, counted from the right.
pub fn group_decimal_str(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / GROUP_SIZE);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
