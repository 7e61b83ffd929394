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

//! # Report Lines
//!
//! The text shown after a search finishes: one line describing the input and
//! the prime, and one line with the elapsed time.
//!
//! ```text
//! 10 (10) よりも大きい素数: 11 (11), 入力桁数: 2桁, 素数桁数: 2桁
//! 実行時間: 0.00001秒
//! ```

use crate::{grouping::group_digits, kanji::to_kanji};
use sosu_model::number::ValidatedNumber;
use sosu_search::result::SearchResult;

/// The formatted lines for one finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    result_line: String,
    elapsed_line: String,
}

impl Report {
    /// The line describing the input and the prime found above it.
    #[inline]
    pub fn result_line(&self) -> &str {
        &self.result_line
    }

    /// The line with the elapsed search time, to five decimals.
    #[inline]
    pub fn elapsed_line(&self) -> &str {
        &self.elapsed_line
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.result_line)?;
        write!(f, "{}", self.elapsed_line)
    }
}

/// Formats the report for `result`, found above `input`.
///
/// The input digit count is the length of the text the user typed, not of
/// the parsed value, so `"7.9"` counts three.
pub fn format_report(input: &ValidatedNumber, result: &SearchResult) -> Report {
    let value = input.to_biguint();
    let prime = result.prime();

    let result_line = format!(
        "{} ({}) よりも大きい素数: {} ({}), 入力桁数: {}桁, 素数桁数: {}桁",
        group_digits(&value),
        to_kanji(&value),
        group_digits(prime),
        to_kanji(prime),
        input.input_len(),
        result.digit_count()
    );
    let elapsed_line = format!("実行時間: {:.5}秒", result.elapsed_seconds());

    Report {
        result_line,
        elapsed_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use sosu_model::parsing::validate;
    use std::time::Duration;

    #[test]
    fn test_report_for_ten() {
        let input = ValidatedNumber::from(10u64);
        let result = SearchResult::new(BigUint::from(11u32), Duration::from_micros(12));
        let report = format_report(&input, &result);

        assert_eq!(
            report.result_line(),
            "10 (10) よりも大きい素数: 11 (11), 入力桁数: 2桁, 素数桁数: 2桁"
        );
        assert_eq!(report.elapsed_line(), "実行時間: 0.00001秒");
    }

    #[test]
    fn test_report_with_units_and_grouping() {
        let input = ValidatedNumber::from(9_007_199_254_740_880u64);
        let result = SearchResult::new(
            BigUint::from(9_007_199_254_740_881u64),
            Duration::from_millis(1_234),
        );
        let report = format_report(&input, &result);

        assert_eq!(
            report.result_line(),
            "9007,1992,5474,0880 (9007兆1992億5474万880) よりも大きい素数: \
             9007,1992,5474,0881 (9007兆1992億5474万881), 入力桁数: 16桁, 素数桁数: 16桁"
        );
        assert_eq!(report.elapsed_line(), "実行時間: 1.23400秒");
    }

    #[test]
    fn test_input_digits_count_the_typed_text() {
        let input = validate(" 7.9 ").unwrap();
        let result = SearchResult::new(BigUint::from(11u32), Duration::ZERO);
        let report = format_report(&input, &result);

        assert!(report.result_line().starts_with("7 (7) よりも大きい素数: 11 (11)"));
        assert!(report.result_line().contains("入力桁数: 3桁"));
        assert_eq!(report.elapsed_line(), "実行時間: 0.00000秒");
    }

    #[test]
    fn test_report_for_zero() {
        let input = ValidatedNumber::from(0u64);
        let result = SearchResult::new(BigUint::from(2u32), Duration::ZERO);
        let report = format_report(&input, &result);
        assert!(report.result_line().starts_with("0 (0) よりも大きい素数: 2 (2)"));
    }

    #[test]
    fn test_display_prints_both_lines() {
        let input = ValidatedNumber::from(7900u64);
        let result = SearchResult::new(BigUint::from(7901u32), Duration::from_millis(5));
        let rendered = format_report(&input, &result).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("7901 (7901)"));
        assert_eq!(lines[1], "実行時間: 0.00500秒");
    }
}
