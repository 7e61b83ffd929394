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

//! # Configuration
//!
//! The `sosu` command line. Every option is optional: without any, the
//! binary starts an interactive prompt and searches without a time limit.
//!
//! ## Options
//!
//! - `NUMBER`: search once above this value and exit.
//! - `--time-limit <SECS>` (`SOSU_TIME_LIMIT`): abort searches that run
//!   longer than this. Fractional seconds are accepted.
//! - `--progress-interval <SECS>`: log search progress at `info` level at
//!   this interval.
//! - `--log-level <FILTER>` (`SOSU_LOG`): a `tracing` filter directive.
//!   Falls back to `RUST_LOG`, then to `warn`.
//! - `--stats`: print search statistics after each result.

use clap::Parser;
use sosu_finder::NextPrimeFinder;
use std::sync::{Arc, atomic::AtomicBool};
use std::time::Duration;

/// Finds the smallest prime greater than a natural number.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "sosu", author, version)]
#[command(
    about = "Finds the smallest prime greater than a natural number",
    long_about = "Finds the smallest prime greater than a natural number by trial division.\n\n\
                  Numbers up to 9,007,199,254,740,880 are searched in native arithmetic; \
                  above that, arbitrary-precision arithmetic takes over and searches become \
                  much slower."
)]
pub struct Cli {
    /// Number to search above. Starts the interactive prompt when omitted.
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub number: Option<String>,

    /// Abort a search after this many seconds.
    #[arg(long, value_name = "SECS", env = "SOSU_TIME_LIMIT", value_parser = parse_seconds)]
    pub time_limit: Option<Duration>,

    /// Log search progress at this interval, in seconds.
    #[arg(long, value_name = "SECS", value_parser = parse_seconds)]
    pub progress_interval: Option<Duration>,

    /// Log filter directive, e.g. `info` or `sosu_finder=debug`.
    #[arg(long, value_name = "FILTER", env = "SOSU_LOG")]
    pub log_level: Option<String>,

    /// Print search statistics after each result.
    #[arg(long)]
    pub stats: bool,
}

/// Parses a non-negative, finite number of seconds.
pub fn parse_seconds(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number of seconds"))?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("'{raw}' must be a non-negative, finite number of seconds"));
    }

    Duration::try_from_secs_f64(secs).map_err(|e| format!("'{raw}': {e}"))
}

/// The search options that apply to every search of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub time_limit: Option<Duration>,
    pub progress_interval: Option<Duration>,
    pub show_statistics: bool,
}

impl SearchConfig {
    /// Builds a finder for one search. `interrupt` lets the caller stop it.
    pub fn finder(&self, interrupt: Arc<AtomicBool>) -> NextPrimeFinder {
        let mut builder = NextPrimeFinder::builder().with_interrupt(interrupt);
        if let Some(limit) = self.time_limit {
            builder = builder.with_time_limit(limit);
        }
        if let Some(interval) = self.progress_interval {
            builder = builder.with_progress_log(interval);
        }
        builder.build()
    }
}

impl From<&Cli> for SearchConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            time_limit: cli.time_limit,
            progress_interval: cli.progress_interval,
            show_statistics: cli.stats,
        }
    }
}
