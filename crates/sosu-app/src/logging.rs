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

//! Installs the global `tracing` subscriber for the `sosu` binary.
//!
//! Events go to stderr so they never interleave with the report lines on
//! stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// The filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install the log subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the event filter.
///
/// An explicit `directive` wins; otherwise `RUST_LOG` is used if it parses,
/// and [`DEFAULT_LOG_LEVEL`] if it does not.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match directive {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidFilter {
                directive: directive.to_string(),
                source,
            })
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))),
    }
}

/// Installs a formatting subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] if `directive` does not parse and
/// [`LoggingError::Install`] if a global subscriber is already set.
pub fn init(directive: Option<&str>) -> Result<(), LoggingError> {
    let filter = build_filter(directive)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_directive_is_used() {
        let filter = build_filter(Some("sosu_finder=debug,warn")).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("sosu_finder=debug"), "got {rendered}");
    }

    #[test]
    fn test_invalid_directive_is_rejected() {
        let error = build_filter(Some("sosu_finder=loud")).unwrap_err();
        assert!(matches!(
            error,
            LoggingError::InvalidFilter { ref directive, .. } if directive == "sosu_finder=loud"
        ));
        assert!(error.to_string().starts_with("invalid log filter 'sosu_finder=loud'"));
    }

    #[test]
    fn test_fallback_filter_builds() {
        assert!(build_filter(None).is_ok());
    }
}
