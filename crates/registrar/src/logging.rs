//! Logging setup for registrar.
//!
//! Diagnostics go to stderr through `tracing-subscriber`. They are separate
//! from the notifications a registration produces, which the CLI prints
//! itself. `RUST_LOG` overrides the level chosen from command-line flags.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much diagnostic output to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Pick a verbosity from `-q` and the number of `-v` flags.
    ///
    /// `-q` wins over any number of `-v`.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// The level filter for this verbosity.
    #[must_use]
    pub fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::INFO,
            Self::Verbose => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    /// The filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn directive(self) -> String {
        format!("registrar={}", self.level())
    }
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
///
/// ```no_run
/// use registrar::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(false, 1));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

/// Route logs through the test harness's captured output.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("registrar=trace")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(false, 9), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(true, 0), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
    }

    #[test]
    fn test_levels() {
        assert_eq!(Verbosity::Quiet.level(), LevelFilter::ERROR);
        assert_eq!(Verbosity::Normal.level(), LevelFilter::INFO);
        assert_eq!(Verbosity::Verbose.level(), LevelFilter::DEBUG);
        assert_eq!(Verbosity::Trace.level(), LevelFilter::TRACE);
    }

    #[test]
    fn test_directive() {
        assert_eq!(Verbosity::Normal.directive(), "registrar=info");
        assert_eq!(Verbosity::Quiet.directive(), "registrar=error");
    }

    #[test]
    fn test_init_is_repeatable() {
        init_test_logging();
        init_logging(Verbosity::Normal);
        init_logging(Verbosity::Trace);
    }
}
