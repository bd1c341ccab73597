//! Logging setup for soberpath binaries.
//!
//! Events go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` overrides the configured level; `verbose` forces `debug`.

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::storage::LoggingConfig;

/// Pick the filter directive for this run.
pub fn filter_directive(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else if config.level.trim().is_empty() {
        "info".to_string()
    } else {
        config.level.trim().to_string()
    }
}

/// Initialize the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let directive = filter_directive(config, verbose);
    let filter = if verbose {
        EnvFilter::new(&directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive))
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %directive, "logging initialized");
    }
}

/// Initialize logging for tests (captured by the test harness)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_forces_debug() {
        let config = LoggingConfig {
            level: "warn".into(),
        };
        assert_eq!(filter_directive(&config, true), "debug");
        assert_eq!(filter_directive(&config, false), "warn");
    }

    #[test]
    fn blank_level_falls_back_to_info() {
        let config = LoggingConfig { level: "  ".into() };
        assert_eq!(filter_directive(&config, false), "info");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_test();
        init(&LoggingConfig::default(), false);
    }
}
