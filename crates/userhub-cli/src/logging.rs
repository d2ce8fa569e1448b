//! Tracing setup driven by the `[logging]` section.

use tracing_subscriber::{EnvFilter, fmt};

use userhub_core::config::LoggingConfig;

/// Output shape selected by `logging.format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Anything other than `"json"` falls back to pretty output.
    pub fn from_config(config: &LoggingConfig) -> Self {
        if config.format.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `logging.level`.
///
/// Events go to stderr so command output on stdout stays clean.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match LogFormat::from_config(config) {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(format: &str) -> LoggingConfig {
        LoggingConfig {
            level: "debug".into(),
            format: format.into(),
        }
    }

    #[test]
    fn test_format_follows_config() {
        assert_eq!(LogFormat::from_config(&logging("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_config(&logging("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_config(&logging("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_config(&logging("")), LogFormat::Pretty);
    }
}
