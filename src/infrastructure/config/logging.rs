//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Output formats accepted by [`LoggingConfig::format`].
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs always go to stderr. `RUST_LOG` takes precedence over `level`.
    /// A subscriber that is already installed is left in place.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));
        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

        let _ = match self.format.as_str() {
            "json" => builder.json().try_init(),
            "compact" => builder.compact().try_init(),
            _ => builder.pretty().try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}
