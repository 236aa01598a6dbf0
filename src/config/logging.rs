//! Logging configuration and tracing setup

use serde::Deserialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::{ConfigError, ValidationError};

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }

    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured filter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TracingInit` if a global subscriber is already
    /// installed. The existing subscriber stays in place.
    pub fn init_tracing(&self) -> Result<(), ConfigError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.filter.as_str()));
        let registry = tracing_subscriber::registry().with(filter);

        if self.json {
            registry.with(fmt::layer().json()).try_init()?;
        } else {
            registry.with(fmt::layer().compact()).try_init()?;
        }
        Ok(())
    }
}
