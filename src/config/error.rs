//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing subscriber could not be installed: {0}")]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Row width bounds {min}..={max} must satisfy 1 <= min <= max <= 26")]
    InvalidRowWidth { min: u8, max: u8 },

    #[error("Preferential seat limit {limit} exceeds maximum row width {max_row_width}")]
    PreferentialLimitTooLarge { limit: usize, max_row_width: u8 },

    #[error("{slot_type} duration bounds {min}..={max} minutes must satisfy 1 <= min <= max")]
    InvalidDurationBounds {
        slot_type: &'static str,
        min: i64,
        max: i64,
    },

    #[error("max_write_attempts must be between 1 and {max}, got {value}")]
    InvalidWriteAttempts { value: u32, max: u32 },

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
