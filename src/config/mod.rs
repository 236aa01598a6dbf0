//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SCREENING_ENGINE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use screening_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing().ok();
//! ```

mod error;
mod logging;
mod persistence;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use persistence::{PersistenceConfig, MAX_WRITE_ATTEMPTS_LIMIT};

use serde::Deserialize;

use crate::domain::scheduling::{BookingSlotLimits, BookingSlotType};
use crate::domain::seating::SeatingLimits;

/// Widest row the seat model can express (A..=Z).
const MAX_ROW_WIDTH: u8 = 26;

/// Root engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Row width and preferential seat limits
    #[serde(default)]
    pub seating: SeatingLimits,

    /// Duration windows per booking slot type
    #[serde(default)]
    pub booking_slots: BookingSlotLimits,

    /// Repository write behaviour
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SCREENING_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SCREENING_ENGINE__SEATING__MAX_PREFERENTIAL_SEATS=6` -> `seating.max_preferential_seats = 6`
    /// - `SCREENING_ENGINE__BOOKING_SLOTS__CLEANING__MAX_MINUTES=90` -> `booking_slots.cleaning.max_minutes = 90`
    /// - `SCREENING_ENGINE__PERSISTENCE__MAX_WRITE_ATTEMPTS=3` -> `persistence.max_write_attempts = 3`
    ///
    /// A booking slot override must give both `MIN_MINUTES` and `MAX_MINUTES`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SCREENING_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first inconsistent section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_seating(&self.seating)?;
        validate_booking_slots(&self.booking_slots)?;
        self.persistence.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn validate_seating(limits: &SeatingLimits) -> Result<(), ValidationError> {
    let (min, max) = (limits.min_row_width, limits.max_row_width);
    if min == 0 || min > max || max > MAX_ROW_WIDTH {
        return Err(ValidationError::InvalidRowWidth { min, max });
    }
    if limits.max_preferential_seats > usize::from(max) {
        return Err(ValidationError::PreferentialLimitTooLarge {
            limit: limits.max_preferential_seats,
            max_row_width: max,
        });
    }
    Ok(())
}

fn validate_booking_slots(limits: &BookingSlotLimits) -> Result<(), ValidationError> {
    for slot_type in BookingSlotType::ALL {
        let bounds = limits.bounds_for(slot_type);
        if bounds.min_minutes < 1 || bounds.min_minutes > bounds.max_minutes {
            return Err(ValidationError::InvalidDurationBounds {
                slot_type: slot_type.as_str(),
                min: bounds.min_minutes,
                max: bounds.max_minutes,
            });
        }
    }
    Ok(())
}
