//! Persistence configuration

use serde::Deserialize;

use super::ValidationError;

/// Upper bound on `max_write_attempts`.
pub const MAX_WRITE_ATTEMPTS_LIMIT: u32 = 100;

/// How handlers write screenings back to the repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistenceConfig {
    /// Load-apply-update cycles before a write conflict is reported
    #[serde(default = "default_max_write_attempts")]
    pub max_write_attempts: u32,
}

fn default_max_write_attempts() -> u32 {
    5
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            max_write_attempts: default_max_write_attempts(),
        }
    }
}

impl PersistenceConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_write_attempts == 0 || self.max_write_attempts > MAX_WRITE_ATTEMPTS_LIMIT {
            return Err(ValidationError::InvalidWriteAttempts {
                value: self.max_write_attempts,
                max: MAX_WRITE_ATTEMPTS_LIMIT,
            });
        }
        Ok(())
    }
}
