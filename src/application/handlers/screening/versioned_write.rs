//! Load-apply-update cycle shared by screening command handlers.

use std::sync::Arc;

use crate::config::PersistenceConfig;
use crate::domain::foundation::{DomainResult, ErrorCode, ScreeningId};
use crate::domain::screening::{Screening, ScreeningError};
use crate::ports::ScreeningRepository;

/// Outcome of a successful versioned write.
#[derive(Debug, Clone)]
pub(crate) struct WriteOutcome {
    /// Screening as loaded on the attempt that succeeded.
    pub previous: Screening,
    pub screening: Screening,
    pub version: u64,
}

/// Applies a domain operation to the latest stored screening and writes it
/// back with compare-and-swap, reloading on write conflicts.
///
/// Domain rejections end the cycle immediately. Only
/// `CONCURRENCY_CONFLICT` from the repository triggers another attempt.
pub(crate) struct VersionedWriter {
    repository: Arc<dyn ScreeningRepository>,
    max_attempts: u32,
}

impl VersionedWriter {
    pub(crate) fn new(repository: Arc<dyn ScreeningRepository>) -> Self {
        Self {
            repository,
            max_attempts: PersistenceConfig::default().max_write_attempts,
        }
    }

    pub(crate) fn set_max_attempts(&mut self, max_attempts: u32) {
        self.max_attempts = max_attempts.max(1);
    }

    pub(crate) async fn apply<F>(
        &self,
        id: &ScreeningId,
        operation: &'static str,
        mut op: F,
    ) -> Result<WriteOutcome, ScreeningError>
    where
        F: FnMut(&Screening) -> DomainResult<Screening> + Send,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;

            let loaded = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| ScreeningError::not_found(*id))?;

            let updated = match op(&loaded.screening) {
                Ok(updated) => updated,
                Err(errors) => {
                    tracing::warn!(
                        screening_id = %id,
                        operation,
                        errors = %errors,
                        "screening command rejected"
                    );
                    return Err(errors.into());
                }
            };

            match self.repository.update(&updated, loaded.version).await {
                Ok(version) => {
                    return Ok(WriteOutcome {
                        previous: loaded.screening,
                        screening: updated,
                        version,
                    })
                }
                Err(err)
                    if err.code == ErrorCode::ConcurrencyConflict
                        && attempt < self.max_attempts =>
                {
                    tracing::warn!(
                        screening_id = %id,
                        operation,
                        attempt,
                        "write conflict, reloading screening"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
