//! Repository trait for the per-link click log.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only click log, one sequence per short code.
///
/// Counts are always derived from the stored entries; there is no separate
/// counter to keep in sync.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryClickRepository`] - process-local log
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click and returns the number of clicks now recorded for
    /// its code.
    ///
    /// Concurrent appends to the same code are never lost.
    async fn record_click(&self, new_click: NewClick) -> Result<u64, AppError>;

    /// Returns all clicks for a code in the order they were recorded.
    async fn clicks_for(&self, code: &str) -> Result<Vec<Click>, AppError>;

    /// Counts clicks recorded for a code.
    async fn count_for(&self, code: &str) -> Result<u64, AppError>;
}
