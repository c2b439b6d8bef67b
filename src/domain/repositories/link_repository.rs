//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the shortcode → link mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new link if its code is free.
    ///
    /// The existence check and the insert are a single atomic step: of two
    /// concurrent calls with the same code, exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Collision`] if the code is already in use.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists links ordered by creation time, then code.
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Link>, AppError>;

    /// Counts all stored links.
    async fn count(&self) -> Result<u64, AppError>;
}
