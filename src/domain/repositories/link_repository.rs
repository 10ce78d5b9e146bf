//! Repository trait for the link store.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Data access interface for shortened links.
///
/// The store is the single source of truth for `id -> long_url` mappings
/// and their visit counters. Callers only ever see copies of rows; the
/// only mutation after creation is the click increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier or the long URL
    /// already exists. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short identifier. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by exact (byte-for-byte) long URL match.
    ///
    /// Used for idempotent shortening and for reading back the surviving
    /// row after a unique-constraint conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter for `id`.
    ///
    /// A no-op when `id` is absent; never creates a row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, id: &str) -> Result<(), AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sums the click counters across all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn total_clicks(&self) -> Result<i64, AppError>;
}
