//! SQLite implementation of the link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_sqlx_error};

/// SQLite repository for link storage and retrieval.
///
/// Uses runtime-checked prepared statements; single-row atomicity comes
/// from the storage engine itself, no application-level locking is added.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO urls (id, long_url)
            VALUES ($1, $2)
            RETURNING id, long_url, clicks
            "#,
        )
        .bind(&new_link.id)
        .bind(&new_link.long_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            SELECT id, long_url, clicks
            FROM urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            SELECT id, long_url, clicks
            FROM urls
            WHERE long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn increment_clicks(&self, id: &str) -> Result<(), AppError> {
        // Absent ids affect zero rows; that is the contract, not an error.
        sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(clicks), 0) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }
}
