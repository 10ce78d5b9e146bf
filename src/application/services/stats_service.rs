//! Link statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Store-wide totals, used by the health check and the admin CLI.
#[derive(Debug, Clone, Copy)]
pub struct StoreOverview {
    pub links: i64,
    pub clicks: i64,
}

/// Read-only statistics over stored links.
pub struct StatsService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> StatsService<L> {
    /// Creates a new stats service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns the link for `id`, including its click counter.
    ///
    /// Pure read; never touches the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link_stats(&self, id: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Returns totals across the whole store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn overview(&self) -> Result<StoreOverview, AppError> {
        let links = self.link_repository.count().await?;
        let clicks = self.link_repository.total_clicks().await?;

        Ok(StoreOverview { links, clicks })
    }
}
