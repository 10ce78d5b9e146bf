//! Redirect resolution service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Resolves short identifiers to their redirect targets.
///
/// The click increment is decoupled from the lookup: a hit enqueues a
/// [`ClickEvent`] on a bounded channel and returns immediately. A full
/// channel drops the event (logged, never surfaced) so redirects stay
/// fast under load. This is the hot read path: many resolves per link,
/// one counter write each.
pub struct RedirectService<L: LinkRepository> {
    link_repository: Arc<L>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl<L: LinkRepository> RedirectService<L> {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>, click_sender: mpsc::Sender<ClickEvent>) -> Self {
        Self {
            link_repository,
            click_sender,
        }
    }

    /// Resolves an identifier to its target URL, recording the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))?;

        if let Err(e) = self.click_sender.try_send(ClickEvent::new(link.id)) {
            tracing::warn!("Click event dropped for '{}': {}", id, e);
        }

        Ok(link.long_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;

    #[tokio::test]
    async fn test_resolve_returns_target_and_enqueues_click() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| id == "abc123")
            .times(1)
            .returning(|_| {
                Ok(Some(Link::new(
                    "abc123".to_string(),
                    "https://example.com/target".to_string(),
                    0,
                )))
            });

        let (tx, mut rx) = mpsc::channel(10);
        let service = RedirectService::new(Arc::new(mock_repo), tx);

        let target = service.resolve("abc123").await.unwrap();

        assert_eq!(target, "https://example.com/target");

        let event = rx.try_recv().unwrap();
        assert_eq!(event.id, "abc123");
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let (tx, mut rx) = mpsc::channel(10);
        let service = RedirectService::new(Arc::new(mock_repo), tx);

        let result = service.resolve("ghost1").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_succeeds_when_click_queue_is_full() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| {
            Ok(Some(Link::new(
                "abc123".to_string(),
                "https://example.com".to_string(),
                0,
            )))
        });

        let (tx, _rx) = mpsc::channel(1);
        tx.try_send(ClickEvent::new("filler".to_string())).unwrap();

        let service = RedirectService::new(Arc::new(mock_repo), tx);

        let target = service.resolve("abc123").await.unwrap();

        assert_eq!(target, "https://example.com");
    }
}
