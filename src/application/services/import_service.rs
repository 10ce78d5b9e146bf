//! Bulk import service.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::entities::{ImportOutcome, ImportRecord, ImportReport};
use crate::domain::repositories::LinkRepository;

/// Service applying the shortening policy to a batch of records.
///
/// Records are processed **sequentially and independently**: collision
/// checks for later records must observe the effects of earlier inserts
/// in the same batch, and one failing record never rolls back or blocks
/// the others. Delegates each record to [`LinkService::shorten`] so both
/// paths share one collision policy.
pub struct ImportService<L: LinkRepository> {
    link_service: Arc<LinkService<L>>,
}

impl<L: LinkRepository> ImportService<L> {
    /// Creates a new import service.
    pub fn new(link_service: Arc<LinkService<L>>) -> Self {
        Self { link_service }
    }

    /// Imports a batch of records, producing one outcome per record.
    ///
    /// # Per-record outcomes
    ///
    /// - Missing, non-string, or empty `longUrl` → [`ImportOutcome::Skipped`],
    ///   no store mutation
    /// - Stored mapping resolved (inserted, alias regenerated on collision,
    ///   or existing mapping for the same URL) → [`ImportOutcome::Imported`]
    /// - Storage failure → [`ImportOutcome::Failed`]; the batch continues
    ///
    /// The batch itself never aborts early; unparseable input is rejected
    /// by the caller before this point.
    pub async fn import(&self, records: Vec<ImportRecord>) -> ImportReport {
        let mut report = ImportReport::default();

        for record in records {
            let outcome = self.import_record(record).await;
            report.outcomes.push(outcome);
        }

        tracing::info!(
            "Import finished: {} imported, {} skipped, {} failed of {}",
            report.imported(),
            report.skipped(),
            report.failed(),
            report.total()
        );

        report
    }

    async fn import_record(&self, record: ImportRecord) -> ImportOutcome {
        let Some(long_url) = record.long_url.filter(|url| !url.is_empty()) else {
            return ImportOutcome::Skipped {
                reason: "Missing or invalid longUrl".to_string(),
            };
        };

        match self.link_service.shorten(long_url, record.alias).await {
            Ok(link) => ImportOutcome::Imported(link),
            Err(e) => {
                tracing::warn!("Import record failed: {}", e);
                ImportOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::AppError;
    use serde_json::json;

    fn service_with(mock_repo: MockLinkRepository) -> ImportService<MockLinkRepository> {
        ImportService::new(Arc::new(LinkService::new(Arc::new(mock_repo))))
    }

    fn record(long_url: Option<&str>, alias: Option<&str>) -> ImportRecord {
        ImportRecord::new(
            long_url.map(|s| s.to_string()),
            alias.map(|s| s.to_string()),
        )
    }

    #[tokio::test]
    async fn test_import_mixed_batch() {
        let mut mock_repo = MockLinkRepository::new();

        // Only the first record takes the no-alias dedup lookup.
        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .times(2)
            .returning(|new_link| Ok(Link::new(new_link.id, new_link.long_url, 0)));

        let service = service_with(mock_repo);

        let report = service
            .import(vec![
                record(Some("http://a"), None),
                record(Some(""), None),
                record(Some("http://b"), Some("x")),
            ])
            .await;

        assert_eq!(report.total(), 3);
        assert_eq!(report.imported(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 0);

        assert!(matches!(
            report.outcomes[1],
            ImportOutcome::Skipped { .. }
        ));
        match &report.outcomes[2] {
            ImportOutcome::Imported(link) => assert_eq!(link.id, "x"),
            other => panic!("expected imported outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_import_skips_missing_url_without_touching_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);
        mock_repo.expect_find_by_id().times(0);
        mock_repo.expect_find_by_long_url().times(0);

        let service = service_with(mock_repo);

        let report = service.import(vec![record(None, Some("x"))]).await;

        assert_eq!(report.skipped(), 1);
        assert!(report.ids().is_empty());
    }

    #[tokio::test]
    async fn test_import_storage_failure_does_not_abort_batch() {
        let mut mock_repo = MockLinkRepository::new();

        // First record fails at the dedup lookup, second succeeds.
        let mut calls = 0;
        mock_repo
            .expect_find_by_long_url()
            .times(2)
            .returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Err(AppError::internal("Database error", json!({})))
                } else {
                    Ok(None)
                }
            });
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_link| Ok(Link::new(new_link.id, new_link.long_url, 0)));

        let service = service_with(mock_repo);

        let report = service
            .import(vec![
                record(Some("http://a"), None),
                record(Some("http://b"), None),
            ])
            .await;

        assert_eq!(report.failed(), 1);
        assert_eq!(report.imported(), 1);
        assert!(matches!(report.outcomes[0], ImportOutcome::Failed { .. }));
        assert!(matches!(report.outcomes[1], ImportOutcome::Imported(_)));
    }

    #[tokio::test]
    async fn test_import_taken_alias_is_regenerated_not_failed() {
        let mut mock_repo = MockLinkRepository::new();

        let mut lookups = 0;
        mock_repo.expect_find_by_id().times(2).returning(move |_| {
            lookups += 1;
            if lookups == 1 {
                Ok(Some(Link::new(
                    "x".to_string(),
                    "https://earlier.example".to_string(),
                    0,
                )))
            } else {
                Ok(None)
            }
        });
        mock_repo
            .expect_create()
            .withf(|new_link| new_link.id != "x")
            .times(1)
            .returning(|new_link| Ok(Link::new(new_link.id, new_link.long_url, 0)));

        let service = service_with(mock_repo);

        let report = service
            .import(vec![record(Some("http://b"), Some("x"))])
            .await;

        assert_eq!(report.imported(), 1);
        assert_eq!(report.failed(), 0);
        match &report.outcomes[0] {
            ImportOutcome::Imported(link) => assert_ne!(link.id, "x"),
            other => panic!("expected imported outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_import_empty_batch_yields_empty_report() {
        let service = service_with(MockLinkRepository::new());

        let report = service.import(Vec::new()).await;

        assert_eq!(report.total(), 0);
        assert_eq!(report.imported(), 0);
    }
}
