//! DTOs for the bulk import endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ImportOutcome, ImportRecord, ImportReport};

/// Request carrying a batch of import records.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub records: Vec<ImportRecord>,
}

/// Response containing batch processing results.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub summary: ImportSummary,
    pub items: Vec<ImportResultItem>,
}

/// Summary counts for a processed batch.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub total: usize,
    pub imported: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Per-record result, tagged by its outcome.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ImportResultItem {
    Imported {
        id: String,
        long_url: String,
        short_url: String,
    },
    Skipped {
        reason: String,
    },
    Failed {
        reason: String,
    },
}

impl ImportResponse {
    /// Builds the wire response from a domain report.
    ///
    /// `short_url_for` composes the visible short link for an identifier;
    /// URL composition is a presentation concern the domain report does
    /// not know about.
    pub fn from_report(report: ImportReport, short_url_for: impl Fn(&str) -> String) -> Self {
        let summary = ImportSummary {
            total: report.total(),
            imported: report.imported(),
            skipped: report.skipped(),
            failed: report.failed(),
        };

        let items = report
            .outcomes
            .into_iter()
            .map(|outcome| match outcome {
                ImportOutcome::Imported(link) => ImportResultItem::Imported {
                    short_url: short_url_for(&link.id),
                    id: link.id,
                    long_url: link.long_url,
                },
                ImportOutcome::Skipped { reason } => ImportResultItem::Skipped { reason },
                ImportOutcome::Failed { reason } => ImportResultItem::Failed { reason },
            })
            .collect();

        Self { summary, items }
    }
}
