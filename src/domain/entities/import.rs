//! Batch import records and per-record outcomes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::Link;

/// One record of a bulk import batch.
///
/// The wire key for the URL is `longUrl` (with `long_url` accepted as an
/// alternative). Both fields decode leniently: a value of any non-string
/// JSON type is treated as absent rather than failing the whole batch, so
/// that one bad record becomes a per-record outcome instead of a parse
/// error. Only a body that is not a sequence of records at all is a batch
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportRecord {
    #[serde(
        default,
        rename = "longUrl",
        alias = "long_url",
        deserialize_with = "string_or_none"
    )]
    pub long_url: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub alias: Option<String>,
}

impl ImportRecord {
    /// Creates a record from owned parts, mainly for tests and the CLI.
    pub fn new(long_url: Option<String>, alias: Option<String>) -> Self {
        Self { long_url, alias }
    }
}

/// Keeps JSON strings, maps every other value (including `null`) to `None`.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Outcome of a single record within a batch.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    /// The record resolved to a stored mapping (freshly inserted, or an
    /// existing mapping for the same URL).
    Imported(Link),
    /// The record was invalid and touched nothing in the store.
    Skipped { reason: String },
    /// Storage failed for this record; the rest of the batch continued.
    Failed { reason: String },
}

/// Aggregated result of a bulk import, outcomes in input order.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub outcomes: Vec<ImportOutcome>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn imported(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImportOutcome::Imported(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImportOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImportOutcome::Failed { .. }))
            .count()
    }

    /// Identifiers of successfully resolved records, in input order.
    pub fn ids(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ImportOutcome::Imported(link) => Some(link.id.as_str()),
                _ => None,
            })
            .collect()
    }
}
