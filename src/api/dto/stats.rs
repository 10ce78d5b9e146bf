//! DTOs for link statistics.

use serde::Serialize;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub id: String,
    pub long_url: String,
    pub short_url: String,
    pub clicks: i64,
}
