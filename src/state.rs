//! Shared application state injected into HTTP handlers.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{ImportService, LinkService, RedirectService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Application state shared across all request handlers.
///
/// Owned by the composition root ([`crate::server`]) and cloned into the
/// router; services are reference-counted so clones stay cheap. The click
/// sender is held here (in addition to the redirect service) so the
/// health check can observe the queue.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteLinkRepository>>,
    pub import_service: Arc<ImportService<SqliteLinkRepository>>,
    pub stats_service: Arc<StatsService<SqliteLinkRepository>>,
    pub base_url: String,
    pub click_sender: mpsc::Sender<ClickEvent>,
}
