//! Background worker draining the click event channel.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Consumes click events and increments the stored counters.
///
/// Runs until the channel closes (all senders dropped), so shutting the
/// server down lets the worker drain what is already queued. Increment
/// failures are logged and the worker moves on; click counting is
/// best-effort by contract.
pub async fn run_click_worker<L: LinkRepository>(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<L>,
) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = repository.increment_clicks(&event.id).await {
            tracing::warn!("Failed to record click for '{}': {}", event.id, e);
        }
    }

    tracing::debug!("Click channel closed, worker exiting");
}
