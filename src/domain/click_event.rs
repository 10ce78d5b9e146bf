//! Click event model for asynchronous click tracking.

/// A visit to a short link, queued for asynchronous counting.
///
/// Created in the redirect path and sent over a bounded channel to the
/// background worker, which performs the actual counter increment. This
/// decouples the redirect response from the database write: a slow or
/// failed increment never delays or fails a redirect.
///
/// # Usage Flow
///
/// 1. Redirect resolver finds the target URL
/// 2. Event is sent to the channel (non-blocking; dropped when full)
/// 3. [`crate::domain::click_worker::run_click_worker`] increments `clicks`
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub id: String,
}

impl ClickEvent {
    /// Creates a click event for the given short identifier.
    pub fn new(id: String) -> Self {
        Self { id }
    }
}
