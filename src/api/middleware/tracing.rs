//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Spans are created at `INFO` level with method, URI, and HTTP version;
/// responses are logged at `INFO` with status code and latency in
/// milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/shorten version=HTTP/1.1}: Processing request
/// INFO request{method=POST uri=/api/shorten version=HTTP/1.1}: Response 200 OK in 3ms
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
