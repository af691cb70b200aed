//! Handler for the liveness probe.

/// `GET /status`
pub async fn status_handler() -> &'static str {
    "Service is running"
}
