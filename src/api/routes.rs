//! API route configuration.

use crate::api::handlers::{company_handler, health_handler, status_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All public routes.
///
/// # Endpoints
///
/// - `GET /company` - Company lookup by `id` and `country_iso`
/// - `GET /status`  - Liveness probe
/// - `GET /health`  - Cache and backend configuration checks
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/company", get(company_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
}
