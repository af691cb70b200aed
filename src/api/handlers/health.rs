//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: No backend is configured
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "in-memory, 12 entries" },
///     "backends": { "status": "ok", "message": "2 countries: ru, us" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let cache_check = check_cache(&state).await;
    let backends_check = check_backends(&state);

    let all_healthy = cache_check.is_ok() && backends_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            cache: cache_check,
            backends: backends_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let cache = state.company_service.cache();
    CheckStatus::ok(format!("{}, {} entries", cache.describe(), cache.len().await))
}

fn check_backends(state: &AppState) -> CheckStatus {
    let registry = state.company_service.registry();
    if registry.is_empty() {
        return CheckStatus::error("No backends configured");
    }

    let countries: Vec<_> = registry.routes().map(|(country, _)| country).collect();
    CheckStatus::ok(format!(
        "{} countries: {}",
        countries.len(),
        countries.join(", ")
    ))
}
