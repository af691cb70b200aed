//! Handler for company lookup.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::company::{CompanyQuery, CompanyResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the canonical record for a company.
///
/// # Endpoint
///
/// `GET /company?id=<id>&country_iso=<country>`
///
/// # Response
///
/// ```json
/// {
///   "id": "123",
///   "name": "Acme",
///   "active": false,
///   "activeUntil": "2022-01-28T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// | Status | Cause                                   |
/// |--------|-----------------------------------------|
/// | 400    | Missing or empty query parameter        |
/// | 404    | Unknown country or company              |
/// | 415    | Backend answered in an unknown format   |
/// | 500    | Backend server error or internal defect |
/// | 502    | Backend body could not be parsed        |
/// | 504    | Backend timeout or connectivity failure |
pub async fn company_handler(
    State(state): State<AppState>,
    query: Result<Query<CompanyQuery>, QueryRejection>,
) -> Result<Json<CompanyResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    query.validate()?;

    let record = state
        .company_service
        .get_company(&query.id, &query.country_iso)
        .await?;

    Ok(Json(CompanyResponse::from(&record)))
}
