//! DTOs for the company lookup endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::activity::format_timestamp;
use crate::domain::entities::CompanyRecord;

/// Query string of `GET /company`.
#[derive(Debug, Deserialize, Validate)]
pub struct CompanyQuery {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,

    /// Country code selecting the backend, matched case-sensitively.
    #[validate(length(min = 1, message = "country_iso must not be empty"))]
    pub country_iso: String,
}

/// Canonical company representation.
///
/// `activeUntil` is omitted, not `null`, when the company has no closing date.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub active_until: Option<String>,
}

impl From<&CompanyRecord> for CompanyResponse {
    fn from(record: &CompanyRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            active: record.is_active(),
            active_until: record.active_until().map(format_timestamp),
        }
    }
}
