//! Upstream response formats and their normalization into [`CompanyRecord`].
//!
//! Backends announce their wire format through the `Content-Type` header.
//! Each known content type maps to one [`CompanyFormat`]; adding a format means
//! adding a variant, a body struct, and a row in [`FORMATS`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::activity::{InvalidDate, resolve_activity};
use crate::domain::entities::CompanyRecord;
use crate::error::CompanyError;

pub const V1_CONTENT_TYPE: &str = "application/x-company-v1";
pub const V2_CONTENT_TYPE: &str = "application/x-company-v2";

/// Content type lookup table, matched exactly.
const FORMATS: &[(&str, CompanyFormat)] = &[
    (V1_CONTENT_TYPE, CompanyFormat::V1),
    (V2_CONTENT_TYPE, CompanyFormat::V2),
];

/// Reasons a body in a known format could not be turned into a record.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Date(#[from] InvalidDate),
}

/// Wire formats spoken by registry backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyFormat {
    V1,
    V2,
}

/// `application/x-company-v1` body.
#[derive(Debug, Deserialize)]
pub struct V1Body {
    pub cn: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub closed_on: Option<String>,
}

/// `application/x-company-v2` body.
#[derive(Debug, Deserialize)]
pub struct V2Body {
    pub company_name: String,
    #[serde(default)]
    pub tin: Option<String>,
    #[serde(default)]
    pub dissolved_on: Option<String>,
}

/// A parsed upstream body of any known format.
#[derive(Debug)]
pub enum CompanyBody {
    V1(V1Body),
    V2(V2Body),
}

impl CompanyBody {
    pub fn name(&self) -> &str {
        match self {
            Self::V1(body) => &body.cn,
            Self::V2(body) => &body.company_name,
        }
    }

    pub fn closing_date(&self) -> Option<&str> {
        match self {
            Self::V1(body) => body.closed_on.as_deref(),
            Self::V2(body) => body.dissolved_on.as_deref(),
        }
    }
}

impl CompanyFormat {
    /// Looks up the format for a `Content-Type` value.
    ///
    /// The match is exact: parameters or different casing are not accepted.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        FORMATS
            .iter()
            .find(|(known, _)| *known == content_type)
            .map(|(_, format)| *format)
    }

    /// Short label used in logs and metric labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    pub fn parse(self, body: &[u8]) -> Result<CompanyBody, FormatError> {
        Ok(match self {
            Self::V1 => CompanyBody::V1(serde_json::from_slice(body)?),
            Self::V2 => CompanyBody::V2(serde_json::from_slice(body)?),
        })
    }

    /// Parses `body` and builds the canonical record for company `id`.
    pub fn normalize(
        self,
        id: &str,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> Result<CompanyRecord, FormatError> {
        let parsed = self.parse(body)?;
        let activity = resolve_activity(parsed.closing_date(), now)?;
        Ok(CompanyRecord::new(id, parsed.name(), activity))
    }
}

/// Normalizes a backend response, dispatching on its content type.
///
/// # Errors
///
/// - [`CompanyError::UnexpectedContentType`] when the content type is unknown
/// - [`CompanyError::ResponseFormat`] when the body is malformed or carries an
///   unparseable closing date
pub fn normalize(
    id: &str,
    content_type: &str,
    body: &[u8],
    now: DateTime<Utc>,
) -> Result<CompanyRecord, CompanyError> {
    let format = CompanyFormat::from_content_type(content_type)
        .ok_or_else(|| CompanyError::UnexpectedContentType(content_type.to_string()))?;

    format
        .normalize(id, body, now)
        .map_err(CompanyError::ResponseFormat)
}
