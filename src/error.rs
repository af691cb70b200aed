//! Error taxonomy for company lookups and its HTTP mapping.
//!
//! [`CompanyError`] is what the core returns; [`AppError`] is what handlers
//! return. Every failure is classified exactly once, where it is detected, and
//! then passed through unchanged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::format::FormatError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Closed set of user-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CountryNotFound,
    CompanyNotFound,
    BackendServerError,
    ConnectivityTimeout,
    UnexpectedContentType,
    ResponseFormatError,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::CountryNotFound | Self::CompanyNotFound => StatusCode::NOT_FOUND,
            Self::BackendServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConnectivityTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::UnexpectedContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::ResponseFormatError => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::CountryNotFound => "country_not_found",
            Self::CompanyNotFound => "company_not_found",
            Self::BackendServerError => "backend_server_error",
            Self::ConnectivityTimeout => "connectivity_timeout",
            Self::UnexpectedContentType => "unexpected_content_type",
            Self::ResponseFormatError => "response_format_error",
        }
    }
}

/// Failure of a single company lookup.
#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    #[error("No backend configured for country code: {0}")]
    CountryNotFound(String),

    #[error("Company not found")]
    CompanyNotFound,

    #[error("Backend server error: {status}")]
    BackendServer { status: u16 },

    #[error("Timeout or connectivity issue with backend: {0}")]
    ConnectivityTimeout(String),

    #[error("Unsupported backend response type: {0}")]
    UnexpectedContentType(String),

    #[error("Backend response could not be parsed")]
    ResponseFormat(#[source] FormatError),

    /// A broken internal invariant, not a condition a client can act on.
    #[error("Internal invariant violated: {0}")]
    Internal(String),
}

impl CompanyError {
    /// The taxonomy category, or `None` for [`CompanyError::Internal`].
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::CountryNotFound(_) => Some(ErrorKind::CountryNotFound),
            Self::CompanyNotFound => Some(ErrorKind::CompanyNotFound),
            Self::BackendServer { .. } => Some(ErrorKind::BackendServerError),
            Self::ConnectivityTimeout(_) => Some(ErrorKind::ConnectivityTimeout),
            Self::UnexpectedContentType(_) => Some(ErrorKind::UnexpectedContentType),
            Self::ResponseFormat(_) => Some(ErrorKind::ResponseFormatError),
            Self::Internal(_) => None,
        }
    }

    /// True for failures of the backend itself rather than of the request.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            Self::BackendServer { .. } | Self::ConnectivityTimeout(_)
        )
    }
}

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Company(CompanyError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Company(err) => err
                .kind()
                .map_or(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::status),
        }
    }

    fn into_info(self) -> ErrorInfo {
        match self {
            Self::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message,
                details,
            },
            Self::Company(err) => match err.kind() {
                Some(kind) => ErrorInfo {
                    code: kind.code(),
                    message: err.to_string(),
                    details: json!({}),
                },
                None => {
                    tracing::error!("Company lookup failed: {}", err);
                    ErrorInfo {
                        code: "internal_error",
                        message: "Internal server error".to_string(),
                        details: json!({}),
                    }
                }
            },
        }
    }
}

impl From<CompanyError> for AppError {
    fn from(err: CompanyError) -> Self {
        Self::Company(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::bad_request("Invalid query parameters", json!(errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.into_info(),
        };

        (status, Json(body)).into_response()
    }
}
