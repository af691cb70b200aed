//! Counters for the lookup pipeline.
//!
//! Counters go through the `metrics` facade. This crate installs no recorder,
//! so without one every call is a no-op.

use metrics::counter;

use crate::domain::format::CompanyFormat;

pub const REQUESTS_TOTAL: &str = "company_requests_total";
pub const BACKEND_RESPONSES_TOTAL: &str = "backend_responses_total";
pub const UNEXPECTED_CONTENT_TYPE_TOTAL: &str = "backend_unexpected_content_type_total";
pub const BACKEND_ERRORS_TOTAL: &str = "backend_errors_total";

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    pub fn increment_request_count(&self) {
        counter!(REQUESTS_TOTAL).increment(1);
    }

    pub fn increment_response_count(&self, format: CompanyFormat) {
        counter!(BACKEND_RESPONSES_TOTAL, "format" => format.label()).increment(1);
    }

    pub fn increment_unexpected_content_type_count(&self) {
        counter!(UNEXPECTED_CONTENT_TYPE_TOTAL).increment(1);
    }

    pub fn increment_backend_error_count(&self) {
        counter!(BACKEND_ERRORS_TOTAL).increment(1);
    }
}
