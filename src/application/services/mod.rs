//! Business logic services for the application layer.

pub mod company_service;
pub mod metrics_service;

pub use company_service::CompanyService;
pub use metrics_service::MetricsService;
