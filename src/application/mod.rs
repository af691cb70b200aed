//! Application layer services implementing the lookup pipeline.
//!
//! # Available Services
//!
//! - [`services::company_service::CompanyService`] - Cache-fronted company lookup
//! - [`services::metrics_service::MetricsService`] - Request and backend counters

pub mod services;
