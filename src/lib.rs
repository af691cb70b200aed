//! # Company Proxy
//!
//! A caching lookup proxy in front of per-country company registries, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Canonical record, wire formats, activity rules, routing
//! - **Application Layer** ([`application`]) - Lookup orchestration and metrics
//! - **Infrastructure Layer** ([`infrastructure`]) - Backend HTTP client and record cache
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Request Flow
//!
//! 1. `GET /company?id=..&country_iso=..` arrives
//! 2. A cached record for `(id, country_iso)` is returned as is
//! 3. Otherwise the country's backend is called, its `v1`/`v2` body is
//!    normalized, and the record is cached until its activity status can change
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- us=http://localhost:9001 ru=http://localhost:9002
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from arguments and environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CompanyService;
    pub use crate::domain::backend_registry::BackendRegistry;
    pub use crate::domain::entities::CompanyRecord;
    pub use crate::error::{AppError, CompanyError};
    pub use crate::infrastructure::backend::HttpFetcher;
    pub use crate::infrastructure::cache::{CacheService, ExpiryPolicy, MemoryCache, NullCache};
    pub use crate::state::AppState;
}
