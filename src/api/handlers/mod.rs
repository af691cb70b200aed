//! HTTP request handlers for API endpoints.

pub mod company;
pub mod health;
pub mod status;

pub use company::company_handler;
pub use health::health_handler;
pub use status::status_handler;
