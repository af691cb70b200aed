//! Outbound calls to the per-country registry backends.
//!
//! - [`BackendFetcher`] - One-shot fetch of a raw company document
//! - [`HttpFetcher`] - `reqwest` implementation with optional conditional requests

mod conditional;
mod fetcher;
mod http_fetcher;

pub use conditional::ValidatorStore;
pub use fetcher::{BackendFetcher, BackendResponse, company_url};
pub use http_fetcher::HttpFetcher;

#[cfg(test)]
pub use fetcher::MockBackendFetcher;
