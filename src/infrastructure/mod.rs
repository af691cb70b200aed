//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (in-memory and no-op implementations)
//! - [`backend`] - HTTP access to the registry backends

pub mod backend;
pub mod cache;
