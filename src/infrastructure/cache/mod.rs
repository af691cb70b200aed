//! Caching layer in front of the registry backends.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - In-process store whose TTL comes from an [`ExpiryPolicy`]
//! - [`NullCache`] - No-op implementation for disabled caching

mod expiry;
mod memory_cache;
mod null_cache;
mod service;

pub use expiry::{DEFAULT_TTL_SECONDS, ExpiryPolicy};
pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::{CacheKey, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
