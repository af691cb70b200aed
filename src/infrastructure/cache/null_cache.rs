//! Cache that stores nothing, used when caching is disabled.

use super::service::{CacheKey, CacheService};
use crate::domain::entities::CompanyRecord;
use async_trait::async_trait;
use tracing::debug;

/// Every lookup misses; every write is discarded.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &CacheKey) -> Option<CompanyRecord> {
        None
    }

    async fn put(&self, _key: CacheKey, _value: CompanyRecord) {}

    async fn evict(&self, _key: &CacheKey) {}

    async fn len(&self) -> usize {
        0
    }

    fn describe(&self) -> &'static str {
        "disabled"
    }
}
