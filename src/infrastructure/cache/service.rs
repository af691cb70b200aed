//! Cache service trait and key type.

use std::fmt;

use async_trait::async_trait;

use crate::domain::entities::CompanyRecord;

/// Composite cache key: company id plus the country it was looked up in.
///
/// Kept as two fields so `("ab", "c")` and `("a", "bc")` never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub id: String,
    pub country: String,
}

impl CacheKey {
    pub fn new(id: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            country: country.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.country)
    }
}

/// Store for normalized company records.
///
/// Implementations must be safe to call from many tasks at once and must not
/// hold a lock across an `.await`. A lookup past the entry's expiry is a miss.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process store with per-record expiry
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns a copy of the live record for `key`, if any.
    ///
    /// Reads never extend an entry's lifetime.
    async fn get(&self, key: &CacheKey) -> Option<CompanyRecord>;

    /// Stores `value` under `key`, replacing any previous entry.
    async fn put(&self, key: CacheKey, value: CompanyRecord);

    /// Removes the entry for `key`.
    async fn evict(&self, key: &CacheKey);

    /// Number of entries currently held, including ones not yet purged.
    async fn len(&self) -> usize;

    /// Human-readable backend name for health reporting.
    fn describe(&self) -> &'static str;
}
