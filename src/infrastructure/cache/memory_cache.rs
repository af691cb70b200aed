//! In-process cache with per-record expiry.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::debug;

use super::expiry::ExpiryPolicy;
use super::service::{CacheKey, CacheService};
use crate::domain::entities::CompanyRecord;
use crate::utils::clock::{Clock, SystemClock};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CompanyRecord,
    stored_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Sharded in-memory store keyed by [`CacheKey`].
///
/// Operations on different keys rarely share a shard lock, and every
/// operation on one key is atomic. Expired entries are dropped when they are
/// next read, or by [`MemoryCache::purge_expired`].
pub struct MemoryCache {
    entries: DashMap<CacheKey, CacheEntry>,
    policy: ExpiryPolicy,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new(policy: ExpiryPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    pub fn with_clock(policy: ExpiryPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            policy,
            clock,
        }
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut purged = 0;
        self.entries.retain(|_, entry| {
            let live = entry.is_live(now);
            if !live {
                purged += 1;
            }
            live
        });
        purged
    }

    /// Spawns a task that calls [`MemoryCache::purge_expired`] every `period`.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let purged = cache.purge_expired();
                if purged > 0 {
                    debug!("Cache SWEEP: purged {} expired entries", purged);
                }
            }
        })
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Option<CompanyRecord> {
        let now = self.clock.now();

        match self.entries.get(key) {
            None => {
                debug!("Cache MISS: {}", key);
                return None;
            }
            Some(entry) if entry.is_live(now) => {
                debug!("Cache HIT: {} (stored at {})", key, entry.stored_at);
                return Some(entry.value.clone());
            }
            Some(_) => {}
        }

        // The shard guard from `get` is released above; a concurrent `put` may
        // have replaced the entry since, so only drop it if it is still expired.
        self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        debug!("Cache EXPIRED: {}", key);
        None
    }

    async fn put(&self, key: CacheKey, value: CompanyRecord) {
        let now = self.clock.now();
        let ttl = self.policy.ttl_for(&value, now);

        if ttl <= chrono::TimeDelta::zero() {
            debug!("Cache SKIP: {} already expired", key);
            self.entries.remove(&key);
            return;
        }

        debug!("Cache SET: {} (TTL: {}s)", key, ttl.num_seconds());
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
                expires_at: now + ttl,
            },
        );
    }

    async fn evict(&self, key: &CacheKey) {
        if self.entries.remove(key).is_some() {
            debug!("Cache EVICT: {}", key);
        }
    }

    async fn len(&self) -> usize {
        self.entries.len()
    }

    fn describe(&self) -> &'static str {
        "in-memory"
    }
}
