//! Time-to-live policies for cached records.
//!
//! The cache itself knows nothing about companies; it asks an [`ExpiryPolicy`]
//! how long each record may be served.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::entities::CompanyRecord;

/// Default window, in seconds, for records whose status is not expected to change.
pub const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;

type TtlFn = dyn Fn(&CompanyRecord, DateTime<Utc>) -> TimeDelta + Send + Sync;

/// Computes a record's time-to-live at the moment it is stored.
///
/// A zero or negative result means the record must not be stored.
#[derive(Clone)]
pub struct ExpiryPolicy {
    ttl: Arc<TtlFn>,
}

impl ExpiryPolicy {
    pub fn new<F>(ttl: F) -> Self
    where
        F: Fn(&CompanyRecord, DateTime<Utc>) -> TimeDelta + Send + Sync + 'static,
    {
        Self { ttl: Arc::new(ttl) }
    }

    /// Same TTL for every record.
    pub fn fixed(ttl: TimeDelta) -> Self {
        Self::new(move |_, _| ttl)
    }

    /// Expires a record when its activity status is due to change.
    ///
    /// - Active with a future `active_until`: lives exactly until that instant.
    /// - Active with an `active_until` already reached: not stored, the record
    ///   is stale before it lands.
    /// - Inactive, or active with no closing date: `default_ttl`.
    pub fn activity(default_ttl: TimeDelta) -> Self {
        Self::new(move |record, now| match record.active_until() {
            Some(until) if record.is_active() => until - now,
            _ => default_ttl,
        })
    }

    pub fn ttl_for(&self, record: &CompanyRecord, now: DateTime<Utc>) -> TimeDelta {
        (self.ttl)(record, now)
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::activity(TimeDelta::seconds(DEFAULT_TTL_SECONDS))
    }
}

impl fmt::Debug for ExpiryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiryPolicy").finish_non_exhaustive()
    }
}
