//! Canonical company record returned by the proxy.

use chrono::{DateTime, Utc};

use crate::domain::activity::Activity;

/// A company as seen by proxy clients, independent of the upstream wire format.
///
/// Fields are private so a record cannot change after it has been cached.
/// `active == false` always comes with an `active_until` in the past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    id: String,
    name: String,
    active: bool,
    active_until: Option<DateTime<Utc>>,
}

impl CompanyRecord {
    /// Builds a record from its identity and resolved activity.
    pub fn new(id: impl Into<String>, name: impl Into<String>, activity: Activity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: activity.active,
            active_until: activity.until,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Instant the company closed (or is scheduled to close), in UTC.
    pub fn active_until(&self) -> Option<DateTime<Utc>> {
        self.active_until
    }

    /// The same record with `active` re-evaluated at `now`.
    pub fn as_of(&self, now: DateTime<Utc>) -> Self {
        let mut record = self.clone();
        if let Some(until) = self.active_until {
            record.active = now < until;
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_carries_activity() {
        let until = Utc.with_ymd_and_hms(2022, 1, 28, 0, 0, 0).unwrap();
        let record = CompanyRecord::new(
            "123",
            "Acme",
            Activity {
                active: false,
                until: Some(until),
            },
        );

        assert_eq!(record.id(), "123");
        assert_eq!(record.name(), "Acme");
        assert!(!record.is_active());
        assert_eq!(record.active_until(), Some(until));
    }

    #[test]
    fn test_as_of_closes_a_record_once_its_date_passes() {
        let until = Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap();
        let record = CompanyRecord::new(
            "1",
            "Acme",
            Activity {
                active: true,
                until: Some(until),
            },
        );

        assert!(record.as_of(until - chrono::TimeDelta::seconds(1)).is_active());

        let closed = record.as_of(until);
        assert!(!closed.is_active());
        assert_eq!(closed.active_until(), Some(until));
        assert_eq!(closed.name(), "Acme");
    }

    #[test]
    fn test_as_of_keeps_open_ended_records_active() {
        let record = CompanyRecord::new("1", "Acme", Activity::indefinite());
        let far_future = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();

        assert!(record.as_of(far_future).is_active());
    }
}
