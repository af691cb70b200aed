//! Activity status derived from an upstream closing date.
//!
//! Both backend formats express "the company stops operating at this instant"
//! as an RFC 3339 string with an arbitrary offset. This module is the only place
//! that interprets it, so the two formats can't drift apart.

use chrono::{DateTime, SecondsFormat, Utc};

/// A closing date that could not be parsed as an offset date-time.
#[derive(Debug, thiserror::Error)]
#[error("invalid date-time {value:?}: {source}")]
pub struct InvalidDate {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Whether a company is operating at a given instant, and until when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub active: bool,
    pub until: Option<DateTime<Utc>>,
}

impl Activity {
    /// A company with no known closing date.
    pub const fn indefinite() -> Self {
        Self {
            active: true,
            until: None,
        }
    }
}

/// Resolves activity from an optional raw closing date, evaluated at `now`.
///
/// - No closing date: active, no `until`.
/// - Closing date in the future: active until that instant.
/// - Closing date at or before `now`: inactive.
///
/// # Errors
///
/// Returns [`InvalidDate`] when `closing_date` is present but not a valid
/// RFC 3339 date-time with offset.
pub fn resolve_activity(
    closing_date: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Activity, InvalidDate> {
    let Some(raw) = closing_date else {
        return Ok(Activity::indefinite());
    };

    let until = parse_closing_date(raw)?;

    Ok(Activity {
        active: now < until,
        until: Some(until),
    })
}

/// Parses an RFC 3339 date-time and converts it to UTC.
pub fn parse_closing_date(raw: &str) -> Result<DateTime<Utc>, InvalidDate> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| InvalidDate {
            value: raw.to_string(),
            source,
        })
}

/// Renders a timestamp in the canonical form used in every response.
///
/// Always UTC with a `Z` suffix; fractional seconds only when non-zero.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Re-renders any RFC 3339 string in canonical UTC form.
///
/// Idempotent: normalizing an already-normalized value returns it unchanged.
pub fn normalize_timestamp(raw: &str) -> Result<String, InvalidDate> {
    parse_closing_date(raw).map(format_timestamp)
}
