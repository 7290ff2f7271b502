//! Pure expiry classification.
//!
//! Status classification lives on [`LicenseStatus`](crate::LicenseStatus);
//! this module handles the date half. The store reports expiry as a plain
//! string in one of a few formats, including the literal `lifetime` for
//! keys that never expire.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses an expiry string from the licensing API.
///
/// Accepted formats, in order: `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD`
/// (midnight UTC). Returns `None` for `lifetime` and for anything that
/// does not parse.
#[must_use]
pub fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("lifetime") {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Returns true if `expiry` is strictly in the past at `now`.
///
/// An expiry equal to `now` is not expired. Lifetime licenses and
/// unparseable dates never classify as expired.
#[must_use]
pub fn is_expired(expiry: &str, now: DateTime<Utc>) -> bool {
    match parse_expiry(expiry) {
        Some(expires_at) => now > expires_at,
        None => false,
    }
}
