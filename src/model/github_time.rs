//! Timestamp encoding used by the endpoints.
//!
//! GitHub timestamps are written with millisecond precision and a `Z`
//! suffix, e.g. `2024-12-01T00:00:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serialises `at` as RFC 3339 with milliseconds in UTC.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
