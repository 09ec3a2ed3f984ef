//! Conversions between timestamps and the ISO 8601 strings stored in hits.
use chrono::{DateTime, SecondsFormat, Utc};

use super::DurationSinceUnixEpoch;

/// It converts a timestamp to an ISO 8601 string in UTC with millisecond
/// precision, for example `2024-05-01T10:20:30.456Z`.
///
/// Timestamps beyond the range supported by `chrono` (year 262143) are
/// clamped to the latest supported time.
#[must_use]
pub fn convert_from_timestamp_to_iso_8601(duration: DurationSinceUnixEpoch) -> String {
    convert_from_timestamp_to_datetime_utc(duration).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// It converts a timestamp to a `DateTime::<Utc>`.
#[must_use]
pub fn convert_from_timestamp_to_datetime_utc(duration: DurationSinceUnixEpoch) -> DateTime<Utc> {
    i64::try_from(duration.as_secs())
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, duration.subsec_nanos()))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
