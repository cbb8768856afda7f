use chrono::{DateTime, SecondsFormat, Utc};

/// Get current Unix timestamp in UTC (milliseconds)
pub fn get_utc_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) to an RFC 3339 string in UTC.
///
/// Output has millisecond precision and a `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`.
/// Out-of-range values fall back to the Unix epoch.
pub fn timestamp_to_rfc3339(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
