use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 (RFC 3339) with millisecond precision, always in UTC.
pub fn datetime_to_string(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}
