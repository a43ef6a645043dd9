//! Persisted date and timestamp formats.
//!
//! Records carry their calendar date as a short `M/D/YYYY` string and their
//! creation instant as ISO-8601 with millisecond precision.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Display/persist format for a record's calendar date.
pub const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Formats accepted when reading a persisted date.
const DATE_PARSE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Format a calendar date the way it is stored and shown.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_PARSE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Format a UTC instant as ISO-8601 with milliseconds and a `Z` suffix.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 instant, normalizing to UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter for [`NaiveDate`] fields stored as `M/D/YYYY`.
pub mod locale_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid workout date: {raw:?}")))
    }
}

/// Serde adapter for [`DateTime<Utc>`] fields stored as ISO-8601.
pub mod iso_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(*timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid workout timestamp: {raw:?}")))
    }
}
