//! Flexible timestamp deserialization.
//!
//! Clients submit `date` either as an ISO-8601 / RFC 3339 string or as epoch
//! milliseconds (the JavaScript `Date.now()` convention). Serialization is
//! always RFC 3339.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::types::Timestamp;

/// Raw wire forms accepted for a timestamp.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    /// Epoch milliseconds, e.g. `1735689600000`.
    EpochMillis(i64),
    /// RFC 3339 / ISO-8601 string, e.g. `"2025-01-01T00:00:00Z"`.
    Rfc3339(String),
}

/// Deserialize an optional timestamp from either wire form.
///
/// Intended for `#[serde(deserialize_with = "...")]` on `Option<Timestamp>`
/// fields. A missing field deserializes to `None` via `#[serde(default)]`.
pub fn deserialize_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr: Option<TimestampRepr> = Option::deserialize(deserializer)?;
    repr.map(parse_repr::<D>).transpose()
}

fn parse_repr<'de, D>(repr: TimestampRepr) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    match repr {
        TimestampRepr::EpochMillis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| de::Error::custom(format!("epoch millis out of range: {millis}"))),
        TimestampRepr::Rfc3339(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{s}': {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
        date: Option<Timestamp>,
    }

    #[test]
    fn accepts_epoch_millis() {
        let w: Wrapper = serde_json::from_str(r#"{"date": 1735689600000}"#).unwrap();
        assert_eq!(w.date.unwrap().timestamp_millis(), 1_735_689_600_000);
    }

    #[test]
    fn accepts_rfc3339_string() {
        let w: Wrapper = serde_json::from_str(r#"{"date": "2025-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(w.date.unwrap().timestamp(), 1_735_689_600);
    }

    #[test]
    fn missing_field_is_none() {
        let w: Wrapper = serde_json::from_str("{}").unwrap();
        assert!(w.date.is_none());
    }

    #[test]
    fn rejects_garbage_string() {
        let result = serde_json::from_str::<Wrapper>(r#"{"date": "not a date"}"#);
        assert!(result.is_err());
    }
}
