// Lenient field decoders for wire models.
//
// The backend schema moves faster than the client: keys go missing, come
// back as `null`, or carry numbers as strings. Each decoder here pairs with a
// `#[serde(default = ...)]` so that both an absent key and an explicit `null`
// resolve to the same documented default.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Glyph name used when a category arrives without an icon.
pub const DEFAULT_ICON: &str = "category";

/// Hex color used when a category arrives without a color.
pub const DEFAULT_COLOR: &str = "#6B7280";

pub(crate) fn default_icon() -> String {
    DEFAULT_ICON.to_owned()
}

pub(crate) fn default_color() -> String {
    DEFAULT_COLOR.to_owned()
}

pub(crate) fn now() -> DateTime<Utc> {
    Utc::now()
}

pub(crate) const fn default_true() -> bool {
    true
}

/// `null` or missing becomes `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A string field whose `null` or missing value falls back to `fallback()`.
///
/// Any string the server sends, blank included, is kept as is.
pub(crate) fn string_or<'de, D: Deserializer<'de>>(
    deserializer: D,
    fallback: fn() -> String,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(fallback))
}

pub(crate) fn icon<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    string_or(deserializer, default_icon)
}

pub(crate) fn color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    string_or(deserializer, default_color)
}

/// Identifiers are strings on the wire, but some endpoints emit integers.
pub(crate) fn identifier<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or integer id, got {other}"
        ))),
    }
}

/// Parse the timestamp forms backends emit.
///
/// RFC 3339 first, then a zone-less datetime read as UTC (Python's
/// `isoformat()` default), then a bare date at midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn timestamp_value(value: Option<Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(raw) => parse_timestamp(&raw),
        _ => None,
    }
}

/// `null`, missing or unparseable becomes the parse time.
pub(crate) fn timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    Ok(timestamp_value(Option::<Value>::deserialize(deserializer)?).unwrap_or_else(now))
}

/// Like [`timestamp`] but an absent or unparseable value stays `None`.
pub(crate) fn optional_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(timestamp_value(Option::<Value>::deserialize(deserializer)?))
}

pub(crate) fn true_if_missing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// A number that may arrive as a JSON number, a numeric string, or `null`.
///
/// Unparseable strings decode as `0.0`.
pub(crate) fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// Like [`amount`] but keeps absence distinguishable.
pub(crate) fn optional_amount<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A counter that may arrive as a number, a numeric string, or `null`.
pub(crate) fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).single().unwrap_or_else(now)
    }

    #[test]
    fn rfc3339_with_offset_is_converted_to_utc() {
        assert_eq!(
            parse_timestamp("2024-05-01T15:00:00+07:00"),
            Some(utc(2024, 5, 1, 8, 0, 0))
        );
        assert_eq!(parse_timestamp("2024-05-01T08:00:00Z"), Some(utc(2024, 5, 1, 8, 0, 0)));
    }

    #[test]
    fn zoneless_datetime_is_read_as_utc() {
        let parsed = parse_timestamp("2024-05-01T08:00:00.123000");
        assert_eq!(
            parsed.map(|ts| ts.timestamp_millis()),
            Some(utc(2024, 5, 1, 8, 0, 0).timestamp_millis() + 123)
        );
        assert_eq!(parse_timestamp("2024-05-01 08:00:00"), Some(utc(2024, 5, 1, 8, 0, 0)));
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        assert_eq!(parse_timestamp("2024-05-01"), Some(utc(2024, 5, 1, 0, 0, 0)));
    }

    #[test]
    fn garbage_does_not_parse() {
        assert_eq!(parse_timestamp("kemarin"), None);
        assert_eq!(timestamp_value(Some(Value::from(1_714_550_400))), None);
        assert_eq!(timestamp_value(None), None);
    }
}
