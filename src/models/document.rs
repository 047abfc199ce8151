//! Raw documents as returned by the record store
//!
//! Documents carry an identifier and an untyped JSON field map. Typed records
//! are built from them with the lenient accessors below: a field that is
//! absent, `null` or of an unexpected JSON type reads as `None`.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single record of a named collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Build a document from a JSON value. Anything other than an object
    /// yields an empty field map.
    pub fn from_value(id: impl Into<String>, value: Value) -> Self {
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(id, fields)
    }

    /// Non-empty string field
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Exact decimal read of a JSON number or a numeric string
    pub fn decimal_field(&self, name: &str) -> Option<Decimal> {
        match self.fields.get(name)? {
            Value::Number(n) => parse_decimal(&n.to_string()),
            Value::String(s) => parse_decimal(s.trim()),
            _ => None,
        }
    }

    pub fn i64_field(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(Value::as_i64)
    }

    /// Timestamp field.
    ///
    /// Accepted encodings:
    /// - RFC 3339 string, or a bare `YYYY-MM-DD` date (midnight UTC)
    /// - integer epoch milliseconds
    /// - Firestore-style object with `seconds`/`_seconds` and optional
    ///   `nanoseconds`/`_nanoseconds`
    pub fn timestamp_field(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(name)? {
            Value::String(s) => parse_timestamp_str(s),
            Value::Number(n) => n
                .as_i64()
                .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
            Value::Object(obj) => {
                let seconds = obj
                    .get("seconds")
                    .or_else(|| obj.get("_seconds"))
                    .and_then(Value::as_i64)?;
                let nanos = obj
                    .get("nanoseconds")
                    .or_else(|| obj.get("_nanoseconds"))
                    .and_then(Value::as_u64)
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(0);
                Utc.timestamp_opt(seconds, nanos).single()
            }
            _ => None,
        }
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document::from_value("d1", value)
    }

    #[test]
    fn test_non_object_value_has_no_fields() {
        assert!(doc(json!([1, 2, 3])).fields.is_empty());
    }

    #[test]
    fn test_str_field_ignores_empty_and_non_strings() {
        let d = doc(json!({ "a": "x", "b": "", "c": 3 }));
        assert_eq!(d.str_field("a"), Some("x"));
        assert_eq!(d.str_field("b"), None);
        assert_eq!(d.str_field("c"), None);
        assert_eq!(d.str_field("missing"), None);
    }

    #[test]
    fn test_decimal_field_is_exact() {
        let d = doc(json!({ "n": 0.1, "s": "12.50", "bad": "abc", "null": null }));
        assert_eq!(d.decimal_field("n"), Some(Decimal::new(1, 1)));
        assert_eq!(d.decimal_field("s"), Some(Decimal::new(1250, 2)));
        assert_eq!(d.decimal_field("bad"), None);
        assert_eq!(d.decimal_field("null"), None);
    }

    #[test]
    fn test_timestamp_encodings() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let d = doc(json!({
            "rfc": "2024-01-15T00:00:00Z",
            "date": "2024-01-15",
            "millis": expected.timestamp_millis(),
            "firestore": { "_seconds": expected.timestamp(), "_nanoseconds": 0 },
            "garbage": "yesterday",
        }));
        assert_eq!(d.timestamp_field("rfc"), Some(expected));
        assert_eq!(d.timestamp_field("date"), Some(expected));
        assert_eq!(d.timestamp_field("millis"), Some(expected));
        assert_eq!(d.timestamp_field("firestore"), Some(expected));
        assert_eq!(d.timestamp_field("garbage"), None);
    }
}
