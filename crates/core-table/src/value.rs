use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire format for dates; also the canonical textual rendering.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Spreadsheet exports commonly carry US-style dates.
const US_DATE_FORMAT: &str = "%m/%d/%Y";

/// A single cell. Columns are discovered at load time, so cells are tagged
/// scalars rather than fields of a fixed struct.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
}

impl Value {
    /// Tags raw cell text: empty, integer, float, date, else string.
    #[must_use]
    pub fn parse_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Self::Float(f);
        }
        if let Some(date) = parse_date(trimmed) {
            return Self::Date(date);
        }
        Self::Str(raw.to_string())
    }

    /// Equality against a textual filter value: case-sensitive string
    /// equality for strings, exact numeric/date equality otherwise.
    /// `Null` never matches.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches(&self, needle: &str) -> bool {
        match self {
            Self::Null => false,
            Self::Int(i) => needle.parse::<i64>() == Ok(*i),
            Self::Float(f) => needle.parse::<f64>().is_ok_and(|n| n == *f),
            Self::Str(s) => s == needle,
            Self::Date(d) => parse_date(needle) == Some(*d),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, US_DATE_FORMAT))
        .ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Date(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
        }
    }
}

struct ValueVisitor;

impl Visitor<'_> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, a number, or a string")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Str(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        // Only the wire format is re-tagged, so loaded dates survive a
        // serialize/parse cycle while ordinary strings stay untouched.
        match NaiveDate::parse_from_str(v, DATE_FORMAT) {
            Ok(date) => Ok(Value::Date(date)),
            Err(_) => Ok(Value::Str(v.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
