//! Typed attribute values carried by attribute nodes

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;
use crate::schema::ValueKind;

/// Broken-down UTC timestamp as carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Seconds with fraction
    pub second: f64,
}

impl AbsTime {
    pub fn from_datetime(at: &DateTime<Utc>) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
            day: at.day(),
            hour: at.hour(),
            minute: at.minute(),
            second: f64::from(at.second()) + f64::from(at.nanosecond()) / 1e9,
        }
    }

    /// Rebuilds the timestamp; `None` when the fields do not name a real
    /// instant
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.second.is_finite() || self.second < 0.0 || self.second >= 60.0 {
            return None;
        }
        let whole = self.second.trunc();
        let nanos = ((self.second - whole) * 1e9).round() as u32;
        let base = Utc
            .with_ymd_and_hms(
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
                whole as u32,
            )
            .single()?;
        Some(base + chrono::Duration::nanoseconds(i64::from(nanos.min(999_999_999))))
    }
}

/// Scalar carried by an attribute node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AttributeValue {
    Text(String),
    Short(i16),
    UShort(u16),
    Int(i32),
    UInt(u32),
    Long(i64),
    Double(f64),
    Bool(bool),
    Date(AbsTime),
    Rectangle(BoundingBox),
}

impl AttributeValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeValue::Text(_) => ValueKind::Text,
            AttributeValue::Short(_) => ValueKind::Short,
            AttributeValue::UShort(_) => ValueKind::UShort,
            AttributeValue::Int(_) => ValueKind::Int,
            AttributeValue::UInt(_) => ValueKind::UInt,
            AttributeValue::Long(_) => ValueKind::Long,
            AttributeValue::Double(_) => ValueKind::Double,
            AttributeValue::Bool(_) => ValueKind::Bool,
            AttributeValue::Date(_) => ValueKind::Date,
            AttributeValue::Rectangle(_) => ValueKind::Rectangle,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Any integer-family value widened to `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            AttributeValue::Short(v) => Some(i64::from(v)),
            AttributeValue::UShort(v) => Some(i64::from(v)),
            AttributeValue::Int(v) => Some(i64::from(v)),
            AttributeValue::UInt(v) => Some(i64::from(v)),
            AttributeValue::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Doubles, plus integers widened to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            AttributeValue::Double(v) => Some(v),
            _ => self.as_i64().map(|v| v as f64),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            AttributeValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&AbsTime> {
        match self {
            AttributeValue::Date(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&BoundingBox> {
        match self {
            AttributeValue::Rectangle(b) => Some(b),
            _ => None,
        }
    }
}
