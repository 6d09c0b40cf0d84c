//! Flat catalog record

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::ProductType;

/// Value of one record attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RecordValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(DateTime<Utc>),
    /// WKT text
    Geometry(String),
}

impl RecordValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            RecordValue::Text(_) => "text",
            RecordValue::Integer(_) => "integer",
            RecordValue::Float(_) => "float",
            RecordValue::Bool(_) => "bool",
            RecordValue::Date(_) => "date",
            RecordValue::Geometry(_) => "geometry",
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Text(s) | RecordValue::Geometry(s) => f.write_str(s),
            RecordValue::Integer(v) => write!(f, "{}", v),
            RecordValue::Float(v) => write!(f, "{}", v),
            RecordValue::Bool(v) => write!(f, "{}", v),
            RecordValue::Date(d) => write!(f, "{}", d.to_rfc3339()),
        }
    }
}

/// Domain-side record exchanged with the search engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub attributes: BTreeMap<String, RecordValue>,

    /// Identifiers of associated records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<ProductType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl CatalogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.attributes.get(key)
    }

    pub fn set(&mut self, key: &str, value: RecordValue) {
        self.attributes.insert(key.to_string(), value);
    }

    pub fn with(mut self, key: &str, value: RecordValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.attributes.get(key) {
            Some(RecordValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accessors() {
        let record = CatalogRecord::new()
            .with("id", RecordValue::Text("abc".into()))
            .with("resource-size", RecordValue::Float(1.5));
        assert_eq!(record.text("id"), Some("abc"));
        assert_eq!(record.text("resource-size"), None);
        assert!(record.is_set("resource-size"));
        assert!(!record.is_set("title"));
    }

    #[test]
    fn test_json_shape() {
        let at = Utc.with_ymd_and_hms(2020, 5, 6, 7, 8, 9).unwrap();
        let record = CatalogRecord {
            record_type: Some(ProductType::Imagery),
            ..CatalogRecord::new().with("created", RecordValue::Date(at))
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["record_type"], "IMAGERY");
        assert_eq!(json["attributes"]["created"]["type"], "date");
        assert!(json.get("associations").is_none());

        let back = CatalogRecord::from_json(&json.to_string()).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordValue::Integer(42).to_string(), "42");
        assert_eq!(RecordValue::Geometry("POINT (1 2)".into()).to_string(), "POINT (1 2)");
    }
}
