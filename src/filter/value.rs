//! Predicate operators and tagged scalar values

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::GeoLiteral;

/// Predicate operators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "meters", rename_all = "snake_case")]
pub enum Operator {
    /// Equals
    Eq,
    /// Not equals
    Neq,
    /// Less than (before, for dates)
    Lt,
    /// Less than or equal
    Lte,
    /// Greater than (after, for dates)
    Gt,
    /// Greater than or equal
    Gte,
    /// Pattern match (LIKE)
    Like,
    /// Attribute is present
    Exists,
    /// Spatial intersection
    Intersects,
    /// Spatially contained in the shape
    Inside,
    /// Spatially disjoint from the shape
    Outside,
    /// Within the given distance (meters) of the shape
    Within(f64),
    /// Farther than the given distance (meters) from the shape
    Beyond(f64),
}

impl Operator {
    /// Get the operator string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Like => "like",
            Operator::Exists => "exists",
            Operator::Intersects => "intersects",
            Operator::Inside => "inside",
            Operator::Outside => "outside",
            Operator::Within(_) => "within",
            Operator::Beyond(_) => "beyond",
        }
    }

    /// Comparison operator tokens: `= != < <= > >= LIKE EXISTS`
    pub fn comparison_from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "=" => Some(Operator::Eq),
            "!=" | "<>" => Some(Operator::Neq),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Lte),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Gte),
            "LIKE" => Some(Operator::Like),
            "EXISTS" => Some(Operator::Exists),
            _ => None,
        }
    }

    /// Geo operator tokens: `INTERSECT INSIDE OUTSIDE`
    pub fn geo_from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "INTERSECT" | "INTERSECTS" => Some(Operator::Intersects),
            "INSIDE" => Some(Operator::Inside),
            "OUTSIDE" => Some(Operator::Outside),
            _ => None,
        }
    }

    /// Relative geo operator tokens `WITHIN`/`BEYOND`, bound to a distance in meters
    pub fn relative_from_token(token: &str, meters: f64) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "WITHIN" => Some(Operator::Within(meters)),
            "BEYOND" => Some(Operator::Beyond(meters)),
            _ => None,
        }
    }

    pub fn is_spatial(&self) -> bool {
        matches!(
            self,
            Operator::Intersects
                | Operator::Inside
                | Operator::Outside
                | Operator::Within(_)
                | Operator::Beyond(_)
        )
    }

    /// Distance carried by `within`/`beyond`
    pub fn distance_meters(&self) -> Option<f64> {
        match self {
            Operator::Within(m) | Operator::Beyond(m) => Some(*m),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance_meters() {
            Some(meters) => write!(f, "{}({}m)", self.as_str(), meters),
            None => f.write_str(self.as_str()),
        }
    }
}

/// Tagged scalar carried by a predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    Text(String),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Date(DateTime<Utc>),
    Geometry(GeoLiteral),
    /// No operand (`exists`)
    Null,
}

impl FilterValue {
    /// Tag name of the value kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            FilterValue::Text(_) => "text",
            FilterValue::Short(_) => "short",
            FilterValue::Int(_) => "int",
            FilterValue::Long(_) => "long",
            FilterValue::Float(_) => "float",
            FilterValue::Double(_) => "double",
            FilterValue::Date(_) => "date",
            FilterValue::Geometry(_) => "geometry",
            FilterValue::Null => "null",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FilterValue::Short(_)
                | FilterValue::Int(_)
                | FilterValue::Long(_)
                | FilterValue::Float(_)
                | FilterValue::Double(_)
        )
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            FilterValue::Short(n) => write!(f, "{}", n),
            FilterValue::Int(n) => write!(f, "{}", n),
            FilterValue::Long(n) => write!(f, "{}", n),
            FilterValue::Float(n) => write!(f, "{}", n),
            FilterValue::Double(n) => write!(f, "{}", n),
            FilterValue::Date(d) => {
                write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            FilterValue::Geometry(g) => write!(f, "{}", g),
            FilterValue::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_tokens() {
        assert_eq!(Operator::comparison_from_token(">="), Some(Operator::Gte));
        assert_eq!(Operator::comparison_from_token("like"), Some(Operator::Like));
        assert_eq!(Operator::comparison_from_token("EXISTS"), Some(Operator::Exists));
        assert_eq!(Operator::comparison_from_token("INSIDE"), None);
    }

    #[test]
    fn test_geo_tokens() {
        assert_eq!(Operator::geo_from_token("intersect"), Some(Operator::Intersects));
        assert_eq!(Operator::geo_from_token("OUTSIDE"), Some(Operator::Outside));
        assert_eq!(
            Operator::relative_from_token("BEYOND", 10.0),
            Some(Operator::Beyond(10.0))
        );
        assert!(Operator::Within(5.0).is_spatial());
        assert!(!Operator::Like.is_spatial());
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Within(1852.0).to_string(), "within(1852m)");
        assert_eq!(Operator::Neq.to_string(), "!=");
    }

    #[test]
    fn test_value_serialization_is_tagged() {
        let json = serde_json::to_value(FilterValue::Float(15.5)).unwrap();
        assert_eq!(json["type"], "float");
        assert_eq!(json["value"], 15.5);

        let json = serde_json::to_value(Operator::Beyond(3.0)).unwrap();
        assert_eq!(json["op"], "beyond");
        assert_eq!(json["meters"], 3.0);
    }

    #[test]
    fn test_text_display_escapes_quotes() {
        assert_eq!(FilterValue::Text("O'Hare".into()).to_string(), "'O''Hare'");
    }
}
