//! Numeric literal classification
//!
//! A literal is tried against each kind of the policy in order and takes the
//! first kind that parses it. The default order is short, long, int, float,
//! double; `int` is therefore only reachable with a custom order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::FilterValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl NumericKind {
    /// Parses `text` as this kind; floating results must be finite
    pub fn parse(&self, text: &str) -> Option<FilterValue> {
        match self {
            NumericKind::Short => text.parse::<i16>().ok().map(FilterValue::Short),
            NumericKind::Int => text.parse::<i32>().ok().map(FilterValue::Int),
            NumericKind::Long => text.parse::<i64>().ok().map(FilterValue::Long),
            NumericKind::Float => text
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FilterValue::Float),
            NumericKind::Double => text
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FilterValue::Double),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericKind::Short => "short",
            NumericKind::Int => "int",
            NumericKind::Long => "long",
            NumericKind::Float => "float",
            NumericKind::Double => "double",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of kinds a numeric literal is tried against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericPolicy {
    order: Vec<NumericKind>,
}

impl Default for NumericPolicy {
    fn default() -> Self {
        Self {
            order: vec![
                NumericKind::Short,
                NumericKind::Long,
                NumericKind::Int,
                NumericKind::Float,
                NumericKind::Double,
            ],
        }
    }
}

impl NumericPolicy {
    pub fn new(order: Vec<NumericKind>) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &[NumericKind] {
        &self.order
    }

    /// First successful parse in policy order, or `None` if no kind accepts the text
    pub fn classify(&self, text: &str) -> Option<FilterValue> {
        let text = text.trim();
        self.order.iter().find_map(|kind| kind.parse(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let policy = NumericPolicy::default();
        assert_eq!(policy.classify("15"), Some(FilterValue::Short(15)));
        assert_eq!(policy.classify("-32768"), Some(FilterValue::Short(-32768)));
        assert_eq!(policy.classify("40000"), Some(FilterValue::Long(40000)));
        assert_eq!(policy.classify("15.3"), Some(FilterValue::Float(15.3)));
        assert_eq!(policy.classify("1e300"), Some(FilterValue::Double(1e300)));
        assert_eq!(policy.classify("fifteen"), None);
    }

    #[test]
    fn test_int_reachable_with_custom_order() {
        let policy = NumericPolicy::new(vec![NumericKind::Int, NumericKind::Long]);
        assert_eq!(policy.classify("40000"), Some(FilterValue::Int(40000)));
        assert_eq!(policy.classify("5000000000"), Some(FilterValue::Long(5_000_000_000)));
        assert_eq!(policy.classify("2.5"), None);
    }

    #[test]
    fn test_kind_names_round_trip_through_serde() {
        let kinds: Vec<NumericKind> = serde_json::from_str(r#"["short","double"]"#).unwrap();
        assert_eq!(kinds, vec![NumericKind::Short, NumericKind::Double]);
    }
}
