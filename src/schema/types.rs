//! Schema type definitions
//!
//! Value kinds mirror the attribute value tags of the DAG wire shape:
//! - text, bool
//! - short, ushort, int, uint, long: integer family
//! - double: floating point
//! - date: calendar date and time of day
//! - rectangle: two geographic corners

use std::fmt;

use serde::{Deserialize, Serialize};

use super::names::EntityKind;

/// Scalar kind of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    Double,
    Bool,
    Date,
    Rectangle,
}

impl ValueKind {
    /// Returns the wire tag name
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Short => "short",
            ValueKind::UShort => "ushort",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Long => "long",
            ValueKind::Double => "double",
            ValueKind::Bool => "bool",
            ValueKind::Date => "date",
            ValueKind::Rectangle => "rectangle",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ValueKind::Short | ValueKind::UShort | ValueKind::Int | ValueKind::UInt | ValueKind::Long
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One attribute of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDescriptor {
    /// Owning entity
    pub entity: EntityKind,
    /// Attribute name, unique within the entity
    pub name: &'static str,
    /// Scalar kind carried on the wire
    pub kind: ValueKind,
    /// Whether the attribute must be present when the entity is
    pub required: bool,
}

impl AttributeDescriptor {
    pub const fn required(entity: EntityKind, name: &'static str, kind: ValueKind) -> Self {
        Self {
            entity,
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(entity: EntityKind, name: &'static str, kind: ValueKind) -> Self {
        Self {
            entity,
            name,
            kind,
            required: false,
        }
    }
}

/// How many instances one side of a relationship admits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    OneToOne,
    OneToZeroOrOne,
    OneToZeroOrMore,
    OneToOneOrMore,
}

impl Cardinality {
    /// Smallest permitted count
    pub fn min(&self) -> usize {
        match self {
            Cardinality::OneToOne | Cardinality::OneToOneOrMore => 1,
            Cardinality::OneToZeroOrOne | Cardinality::OneToZeroOrMore => 0,
        }
    }

    /// Largest permitted count, `None` when unbounded
    pub fn max(&self) -> Option<usize> {
        match self {
            Cardinality::OneToOne | Cardinality::OneToZeroOrOne => Some(1),
            Cardinality::OneToZeroOrMore | Cardinality::OneToOneOrMore => None,
        }
    }

    /// Whether `count` instances satisfy this cardinality
    pub fn admits(&self, count: usize) -> bool {
        count >= self.min() && self.max().map_or(true, |max| count <= max)
    }
}

/// Directed relationship between two entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub parent: EntityKind,
    pub child: EntityKind,
    /// Parents per child
    pub parent_cardinality: Cardinality,
    /// Children per parent
    pub child_cardinality: Cardinality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_bounds() {
        assert!(Cardinality::OneToOne.admits(1));
        assert!(!Cardinality::OneToOne.admits(0));
        assert!(!Cardinality::OneToOne.admits(2));

        assert!(Cardinality::OneToZeroOrOne.admits(0));
        assert!(!Cardinality::OneToZeroOrOne.admits(2));

        assert!(Cardinality::OneToZeroOrMore.admits(0));
        assert!(Cardinality::OneToZeroOrMore.admits(50));

        assert!(!Cardinality::OneToOneOrMore.admits(0));
        assert!(Cardinality::OneToOneOrMore.admits(7));
    }

    #[test]
    fn test_value_kind_serde_names() {
        let json = serde_json::to_string(&ValueKind::UShort).unwrap();
        assert_eq!(json, "\"ushort\"");
        assert_eq!(ValueKind::Rectangle.type_name(), "rectangle");
        assert!(ValueKind::UInt.is_integer());
        assert!(!ValueKind::Double.is_integer());
    }

    #[test]
    fn test_cardinality_serde_names() {
        let json = serde_json::to_string(&Cardinality::OneToZeroOrMore).unwrap();
        assert_eq!(json, "\"one_to_zero_or_more\"");
    }
}
