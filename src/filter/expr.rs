//! Filter expression tree
//!
//! Built bottom-up by the query compiler and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::{FilterValue, Operator};

/// A single attribute test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    /// Attribute to test
    pub attribute: String,

    /// Comparison or spatial operator
    pub operator: Operator,

    /// Operand
    pub value: FilterValue,
}

impl Predicate {
    pub fn new(attribute: impl Into<String>, operator: Operator, value: FilterValue) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            value,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::Exists => write!(f, "{} exists", self.attribute),
            _ => write!(f, "{} {} {}", self.attribute, self.operator, self.value),
        }
    }
}

/// Recursive filter expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
    Predicate(Predicate),
}

impl Filter {
    pub fn and(children: Vec<Filter>) -> Self {
        Filter::And(children)
    }

    pub fn or(children: Vec<Filter>) -> Self {
        Filter::Or(children)
    }

    pub fn not(child: Filter) -> Self {
        Filter::Not(Box::new(child))
    }

    pub fn predicate(attribute: impl Into<String>, operator: Operator, value: FilterValue) -> Self {
        Filter::Predicate(Predicate::new(attribute, operator, value))
    }

    /// Equality filter
    pub fn eq(attribute: impl Into<String>, value: FilterValue) -> Self {
        Self::predicate(attribute, Operator::Eq, value)
    }

    /// Pattern filter on a text value
    pub fn like(attribute: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::predicate(attribute, Operator::Like, FilterValue::Text(pattern.into()))
    }

    /// Leaf predicates in depth-first order
    pub fn predicates(&self) -> Vec<&Predicate> {
        let mut out = Vec::new();
        self.collect_predicates(&mut out);
        out
    }

    fn collect_predicates<'a>(&'a self, out: &mut Vec<&'a Predicate>) {
        match self {
            Filter::And(children) | Filter::Or(children) => {
                for child in children {
                    child.collect_predicates(out);
                }
            }
            Filter::Not(child) => child.collect_predicates(out),
            Filter::Predicate(p) => out.push(p),
        }
    }

    /// Nesting depth; a lone predicate has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Filter::And(children) | Filter::Or(children) => {
                1 + children.iter().map(Filter::depth).max().unwrap_or(0)
            }
            Filter::Not(child) => 1 + child.depth(),
            Filter::Predicate(_) => 1,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::And(children) | Filter::Or(children) => {
                let joiner = if matches!(self, Filter::And(_)) {
                    " AND "
                } else {
                    " OR "
                };
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(joiner)?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
            Filter::Not(child) => write!(f, "NOT {}", child),
            Filter::Predicate(p) => write!(f, "{}", p),
        }
    }
}
