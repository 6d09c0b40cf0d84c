//! BQS query compiler
//!
//! A single depth-first walk over the syntax tree. All scratch state lives in
//! a [`CompileContext`] created per call:
//!
//! - an operator stack holding the operator of the predicate being read;
//! - a grouping stack of frames keyed by a hash of each AND/OR/NOT subtree's
//!   source text, each collecting the filters of its children;
//! - per-term buffers for the attribute, the literal, pending numbers and
//!   the shape under construction.
//!
//! A term whose literal cannot be read is logged and dropped; its siblings
//! still compile.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::mem;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::config::AdapterConfig;
use crate::filter::{Filter, FilterValue, Operator};
use crate::geometry::{
    Coordinate, DistanceUnit, GeoLiteral, GeometryError, ShapeKind, WktBuilder,
    DEFAULT_ELLIPSE_VERTICES,
};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{QueryError, QueryResult};
use super::numeric::NumericPolicy;
use super::syntax::{walk, Rule, SyntaxNode, TreeListener};

const DATE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y/%m/%d";

/// Compiles BQS syntax trees into filter trees
#[derive(Debug, Clone)]
pub struct QueryCompiler {
    numeric: NumericPolicy,
    ellipse_vertices: usize,
}

impl Default for QueryCompiler {
    fn default() -> Self {
        Self {
            numeric: NumericPolicy::default(),
            ellipse_vertices: DEFAULT_ELLIPSE_VERTICES,
        }
    }
}

impl QueryCompiler {
    pub fn new(numeric: NumericPolicy, ellipse_vertices: usize) -> Self {
        Self {
            numeric,
            ellipse_vertices,
        }
    }

    pub fn from_config(config: &AdapterConfig) -> Self {
        Self::new(config.numeric_policy(), config.ellipse_vertices)
    }

    pub fn numeric_policy(&self) -> &NumericPolicy {
        &self.numeric
    }

    /// Compiles a parsed query.
    ///
    /// Returns `Ok(None)` when every term was dropped.
    pub fn compile(&self, tree: &SyntaxNode) -> QueryResult<Option<Filter>> {
        if tree.rule != Rule::Query {
            return Err(QueryError::UnexpectedRoot(tree.rule));
        }

        let mut context = CompileContext::new(self);
        walk(tree, &mut context);
        let result = context.result;

        let predicates = result
            .as_ref()
            .map(|f| f.predicates().len())
            .unwrap_or(0)
            .to_string();
        log_event_with_fields(Event::QueryCompiled, &[("predicates", &predicates)]);

        Ok(result)
    }
}

/// Parses `yyyy/MM/dd HH:mm:ss`, falling back to `yyyy/MM/dd`, both as UTC
pub fn parse_date_literal(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT) {
        return Some(Utc.from_utc_datetime(&stamp));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|stamp| Utc.from_utc_datetime(&stamp))
}

/// Strips one level of surrounding quotes and collapses doubled quotes
fn unquote(text: &str) -> String {
    let trimmed = text.trim();
    for quote in ['\'', '"'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            let inner = &trimmed[1..trimmed.len() - 1];
            let doubled: String = [quote, quote].iter().collect();
            return inner.replace(&doubled, &quote.to_string());
        }
    }
    trimmed.to_string()
}

fn group_key(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

fn shape_kind(rule: Rule) -> Option<ShapeKind> {
    match rule {
        Rule::Point => Some(ShapeKind::Point),
        Rule::Polygon => Some(ShapeKind::Polygon),
        Rule::Rectangle => Some(ShapeKind::Rectangle),
        Rule::Line => Some(ShapeKind::Line),
        Rule::Circle => Some(ShapeKind::Circle),
        Rule::Ellipse => Some(ShapeKind::Ellipse),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    Or,
    And,
    Not,
}

#[derive(Debug)]
struct GroupFrame {
    key: u64,
    kind: GroupKind,
    children: Vec<Filter>,
}

impl GroupFrame {
    fn combine(mut self) -> Option<Filter> {
        match (self.kind, self.children.len()) {
            (_, 0) => None,
            (GroupKind::Not, 1) => self.children.pop().map(Filter::not),
            (GroupKind::Not, _) => Some(Filter::not(Filter::and(self.children))),
            (_, 1) => self.children.pop(),
            (GroupKind::And, _) => Some(Filter::and(self.children)),
            (GroupKind::Or, _) => Some(Filter::or(self.children)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum OperatorSlot {
    Ready(Operator),
    /// `WITHIN`/`BEYOND`, waiting for its distance
    Relative { beyond: bool },
}

#[derive(Debug)]
enum Literal {
    Text(String),
    Number(String),
    Date(String),
}

#[derive(Debug, Default)]
struct TermScratch {
    attribute: Option<String>,
    literal: Option<Literal>,
    numbers: Vec<String>,
    unit: Option<String>,
    relative_distance: Option<f64>,
    shape: Option<WktBuilder>,
    geo: Option<GeoLiteral>,
    failure: Option<String>,
}

impl TermScratch {
    fn fail(&mut self, reason: String) {
        if self.failure.is_none() {
            self.failure = Some(reason);
        }
    }
}

/// All mutable state of one compile call
struct CompileContext<'c> {
    compiler: &'c QueryCompiler,
    ancestors: Vec<Rule>,
    operators: Vec<OperatorSlot>,
    groups: Vec<GroupFrame>,
    term: TermScratch,
    result: Option<Filter>,
}

impl<'c> CompileContext<'c> {
    fn new(compiler: &'c QueryCompiler) -> Self {
        Self {
            compiler,
            ancestors: Vec::new(),
            operators: Vec::new(),
            groups: Vec::new(),
            term: TermScratch::default(),
            result: None,
        }
    }

    fn emit(&mut self, filter: Filter) {
        match self.groups.last_mut() {
            Some(frame) => frame.children.push(filter),
            None => self.result = Some(filter),
        }
    }

    fn open_group(&mut self, node: &SyntaxNode, kind: GroupKind) {
        self.groups.push(GroupFrame {
            key: group_key(&node.text),
            kind,
            children: Vec::new(),
        });
    }

    fn close_group(&mut self, node: &SyntaxNode) {
        let key = group_key(&node.text);
        let Some(frame) = self.groups.pop() else {
            log_event_with_fields(Event::GroupMismatch, &[("text", &node.text)]);
            return;
        };
        if frame.key != key {
            log_event_with_fields(Event::GroupMismatch, &[("text", &node.text)]);
        }
        if let Some(filter) = frame.combine() {
            self.emit(filter);
        }
    }

    fn read_leaf(&mut self, node: &SyntaxNode, parent: Option<Rule>) {
        let text = node.text.trim();
        match node.rule {
            Rule::Attribute => self.term.attribute = Some(text.to_string()),
            Rule::ComparisonOp => match Operator::comparison_from_token(text) {
                Some(op) => self.operators.push(OperatorSlot::Ready(op)),
                None => self.term.fail(format!("unknown comparison operator '{}'", text)),
            },
            Rule::GeoOp => match Operator::geo_from_token(text) {
                Some(op) => self.operators.push(OperatorSlot::Ready(op)),
                None => self.term.fail(format!("unknown geo operator '{}'", text)),
            },
            Rule::RelativeGeoOp => match text.to_ascii_uppercase().as_str() {
                "WITHIN" => self.operators.push(OperatorSlot::Relative { beyond: false }),
                "BEYOND" => self.operators.push(OperatorSlot::Relative { beyond: true }),
                _ => self.term.fail(format!("unknown relative geo operator '{}'", text)),
            },
            Rule::Number if parent == Some(Rule::Primary) => {
                self.term.literal = Some(Literal::Number(text.to_string()));
            }
            Rule::Number => self.term.numbers.push(text.to_string()),
            Rule::Date => self.term.literal = Some(Literal::Date(unquote(text))),
            Rule::QuotedString => self.term.literal = Some(Literal::Text(unquote(text))),
            Rule::Unit => self.term.unit = Some(text.to_string()),
            Rule::Angle => match (text.parse::<f64>(), self.term.shape.as_mut()) {
                (Ok(degrees), Some(shape)) if degrees.is_finite() => shape.set_angle(degrees),
                _ => self.term.fail(format!("unreadable angle '{}'", text)),
            },
            Rule::DmsCoordinate => {
                log_event_with_fields(Event::DmsUnsupported, &[("coordinate", text)]);
                self.term
                    .fail(GeometryError::DmsUnsupported(text.to_string()).to_string());
            }
            _ => {}
        }
    }

    fn close_coordinate(&mut self) {
        let numbers = mem::take(&mut self.term.numbers);
        let [lat, lon] = numbers.as_slice() else {
            self.term
                .fail(format!("coordinate needs 2 numbers, got {}", numbers.len()));
            return;
        };
        match (Coordinate::from_text(lat, lon), self.term.shape.as_mut()) {
            (Ok(coordinate), Some(shape)) => shape.push_coordinate(coordinate),
            (Ok(_), None) => self.term.fail("coordinate outside a shape".to_string()),
            (Err(e), _) => self.term.fail(e.to_string()),
        }
    }

    fn close_distance(&mut self, parent: Option<Rule>) {
        let value = self.term.numbers.pop();
        let unit = self.term.unit.take();
        let meters = match (value, unit) {
            (Some(value), Some(unit)) => {
                match (value.parse::<f64>(), unit.parse::<DistanceUnit>()) {
                    (Ok(v), Ok(u)) if u.to_meters(v).is_finite() => u.to_meters(v),
                    (_, Err(e)) => return self.term.fail(e.to_string()),
                    _ => return self.term.fail(format!("unreadable distance '{}'", value)),
                }
            }
            _ => return self.term.fail("distance needs a number and a unit".to_string()),
        };

        if parent.map(|r| r.is_shape()).unwrap_or(false) {
            if let Some(shape) = self.term.shape.as_mut() {
                shape.push_distance(meters);
            }
        } else {
            self.term.relative_distance = Some(meters);
        }
    }

    fn close_shape(&mut self) {
        if let Some(shape) = self.term.shape.take() {
            match shape.finish() {
                Ok(literal) => self.term.geo = Some(literal),
                Err(e) => self.term.fail(e.to_string()),
            }
        }
    }

    fn drop_term(attribute: Option<&str>, reason: &str) {
        log_event_with_fields(
            Event::TermDropped,
            &[("attribute", attribute.unwrap_or("")), ("reason", reason)],
        );
    }

    fn close_primary(&mut self) {
        let slot = self.operators.pop();
        let term = mem::take(&mut self.term);
        let attribute = term.attribute.as_deref();

        if let Some(reason) = term.failure.as_deref() {
            return Self::drop_term(attribute, reason);
        }
        let Some(attribute) = attribute else {
            return Self::drop_term(None, "missing attribute");
        };
        let operator = match slot {
            Some(OperatorSlot::Ready(op)) => op,
            _ => return Self::drop_term(Some(attribute), "missing comparison operator"),
        };

        if operator == Operator::Exists {
            return self.emit(Filter::predicate(attribute, Operator::Exists, FilterValue::Null));
        }

        match term.literal {
            None => Self::drop_term(Some(attribute), "missing literal"),
            Some(Literal::Text(text)) => {
                self.emit(Filter::predicate(attribute, operator, FilterValue::Text(text)))
            }
            Some(Literal::Number(text)) => match self.compiler.numeric.classify(&text) {
                Some(value) => self.emit(Filter::predicate(attribute, operator, value)),
                None => Self::drop_term(
                    Some(attribute),
                    &format!("unparseable number '{}'", text),
                ),
            },
            Some(Literal::Date(text)) => match parse_date_literal(&text) {
                Some(date) => self.emit(date_filter(attribute, operator, date)),
                None => {
                    Self::drop_term(Some(attribute), &format!("unparseable date '{}'", text))
                }
            },
        }
    }

    fn close_geo_primary(&mut self) {
        let slot = self.operators.pop();
        let term = mem::take(&mut self.term);
        let attribute = term.attribute.as_deref();

        if let Some(reason) = term.failure.as_deref() {
            return Self::drop_term(attribute, reason);
        }
        let Some(attribute) = attribute else {
            return Self::drop_term(None, "missing attribute");
        };
        let Some(geo) = term.geo else {
            return Self::drop_term(Some(attribute), "missing shape");
        };
        let operator = match (slot, term.relative_distance) {
            (Some(OperatorSlot::Ready(op)), _) => op,
            (Some(OperatorSlot::Relative { beyond: false }), Some(m)) => Operator::Within(m),
            (Some(OperatorSlot::Relative { beyond: true }), Some(m)) => Operator::Beyond(m),
            (Some(OperatorSlot::Relative { .. }), None) => {
                return Self::drop_term(Some(attribute), "missing distance")
            }
            (None, _) => return Self::drop_term(Some(attribute), "missing geo operator"),
        };

        self.emit(Filter::predicate(
            attribute,
            operator,
            FilterValue::Geometry(geo),
        ));
    }
}

/// `>=` and `<=` on dates become `(> or =)` and `(< or =)`
fn date_filter(attribute: &str, operator: Operator, date: DateTime<Utc>) -> Filter {
    let value = FilterValue::Date(date);
    let strict = match operator {
        Operator::Gte => Operator::Gt,
        Operator::Lte => Operator::Lt,
        other => return Filter::predicate(attribute, other, value),
    };
    Filter::or(vec![
        Filter::predicate(attribute, strict, value.clone()),
        Filter::predicate(attribute, Operator::Eq, value),
    ])
}

impl TreeListener for CompileContext<'_> {
    fn enter(&mut self, node: &SyntaxNode) {
        let parent = self.ancestors.last().copied();
        match node.rule {
            Rule::Query => self.open_group(node, GroupKind::Or),
            Rule::Term => self.open_group(node, GroupKind::And),
            Rule::Not => self.open_group(node, GroupKind::Not),
            Rule::Primary | Rule::GeoPrimary => self.term = TermScratch::default(),
            rule => {
                if let Some(kind) = shape_kind(rule) {
                    self.term.shape = Some(
                        WktBuilder::new(kind).with_ellipse_vertices(self.compiler.ellipse_vertices),
                    );
                } else if node.is_leaf() {
                    self.read_leaf(node, parent);
                }
            }
        }
        self.ancestors.push(node.rule);
    }

    fn exit(&mut self, node: &SyntaxNode) {
        self.ancestors.pop();
        let parent = self.ancestors.last().copied();
        match node.rule {
            Rule::Query | Rule::Term | Rule::Not => self.close_group(node),
            Rule::Primary => self.close_primary(),
            Rule::GeoPrimary => self.close_geo_primary(),
            Rule::Coordinate => self.close_coordinate(),
            Rule::Distance => self.close_distance(parent),
            rule if rule.is_shape() => self.close_shape(),
            _ => {}
        }
    }
}
