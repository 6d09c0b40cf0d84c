//! Concrete syntax tree handed over by the BQS parser
//!
//! The grammar front end is external; this is the tree shape it produces and
//! the compiler walks:
//!
//! ```text
//! query       := term (OR term)*
//! term        := factor (AND factor)*
//! factor      := primary | geo_primary | not | '(' query ')'
//! not         := NOT factor
//! primary     := attribute comparison_op (number | date | quoted_string)?
//! geo_primary := attribute geo_op shape
//!              | attribute relative_geo_op distance OF shape
//! distance    := number unit
//! shape       := point | polygon | rectangle | line | circle | ellipse
//! circle      := coordinate distance
//! ellipse     := coordinate distance distance angle
//! coordinate  := number number            (lat, lon)
//!              | dms_coordinate
//! ```
//!
//! Keywords and brackets appear as `punctuation` leaves. Every node carries
//! the source text it covers.

use serde::{Deserialize, Serialize};

use super::errors::{QueryError, QueryResult};

/// Grammar rule (or token class) of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Query,
    Term,
    Factor,
    Not,
    Primary,
    GeoPrimary,
    Attribute,
    ComparisonOp,
    GeoOp,
    RelativeGeoOp,
    Number,
    Date,
    QuotedString,
    Distance,
    Unit,
    Angle,
    Point,
    Polygon,
    Rectangle,
    Line,
    Circle,
    Ellipse,
    Coordinate,
    DmsCoordinate,
    Punctuation,
}

impl Rule {
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Rule::Point | Rule::Polygon | Rule::Rectangle | Rule::Line | Rule::Circle | Rule::Ellipse
        )
    }
}

/// One node of the parse tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub rule: Rule,

    /// Source text covered by this node
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(rule: Rule, text: impl Into<String>) -> Self {
        Self {
            rule,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// A rule node whose text is its children's text joined by spaces
    pub fn branch(rule: Rule, children: Vec<SyntaxNode>) -> Self {
        let text = children
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            rule,
            text,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Reads a tree serialised as JSON by the parser front end
    pub fn from_json(json: &str) -> QueryResult<Self> {
        serde_json::from_str(json).map_err(|e| QueryError::MalformedTree(e.to_string()))
    }
}

/// Callbacks for a depth-first walk
pub trait TreeListener {
    fn enter(&mut self, node: &SyntaxNode);
    fn exit(&mut self, node: &SyntaxNode);
}

/// Depth-first walk calling `enter` before and `exit` after each subtree
pub fn walk<L: TreeListener + ?Sized>(node: &SyntaxNode, listener: &mut L) {
    listener.enter(node);
    for child in &node.children {
        walk(child, listener);
    }
    listener.exit(node);
}

/// Constructors mirroring the grammar, for callers that build trees directly
pub mod build {
    use super::{Rule, SyntaxNode};

    fn punct(text: &str) -> SyntaxNode {
        SyntaxNode::leaf(Rule::Punctuation, text)
    }

    fn interleave(rule: Rule, items: Vec<SyntaxNode>, keyword: &str) -> SyntaxNode {
        let mut children = Vec::with_capacity(items.len() * 2);
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                children.push(punct(keyword));
            }
            children.push(item);
        }
        SyntaxNode::branch(rule, children)
    }

    /// `term (OR term)*`
    pub fn query(terms: Vec<SyntaxNode>) -> SyntaxNode {
        interleave(Rule::Query, terms, "OR")
    }

    /// `factor (AND factor)*`
    pub fn term(factors: Vec<SyntaxNode>) -> SyntaxNode {
        interleave(Rule::Term, factors, "AND")
    }

    pub fn factor(inner: SyntaxNode) -> SyntaxNode {
        SyntaxNode::branch(Rule::Factor, vec![inner])
    }

    /// `'(' query ')'`
    pub fn group(query: SyntaxNode) -> SyntaxNode {
        SyntaxNode::branch(Rule::Factor, vec![punct("("), query, punct(")")])
    }

    /// `NOT factor`
    pub fn not(factor: SyntaxNode) -> SyntaxNode {
        SyntaxNode::branch(Rule::Not, vec![punct("NOT"), factor])
    }

    /// `attribute comparison_op literal`
    pub fn primary(attribute: &str, op: &str, literal: SyntaxNode) -> SyntaxNode {
        SyntaxNode::branch(
            Rule::Primary,
            vec![
                SyntaxNode::leaf(Rule::Attribute, attribute),
                SyntaxNode::leaf(Rule::ComparisonOp, op),
                literal,
            ],
        )
    }

    /// `attribute EXISTS`
    pub fn exists(attribute: &str) -> SyntaxNode {
        SyntaxNode::branch(
            Rule::Primary,
            vec![
                SyntaxNode::leaf(Rule::Attribute, attribute),
                SyntaxNode::leaf(Rule::ComparisonOp, "EXISTS"),
            ],
        )
    }

    /// `attribute geo_op shape`
    pub fn geo(attribute: &str, op: &str, shape: SyntaxNode) -> SyntaxNode {
        SyntaxNode::branch(
            Rule::GeoPrimary,
            vec![
                SyntaxNode::leaf(Rule::Attribute, attribute),
                SyntaxNode::leaf(Rule::GeoOp, op),
                shape,
            ],
        )
    }

    /// `attribute (WITHIN|BEYOND) distance OF shape`
    pub fn relative_geo(
        attribute: &str,
        op: &str,
        distance: SyntaxNode,
        shape: SyntaxNode,
    ) -> SyntaxNode {
        SyntaxNode::branch(
            Rule::GeoPrimary,
            vec![
                SyntaxNode::leaf(Rule::Attribute, attribute),
                SyntaxNode::leaf(Rule::RelativeGeoOp, op),
                distance,
                punct("OF"),
                shape,
            ],
        )
    }

    pub fn number(text: &str) -> SyntaxNode {
        SyntaxNode::leaf(Rule::Number, text)
    }

    /// Quoted string literal; `text` is given unquoted
    pub fn quoted(text: &str) -> SyntaxNode {
        SyntaxNode::leaf(Rule::QuotedString, format!("'{}'", text.replace('\'', "''")))
    }

    /// Date literal; `text` is given unquoted (`yyyy/MM/dd[ HH:mm:ss]`)
    pub fn date(text: &str) -> SyntaxNode {
        SyntaxNode::leaf(Rule::Date, format!("'{}'", text))
    }

    pub fn distance(value: &str, unit: &str) -> SyntaxNode {
        SyntaxNode::branch(
            Rule::Distance,
            vec![number(value), SyntaxNode::leaf(Rule::Unit, unit)],
        )
    }

    pub fn coordinate(lat: &str, lon: &str) -> SyntaxNode {
        SyntaxNode::branch(Rule::Coordinate, vec![number(lat), number(lon)])
    }

    pub fn dms(text: &str) -> SyntaxNode {
        SyntaxNode::leaf(Rule::DmsCoordinate, text)
    }

    fn shape(rule: Rule, keyword: &str, parts: Vec<SyntaxNode>) -> SyntaxNode {
        let mut children = vec![punct(keyword), punct("(")];
        children.extend(parts);
        children.push(punct(")"));
        SyntaxNode::branch(rule, children)
    }

    pub fn point(coordinate: SyntaxNode) -> SyntaxNode {
        shape(Rule::Point, "POINT", vec![coordinate])
    }

    pub fn polygon(coordinates: Vec<SyntaxNode>) -> SyntaxNode {
        shape(Rule::Polygon, "POLYGON", coordinates)
    }

    pub fn line(coordinates: Vec<SyntaxNode>) -> SyntaxNode {
        shape(Rule::Line, "LINE", coordinates)
    }

    pub fn rectangle(upper_left: SyntaxNode, lower_right: SyntaxNode) -> SyntaxNode {
        shape(Rule::Rectangle, "RECTANGLE", vec![upper_left, lower_right])
    }

    pub fn circle(center: SyntaxNode, radius: SyntaxNode) -> SyntaxNode {
        shape(Rule::Circle, "CIRCLE", vec![center, radius])
    }

    pub fn ellipse(
        center: SyntaxNode,
        major: SyntaxNode,
        minor: SyntaxNode,
        angle: &str,
    ) -> SyntaxNode {
        shape(
            Rule::Ellipse,
            "ELLIPSE",
            vec![center, major, minor, SyntaxNode::leaf(Rule::Angle, angle)],
        )
    }
}
