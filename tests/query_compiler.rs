//! Query Compiler Tests
//!
//! End-to-end compilation of BQS syntax trees:
//! - Boolean nesting is preserved, never flattened
//! - Literal kinds decide the predicate value tag
//! - Shapes become WKT with lon/lat order
//! - Unreadable literals drop only their own term

use bqs_adapter::filter::{Filter, FilterValue, GeoLiteral, Operator};
use bqs_adapter::query::build::*;
use bqs_adapter::query::{
    parse_date_literal, NumericKind, NumericPolicy, QueryCompiler, Rule, SyntaxNode,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn compile(tree: SyntaxNode) -> Option<Filter> {
    QueryCompiler::default().compile(&tree).unwrap()
}

fn single(primary: SyntaxNode) -> SyntaxNode {
    query(vec![term(vec![factor(primary)])])
}

fn like(attribute: &str, text: &str) -> SyntaxNode {
    factor(primary(attribute, "like", quoted(text)))
}

fn geometry(filter: &Filter) -> &GeoLiteral {
    match filter {
        Filter::Predicate(p) => match &p.value {
            FilterValue::Geometry(g) => g,
            other => panic!("expected geometry, got {:?}", other),
        },
        other => panic!("expected predicate, got {:?}", other),
    }
}

// =============================================================================
// Boolean Structure Tests
// =============================================================================

/// `(identifierUUID like 'Test')`
#[test]
fn test_grouped_single_like() {
    let tree = single(group(query(vec![term(vec![like("identifierUUID", "Test")])])));
    assert_eq!(compile(tree), Some(Filter::like("identifierUUID", "Test")));
}

/// `identifierUUID like 'Test' or targetNumber like 'Test'`
#[test]
fn test_or_of_two_likes() {
    let tree = query(vec![
        term(vec![like("identifierUUID", "Test")]),
        term(vec![like("targetNumber", "Test")]),
    ]);
    assert_eq!(
        compile(tree),
        Some(Filter::or(vec![
            Filter::like("identifierUUID", "Test"),
            Filter::like("targetNumber", "Test"),
        ]))
    );
}

/// `... and dateTimeModified >= '2016/03/14 06:58:31' and x > 15.3`
#[test]
fn test_and_with_date_and_float() {
    let tree = query(vec![term(vec![
        like("identifierUUID", "Test"),
        factor(primary("dateTimeModified", ">=", date("2016/03/14 06:58:31"))),
        factor(primary("x", ">", number("15.3"))),
    ])]);
    let d = parse_date_literal("2016/03/14 06:58:31").unwrap();

    assert_eq!(
        compile(tree),
        Some(Filter::and(vec![
            Filter::like("identifierUUID", "Test"),
            Filter::or(vec![
                Filter::predicate("dateTimeModified", Operator::Gt, FilterValue::Date(d)),
                Filter::predicate("dateTimeModified", Operator::Eq, FilterValue::Date(d)),
            ]),
            Filter::predicate("x", Operator::Gt, FilterValue::Float(15.3)),
        ]))
    );
}

/// `(a AND b) OR c` keeps its shape
#[test]
fn test_nesting_is_preserved() {
    let tree = query(vec![
        term(vec![like("a", "1"), like("b", "2")]),
        term(vec![like("c", "3")]),
    ]);
    let filter = compile(tree).unwrap();

    assert_eq!(
        filter,
        Filter::or(vec![
            Filter::and(vec![Filter::like("a", "1"), Filter::like("b", "2")]),
            Filter::like("c", "3"),
        ])
    );
    assert_eq!(filter.depth(), 3);
}

#[test]
fn test_not_wraps_factor() {
    let tree = query(vec![term(vec![factor(not(like("title", "x")))])]);
    assert_eq!(compile(tree), Some(Filter::not(Filter::like("title", "x"))));
}

/// A dropped term leaves its siblings intact
#[test]
fn test_bad_literal_drops_only_its_term() {
    let tree = query(vec![term(vec![
        like("a", "1"),
        factor(primary("modified", "=", date("not a date"))),
        factor(primary("count", ">", number("12x"))),
    ])]);
    assert_eq!(compile(tree), Some(Filter::like("a", "1")));
}

// =============================================================================
// Literal Kind Tests
// =============================================================================

#[test]
fn test_every_comparison_operator_with_every_literal_kind() {
    let day = parse_date_literal("2020/05/06").unwrap();
    let operators = [
        ("=", Operator::Eq),
        ("!=", Operator::Neq),
        ("<", Operator::Lt),
        (">", Operator::Gt),
        ("like", Operator::Like),
    ];
    let literals = [
        (quoted("abc"), FilterValue::Text("abc".into())),
        (number("7"), FilterValue::Short(7)),
        (number("70000"), FilterValue::Long(70000)),
        (number("2.5"), FilterValue::Float(2.5)),
        (number("1e300"), FilterValue::Double(1e300)),
        (date("2020/05/06"), FilterValue::Date(day)),
    ];

    for (token, operator) in operators {
        for (literal, value) in &literals {
            let filter = compile(single(primary("attr", token, literal.clone())));
            assert_eq!(
                filter,
                Some(Filter::predicate("attr", operator, value.clone())),
                "operator {} with {:?}",
                token,
                value
            );
        }
    }
}

/// Only dates expand `>=`/`<=`; every other literal keeps one predicate
#[test]
fn test_inclusive_operators_with_non_date_literals() {
    let literals = [
        (quoted("abc"), FilterValue::Text("abc".into())),
        (number("7"), FilterValue::Short(7)),
        (number("70000"), FilterValue::Long(70000)),
        (number("2.5"), FilterValue::Float(2.5)),
        (number("1e300"), FilterValue::Double(1e300)),
    ];

    for (token, operator) in [(">=", Operator::Gte), ("<=", Operator::Lte)] {
        for (literal, value) in &literals {
            assert_eq!(
                compile(single(primary("attr", token, literal.clone()))),
                Some(Filter::predicate("attr", operator, value.clone())),
                "operator {} with {:?}",
                token,
                value
            );
        }

        let day = parse_date_literal("2020/05/06").unwrap();
        let strict = if operator == Operator::Gte {
            Operator::Gt
        } else {
            Operator::Lt
        };
        assert_eq!(
            compile(single(primary("attr", token, date("2020/05/06")))),
            Some(Filter::or(vec![
                Filter::predicate("attr", strict, FilterValue::Date(day)),
                Filter::predicate("attr", Operator::Eq, FilterValue::Date(day)),
            ]))
        );
    }
}

#[test]
fn test_numeric_policy_is_configurable() {
    let compiler = QueryCompiler::new(
        NumericPolicy::new(vec![NumericKind::Int, NumericKind::Double]),
        30,
    );
    let filter = compiler
        .compile(&single(primary("n", "=", number("7"))))
        .unwrap();
    assert_eq!(filter, Some(Filter::eq("n", FilterValue::Int(7))));
}

#[test]
fn test_exists() {
    assert_eq!(
        compile(single(exists("title"))),
        Some(Filter::predicate("title", Operator::Exists, FilterValue::Null))
    );
}

// =============================================================================
// Spatial Tests
// =============================================================================

/// POLYGON(lat,lon, ...) becomes `POLYGON((lon lat, ...))`
#[test]
fn test_polygon_swaps_lat_lon() {
    let shape = polygon(vec![
        coordinate("10", "20"),
        coordinate("11", "21"),
        coordinate("12", "20"),
        coordinate("10", "20"),
    ]);
    let filter = compile(single(geo("spatialGeographicReferenceBox", "intersect", shape)));

    assert_eq!(
        filter,
        Some(Filter::predicate(
            "spatialGeographicReferenceBox",
            Operator::Intersects,
            FilterValue::Geometry(GeoLiteral::new("POLYGON((20 10, 21 11, 20 12, 20 10))")),
        ))
    );
}

#[test]
fn test_rectangle_is_closed_five_point_ring() {
    let shape = rectangle(coordinate("10", "20"), coordinate("5", "30"));
    let filter = compile(single(geo("box", "inside", shape))).unwrap();
    let literal = geometry(&filter);

    assert_eq!(literal.wkt, "POLYGON((20 10, 30 10, 30 5, 20 5, 20 10))");
    assert!(literal.buffer_meters.is_none());
}

#[test]
fn test_circle_radius_in_meters() {
    for (unit, meters) in [
        ("FEET", 0.3048 * 2.0),
        ("METERS", 2.0),
        ("KILOMETER", 2000.0),
        ("NAUTICAL_MI", 3704.0),
        ("STATUTE_MI", 3218.688),
    ] {
        let shape = circle(coordinate("1", "2"), distance("2", unit));
        let filter = compile(single(geo("loc", "intersect", shape))).unwrap();
        let literal = geometry(&filter);

        assert_eq!(literal.wkt, "POINT(2 1)");
        let radius = literal.buffer_meters.unwrap();
        assert!((radius - meters).abs() < 1e-6, "{}: {}", unit, radius);
    }
}

#[test]
fn test_within_distance_of_point() {
    let tree = single(relative_geo(
        "loc",
        "WITHIN",
        distance("1", "NAUTICAL_MI"),
        point(coordinate("45", "-120")),
    ));
    assert_eq!(
        compile(tree),
        Some(Filter::predicate(
            "loc",
            Operator::Within(1852.0),
            FilterValue::Geometry(GeoLiteral::new("POINT(-120 45)")),
        ))
    );
}

#[test]
fn test_ellipse_is_closed_polygon() {
    let shape = ellipse(
        coordinate("0", "0"),
        distance("10", "KILOMETER"),
        distance("5", "KILOMETER"),
        "45",
    );
    let filter = compile(single(geo("loc", "intersect", shape))).unwrap();
    let wkt = &geometry(&filter).wkt;

    assert!(wkt.starts_with("POLYGON(("));
    let positions: Vec<&str> = wkt
        .trim_start_matches("POLYGON((")
        .trim_end_matches("))")
        .split(", ")
        .collect();
    assert_eq!(positions.len(), 31);
    assert_eq!(positions.first(), positions.last());
}

/// A distance that overflows once converted to meters drops its term
#[test]
fn test_overflowing_distance_drops_term() {
    let within = query(vec![term(vec![
        factor(relative_geo(
            "loc",
            "WITHIN",
            distance("1e308", "NAUTICAL_MI"),
            point(coordinate("1", "2")),
        )),
        like("title", "x"),
    ])]);
    assert_eq!(compile(within), Some(Filter::like("title", "x")));

    let circle_shape = circle(coordinate("1", "2"), distance("1e308", "KILOMETER"));
    assert_eq!(compile(single(geo("loc", "intersect", circle_shape))), None);

    let ellipse_shape = ellipse(
        coordinate("0", "0"),
        distance("1e308", "STATUTE_MI"),
        distance("5", "KILOMETER"),
        "0",
    );
    assert_eq!(compile(single(geo("loc", "intersect", ellipse_shape))), None);
}

/// Degrees/minutes/seconds are recognised but not converted
#[test]
fn test_dms_coordinate_drops_term() {
    let shape = SyntaxNode::branch(Rule::Point, vec![dms("45 30 00N 120 15 00W")]);
    let tree = query(vec![term(vec![
        factor(geo("loc", "intersect", shape)),
        like("title", "x"),
    ])]);
    assert_eq!(compile(tree), Some(Filter::like("title", "x")));
}
