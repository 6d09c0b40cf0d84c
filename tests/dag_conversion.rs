//! DAG Record Conversion Tests
//!
//! Encode and decode through the public converter:
//! - Populated sections survive a round trip unchanged
//! - Equal bounding-box corners decode to a point
//! - Records without a type-specific section get the fallback content type
//! - Security leaves from several sections are merged
//! - Identifiers inside association subtrees stay off the primary record

use bqs_adapter::config::AdapterConfig;
use bqs_adapter::convert::{RecordConverter, ReleasabilityMerge};
use bqs_adapter::dag::{AttributeValue, Dag, DagError, Edge, NodeKind};
use bqs_adapter::geometry::{BoundingBox, Coordinate};
use bqs_adapter::record::{keys, CatalogRecord, ProductType, RecordValue};
use bqs_adapter::schema::names;
use chrono::{TimeZone, Utc};

// =============================================================================
// Helper Functions
// =============================================================================

fn text(value: &str) -> RecordValue {
    RecordValue::Text(value.to_string())
}

fn wire_text(value: &str) -> AttributeValue {
    AttributeValue::Text(value.to_string())
}

fn full_record() -> CatalogRecord {
    let created = Utc.with_ymd_and_hms(2016, 3, 14, 6, 58, 31).unwrap();
    let modified = Utc.with_ymd_and_hms(2017, 1, 2, 3, 4, 5).unwrap();

    let record = CatalogRecord::new()
        // identity
        .with(keys::ID, text("6b2c7d0e"))
        .with(keys::MODIFIED, RecordValue::Date(modified))
        .with(keys::SOURCE_ID, text("library-1"))
        .with(keys::CARD_STATUS, text("NEW"))
        .with(keys::CARD_NUMBER_OF_PARTS, RecordValue::Integer(1))
        // file
        .with(keys::TITLE, text("Harbour overview"))
        .with(keys::CREATED, RecordValue::Date(created))
        .with(keys::RESOURCE_SIZE, RecordValue::Float(2.5))
        .with(keys::FORMAT, text("NITF"))
        .with(keys::FILE_ARCHIVED, RecordValue::Bool(false))
        // coverage
        .with(keys::COUNTRY_CODE, text("NOR"))
        .with(
            keys::LOCATION,
            RecordValue::Geometry("POLYGON((0 10, 20 10, 20 0, 0 0, 0 10))".into()),
        )
        // type-specific
        .with(keys::NIIRS, RecordValue::Integer(5))
        .with(keys::IMAGERY_CATEGORY, text("EO"))
        // security
        .with(keys::CLASSIFICATION, text("S"))
        .with(keys::POLICY, text("NATO EU"))
        .with(keys::RELEASABILITY, text("NOR"));

    CatalogRecord {
        record_type: Some(ProductType::Imagery),
        content_type: Some("IMAGERY".to_string()),
        associations: vec!["assoc-1".into(), "assoc-2".into()],
        ..record
    }
}

/// Root plus one entity holding the given attribute leaves
fn single_section(entity: &str, leaves: Vec<(&str, AttributeValue)>) -> Dag {
    let (mut dag, root) = Dag::with_root(names::PRODUCT_ROOT);
    let section = dag.add_entity(root, entity);
    for (name, value) in leaves {
        dag.add_attribute(section, name, value);
    }
    dag
}

fn security_section(dag: &mut Dag, entity: &str, classification: &str, policy: &str, rel: &str) {
    let root = dag.root().unwrap();
    let section = dag.add_entity(root, entity);
    dag.add_attribute(section, names::CLASSIFICATION, wire_text(classification));
    dag.add_attribute(section, names::POLICY, wire_text(policy));
    dag.add_attribute(section, names::RELEASABILITY, wire_text(rel));
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_round_trip_reproduces_record() {
    let converter = RecordConverter::default();
    let record = full_record();

    let dag = converter.encode(&record).unwrap();
    assert!(dag.validate().is_ok());

    let decoded = converter.decode(&dag).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_round_trip_survives_json() {
    let converter = RecordConverter::default();
    let record = full_record();

    let json = serde_json::to_string(&converter.encode(&record).unwrap()).unwrap();
    let dag = Dag::from_json(&json).unwrap();
    assert_eq!(converter.decode(&dag).unwrap(), record);
}

#[test]
fn test_encoded_leaves_are_typed() {
    let dag = RecordConverter::default().encode(&full_record()).unwrap();
    let value_of = |name: &str| {
        dag.nodes
            .iter()
            .find(|n| n.kind == NodeKind::Attribute && n.name == name)
            .and_then(|n| n.value.clone())
            .unwrap()
    };

    assert_eq!(value_of(names::NIIRS), AttributeValue::Short(5));
    assert_eq!(value_of(names::NUMBER_OF_PARTS), AttributeValue::Int(1));
    assert_eq!(value_of(names::EXTENT), AttributeValue::Double(2.5));
    assert_eq!(value_of(names::ARCHIVED), AttributeValue::Bool(false));
    assert!(matches!(
        value_of(names::SPATIAL_GEOGRAPHIC_REF_BOX),
        AttributeValue::Rectangle(_)
    ));
}

// =============================================================================
// Coverage Tests
// =============================================================================

/// Equal corners give a point, not a degenerate polygon
#[test]
fn test_equal_corners_decode_to_point() {
    let corner = Coordinate::new(45.5, -120.25);
    let dag = single_section(
        "coverage",
        vec![(
            names::SPATIAL_GEOGRAPHIC_REF_BOX,
            AttributeValue::Rectangle(BoundingBox::new(corner, corner)),
        )],
    );
    let record = RecordConverter::default().decode(&dag).unwrap();
    assert_eq!(
        record.get(keys::LOCATION),
        Some(&RecordValue::Geometry("POINT(-120.25 45.5)".into()))
    );
}

#[test]
fn test_distinct_corners_decode_to_closed_box() {
    let dag = single_section(
        "coverage",
        vec![(
            names::SPATIAL_GEOGRAPHIC_REF_BOX,
            AttributeValue::Rectangle(BoundingBox::new(
                Coordinate::new(10.0, 0.0),
                Coordinate::new(0.0, 20.0),
            )),
        )],
    );
    let record = RecordConverter::default().decode(&dag).unwrap();
    assert_eq!(
        record.get(keys::LOCATION),
        Some(&RecordValue::Geometry(
            "POLYGON((0 10, 20 10, 20 0, 0 0, 0 10))".into()
        ))
    );
}

#[test]
fn test_malformed_box_text_is_an_error() {
    let dag = single_section(
        "coverage",
        vec![(names::SPATIAL_GEOGRAPHIC_REF_BOX, wire_text("POLYGON((1 2,"))],
    );
    let err = RecordConverter::default().decode(&dag).unwrap_err();
    assert!(err.code().starts_with("BQS_GEOMETRY"), "{}", err.code());
}

// =============================================================================
// Content Type Tests
// =============================================================================

#[test]
fn test_no_type_section_gets_fallback_content_type() {
    let dag = single_section("card", vec![(names::IDENTIFIER, wire_text("abc"))]);

    let record = RecordConverter::default().decode(&dag).unwrap();
    assert_eq!(record.content_type.as_deref(), Some("DATA"));
    assert_eq!(record.record_type, None);

    let config = AdapterConfig::from_json(r#"{"fallback_content_type":"DOCUMENT"}"#).unwrap();
    let record = RecordConverter::from_config(&config).decode(&dag).unwrap();
    assert_eq!(record.content_type.as_deref(), Some("DOCUMENT"));
}

#[test]
fn test_type_section_sets_record_type() {
    let dag = single_section("tdl", vec![(names::TRACK_NUMBER, wire_text("T-100"))]);
    let record = RecordConverter::default().decode(&dag).unwrap();

    assert_eq!(record.record_type, Some(ProductType::TdlData));
    assert_eq!(record.content_type.as_deref(), Some("TDL DATA"));
    assert_eq!(record.text(keys::TDL_TRACK_NUMBER), Some("T-100"));
}

// =============================================================================
// Field Coercion Tests
// =============================================================================

#[test]
fn test_unknown_enumeration_leaves_field_unset() {
    let dag = single_section(
        "card",
        vec![
            (names::IDENTIFIER, wire_text("abc")),
            (names::STATUS, wire_text("new")),
        ],
    );
    let record = RecordConverter::default().decode(&dag).unwrap();
    assert_eq!(record.text(keys::ID), Some("abc"));
    assert!(!record.is_set(keys::CARD_STATUS));
}

#[test]
fn test_numeric_widening() {
    let dag = single_section(
        "imagery",
        vec![
            (names::NIIRS, AttributeValue::UShort(7)),
            (names::NUMBER_OF_ROWS, AttributeValue::UInt(4096)),
        ],
    );
    let record = RecordConverter::default().decode(&dag).unwrap();
    assert_eq!(record.get(keys::NIIRS), Some(&RecordValue::Integer(7)));
    assert_eq!(record.get(keys::HEIGHT_PIXELS), Some(&RecordValue::Integer(4096)));
}

// =============================================================================
// Security Merge Tests
// =============================================================================

#[test]
fn test_security_sections_merge() {
    let (mut dag, _) = Dag::with_root(names::PRODUCT_ROOT);
    security_section(&mut dag, "security", "S", "NATO", "NOR");
    security_section(&mut dag, "metadataSecurity", "TS", "EU NATO", "NOR");

    let record = RecordConverter::default().decode(&dag).unwrap();
    assert_eq!(record.text(keys::CLASSIFICATION), Some("TS"));
    assert_eq!(record.text(keys::POLICY), Some("NATO EU"));
    assert_eq!(record.text(keys::RELEASABILITY), Some("NOR"));
}

#[test]
fn test_releasability_merge_modes() {
    let (mut dag, _) = Dag::with_root(names::PRODUCT_ROOT);
    security_section(&mut dag, "security", "U", "P", "NOR USA GBR");
    security_section(&mut dag, "metadataSecurity", "U", "P", "USA GBR");

    let legacy = RecordConverter::new("DATA", ReleasabilityMerge::Legacy)
        .decode(&dag)
        .unwrap();
    assert!(!legacy.is_set(keys::RELEASABILITY));

    let intersection = RecordConverter::new("DATA", ReleasabilityMerge::Intersection)
        .decode(&dag)
        .unwrap();
    assert_eq!(intersection.text(keys::RELEASABILITY), Some("USA GBR"));
}

// =============================================================================
// Association Tests
// =============================================================================

#[test]
fn test_association_identifiers_stay_off_record() {
    let (mut dag, root) = Dag::with_root(names::PRODUCT_ROOT);
    let card = dag.add_entity(root, "card");
    dag.add_attribute(card, names::IDENTIFIER, wire_text("primary"));

    let association = dag.add_entity(root, "association");
    let destination = dag.add_entity(association, "destination");
    let linked = dag.add_entity(destination, "card");
    dag.add_attribute(linked, names::IDENTIFIER, wire_text("linked"));

    let record = RecordConverter::default().decode(&dag).unwrap();
    assert_eq!(record.text(keys::ID), Some("primary"));
    assert_eq!(record.associations, vec!["linked".to_string()]);
}

// =============================================================================
// Graph Validation Tests
// =============================================================================

#[test]
fn test_graph_without_root_is_rejected() {
    let err = RecordConverter::default().decode(&Dag::default()).unwrap_err();
    assert_eq!(err.code(), "BQS_DAG_ROOT_COUNT");
}

#[test]
fn test_cycle_is_rejected() {
    let (mut dag, root) = Dag::with_root(names::PRODUCT_ROOT);
    let a = dag.add_entity(root, "card");
    let b = dag.add_entity(a, "file");
    dag.edges.push(Edge { parent: b, child: a });

    let err = dag.validate().unwrap_err();
    assert!(matches!(err, DagError::Cycle(_)), "{:?}", err);
}
