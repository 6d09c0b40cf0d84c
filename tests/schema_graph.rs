//! Schema Graph Tests
//!
//! The standard product data model:
//! - Every entity is declared with its attribute list
//! - Unknown entity and view names are not errors
//! - The all-entity view reaches every entity from the product root
//! - Relationship cardinalities are fixed at build time

use bqs_adapter::schema::names::{CLASSIFICATION, IDENTIFIER, SPATIAL_GEOGRAPHIC_REF_BOX};
use bqs_adapter::schema::{Cardinality, EntityKind, SchemaError, SchemaGraph, ValueKind, ALL_VIEW};

// =============================================================================
// Helper Functions
// =============================================================================

fn schema() -> SchemaGraph {
    SchemaGraph::standard().unwrap()
}

// =============================================================================
// Entity Catalog Tests
// =============================================================================

#[test]
fn test_standard_schema_declares_every_entity() {
    let schema = schema();
    let entities: Vec<EntityKind> = schema.entities().collect();
    assert_eq!(entities.len(), 26);
    for entity in EntityKind::ALL {
        assert!(entities.contains(&entity), "missing {}", entity);
    }
}

#[test]
fn test_unknown_entity_yields_empty_list() {
    let schema = schema();
    assert!(schema.attributes_of("nonexistent-entity").is_empty());
    // Lookups are case-sensitive
    assert!(schema.attributes_of("Card").is_empty());
}

#[test]
fn test_card_attributes() {
    let schema = schema();
    let card = schema.attributes_of("card");
    assert!(!card.is_empty());
    assert!(card.iter().all(|a| a.entity == EntityKind::Card));

    let identifier = schema.attribute(EntityKind::Card, IDENTIFIER).unwrap();
    assert_eq!(identifier.kind, ValueKind::Text);
    assert!(identifier.required);
}

#[test]
fn test_coverage_box_is_rectangle() {
    let schema = schema();
    let bbox = schema
        .attribute(EntityKind::Coverage, SPATIAL_GEOGRAPHIC_REF_BOX)
        .unwrap();
    assert_eq!(bbox.kind, ValueKind::Rectangle);
}

#[test]
fn test_both_security_entities_carry_classification() {
    let schema = schema();
    for entity in [EntityKind::Security, EntityKind::MetadataSecurity] {
        assert!(schema.attribute(entity, CLASSIFICATION).is_some());
        assert!(entity.carries_security());
    }
    assert!(!EntityKind::Card.carries_security());
}

#[test]
fn test_attribute_names_are_unique_per_entity() {
    let schema = schema();
    for entity in EntityKind::ALL {
        let attrs = schema.attributes_of_kind(entity);
        for (i, a) in attrs.iter().enumerate() {
            assert!(
                attrs[i + 1..].iter().all(|b| b.name != a.name),
                "{} repeats {}",
                entity,
                a.name
            );
        }
    }
}

// =============================================================================
// View Tests
// =============================================================================

#[test]
fn test_all_view_reaches_every_entity() {
    let schema = schema();
    let view = schema.view_graph(ALL_VIEW).unwrap();

    assert_eq!(view.name(), ALL_VIEW);
    assert_eq!(view.root(), EntityKind::Product);
    assert_eq!(view.entities()[0], EntityKind::Product);
    assert_eq!(view.entities().len(), 26);
    for entity in EntityKind::ALL {
        assert!(view.contains(entity));
    }
}

#[test]
fn test_view_attributes_follow_traversal_order() {
    let schema = schema();
    let view = schema.view_graph(ALL_VIEW).unwrap();
    let attributes = schema.attributes_for_view(ALL_VIEW);

    let expected: Vec<_> = view
        .entities()
        .iter()
        .flat_map(|&e| schema.attributes_of_kind(e))
        .collect();
    assert_eq!(attributes, expected);

    let total: usize = EntityKind::ALL
        .iter()
        .map(|&e| schema.attributes_of_kind(e).len())
        .sum();
    assert_eq!(attributes.len(), total);
}

#[test]
fn test_unknown_view_is_absent() {
    let schema = schema();
    assert!(schema.view_graph("NO_SUCH_VIEW").is_none());
    assert!(schema.attributes_for_view("NO_SUCH_VIEW").is_empty());
    assert_eq!(schema.view_names().collect::<Vec<_>>(), vec![ALL_VIEW]);
}

// =============================================================================
// Relationship Tests
// =============================================================================

#[test]
fn test_product_card_is_one_to_one() {
    let schema = schema();
    assert_eq!(
        schema.cardinality(EntityKind::Product, EntityKind::Card),
        Some((Cardinality::OneToOne, Cardinality::OneToOne))
    );
    assert_eq!(schema.cardinality(EntityKind::Card, EntityKind::Product), None);
}

#[test]
fn test_part_sections_are_optional() {
    let schema = schema();
    let (_, child) = schema
        .cardinality(EntityKind::Part, EntityKind::Coverage)
        .unwrap();
    assert!(child.admits(0));
    assert!(child.admits(1));
    assert!(!child.admits(2));

    let (_, parts) = schema
        .cardinality(EntityKind::Product, EntityKind::Part)
        .unwrap();
    assert!(!parts.admits(0));
    assert!(parts.admits(5));
}

#[test]
fn test_association_subtree() {
    let schema = schema();
    let children: Vec<EntityKind> = schema
        .relationships_from(EntityKind::Association)
        .iter()
        .map(|r| r.child)
        .collect();
    assert_eq!(
        children,
        vec![
            EntityKind::Relation,
            EntityKind::Source,
            EntityKind::Destination
        ]
    );
    assert!(schema
        .cardinality(EntityKind::Destination, EntityKind::Card)
        .is_some());
}

// =============================================================================
// Builder Validation Tests
// =============================================================================

#[test]
fn test_builder_rejects_undeclared_endpoint() {
    let result = SchemaGraph::builder()
        .entity(EntityKind::Product, vec![])
        .relate(
            EntityKind::Product,
            EntityKind::Card,
            Cardinality::OneToOne,
            Cardinality::OneToOne,
        )
        .build();
    assert!(matches!(result, Err(SchemaError::UndeclaredEntity { .. })));
}

#[test]
fn test_builder_rejects_duplicate_view() {
    let result = SchemaGraph::builder()
        .entity(EntityKind::Product, vec![])
        .view("V", EntityKind::Product)
        .view("V", EntityKind::Product)
        .build();
    let err = result.unwrap_err();
    assert_eq!(err, SchemaError::DuplicateView("V".into()));
    assert_eq!(err.code(), "BQS_SCHEMA_DUPLICATE_VIEW");
}

