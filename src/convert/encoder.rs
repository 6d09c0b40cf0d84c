//! Record → graph
//!
//! Each populated section of the record becomes one entity node under the
//! root, with one attribute leaf per populated field. Sections with no
//! populated field are omitted.

use crate::dag::{AbsTime, AttributeValue, Dag, NodeId};
use crate::geometry::Geometry;
use crate::observability::{log_event_with_fields, Event};
use crate::record::{keys, CatalogRecord, RecordValue};
use crate::schema::{names, EntityKind, ValueKind, PRODUCT_ROOT};

use super::errors::{ConvertError, ConvertResult};
use super::mapping::{self, Coercion, FieldMapping};

/// Sections emitted for every record, in order. The type-specific section,
/// security and associations follow.
const SECTION_ORDER: [EntityKind; 9] = [
    EntityKind::Card,
    EntityKind::File,
    EntityKind::Stream,
    EntityKind::Approval,
    EntityKind::RelatedFile,
    EntityKind::Part,
    EntityKind::Common,
    EntityKind::Coverage,
    EntityKind::ExploitationInfo,
];

const SECURITY_FIELDS: [(&str, &str); 3] = [
    (names::CLASSIFICATION, keys::CLASSIFICATION),
    (names::POLICY, keys::POLICY),
    (names::RELEASABILITY, keys::RELEASABILITY),
];

type Leaves = Vec<(&'static str, AttributeValue)>;

pub(super) fn encode(record: &CatalogRecord) -> ConvertResult<Dag> {
    let (mut dag, root) = Dag::with_root(PRODUCT_ROOT);

    for entity in SECTION_ORDER {
        let mut leaves = mapped_leaves(record, entity)?;
        if entity == EntityKind::Coverage {
            if let Some(bbox) = location_leaf(record)? {
                leaves.push((names::SPATIAL_GEOGRAPHIC_REF_BOX, bbox));
            }
        }
        emit_section(&mut dag, root, entity, leaves);
    }

    // Type-specific fields are emitted only under the record's own type
    if let Some(product_type) = record.record_type {
        let entity = product_type.entity();
        let leaves = mapped_leaves(record, entity)?;
        emit_section(&mut dag, root, entity, leaves);
    }

    emit_section(&mut dag, root, EntityKind::Security, security_leaves(record));

    if !record.associations.is_empty() {
        let association = dag.add_entity(root, EntityKind::Association.as_str());
        for identifier in &record.associations {
            let destination = dag.add_entity(association, EntityKind::Destination.as_str());
            let card = dag.add_entity(destination, EntityKind::Card.as_str());
            dag.add_attribute(card, names::IDENTIFIER, AttributeValue::Text(identifier.clone()));
        }
    }

    log_event_with_fields(
        Event::RecordEncoded,
        &[
            ("nodes", &dag.nodes.len().to_string()),
            ("associations", &record.associations.len().to_string()),
        ],
    );
    Ok(dag)
}

fn emit_section(dag: &mut Dag, root: NodeId, entity: EntityKind, leaves: Leaves) {
    if leaves.is_empty() {
        return;
    }
    let node = dag.add_entity(root, entity.as_str());
    for (name, value) in leaves {
        dag.add_attribute(node, name, value);
    }
}

fn mapped_leaves(record: &CatalogRecord, entity: EntityKind) -> ConvertResult<Leaves> {
    let mut leaves = Vec::new();
    for mapping in mapping::mappings(entity) {
        if let Some(value) = record.get(mapping.key) {
            if let Some(wire) = to_wire(entity, mapping, value)? {
                leaves.push((mapping.attribute, wire));
            }
        }
    }
    Ok(leaves)
}

/// Converts one record value to its wire form. `Ok(None)` skips the field.
fn to_wire(
    entity: EntityKind,
    mapping: &FieldMapping,
    value: &RecordValue,
) -> ConvertResult<Option<AttributeValue>> {
    let out_of_range = |v: i64| ConvertError::OutOfRange {
        key: mapping.key.to_string(),
        value: v,
        kind: mapping.kind,
    };

    let wire = match (mapping.kind, value) {
        (ValueKind::Text, RecordValue::Text(s)) => {
            if let Coercion::Enumeration(table) = mapping.coercion {
                if !table.contains(s) {
                    log_event_with_fields(
                        Event::EnumerationUnknown,
                        &[
                            ("entity", entity.as_str()),
                            ("attribute", mapping.attribute),
                            ("table", table.name),
                            ("value", s.as_str()),
                        ],
                    );
                    return Ok(None);
                }
            }
            AttributeValue::Text(s.clone())
        }
        (ValueKind::Short, RecordValue::Integer(v)) => {
            AttributeValue::Short(i16::try_from(*v).map_err(|_| out_of_range(*v))?)
        }
        (ValueKind::UShort, RecordValue::Integer(v)) => {
            AttributeValue::UShort(u16::try_from(*v).map_err(|_| out_of_range(*v))?)
        }
        (ValueKind::Int, RecordValue::Integer(v)) => {
            AttributeValue::Int(i32::try_from(*v).map_err(|_| out_of_range(*v))?)
        }
        (ValueKind::UInt, RecordValue::Integer(v)) => {
            AttributeValue::UInt(u32::try_from(*v).map_err(|_| out_of_range(*v))?)
        }
        (ValueKind::Long, RecordValue::Integer(v)) => AttributeValue::Long(*v),
        (ValueKind::Double, RecordValue::Float(v)) => AttributeValue::Double(*v),
        (ValueKind::Bool, RecordValue::Bool(v)) => AttributeValue::Bool(*v),
        (ValueKind::Date, RecordValue::Date(at)) => AttributeValue::Date(AbsTime::from_datetime(at)),
        (expected, actual) => {
            log_event_with_fields(
                Event::AttributeKindMismatch,
                &[
                    ("entity", entity.as_str()),
                    ("attribute", mapping.attribute),
                    ("expected", expected.type_name()),
                    ("actual", actual.kind_name()),
                ],
            );
            return Ok(None);
        }
    };
    Ok(Some(wire))
}

/// Bounding box of the record's location geometry
fn location_leaf(record: &CatalogRecord) -> ConvertResult<Option<AttributeValue>> {
    let wkt = match record.get(keys::LOCATION) {
        None => return Ok(None),
        Some(RecordValue::Geometry(wkt)) | Some(RecordValue::Text(wkt)) => wkt,
        Some(other) => {
            log_event_with_fields(
                Event::AttributeKindMismatch,
                &[
                    ("entity", EntityKind::Coverage.as_str()),
                    ("attribute", names::SPATIAL_GEOGRAPHIC_REF_BOX),
                    ("expected", "geometry"),
                    ("actual", other.kind_name()),
                ],
            );
            return Ok(None);
        }
    };
    let envelope = Geometry::parse(wkt)?.envelope();
    Ok(Some(AttributeValue::Rectangle(envelope)))
}

fn security_leaves(record: &CatalogRecord) -> Leaves {
    SECURITY_FIELDS
        .iter()
        .filter_map(|&(attribute, key)| {
            record
                .text(key)
                .map(|value| (attribute, AttributeValue::Text(value.to_string())))
        })
        .collect()
}
