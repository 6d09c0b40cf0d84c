//! Graph → record
//!
//! Depth-first over a validated graph, tracking the nearest enclosing entity.
//! Each attribute leaf is dispatched on `(entity, attribute)`. Security
//! leaves are folded and written once traversal completes.

use crate::dag::{AttributeValue, Dag, DagNode, NodeId, NodeKind};
use crate::geometry::Geometry;
use crate::observability::{log_event_with_fields, trace_event, Event};
use crate::record::{keys, CatalogRecord, ProductType, RecordValue};
use crate::schema::{names, EntityKind, ValueKind};

use super::errors::ConvertResult;
use super::mapping::{self, Coercion, FieldMapping};
use super::security::{ReleasabilityMerge, SecurityDescriptor};

/// Traversal context inherited by a node's children
#[derive(Debug, Clone, Copy, Default)]
struct Scope<'a> {
    /// Name of the nearest enclosing entity node
    entity: Option<&'a str>,
    /// Inside an association subtree
    in_association: bool,
}

struct DecodeState {
    record: CatalogRecord,
    security: SecurityDescriptor,
    mode: ReleasabilityMerge,
}

pub(super) fn decode(
    dag: &Dag,
    fallback_content_type: &str,
    mode: ReleasabilityMerge,
) -> ConvertResult<CatalogRecord> {
    let topology = dag.topology()?;
    let mut state = DecodeState {
        record: CatalogRecord::new(),
        security: SecurityDescriptor::new(),
        mode,
    };

    let mut stack: Vec<(NodeId, Scope<'_>)> = vec![(topology.root(), Scope::default())];
    while let Some((id, scope)) = stack.pop() {
        let Some(node) = topology.node(id) else {
            continue;
        };
        let inner = match node.kind {
            NodeKind::Root | NodeKind::Record => scope,
            NodeKind::Entity => state.enter_entity(node, scope),
            NodeKind::Attribute => {
                state.attribute(node, scope)?;
                continue;
            }
        };
        for &child in topology.children(id).iter().rev() {
            stack.push((child, inner));
        }
    }

    let DecodeState {
        mut record,
        security,
        ..
    } = state;
    security.apply(&mut record);
    if record.content_type.is_none() {
        record.content_type = Some(fallback_content_type.to_string());
    }

    log_event_with_fields(
        Event::RecordDecoded,
        &[
            ("attributes", &record.attributes.len().to_string()),
            ("associations", &record.associations.len().to_string()),
            ("content_type", record.content_type.as_deref().unwrap_or_default()),
        ],
    );
    Ok(record)
}

impl DecodeState {
    fn enter_entity<'a>(&mut self, node: &'a DagNode, scope: Scope<'a>) -> Scope<'a> {
        let kind = EntityKind::from_name(&node.name);
        let in_association = scope.in_association || kind == Some(EntityKind::Association);

        if !in_association {
            if let Some(product_type) = kind.and_then(ProductType::from_entity) {
                self.record.record_type = Some(product_type);
                self.record.content_type = Some(product_type.wire_name().to_string());
            }
        }

        Scope {
            entity: Some(&node.name),
            in_association,
        }
    }

    fn attribute(&mut self, node: &DagNode, scope: Scope<'_>) -> ConvertResult<()> {
        let Some(value) = node.value.as_ref() else {
            return Ok(());
        };
        let entity_name = scope.entity.unwrap_or_default();
        let Some(entity) = EntityKind::from_name(entity_name) else {
            unhandled(entity_name, &node.name);
            return Ok(());
        };
        let attribute = node.name.as_str();

        if scope.in_association {
            if attribute == names::IDENTIFIER {
                match value.as_text() {
                    Some(identifier) => self.record.associations.push(identifier.to_string()),
                    None => kind_mismatch(entity, attribute, ValueKind::Text, value),
                }
            } else {
                unhandled(entity_name, attribute);
            }
            return Ok(());
        }

        if entity.carries_security() {
            match value.as_text() {
                Some(text) => {
                    if !self.security.fold(attribute, text, self.mode) {
                        unhandled(entity_name, attribute);
                    }
                }
                None => kind_mismatch(entity, attribute, ValueKind::Text, value),
            }
            return Ok(());
        }

        if entity == EntityKind::Coverage && attribute == names::SPATIAL_GEOGRAPHIC_REF_BOX {
            return self.bounding_box(value);
        }

        match mapping::find(entity, attribute) {
            Some(mapping) => {
                if let Some(decoded) = from_wire(entity, mapping, value) {
                    self.record.set(mapping.key, decoded);
                }
            }
            None => unhandled(entity_name, attribute),
        }
        Ok(())
    }

    /// Equal corners decode to a point, anything else to the closed box.
    /// Text is read as WKT and replaced by its envelope.
    fn bounding_box(&mut self, value: &AttributeValue) -> ConvertResult<()> {
        let bbox = match value {
            AttributeValue::Rectangle(bbox) => *bbox,
            AttributeValue::Text(wkt) => Geometry::parse(wkt)?.envelope(),
            other => {
                kind_mismatch(
                    EntityKind::Coverage,
                    names::SPATIAL_GEOGRAPHIC_REF_BOX,
                    ValueKind::Rectangle,
                    other,
                );
                return Ok(());
            }
        };
        self.record.set(
            keys::LOCATION,
            RecordValue::Geometry(bbox.to_geometry().to_wkt()),
        );
        Ok(())
    }
}

/// Coerces a wire value to the mapping's record form. `None` leaves the
/// field unset.
fn from_wire(
    entity: EntityKind,
    mapping: &FieldMapping,
    value: &AttributeValue,
) -> Option<RecordValue> {
    let decoded = match mapping.kind {
        ValueKind::Text => value.as_text().map(|text| RecordValue::Text(text.to_string())),
        kind if kind.is_integer() => value.as_i64().map(RecordValue::Integer),
        ValueKind::Double => value.as_f64().map(RecordValue::Float),
        ValueKind::Bool => value.as_bool().map(RecordValue::Bool),
        ValueKind::Date => match value.as_date() {
            Some(abs) => match abs.to_datetime() {
                Some(at) => Some(RecordValue::Date(at)),
                None => {
                    log_event_with_fields(
                        Event::DateInvalid,
                        &[
                            ("entity", entity.as_str()),
                            ("attribute", mapping.attribute),
                            ("value", &format!("{:?}", abs)),
                        ],
                    );
                    return None;
                }
            },
            None => None,
        },
        _ => None,
    };

    let Some(decoded) = decoded else {
        kind_mismatch(entity, mapping.attribute, mapping.kind, value);
        return None;
    };

    if let (Coercion::Enumeration(table), RecordValue::Text(text)) = (mapping.coercion, &decoded) {
        if !table.contains(text) {
            log_event_with_fields(
                Event::EnumerationUnknown,
                &[
                    ("entity", entity.as_str()),
                    ("attribute", mapping.attribute),
                    ("table", table.name),
                    ("value", text.as_str()),
                ],
            );
            return None;
        }
    }
    Some(decoded)
}

fn unhandled(entity: &str, attribute: &str) {
    trace_event(
        Event::AttributeUnhandled,
        &[("entity", entity), ("attribute", attribute)],
    );
}

fn kind_mismatch(entity: EntityKind, attribute: &str, expected: ValueKind, actual: &AttributeValue) {
    log_event_with_fields(
        Event::AttributeKindMismatch,
        &[
            ("entity", entity.as_str()),
            ("attribute", attribute),
            ("expected", expected.type_name()),
            ("actual", actual.kind().type_name()),
        ],
    );
}
