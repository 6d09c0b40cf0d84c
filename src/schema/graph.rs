//! Entity-relationship schema graph and views
//!
//! A [`SchemaGraph`] is assembled once by [`SchemaBuilder::build`], which
//! validates the declarations. After that it exposes lookups only.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::sync::OnceLock;

use serde::Serialize;

use super::catalog;
use super::errors::{SchemaError, SchemaResult};
use super::names::EntityKind;
use super::types::{AttributeDescriptor, Cardinality, Relationship};
use crate::observability::{log_event_with_fields, Event};

/// Subgraph reachable from a view's root entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityGraph {
    name: String,
    root: EntityKind,
    /// Breadth-first from the root, each entity once
    entities: Vec<EntityKind>,
    relationships: Vec<Relationship>,
}

impl EntityGraph {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> EntityKind {
        self.root
    }

    /// Entities in traversal order
    pub fn entities(&self) -> &[EntityKind] {
        &self.entities
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn contains(&self, entity: EntityKind) -> bool {
        self.entities.contains(&entity)
    }
}

/// Immutable catalog of entities, attributes, relationships and views
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    attributes: BTreeMap<EntityKind, Vec<AttributeDescriptor>>,
    relationships: Vec<Relationship>,
    views: BTreeMap<String, EntityGraph>,
}

impl SchemaGraph {
    /// Process-wide standard schema, built on first use and never rebuilt
    pub fn shared() -> SchemaResult<&'static SchemaGraph> {
        static STANDARD: OnceLock<SchemaResult<SchemaGraph>> = OnceLock::new();
        STANDARD
            .get_or_init(SchemaGraph::standard)
            .as_ref()
            .map_err(Clone::clone)
    }

    /// The standard product data model with its single all-entity view
    pub fn standard() -> SchemaResult<Self> {
        let mut builder = SchemaBuilder::new();
        for entity in EntityKind::ALL {
            let attributes = catalog::attribute_table(entity)
                .iter()
                .map(|&(name, kind, required)| AttributeDescriptor {
                    entity,
                    name,
                    kind,
                    required,
                })
                .collect();
            builder = builder.entity(entity, attributes);
        }
        for &(parent, child, parent_card, child_card) in catalog::RELATIONSHIPS {
            builder = builder.relate(parent, child, parent_card, child_card);
        }
        for &(view, root) in catalog::VIEWS {
            builder = builder.view(view, root);
        }
        builder.build()
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Attributes of the named entity. Unknown names yield an empty slice.
    pub fn attributes_of(&self, entity: &str) -> &[AttributeDescriptor] {
        EntityKind::from_name(entity)
            .map(|kind| self.attributes_of_kind(kind))
            .unwrap_or(&[])
    }

    pub fn attributes_of_kind(&self, entity: EntityKind) -> &[AttributeDescriptor] {
        self.attributes
            .get(&entity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Looks up one attribute of an entity
    pub fn attribute(&self, entity: EntityKind, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes_of_kind(entity)
            .iter()
            .find(|attr| attr.name == name)
    }

    /// Declared entities in declaration order
    pub fn entities(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.attributes.keys().copied()
    }

    pub fn view_graph(&self, view: &str) -> Option<&EntityGraph> {
        self.views.get(view)
    }

    pub fn view_names(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    /// Union of the attributes of every entity in the view, in traversal
    /// order. Unknown views yield an empty list.
    pub fn attributes_for_view(&self, view: &str) -> Vec<&AttributeDescriptor> {
        let Some(graph) = self.views.get(view) else {
            return Vec::new();
        };
        graph
            .entities()
            .iter()
            .flat_map(|&entity| self.attributes_of_kind(entity))
            .collect()
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Outgoing relationships of an entity in declaration order
    pub fn relationships_from(&self, parent: EntityKind) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|rel| rel.parent == parent)
            .collect()
    }

    /// `(parent cardinality, child cardinality)` of a declared relationship
    pub fn cardinality(
        &self,
        parent: EntityKind,
        child: EntityKind,
    ) -> Option<(Cardinality, Cardinality)> {
        self.relationships
            .iter()
            .find(|rel| rel.parent == parent && rel.child == child)
            .map(|rel| (rel.parent_cardinality, rel.child_cardinality))
    }
}

/// Collects declarations and validates them into a [`SchemaGraph`]
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    entities: Vec<(EntityKind, Vec<AttributeDescriptor>)>,
    relationships: Vec<Relationship>,
    views: Vec<(String, EntityKind)>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(mut self, entity: EntityKind, attributes: Vec<AttributeDescriptor>) -> Self {
        self.entities.push((entity, attributes));
        self
    }

    pub fn relate(
        mut self,
        parent: EntityKind,
        child: EntityKind,
        parent_cardinality: Cardinality,
        child_cardinality: Cardinality,
    ) -> Self {
        self.relationships.push(Relationship {
            parent,
            child,
            parent_cardinality,
            child_cardinality,
        });
        self
    }

    pub fn view(mut self, name: impl Into<String>, root: EntityKind) -> Self {
        self.views.push((name.into(), root));
        self
    }

    pub fn build(self) -> SchemaResult<SchemaGraph> {
        let mut attributes = BTreeMap::new();
        for (entity, attrs) in self.entities {
            let mut seen = HashSet::new();
            for attr in &attrs {
                if !seen.insert(attr.name) {
                    return Err(SchemaError::DuplicateAttribute {
                        entity,
                        attribute: attr.name,
                    });
                }
            }
            if attributes.insert(entity, attrs).is_some() {
                return Err(SchemaError::DuplicateEntity(entity));
            }
        }

        let mut pairs = HashSet::new();
        for rel in &self.relationships {
            if rel.parent == rel.child {
                return Err(SchemaError::SelfRelationship(rel.parent));
            }
            for endpoint in [rel.parent, rel.child] {
                if !attributes.contains_key(&endpoint) {
                    return Err(SchemaError::UndeclaredEntity {
                        parent: rel.parent,
                        child: rel.child,
                        missing: endpoint,
                    });
                }
            }
            if !pairs.insert((rel.parent, rel.child)) {
                return Err(SchemaError::DuplicateRelationship {
                    parent: rel.parent,
                    child: rel.child,
                });
            }
        }

        let mut views = BTreeMap::new();
        for (name, root) in self.views {
            if !attributes.contains_key(&root) {
                return Err(SchemaError::UndeclaredViewRoot { view: name, root });
            }
            if views.contains_key(&name) {
                return Err(SchemaError::DuplicateView(name));
            }
            let graph = reachable(&name, root, &self.relationships);
            views.insert(name, graph);
        }

        log_event_with_fields(
            Event::SchemaBuilt,
            &[
                ("entities", &attributes.len().to_string()),
                ("relationships", &self.relationships.len().to_string()),
                ("views", &views.len().to_string()),
            ],
        );

        Ok(SchemaGraph {
            attributes,
            relationships: self.relationships,
            views,
        })
    }
}

/// Breadth-first closure from `root`, following relationships in
/// declaration order
fn reachable(name: &str, root: EntityKind, relationships: &[Relationship]) -> EntityGraph {
    let mut entities = vec![root];
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut edges = Vec::new();

    while let Some(current) = queue.pop_front() {
        for rel in relationships.iter().filter(|rel| rel.parent == current) {
            edges.push(*rel);
            if visited.insert(rel.child) {
                entities.push(rel.child);
                queue.push_back(rel.child);
            }
        }
    }

    EntityGraph {
        name: name.to_string(),
        root,
        entities,
        relationships: edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::ValueKind;

    fn small_builder() -> SchemaBuilder {
        SchemaBuilder::new()
            .entity(EntityKind::Product, vec![])
            .entity(
                EntityKind::Card,
                vec![AttributeDescriptor::required(
                    EntityKind::Card,
                    "identifier",
                    ValueKind::Text,
                )],
            )
            .relate(
                EntityKind::Product,
                EntityKind::Card,
                Cardinality::OneToOne,
                Cardinality::OneToOne,
            )
    }

    #[test]
    fn test_small_schema_builds() {
        let schema = small_builder().view("SMALL", EntityKind::Product).build().unwrap();
        let view = schema.view_graph("SMALL").unwrap();
        assert_eq!(view.entities(), &[EntityKind::Product, EntityKind::Card]);
        assert_eq!(schema.attributes_for_view("SMALL").len(), 1);
    }

    #[test]
    fn test_duplicate_entity_rejected() {
        let err = small_builder()
            .entity(EntityKind::Card, vec![])
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateEntity(EntityKind::Card));
        assert_eq!(err.code(), "BQS_SCHEMA_DUPLICATE_ENTITY");
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        let attr = AttributeDescriptor::optional(EntityKind::File, "title", ValueKind::Text);
        let err = SchemaBuilder::new()
            .entity(EntityKind::File, vec![attr.clone(), attr])
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateAttribute { attribute: "title", .. }));
    }

    #[test]
    fn test_undeclared_endpoint_rejected() {
        let err = small_builder()
            .relate(
                EntityKind::Card,
                EntityKind::Video,
                Cardinality::OneToOne,
                Cardinality::OneToZeroOrOne,
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::UndeclaredEntity {
                parent: EntityKind::Card,
                child: EntityKind::Video,
                missing: EntityKind::Video,
            }
        );
    }

    #[test]
    fn test_self_and_duplicate_relationships_rejected() {
        let err = small_builder()
            .relate(
                EntityKind::Card,
                EntityKind::Card,
                Cardinality::OneToOne,
                Cardinality::OneToOne,
            )
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::SelfRelationship(EntityKind::Card));

        let err = small_builder()
            .relate(
                EntityKind::Product,
                EntityKind::Card,
                Cardinality::OneToOne,
                Cardinality::OneToOne,
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateRelationship { .. }));
    }

    #[test]
    fn test_view_errors() {
        let err = small_builder()
            .view("V", EntityKind::Video)
            .build()
            .unwrap_err();
        assert_eq!(err.code(), "BQS_SCHEMA_UNDECLARED_VIEW_ROOT");

        let err = small_builder()
            .view("V", EntityKind::Product)
            .view("V", EntityKind::Card)
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateView("V".to_string()));
    }

    #[test]
    fn test_standard_schema_builds() {
        let schema = SchemaGraph::standard().unwrap();
        assert_eq!(schema.entities().count(), 26);
    }

    #[test]
    fn test_shared_schema_is_built_once() {
        let first = SchemaGraph::shared().unwrap();
        let second = SchemaGraph::shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.entities().count(), 26);
    }
}
