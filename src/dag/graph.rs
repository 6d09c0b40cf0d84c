//! Record graph: nodes with explicit ids and parent→child edges
//!
//! Stored as plain node and edge lists. [`Dag::topology`] validates a graph
//! and returns its child adjacency for traversal.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{DagError, DagResult};
use super::value::AttributeValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Entity,
    Attribute,
    /// Transparent container, carries no data of its own
    Record,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: String,
    /// Present on attribute nodes only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub parent: NodeId,
    pub child: NodeId,
}

/// One record as a node/edge graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dag {
    #[serde(default)]
    pub nodes: Vec<DagNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Next free id and the node count it was computed at
    #[serde(skip)]
    cursor: Option<(u32, usize)>,
}

impl PartialEq for Dag {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Dag {
    /// Creates a graph holding only its root node
    pub fn new(root_name: &str) -> Self {
        Self::with_root(root_name).0
    }

    /// Like [`Dag::new`], also returning the root's id
    pub fn with_root(root_name: &str) -> (Self, NodeId) {
        let mut dag = Self::default();
        let root = dag.push_node(NodeKind::Root, root_name, None);
        (dag, root)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Allocates an unused id. The cached cursor is dropped whenever `nodes`
    /// was changed behind the builder's back.
    fn allocate_id(&mut self) -> NodeId {
        let id = match self.cursor {
            Some((next, len)) if len == self.nodes.len() => next,
            _ => self.scan_free_id(),
        };
        self.cursor = id.checked_add(1).map(|next| (next, self.nodes.len() + 1));
        NodeId(id)
    }

    fn scan_free_id(&self) -> u32 {
        match self.nodes.iter().map(|n| n.id.0).max() {
            None => 0,
            Some(max) => match max.checked_add(1) {
                Some(next) => next,
                None => {
                    let used: BTreeSet<u32> = self.nodes.iter().map(|n| n.id.0).collect();
                    (0..u32::MAX).find(|id| !used.contains(id)).unwrap_or(u32::MAX)
                }
            },
        }
    }

    fn push_node(&mut self, kind: NodeKind, name: &str, value: Option<AttributeValue>) -> NodeId {
        let id = self.allocate_id();
        self.nodes.push(DagNode {
            id,
            kind,
            name: name.to_string(),
            value,
        });
        id
    }

    fn push_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: &str,
        value: Option<AttributeValue>,
    ) -> NodeId {
        let child = self.push_node(kind, name, value);
        self.edges.push(Edge { parent, child });
        child
    }

    pub fn add_entity(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.push_child(parent, NodeKind::Entity, name, None)
    }

    pub fn add_record(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.push_child(parent, NodeKind::Record, name, None)
    }

    pub fn add_attribute(&mut self, parent: NodeId, name: &str, value: AttributeValue) -> NodeId {
        self.push_child(parent, NodeKind::Attribute, name, Some(value))
    }

    pub fn node(&self, id: NodeId) -> Option<&DagNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First node tagged `root`
    pub fn root(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.kind == NodeKind::Root)
            .map(|n| n.id)
    }

    /// Children of `id` in edge order
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|e| e.parent == id)
            .map(|e| e.child)
            .collect()
    }

    pub fn validate(&self) -> DagResult<()> {
        self.topology().map(|_| ())
    }

    /// Validates the graph and indexes it for traversal.
    ///
    /// Checks: unique ids, exactly one root with no parent, edges between
    /// known nodes, attribute nodes are valued leaves, no cycles.
    pub fn topology(&self) -> DagResult<Topology<'_>> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for (pos, node) in self.nodes.iter().enumerate() {
            if index.insert(node.id, pos).is_some() {
                return Err(DagError::DuplicateNode(node.id));
            }
            if node.kind == NodeKind::Attribute && node.value.is_none() {
                return Err(DagError::MissingValue {
                    id: node.id,
                    name: node.name.clone(),
                });
            }
        }

        let roots: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Root)
            .map(|n| n.id)
            .collect();
        if roots.len() != 1 {
            return Err(DagError::RootCount(roots.len()));
        }
        let root = roots[0];

        let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        let mut in_degree: HashMap<NodeId, usize> = self.nodes.iter().map(|n| (n.id, 0)).collect();
        for edge in &self.edges {
            for endpoint in [edge.parent, edge.child] {
                if !index.contains_key(&endpoint) {
                    return Err(DagError::UnknownNode {
                        parent: edge.parent,
                        child: edge.child,
                        missing: endpoint,
                    });
                }
            }
            if edge.child == root {
                return Err(DagError::RootHasParent(root));
            }
            if self.nodes[index[&edge.parent]].kind == NodeKind::Attribute {
                return Err(DagError::AttributeHasChildren(edge.parent));
            }
            children.entry(edge.parent).or_default().push(edge.child);
            *in_degree.entry(edge.child).or_default() += 1;
        }

        // Kahn's algorithm over every node, reachable or not
        let mut ready: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| in_degree[&n.id] == 0)
            .map(|n| n.id)
            .collect();
        let mut processed = 0;
        while let Some(id) = ready.pop() {
            processed += 1;
            for child in children.get(&id).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(child) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push(*child);
                    }
                }
            }
        }
        if processed != self.nodes.len() {
            let stuck = self
                .nodes
                .iter()
                .find(|n| in_degree[&n.id] > 0)
                .map(|n| n.id)
                .unwrap_or(root);
            return Err(DagError::Cycle(stuck));
        }

        Ok(Topology {
            dag: self,
            root,
            index,
            children,
        })
    }
}

/// Validated view of a [`Dag`]
#[derive(Debug)]
pub struct Topology<'a> {
    dag: &'a Dag,
    root: NodeId,
    index: HashMap<NodeId, usize>,
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl<'a> Topology<'a> {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&'a DagNode> {
        self.index.get(&id).map(|&pos| &self.dag.nodes[pos])
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}
