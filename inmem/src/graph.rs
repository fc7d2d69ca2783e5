//! In-memory labeled property graph.
use crate::index::KeyIndex;
use pgrdf_api::pg::*;
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;
use std::iter::empty;
use thiserror::Error;

/// An in-memory labeled property graph.
///
/// Nodes are indexed by label, relationships by type and by incident node.
/// Iteration orders are deterministic (by identifier).
#[derive(Clone, Debug, Default)]
pub struct MemGraph {
    nodes: BTreeMap<EntityId, Node>,
    relationships: BTreeMap<EntityId, Relationship>,
    incidence: BTreeMap<EntityId, BTreeSet<EntityId>>,
    labels: KeyIndex,
    types: KeyIndex,
}

/// This error is raised when inserting inconsistent data in a [`MemGraph`].
#[derive(Debug, Error)]
pub enum MemGraphError {
    /// A node or relationship with the same identifier already exists.
    #[error("An entity with identifier {0} already exists")]
    DuplicateId(EntityId),
    /// A relationship refers to a node that does not exist.
    #[error("Node {0} does not exist")]
    UnknownNode(EntityId),
    /// A relationship that does not exist was requested.
    #[error("Relationship {0} does not exist")]
    UnknownRelationship(EntityId),
    /// A relationship does not continue a path.
    #[error("Relationship {rel} is not incident to node {node}")]
    Disconnected {
        /// The relationship
        rel: EntityId,
        /// The node where the path currently ends
        node: EntityId,
    },
}

impl MemGraph {
    /// Build an empty graph.
    pub fn new() -> Self {
        MemGraph::default()
    }

    /// Add a node to this graph.
    pub fn insert_node(&mut self, node: Node) -> Result<EntityId, MemGraphError> {
        let id = node.id();
        if self.nodes.contains_key(&id) || self.relationships.contains_key(&id) {
            return Err(MemGraphError::DuplicateId(id));
        }
        for label in node.labels() {
            self.labels.insert(label, id);
        }
        self.nodes.insert(id, node);
        Ok(id)
    }

    /// Add a relationship to this graph.
    ///
    /// Both its start and end nodes must already be in the graph.
    pub fn insert_relationship(&mut self, rel: Relationship) -> Result<EntityId, MemGraphError> {
        let id = rel.id();
        if self.nodes.contains_key(&id) || self.relationships.contains_key(&id) {
            return Err(MemGraphError::DuplicateId(id));
        }
        for end in [rel.start(), rel.end()] {
            if !self.nodes.contains_key(&end) {
                return Err(MemGraphError::UnknownNode(end));
            }
        }
        self.incidence.entry(rel.start()).or_default().insert(id);
        self.incidence.entry(rel.end()).or_default().insert(id);
        self.types.insert(rel.rel_type(), id);
        self.relationships.insert(id, rel);
        Ok(id)
    }

    /// Get the relationship with identifier `id`, if it exists.
    pub fn relationship(&self, id: EntityId) -> Option<&Relationship> {
        self.relationships.get(&id)
    }

    /// The number of nodes in this graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of relationships in this graph.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Build a path starting at node `start` and following relationships `rels`, in order.
    ///
    /// Each relationship may be followed in either direction.
    pub fn path(&self, start: EntityId, rels: &[EntityId]) -> Result<Path<'_>, MemGraphError> {
        let first = self
            .nodes
            .get(&start)
            .ok_or(MemGraphError::UnknownNode(start))?;
        let mut path = Path::new(first);
        for rid in rels {
            let rel = self
                .relationships
                .get(rid)
                .ok_or(MemGraphError::UnknownRelationship(*rid))?;
            let current = path.end_node().id();
            let next = rel.other_node(current).ok_or(MemGraphError::Disconnected {
                rel: *rid,
                node: current,
            })?;
            let next = self
                .nodes
                .get(&next)
                .ok_or(MemGraphError::UnknownNode(next))?;
            path = path.then(rel, next);
        }
        Ok(path)
    }

    /// Lazily produce one row per node carrying `label` (or per node if `None`),
    /// with the node in column `column`.
    ///
    /// This is the equivalent of `MATCH (n:Label) RETURN n`.
    pub fn node_rows<'s>(
        &'s self,
        column: &'s str,
        label: Option<&'s str>,
    ) -> Box<dyn Iterator<Item = ResultRow<'s>> + 's> {
        let nodes: Box<dyn Iterator<Item = &'s Node> + 's> = match label {
            Some(label) => Box::new(self.labels.get(label).filter_map(move |id| self.nodes.get(&id))),
            None => Box::new(self.nodes.values()),
        };
        Box::new(nodes.map(move |n| ResultRow::new().with(column, n)))
    }

    /// Lazily produce one row per relationship of type `rel_type` (or per relationship if `None`),
    /// with columns `a` (start node), `r` (relationship) and `b` (end node).
    ///
    /// This is the equivalent of `MATCH (a)-[r:TYPE]->(b) RETURN a, r, b`.
    pub fn relationship_rows<'s>(
        &'s self,
        rel_type: Option<&'s str>,
    ) -> Box<dyn Iterator<Item = ResultRow<'s>> + 's> {
        let rels: Box<dyn Iterator<Item = &'s Relationship> + 's> = match rel_type {
            Some(t) => Box::new(self.types.get(t).filter_map(move |id| self.relationships.get(&id))),
            None => Box::new(self.relationships.values()),
        };
        Box::new(rels.filter_map(move |r| {
            let a = self.nodes.get(&r.start())?;
            let b = self.nodes.get(&r.end())?;
            Some(ResultRow::new().with("a", a).with("r", r).with("b", b))
        }))
    }
}

impl PropertyGraph for MemGraph {
    type Error = Infallible;

    fn node(&self, id: EntityId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    fn find_nodes<'s>(
        &'s self,
        label: &str,
        key: &str,
        value: &PropertyValue,
    ) -> Result<Box<dyn Iterator<Item = &'s Node> + 's>, Self::Error> {
        let ids: Vec<EntityId> = self.labels.get(label).collect();
        if ids.is_empty() {
            return Ok(Box::new(empty()));
        }
        let key = key.to_string();
        let value = value.clone();
        Ok(Box::new(ids.into_iter().filter_map(move |id| {
            let node = self.nodes.get(&id)?;
            node.property(&key)?.matches(&value).then_some(node)
        })))
    }

    fn relationships<'s>(&'s self, id: EntityId) -> Box<dyn Iterator<Item = &'s Relationship> + 's> {
        let Some(rids) = self.incidence.get(&id) else {
            return Box::new(empty());
        };
        Box::new(rids.iter().filter_map(move |rid| self.relationships.get(rid)))
    }

    fn labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        let mut labels: Vec<&str> = self.labels.keys().collect();
        labels.sort_unstable();
        Box::new(labels.into_iter())
    }

    fn relationship_types(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        let mut types: Vec<&str> = self.types.keys().collect();
        types.sort_unstable();
        Box::new(types.into_iter())
    }

    fn property_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        let keys: BTreeSet<&str> = self
            .nodes
            .values()
            .flat_map(|n| n.properties().keys())
            .chain(self.relationships.values().flat_map(|r| r.properties().keys()))
            .map(String::as_str)
            .collect();
        Box::new(keys.into_iter())
    }
}
