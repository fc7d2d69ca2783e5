//! Per-call mutable state of the projection.
//!
//! A fresh [`ExportState`] is created by every export call and dropped with it;
//! nothing here is shared between calls.
use pgrdf_api::pg::EntityId;
use pgrdf_api::term::SimpleTerm;
use std::collections::{HashMap, HashSet};

/// Memoizes the RDF term resolved for graph entities during one export call.
///
/// It is populated lazily by [export policies](crate::ExportPolicy),
/// typically from their skip predicates.
#[derive(Clone, Debug, Default)]
pub struct VocabularyMap {
    map: HashMap<EntityId, SimpleTerm>,
}

impl VocabularyMap {
    /// Build an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The term previously resolved for `id`, if any.
    pub fn get(&self, id: EntityId) -> Option<&SimpleTerm> {
        self.map.get(&id)
    }

    /// Record the term resolved for `id`, returning the term previously recorded, if any.
    pub fn insert(&mut self, id: EntityId, term: SimpleTerm) -> Option<SimpleTerm> {
        self.map.insert(id, term)
    }

    /// The term resolved for `id`, resolving it with `resolve` on first access.
    pub fn resolve<F, E>(&mut self, id: EntityId, resolve: F) -> Result<&SimpleTerm, E>
    where
        F: FnOnce(EntityId) -> Result<SimpleTerm, E>,
    {
        use std::collections::hash_map::Entry;
        match self.map.entry(id) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => Ok(e.insert(resolve(id)?)),
        }
    }

    /// Whether a term was resolved for `id`.
    pub fn contains(&self, id: EntityId) -> bool {
        self.map.contains_key(&id)
    }

    /// The number of resolved entities.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no entity was resolved.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The set of nodes already serialized during one export call.
#[derive(Clone, Debug, Default)]
pub struct SerializedNodes {
    ids: HashSet<EntityId>,
}

impl SerializedNodes {
    /// Build an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as serialized.
    ///
    /// Return `false` if it already was.
    pub fn insert(&mut self, id: EntityId) -> bool {
        self.ids.insert(id)
    }

    /// Unmark `id`, so that it is serialized again on its next occurrence.
    ///
    /// Return `false` if it was not marked.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.ids.remove(&id)
    }

    /// Whether `id` was already serialized.
    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    /// The number of serialized nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no node was serialized yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The state threaded through one export call.
#[derive(Clone, Debug, Default)]
pub struct ExportState {
    /// Terms resolved for graph entities
    pub vocabulary: VocabularyMap,
    /// Nodes already serialized
    pub serialized: SerializedNodes,
}

impl ExportState {
    /// Build a fresh state.
    pub fn new() -> Self {
        Self::default()
    }
}
