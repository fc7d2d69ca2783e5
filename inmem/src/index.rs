//! Secondary indexes of a [`MemGraph`](crate::MemGraph).
use pgrdf_api::pg::EntityId;
use std::collections::{BTreeSet, HashMap};

/// An association of string keys (labels, relationship types...)
/// with sets of entity identifiers.
///
/// Identifiers are kept sorted, so that lookups are deterministic.
#[derive(Clone, Debug, Default)]
pub struct KeyIndex {
    map: HashMap<String, BTreeSet<EntityId>>,
}

impl KeyIndex {
    /// Build an empty index.
    pub fn new() -> Self {
        KeyIndex::default()
    }

    /// Associate `id` to `key`.
    pub fn insert(&mut self, key: &str, id: EntityId) {
        match self.map.get_mut(key) {
            Some(ids) => {
                ids.insert(id);
            }
            None => {
                self.map.insert(key.to_string(), BTreeSet::from([id]));
            }
        }
    }

    /// Iterate over the identifiers associated to `key`.
    pub fn get(&self, key: &str) -> impl Iterator<Item = EntityId> + '_ {
        self.map.get(key).into_iter().flatten().copied()
    }

    /// Iterate over the keys of this index, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    /// The number of keys in this index.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether this index has no key.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut idx = KeyIndex::new();
        idx.insert("Person", 3);
        idx.insert("Person", 1);
        idx.insert("Person", 3);
        idx.insert("Movie", 2);
        assert_eq!(idx.get("Person").collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(idx.get("Nope").count(), 0);
        assert_eq!(idx.len(), 2);
    }
}
