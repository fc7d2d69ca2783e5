use super::PropertyValue;
use std::collections::BTreeMap;

/// Identifier of a node or relationship,
/// unique within one graph for the lifetime of the entity.
pub type EntityId = u64;

/// The properties of a node or relationship, by key.
pub type PropertyBag = BTreeMap<String, PropertyValue>;

/// A node of a property graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: EntityId,
    labels: Vec<String>,
    properties: PropertyBag,
}

impl Node {
    /// Build a node with no label and no property.
    pub fn new(id: EntityId) -> Self {
        Node {
            id,
            labels: vec![],
            properties: PropertyBag::new(),
        }
    }

    /// Add a label to this node (labels are kept unique, in insertion order).
    pub fn with_label<L: Into<String>>(mut self, label: L) -> Self {
        let label = label.into();
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
        self
    }

    /// Set a property of this node.
    pub fn with_property<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// The identifier of this node.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The labels of this node.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether this node carries `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// All the properties of this node.
    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// The value of property `key`, if any.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

/// A typed, directed relationship between two nodes of a property graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Relationship {
    id: EntityId,
    rel_type: String,
    start: EntityId,
    end: EntityId,
    properties: PropertyBag,
}

impl Relationship {
    /// Build a relationship of type `rel_type` from `start` to `end`, with no property.
    pub fn new<T: Into<String>>(id: EntityId, rel_type: T, start: EntityId, end: EntityId) -> Self {
        Relationship {
            id,
            rel_type: rel_type.into(),
            start,
            end,
            properties: PropertyBag::new(),
        }
    }

    /// Set a property of this relationship.
    pub fn with_property<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// The identifier of this relationship.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The type of this relationship.
    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    /// The identifier of the start node.
    pub fn start(&self) -> EntityId {
        self.start
    }

    /// The identifier of the end node.
    pub fn end(&self) -> EntityId {
        self.end
    }

    /// Given one end of this relationship, return the other one.
    ///
    /// Returns `None` if `node` is not an end of this relationship.
    pub fn other_node(&self, node: EntityId) -> Option<EntityId> {
        if node == self.start {
            Some(self.end)
        } else if node == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// All the properties of this relationship.
    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// The value of property `key`, if any.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}
