use super::{EntityId, Node, PropertyValue, Relationship};
use std::error::Error;

/// The query-engine side of the projection:
/// read access to a labeled property graph.
///
/// Implementors only need to provide exact-match lookups and neighbourhood access;
/// executing arbitrary queries is out of the scope of this trait,
/// their results are passed to the projection as [rows](super::ResultRow).
pub trait PropertyGraph {
    /// The error raised when this graph fails to answer a lookup.
    type Error: Error + 'static;

    /// Get the node with identifier `id`, if it exists.
    fn node(&self, id: EntityId) -> Option<&Node>;

    /// Iterate over the nodes carrying `label`
    /// whose property `key` [matches](PropertyValue::matches) `value` exactly.
    fn find_nodes<'s>(
        &'s self,
        label: &str,
        key: &str,
        value: &PropertyValue,
    ) -> Result<Box<dyn Iterator<Item = &'s Node> + 's>, Self::Error>;

    /// Iterate over the relationships incident to node `id`, in both directions.
    ///
    /// A self-loop is yielded once.
    fn relationships<'s>(&'s self, id: EntityId) -> Box<dyn Iterator<Item = &'s Relationship> + 's>;

    /// Iterate over the distinct node labels used in this graph.
    fn labels(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Iterate over the distinct relationship types used in this graph.
    fn relationship_types(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Iterate over the distinct property keys used in this graph,
    /// on nodes and relationships.
    fn property_keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}
