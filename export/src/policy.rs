//! The extension points of the projection.
use crate::encoder::ValueEncoder;
use crate::state::VocabularyMap;
use pgrdf_api::pg::{Node, PropertyValue, Relationship};
use pgrdf_api::statement::Statement;
use std::error::Error;

/// Decides which graph entities are exported, and which statements describe them.
///
/// The projection engine knows nothing about vocabularies:
/// it walks the rows, deduplicates nodes,
/// and delegates every other decision to an `ExportPolicy`.
///
/// The skip predicates receive the [`VocabularyMap`] of the current call,
/// which they may populate with the terms they resolve along the way;
/// this is the only side effect the engine expects from them.
///
/// Errors raised by any of these methods are propagated unchanged to the consumer
/// (wrapped in [`ProjectionError::PolicyError`](crate::ProjectionError::PolicyError)).
pub trait ExportPolicy {
    /// The error raised by this policy.
    type Error: Error + 'static;

    /// Should `node` be left out of the export?
    fn skip_node(&self, node: &Node, vocabulary: &mut VocabularyMap) -> Result<bool, Self::Error>;

    /// Should `rel` be left out of the export?
    fn skip_relationship(
        &self,
        rel: &Relationship,
        vocabulary: &mut VocabularyMap,
    ) -> Result<bool, Self::Error>;

    /// The statements describing `node`.
    ///
    /// If `property_filter` is provided, only the property with that key is exported.
    fn serialize_node(
        &self,
        node: &Node,
        vocabulary: &mut VocabularyMap,
        encoder: &ValueEncoder,
        property_filter: Option<&str>,
    ) -> Result<Vec<Statement>, Self::Error>;

    /// The statement linking the start and end nodes of `rel`.
    fn serialize_relationship(
        &self,
        rel: &Relationship,
        vocabulary: &mut VocabularyMap,
    ) -> Result<Statement, Self::Error>;

    /// The statements attaching the property `key` of a relationship to its `base` statement.
    ///
    /// Only called when relationship properties are reified.
    /// The default implementation exports nothing.
    fn serialize_relationship_property(
        &self,
        base: &Statement,
        key: &str,
        value: &PropertyValue,
        encoder: &ValueEncoder,
    ) -> Result<Vec<Statement>, Self::Error> {
        let _ = (base, key, value, encoder);
        Ok(vec![])
    }
}

impl<'a, P: ExportPolicy + ?Sized> ExportPolicy for &'a P {
    type Error = P::Error;

    fn skip_node(&self, node: &Node, vocabulary: &mut VocabularyMap) -> Result<bool, Self::Error> {
        (**self).skip_node(node, vocabulary)
    }

    fn skip_relationship(
        &self,
        rel: &Relationship,
        vocabulary: &mut VocabularyMap,
    ) -> Result<bool, Self::Error> {
        (**self).skip_relationship(rel, vocabulary)
    }

    fn serialize_node(
        &self,
        node: &Node,
        vocabulary: &mut VocabularyMap,
        encoder: &ValueEncoder,
        property_filter: Option<&str>,
    ) -> Result<Vec<Statement>, Self::Error> {
        (**self).serialize_node(node, vocabulary, encoder, property_filter)
    }

    fn serialize_relationship(
        &self,
        rel: &Relationship,
        vocabulary: &mut VocabularyMap,
    ) -> Result<Statement, Self::Error> {
        (**self).serialize_relationship(rel, vocabulary)
    }

    fn serialize_relationship_property(
        &self,
        base: &Statement,
        key: &str,
        value: &PropertyValue,
        encoder: &ValueEncoder,
    ) -> Result<Vec<Statement>, Self::Error> {
        (**self).serialize_relationship_property(base, key, value, encoder)
    }
}
