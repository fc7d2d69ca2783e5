//! A ready-made [`ExportPolicy`] for graphs that carry no RDF vocabulary.
//!
//! Nodes become individuals, named after their identifier;
//! labels, relationship types and property keys become schema terms,
//! named after themselves:
//!
//! ```text
//! (:Person {name: "Keanu"})-[:ACTED_IN]->(:Movie)
//! ```
//! becomes
//! ```text
//! <neo4j://graph.individuals#1> a <neo4j://graph.schema#Person> .
//! <neo4j://graph.individuals#1> <neo4j://graph.schema#name> "Keanu" .
//! <neo4j://graph.individuals#1> <neo4j://graph.schema#ACTED_IN> <neo4j://graph.individuals#2> .
//! <neo4j://graph.individuals#2> a <neo4j://graph.schema#Movie> .
//! ```
use crate::encoder::{ValueEncoder, ValueError};
use crate::policy::ExportPolicy;
use crate::state::VocabularyMap;
use pgrdf_api::iri::InvalidIri;
use pgrdf_api::ns::{owl, rdf, rdfs, Namespace};
use pgrdf_api::pg::{EntityId, Node, PropertyGraph, PropertyValue, Relationship};
use pgrdf_api::statement::Statement;
use pgrdf_api::term::SimpleTerm;
use std::collections::BTreeSet;
use std::convert::Infallible;
use thiserror::Error;

/// The default namespace of individuals (nodes).
pub const DEFAULT_INDIVIDUALS_BASE: &str = "neo4j://graph.individuals#";

/// The default namespace of schema terms (labels, relationship types, property keys).
pub const DEFAULT_SCHEMA_BASE: &str = "neo4j://graph.schema#";

/// The labels of the nodes holding the graph's own configuration,
/// which are excluded from the export by default.
pub const DEFAULT_EXCLUDED_LABELS: [&str; 5] = [
    "_GraphConfig",
    "_NsPrefDef",
    "_MapNs",
    "_MapDef",
    "_n10sValidatorConfig",
];

/// An [`ExportPolicy`] mapping every label, relationship type and property key
/// to a term of a single schema namespace.
#[derive(Clone, Debug)]
pub struct LpgPolicy {
    individuals: Namespace<String>,
    schema: Namespace<String>,
    excluded_labels: BTreeSet<String>,
    excluded_types: BTreeSet<String>,
}

impl LpgPolicy {
    /// Build a policy with the given namespaces, excluding no label nor relationship type.
    pub fn new(individuals_base: &str, schema_base: &str) -> Result<Self, InvalidIri> {
        Ok(LpgPolicy {
            individuals: Namespace::new(individuals_base.to_string())?,
            schema: Namespace::new(schema_base.to_string())?,
            excluded_labels: BTreeSet::new(),
            excluded_types: BTreeSet::new(),
        })
    }

    /// Transform this policy so that it skips the nodes carrying `label`.
    pub fn with_excluded_label<T: Into<String>>(mut self, label: T) -> Self {
        self.excluded_labels.insert(label.into());
        self
    }

    /// Transform this policy so that it skips the relationships of type `rel_type`.
    pub fn with_excluded_type<T: Into<String>>(mut self, rel_type: T) -> Self {
        self.excluded_types.insert(rel_type.into());
        self
    }

    /// The IRI of the node with identifier `id`.
    pub fn individual(&self, id: EntityId) -> SimpleTerm {
        self.individuals.get_unchecked(&id.to_string()).into()
    }

    /// The IRI of the label, relationship type or property key `name`.
    pub fn schema_term(&self, name: &str) -> Result<SimpleTerm, LpgError> {
        match self.schema.get(name) {
            Ok(term) => Ok(term.into()),
            Err(source) => Err(LpgError::SchemaIri {
                name: name.to_string(),
                source,
            }),
        }
    }

    /// Describe the vocabulary used in `graph`:
    /// labels are classes, relationship types are object properties,
    /// and property keys are datatype properties,
    /// each with its name as `rdfs:label`.
    pub fn implicit_ontology<G: PropertyGraph>(&self, graph: &G) -> Result<Vec<Statement>, LpgError> {
        let mut statements = vec![];
        let labels = graph
            .labels()
            .filter(|label| !self.excluded_labels.contains(*label));
        for label in labels {
            self.declare(&mut statements, label, owl::Class.into())?;
        }
        let types = graph
            .relationship_types()
            .filter(|t| !self.excluded_types.contains(*t));
        for rel_type in types {
            self.declare(&mut statements, rel_type, owl::ObjectProperty.into())?;
        }
        for key in graph.property_keys() {
            self.declare(&mut statements, key, owl::DatatypeProperty.into())?;
        }
        log::debug!("implicit ontology: {} statement(s)", statements.len());
        Ok(statements)
    }

    fn declare(&self, statements: &mut Vec<Statement>, name: &str, class: SimpleTerm) -> Result<(), LpgError> {
        let term = self.schema_term(name)?;
        statements.push(Statement::new(term.clone(), rdf::type_, class));
        statements.push(Statement::new(term, rdfs::label, name));
        Ok(())
    }

    fn resolve(&self, id: EntityId, vocabulary: &mut VocabularyMap) -> SimpleTerm {
        match vocabulary.resolve(id, |id| Ok::<_, Infallible>(self.individual(id))) {
            Ok(term) => term.clone(),
            Err(never) => match never {},
        }
    }
}

impl Default for LpgPolicy {
    fn default() -> Self {
        let individuals = Namespace::new_unchecked(DEFAULT_INDIVIDUALS_BASE.to_string());
        let schema = Namespace::new_unchecked(DEFAULT_SCHEMA_BASE.to_string());
        LpgPolicy {
            individuals,
            schema,
            excluded_labels: DEFAULT_EXCLUDED_LABELS.iter().map(|l| l.to_string()).collect(),
            excluded_types: BTreeSet::new(),
        }
    }
}

impl ExportPolicy for LpgPolicy {
    type Error = LpgError;

    fn skip_node(&self, node: &Node, vocabulary: &mut VocabularyMap) -> Result<bool, LpgError> {
        if node.labels().iter().any(|l| self.excluded_labels.contains(l)) {
            return Ok(true);
        }
        self.resolve(node.id(), vocabulary);
        Ok(false)
    }

    fn skip_relationship(&self, rel: &Relationship, _: &mut VocabularyMap) -> Result<bool, LpgError> {
        Ok(self.excluded_types.contains(rel.rel_type()))
    }

    fn serialize_node(
        &self,
        node: &Node,
        vocabulary: &mut VocabularyMap,
        encoder: &ValueEncoder,
        property_filter: Option<&str>,
    ) -> Result<Vec<Statement>, LpgError> {
        let subject = self.resolve(node.id(), vocabulary);
        let mut statements = vec![];
        for label in node.labels() {
            statements.push(Statement::new(subject.clone(), rdf::type_, self.schema_term(label)?));
        }
        for (key, value) in node.properties() {
            if property_filter.map_or(false, |only| only != key.as_str()) {
                continue;
            }
            let predicate = self.schema_term(key)?;
            for value in elements(value) {
                statements.push(Statement::new(
                    subject.clone(),
                    predicate.clone(),
                    encoder.encode(value)?,
                ));
            }
        }
        Ok(statements)
    }

    fn serialize_relationship(
        &self,
        rel: &Relationship,
        vocabulary: &mut VocabularyMap,
    ) -> Result<Statement, LpgError> {
        Ok(Statement::new(
            self.resolve(rel.start(), vocabulary),
            self.schema_term(rel.rel_type())?,
            self.resolve(rel.end(), vocabulary),
        ))
    }

    fn serialize_relationship_property(
        &self,
        base: &Statement,
        key: &str,
        value: &PropertyValue,
        encoder: &ValueEncoder,
    ) -> Result<Vec<Statement>, LpgError> {
        let subject = base.to_quoted_triple();
        let predicate = self.schema_term(key)?;
        elements(value)
            .map(|v| -> Result<Statement, LpgError> {
                Ok(Statement::new(subject.clone(), predicate.clone(), encoder.encode(v)?))
            })
            .collect()
    }
}

/// The elements of an array value, or the value itself.
fn elements(value: &PropertyValue) -> std::slice::Iter<'_, PropertyValue> {
    match value {
        PropertyValue::Array(values) => values.iter(),
        _ => std::slice::from_ref(value).iter(),
    }
}

/// This error is raised by [`LpgPolicy`].
#[derive(Debug, Error)]
pub enum LpgError {
    /// A label, relationship type or property key does not make a valid IRI.
    #[error("Can not build a schema IRI for {name:?}: {source}")]
    SchemaIri {
        /// The offending name
        name: String,
        /// The underlying error
        source: InvalidIri,
    },
    /// A property value can not be encoded.
    #[error(transparent)]
    Value(#[from] ValueError),
}
