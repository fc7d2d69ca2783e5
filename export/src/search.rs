//! Exporting the nodes found by an exact-match lookup.
use crate::config::ExportConfig;
use crate::encoder::{ParseError, ValueError};
use crate::error::SearchError;
use crate::policy::ExportPolicy;
use crate::projection::{serialize_relationship, RowStatements};
use crate::state::ExportState;
use pgrdf_api::pg::{PropertyGraph, PropertyValue};
use pgrdf_api::statement::Statement;

/// The type a searched value is coerced to before the lookup.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ValueType {
    /// A 32-bit integer (tag `INTEGER`)
    Integer,
    /// A float (tag `FLOAT`)
    Float,
    /// A boolean (tag `BOOLEAN`)
    Boolean,
    /// A string (any other tag)
    #[default]
    String,
}

impl ValueType {
    /// Parse a value type tag.
    ///
    /// Tags are case-sensitive; unknown tags, and the absence of a tag, mean [`ValueType::String`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("INTEGER") => ValueType::Integer,
            Some("FLOAT") => ValueType::Float,
            Some("BOOLEAN") => ValueType::Boolean,
            _ => ValueType::String,
        }
    }

    /// The tag of this value type.
    pub fn tag(&self) -> &'static str {
        match self {
            ValueType::Integer => "INTEGER",
            ValueType::Float => "FLOAT",
            ValueType::Boolean => "BOOLEAN",
            ValueType::String => "STRING",
        }
    }

    /// Coerce the textual form `txt` to this type.
    ///
    /// Booleans are `true` if `txt` is `"true"` (ignoring case), `false` otherwise.
    ///
    /// # Errors
    /// Malformed integers and floats are reported as [`ValueError::Coercion`].
    pub fn coerce(&self, txt: &str) -> Result<PropertyValue, ValueError> {
        let coercion = |source: ParseError| ValueError::Coercion {
            value: txt.to_string(),
            value_type: self.tag(),
            source,
        };
        Ok(match self {
            ValueType::Integer => PropertyValue::Int(txt.parse().map_err(|e| coercion(ParseError::Int(e)))?),
            ValueType::Float => PropertyValue::Double(txt.parse().map_err(|e| coercion(ParseError::Float(e)))?),
            ValueType::Boolean => PropertyValue::Boolean(txt.eq_ignore_ascii_case("true")),
            ValueType::String => PropertyValue::from(txt),
        })
    }
}

/// An exact-match node lookup, whose results are exported with an [`ExportPolicy`].
///
/// ```
/// use pgrdf_api::pg::Node;
/// use pgrdf_export::{lpg::LpgPolicy, ExportConfig, NodeSearch, ValueType};
/// use pgrdf_inmem::MemGraph;
///
/// let mut graph = MemGraph::new();
/// graph.insert_node(Node::new(1).with_label("Person").with_property("born", 1941))?;
/// graph.insert_node(Node::new(2).with_label("Person").with_property("born", "1941"))?;
///
/// let statements = NodeSearch::new("Person", "born", "1941")
///     .with_value_type(ValueType::Integer)
///     .run(&graph, LpgPolicy::default(), &ExportConfig::new())?;
/// // only node 1: its type and its birth year
/// assert_eq!(statements.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct NodeSearch<'a> {
    label: &'a str,
    property: &'a str,
    value: &'a str,
    value_type: ValueType,
    include_context: bool,
}

impl<'a> NodeSearch<'a> {
    /// Search the nodes with `label` whose `property` equals `value` (as a string).
    pub fn new(label: &'a str, property: &'a str, value: &'a str) -> Self {
        NodeSearch {
            label,
            property,
            value,
            value_type: ValueType::String,
            include_context: false,
        }
    }

    /// Coerce the searched value to `value_type` before the lookup.
    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Also export the relationships incident to the found nodes (in both directions).
    pub fn with_context(mut self, include_context: bool) -> Self {
        self.include_context = include_context;
        self
    }

    /// Run this search against `graph`, and export the result with `policy`.
    ///
    /// Skip predicates are not consulted: the lookup selects the nodes explicitly.
    /// Each node is serialized once; incident relationships are serialized
    /// (with their properties if [reified](ExportConfig::reify_relationship_properties)),
    /// but not the nodes at their other end.
    pub fn run<G, P>(
        &self,
        graph: &G,
        policy: P,
        config: &ExportConfig,
    ) -> Result<Vec<Statement>, SearchError<G::Error, P::Error>>
    where
        G: PropertyGraph,
        P: ExportPolicy,
    {
        let value = self.value_type.coerce(self.value)?;
        let encoder = config.encoder()?;
        let reify = config.reify_relationship_properties();
        let mut state = ExportState::new();
        let mut out = RowStatements::default();
        let nodes = graph
            .find_nodes(self.label, self.property, &value)
            .map_err(SearchError::Graph)?;
        for node in nodes {
            if !state.serialized.insert(node.id()) {
                continue;
            }
            log::debug!("search {}.{}: found node {}", self.label, self.property, node.id());
            out.extend(
                policy
                    .serialize_node(node, &mut state.vocabulary, &encoder, None)
                    .map_err(SearchError::Policy)?,
            );
            if self.include_context {
                for rel in graph.relationships(node.id()) {
                    serialize_relationship(&policy, &encoder, reify, &mut state, rel, &mut out)
                        .map_err(SearchError::Policy)?;
                }
            }
        }
        Ok(out.into_vec())
    }
}

/// Export the nodes with `label` whose `property` equals `value`,
/// coerced according to the `value_type` tag (see [`ValueType::from_tag`]).
///
/// This is a shortcut for [`NodeSearch::run`].
#[allow(clippy::too_many_arguments)]
pub fn export_by_search<G, P>(
    graph: &G,
    policy: P,
    config: &ExportConfig,
    label: &str,
    property: &str,
    value: &str,
    value_type: Option<&str>,
    include_context: bool,
) -> Result<Vec<Statement>, SearchError<G::Error, P::Error>>
where
    G: PropertyGraph,
    P: ExportPolicy,
{
    NodeSearch::new(label, property, value)
        .with_value_type(ValueType::from_tag(value_type))
        .with_context(include_context)
        .run(graph, policy, config)
}
