//! This crate aims to provide a toolkit
//! for publishing [labeled property graphs] as [RDF].
//!
//! A property graph is made of *nodes* and *relationships*,
//! both carrying a set of key-value *properties*;
//! nodes also carry *labels*, and relationships a *type*.
//! Querying such a graph yields *rows*,
//! whose columns may contain nodes, relationships, paths,
//! lists thereof, or plain values.
//!
//! This crate turns such rows into a lazy stream of RDF statements,
//! following an *export policy* that decides
//! which entities are exported and what they look like.
//! Every node is exported at most once per projection,
//! and property values are turned into literals
//! according to a few string conventions (`"value@lang"`, `"value^^datatype"`).
//!
//! It is organized in several sub-crates, re-exported here:
//! - [`api`]: terms, statements and the property graph data model,
//! - [`iri`]: IRI validation,
//! - [`export`]: the projection engine, and the [`LpgPolicy`](export::lpg::LpgPolicy),
//! - [`inmem`]: an in-memory property graph,
//! - [`turtle`]: N-Triples and N-Quads serializers.
//!
//! # Getting Started
//!
//! ```
//! use pgrdf::api::pg::{Node, Relationship};
//! use pgrdf::export::{lpg::LpgPolicy, project_rows, ExportConfig};
//! use pgrdf::inmem::MemGraph;
//! use pgrdf::turtle::serializer::{nt::NtSerializer, StatementSerializer, Stringifier};
//!
//! let mut graph = MemGraph::new();
//! graph.insert_node(Node::new(1).with_label("Person").with_property("name", "Alice"))?;
//! graph.insert_node(Node::new(2).with_label("Person").with_property("name", "Bob"))?;
//! graph.insert_relationship(Relationship::new(3, "KNOWS", 1, 2))?;
//!
//! let policy = LpgPolicy::default();
//! let statements = project_rows(&policy, &ExportConfig::new(), graph.relationship_rows(None))?;
//! let mut nt = NtSerializer::new_stringifier();
//! nt.serialize_statements(statements)?;
//! println!("{}", nt.as_str());
//! assert_eq!(nt.count(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [labeled property graphs]: https://en.wikipedia.org/wiki/Property_graph
//! [RDF]: https://www.w3.org/TR/rdf11-primer/

pub use pgrdf_api as api;
pub use pgrdf_export as export;
pub use pgrdf_inmem as inmem;
pub use pgrdf_iri as iri;
pub use pgrdf_turtle as turtle;
