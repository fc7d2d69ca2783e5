//! This crate is part of [pgrdf],
//! a toolkit projecting labeled property graphs into RDF.
//!
//! It defines the two data models the projection bridges:
//! * on the RDF side, [terms](term::SimpleTerm), [namespaces](ns) and [statements](statement::Statement);
//! * on the property-graph side, [nodes](pg::Node), [relationships](pg::Relationship),
//!   [paths](pg::Path), query [result rows](pg::ResultRow),
//!   and the [`PropertyGraph`](pg::PropertyGraph) trait abstracting the query engine.
//!
//! [pgrdf]: https://docs.rs/pgrdf/latest/pgrdf/

#![deny(missing_docs)]

pub mod ns;
pub mod pg;
pub mod statement;
pub mod term;

pub use pgrdf_iri as iri;

/// Re-export of the most commonly used types.
pub mod prelude {
    pub use crate::ns::{rdf, rdfs, xsd, Namespace};
    pub use crate::pg::{
        EntityId, Node, Path, PathElement, PropertyBag, PropertyGraph, PropertyValue,
        Relationship, ResultRow, ResultValue,
    };
    pub use crate::statement::Statement;
    pub use crate::term::{BnodeId, Iri, IriRef, LanguageTag, SimpleTerm, TermKind};
}
