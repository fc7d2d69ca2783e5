//! Standard and custom namespaces.
//!
//! This module provides:
//! * the [`Namespace`](struct.Namespace.html) type for defining custom dynamic namespace;
//! * the [`namespace`] macro, for defning custom static namespaces;
//! * modules corresponding to the namespaces used when projecting property graphs
//!   (generated via the [`namespace`] macro).
//!
//! # Example use
//! ```
//! use pgrdf_api::ns::{Namespace, rdf, xsd};
//! use pgrdf_api::term::SimpleTerm;
//!
//! let schema = Namespace::new("neo4j://graph.schema#").unwrap();
//! let person: SimpleTerm = schema.get("Person").unwrap().into();
//! assert!(person.is_iri());
//!
//! // strings multiplied by a datatype produce typed literals
//! let born = "1964" * xsd::int;
//! assert_eq!(born.lexical_form().unwrap(), "1964");
//! assert!(rdf::type_ == "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! ```
use pgrdf_iri::InvalidIri;
use std::borrow::Borrow;
use std::fmt;

// rexport is necessary to ensure that the macros work.
pub use pgrdf_iri::IriRef;

#[macro_use]
mod _macro;
pub use _macro::*;
mod _namespace;
pub use _namespace::*;
mod _term;
pub use _term::*;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
///
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        List,
        Property,
        Statement,
        // datatypes
        langString,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        date,
        dateTime,
        decimal,
        double,
        float,
        int,
        integer,
        long,
        string,
        time
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        Class,
        Datatype,
        Literal,
        Resource,
        comment,
        domain,
        label,
        range,
        subClassOf,
        subPropertyOf
    );
}

/// The standard `owl:` namespace.
pub mod owl {
    namespace!(
        "http://www.w3.org/2002/07/owl#",
        Class,
        DatatypeProperty,
        ObjectProperty,
        Ontology,
        Thing
    );
}
