//! This crate is part of [pgrdf],
//! a toolkit projecting labeled property graphs into RDF.
//!
//! It provides serializers writing streams of [statements]
//! in the [N-Triples] and [N-Quads] syntaxes.
//!
//! [pgrdf]: https://docs.rs/pgrdf/latest/pgrdf/
//! [statements]: pgrdf_api::statement::Statement
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [N-Quads]: https://www.w3.org/TR/n-quads/
#![deny(missing_docs)]

pub mod serializer;
