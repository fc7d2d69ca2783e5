//! This crate is part of [pgrdf],
//! a toolkit projecting labeled property graphs into RDF.
//!
//! It provides [`MemGraph`], an in-memory implementation of
//! [`PropertyGraph`](pgrdf_api::pg::PropertyGraph),
//! together with a few canned queries producing [result rows](pgrdf_api::pg::ResultRow).
//!
//! [pgrdf]: https://docs.rs/pgrdf/latest/pgrdf/

pub mod graph;
pub use graph::*;
pub mod index;
