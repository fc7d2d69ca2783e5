//! The labeled property graph data model.
//!
//! A property graph is made of [nodes](Node) carrying labels,
//! and typed [relationships](Relationship) between them;
//! both carry [properties](PropertyBag).
//! Queries over such a graph produce [rows](ResultRow) of heterogeneous [values](ResultValue):
//! entities, [paths](Path), collections and plain scalars.
//!
//! The query engine itself is abstracted by the [`PropertyGraph`] trait.

mod _entity;
pub use _entity::*;
mod _graph;
pub use _graph::*;
mod _path;
pub use _path::*;
mod _row;
pub use _row::*;
mod _value;
pub use _value::*;
