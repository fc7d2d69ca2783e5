//! This crate is part of [pgrdf],
//! a toolkit projecting labeled property graphs into RDF.
//!
//! It is the projection engine proper:
//! it walks the rows of a query result
//! (mixing [nodes], [relationships], [paths] and lists thereof),
//! and lazily turns them into a stream of RDF [statements],
//! serializing every node at most once per call.
//!
//! What the statements look like is decided by an [`ExportPolicy`],
//! supplied by the caller; [`LpgPolicy`](lpg::LpgPolicy) is a ready-made one.
//! Property values are turned into RDF literals by the [`ValueEncoder`],
//! which understands the `value@lang` and `value^^datatype` string conventions.
//!
//! ```
//! use pgrdf_api::pg::{Node, Relationship, ResultRow};
//! use pgrdf_export::{lpg::LpgPolicy, project_rows, ExportConfig};
//!
//! let keanu = Node::new(1).with_label("Person").with_property("name", "Keanu Reeves@en");
//! let matrix = Node::new(2).with_label("Movie").with_property("title", "The Matrix");
//! let acted_in = Relationship::new(3, "ACTED_IN", 1, 2);
//! let rows = vec![
//!     ResultRow::new().with("a", &keanu).with("r", &acted_in).with("b", &matrix),
//!     ResultRow::new().with("a", &keanu),
//! ];
//!
//! let policy = LpgPolicy::default();
//! let config = ExportConfig::new();
//! let statements = project_rows(&policy, &config, rows)?.collect::<Result<Vec<_>, _>>()?;
//! // 2 types, 2 properties, 1 relationship; the second row adds nothing
//! assert_eq!(statements.len(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [pgrdf]: https://docs.rs/pgrdf/latest/pgrdf/
//! [nodes]: pgrdf_api::pg::Node
//! [relationships]: pgrdf_api::pg::Relationship
//! [paths]: pgrdf_api::pg::Path
//! [statements]: pgrdf_api::statement::Statement

pub mod classifier;
pub mod config;
pub use config::*;
pub mod encoder;
pub use encoder::*;
pub mod error;
pub use error::*;
pub mod lpg;
pub mod policy;
pub use policy::*;
pub mod projection;
pub use projection::*;
pub mod search;
pub use search::*;
pub mod state;
pub use state::*;

#[cfg(test)]
mod test;
