//! Build a small movie graph in memory, export it as RDF,
//! and serialize it on the standard output in the format specified in the first argument.
//!
//! Recognized formats are:
//! - [`ntriples`](https://www.w3.org/TR/n-triples/) (alias `nt`)
//! - [`nquads`](https://www.w3.org/TR/n-quads/) (alias `nq`)
//!
//! The environment variable `PGRDF_REIFY` (`true` or `false`, default `false`)
//! controls whether relationship properties are exported.
//! Set `RUST_LOG=debug` to see what happens row by row.

use std::io::{stdout, BufWriter};

use pgrdf::api::pg::{Node, Relationship};
use pgrdf::export::{lpg::LpgPolicy, project_rows, ExportConfig};
use pgrdf::inmem::{MemGraph, MemGraphError};
use pgrdf::turtle::serializer::{
    nq::NqSerializer, nt::NtSerializer, StatementSerializer, StreamError::*,
};

fn main() {
    env_logger::init();
    let reify: bool = std::env::var("PGRDF_REIFY")
        .unwrap_or_else(|_| "false".into())
        .parse()
        .unwrap();
    let format = std::env::args().nth(1).unwrap_or_else(|| "nt".to_string());

    let graph = movies().unwrap();
    let policy = LpgPolicy::default();
    let config = ExportConfig::new().with_reify_relationship_properties(reify);
    let rows = graph
        .node_rows("n", Some("Person"))
        .chain(graph.relationship_rows(Some("ACTED_IN")));
    let statements = match project_rows(&policy, &config, rows) {
        Ok(statements) => statements,
        Err(msg) => {
            eprintln!("Invalid configuration: {msg}");
            std::process::exit(2);
        }
    };

    let out = BufWriter::new(stdout());
    let res = match &format[..] {
        "ntriples" | "nt" => NtSerializer::new(out).serialize_statements(statements).map(|s| s.count()),
        "nquads" | "nq" => NqSerializer::new(out).serialize_statements(statements).map(|s| s.count()),
        _ => {
            eprintln!("Unrecognized format: {format}");
            std::process::exit(-1);
        }
    };
    match res {
        Ok(count) => log::info!("{count} statement(s) written"),
        Err(SourceError(msg)) => {
            eprintln!("Could not export the graph:\n{msg}");
            std::process::exit(1);
        }
        Err(SinkError(msg)) => {
            eprintln!("Could not serialize the graph:\n{msg}");
            std::process::exit(1);
        }
    }
}

fn movies() -> Result<MemGraph, MemGraphError> {
    let mut g = MemGraph::new();
    g.insert_node(
        Node::new(1)
            .with_label("Person")
            .with_property("name", "Keanu Reeves@en")
            .with_property("born", 1964),
    )?;
    g.insert_node(
        Node::new(2)
            .with_label("Person")
            .with_property("name", "Carrie-Anne Moss")
            .with_property("born", 1967),
    )?;
    g.insert_node(
        Node::new(3)
            .with_label("Movie")
            .with_property("title", "The Matrix")
            .with_property("rating", "5^^http://example.org/stars"),
    )?;
    g.insert_relationship(Relationship::new(10, "ACTED_IN", 1, 3).with_property("roles", vec!["Neo"]))?;
    g.insert_relationship(Relationship::new(11, "ACTED_IN", 2, 3).with_property("roles", vec!["Trinity"]))?;
    Ok(g)
}
