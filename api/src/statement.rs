//! An RDF statement expresses a single fact.
//! It is formed of three terms called *subject*, *predicate* and *object*,
//! and may be scoped to a *named graph*.
//!
//! Examples :
//!
//! * Keanu is a Person.
//! * Keanu was born in 1964.
//! * Keanu acted in The Matrix.
use crate::term::SimpleTerm;
use std::fmt;

/// An RDF triple, optionally scoped to a named graph.
///
/// Statements are emitted by the projection and never mutated afterwards.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Statement {
    spo: [SimpleTerm; 3],
    graph: Option<SimpleTerm>,
}

impl Statement {
    /// Build a statement in the default graph.
    pub fn new<S, P, O>(s: S, p: P, o: O) -> Self
    where
        S: Into<SimpleTerm>,
        P: Into<SimpleTerm>,
        O: Into<SimpleTerm>,
    {
        Statement {
            spo: [s.into(), p.into(), o.into()],
            graph: None,
        }
    }

    /// Scope this statement to the named graph `g`.
    pub fn in_graph<G: Into<SimpleTerm>>(mut self, g: G) -> Self {
        self.graph = Some(g.into());
        self
    }

    /// The subject of this statement.
    pub fn s(&self) -> &SimpleTerm {
        &self.spo[0]
    }

    /// The predicate of this statement.
    pub fn p(&self) -> &SimpleTerm {
        &self.spo[1]
    }

    /// The object of this statement.
    pub fn o(&self) -> &SimpleTerm {
        &self.spo[2]
    }

    /// The named graph of this statement, if any.
    pub fn g(&self) -> Option<&SimpleTerm> {
        self.graph.as_ref()
    }

    /// The statement as an RDF-star quoted triple,
    /// suitable as the subject of further statements about it.
    ///
    /// The graph name, if any, is not part of the quoted triple.
    pub fn to_quoted_triple(&self) -> SimpleTerm {
        SimpleTerm::new_quoted_triple(self.spo.clone())
    }

    /// Split this statement into its triple and graph name.
    pub fn into_parts(self) -> ([SimpleTerm; 3], Option<SimpleTerm>) {
        (self.spo, self.graph)
    }
}

impl From<[SimpleTerm; 3]> for Statement {
    fn from(spo: [SimpleTerm; 3]) -> Self {
        Statement { spo, graph: None }
    }
}

/// Statements display in the [N-Quads](https://www.w3.org/TR/n-quads/) syntax
/// (which is [N-Triples](https://www.w3.org/TR/n-triples/) for statements in the default graph).
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.s(), self.p(), self.o())?;
        if let Some(g) = &self.graph {
            write!(f, " {g}")?;
        }
        f.write_str(" .")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::{rdf, xsd};
    use crate::term::Iri;

    fn keanu() -> SimpleTerm {
        Iri::new_unchecked("neo4j://graph.individuals#1").into()
    }

    #[test]
    fn accessors() {
        let st = Statement::new(keanu(), rdf::type_, rdf::Property);
        assert_eq!(st.s(), &keanu());
        assert!(rdf::type_ == *st.p());
        assert!(rdf::Property == *st.o());
        assert!(st.g().is_none());
    }

    #[test]
    fn display_triple() {
        let st = Statement::new(keanu(), rdf::value, "1964" * xsd::long);
        assert_eq!(
            st.to_string(),
            "<neo4j://graph.individuals#1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#value> \"1964\"^^<http://www.w3.org/2001/XMLSchema#long> ."
        );
    }

    #[test]
    fn display_quad() {
        let g: SimpleTerm = Iri::new_unchecked("http://example.org/g").into();
        let st = Statement::new(keanu(), rdf::value, "x").in_graph(g.clone());
        assert_eq!(st.g(), Some(&g));
        assert!(st.to_string().ends_with("\"x\" <http://example.org/g> ."));
    }

    #[test]
    fn quoted_triple_ignores_graph() {
        let g: SimpleTerm = Iri::new_unchecked("http://example.org/g").into();
        let st = Statement::new(keanu(), rdf::value, "x").in_graph(g);
        let quoted = st.to_quoted_triple();
        assert_eq!(quoted.triple().unwrap(), &[keanu(), rdf::value.into(), "x".into()]);
    }
}
