//! The RDF term model.
//!
//! Terms are the building blocks of [statements](crate::statement::Statement).
//! This module provides [`SimpleTerm`], a closed enum covering every kind of term
//! the projection may emit, together with the validated wrappers it is made of:
//! [`IriRef`], [`BnodeId`] and [`LanguageTag`].
use crate::ns::{rdf, xsd, NsTerm};
use std::borrow::Borrow;
use std::fmt;

pub mod bnode_id;
pub use bnode_id::*;
pub mod language_tag;
pub use language_tag::*;

pub use pgrdf_iri::{Iri, IriRef};

lazy_static::lazy_static! {
    static ref RDF_LANG_STRING: Box<str> = rdf::langString.to_string().into();
}

/// The different kinds of [`SimpleTerm`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF-star [quoted triple](https://www.w3.org/2021/12/rdf-star.html#dfn-quoted)
    Triple,
}

/// A straightforward implementation of RDF terms as an enum.
///
/// Every variant owns its data, so that terms can outlive
/// the graph entities they were projected from.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SimpleTerm {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(IriRef<String>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(BnodeId<String>),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    LiteralDatatype(String, IriRef<String>),
    /// An RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
    LiteralLanguage(String, LanguageTag<String>),
    /// An RDF-star [quoted triple](https://www.w3.org/2021/12/rdf-star.html#dfn-quoted)
    Triple(Box<[SimpleTerm; 3]>),
}


impl SimpleTerm {
    /// Build a datatyped literal.
    pub fn new_literal_dt<L, T>(lex: L, datatype: IriRef<T>) -> Self
    where
        L: Into<String>,
        T: Borrow<str>,
    {
        SimpleTerm::LiteralDatatype(lex.into(), datatype.map_unchecked(|t| t.borrow().to_string()))
    }

    /// Build a language-tagged literal.
    pub fn new_literal_lang<L, T>(lex: L, tag: LanguageTag<T>) -> Self
    where
        L: Into<String>,
        T: Borrow<str>,
    {
        SimpleTerm::LiteralLanguage(lex.into(), tag.map_unchecked(|t| t.borrow().to_string()))
    }

    /// Build a quoted triple.
    pub fn new_quoted_triple(spo: [SimpleTerm; 3]) -> Self {
        SimpleTerm::Triple(Box::new(spo))
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            SimpleTerm::Iri(_) => TermKind::Iri,
            SimpleTerm::BlankNode(_) => TermKind::BlankNode,
            SimpleTerm::LiteralDatatype(..) | SimpleTerm::LiteralLanguage(..) => TermKind::Literal,
            SimpleTerm::Triple(_) => TermKind::Triple,
        }
    }

    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// Whether this term is a quoted triple.
    pub fn is_triple(&self) -> bool {
        self.kind() == TermKind::Triple
    }

    /// The IRI of this term, if it is an IRI.
    pub fn iri(&self) -> Option<IriRef<&str>> {
        if let SimpleTerm::Iri(iri) = self {
            Some(iri.as_ref())
        } else {
            None
        }
    }

    /// The identifier of this term, if it is a blank node.
    pub fn bnode_id(&self) -> Option<BnodeId<&str>> {
        if let SimpleTerm::BlankNode(bnid) = self {
            Some(bnid.as_ref())
        } else {
            None
        }
    }

    /// The lexical form of this term, if it is a literal.
    pub fn lexical_form(&self) -> Option<&str> {
        match self {
            SimpleTerm::LiteralDatatype(lex, _) | SimpleTerm::LiteralLanguage(lex, _) => Some(lex.as_str()),
            _ => None,
        }
    }

    /// The datatype of this term, if it is a literal.
    ///
    /// Language-tagged strings have the datatype `rdf:langString`.
    pub fn datatype(&self) -> Option<IriRef<&str>> {
        match self {
            SimpleTerm::LiteralDatatype(_, dt) => Some(dt.as_ref()),
            SimpleTerm::LiteralLanguage(..) => Some(IriRef::new_unchecked(&RDF_LANG_STRING[..])),
            _ => None,
        }
    }

    /// The language tag of this term, if it is a language-tagged string.
    pub fn language_tag(&self) -> Option<LanguageTag<&str>> {
        if let SimpleTerm::LiteralLanguage(_, tag) = self {
            Some(tag.as_ref())
        } else {
            None
        }
    }

    /// The components of this term, if it is a quoted triple.
    pub fn triple(&self) -> Option<&[SimpleTerm; 3]> {
        if let SimpleTerm::Triple(spo) = self {
            Some(&**spo)
        } else {
            None
        }
    }
}

impl<T: Borrow<str>> From<IriRef<T>> for SimpleTerm {
    fn from(other: IriRef<T>) -> Self {
        SimpleTerm::Iri(other.map_unchecked(|t| t.borrow().to_string()))
    }
}

impl<T: Borrow<str>> From<Iri<T>> for SimpleTerm {
    fn from(other: Iri<T>) -> Self {
        IriRef::from(other).into()
    }
}

impl<T: Borrow<str>> From<BnodeId<T>> for SimpleTerm {
    fn from(other: BnodeId<T>) -> Self {
        SimpleTerm::BlankNode(other.map_unchecked(|t| t.borrow().to_string()))
    }
}

impl<'a> From<NsTerm<'a>> for SimpleTerm {
    fn from(other: NsTerm<'a>) -> Self {
        SimpleTerm::Iri(other.to_iriref())
    }
}

impl From<&str> for SimpleTerm {
    fn from(other: &str) -> Self {
        SimpleTerm::new_literal_dt(other, xsd::string.to_iriref())
    }
}

impl fmt::Display for SimpleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleTerm::Iri(iri) => write!(f, "<{}>", iri.as_str()),
            SimpleTerm::BlankNode(bnid) => write!(f, "_:{}", bnid.as_str()),
            SimpleTerm::LiteralDatatype(lex, dt) => {
                write_quoted(f, lex)?;
                if xsd::string != dt.as_str() {
                    write!(f, "^^<{}>", dt.as_str())?;
                }
                Ok(())
            }
            SimpleTerm::LiteralLanguage(lex, tag) => {
                write_quoted(f, lex)?;
                write!(f, "@{}", tag.as_str())
            }
            SimpleTerm::Triple(spo) => write!(f, "<< {} {} {} >>", spo[0], spo[1], spo[2]),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, lex: &str) -> fmt::Result {
    f.write_str("\"")?;
    for chr in lex.chars() {
        match chr {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            _ => fmt::Write::write_char(f, chr)?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iri_term() {
        let t = SimpleTerm::from(Iri::new_unchecked("http://example.org/a"));
        assert_eq!(t.kind(), TermKind::Iri);
        assert_eq!(t.iri().unwrap(), "http://example.org/a");
        assert!(t.lexical_form().is_none());
        assert_eq!(t.to_string(), "<http://example.org/a>");
    }

    #[test]
    fn typed_literal() {
        let t = "42" * xsd::int;
        assert!(t.is_literal());
        assert_eq!(t.lexical_form().unwrap(), "42");
        assert_eq!(t.datatype().unwrap(), xsd::int.to_iriref().as_str());
        assert!(t.language_tag().is_none());
        assert_eq!(
            t.to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#int>"
        );
    }

    #[test]
    fn plain_literal_displays_without_datatype() {
        let t = SimpleTerm::from("say \"hi\"\n");
        assert_eq!(t.datatype().unwrap(), xsd::string.to_iriref().as_str());
        assert_eq!(t.to_string(), r#""say \"hi\"\n""#);
    }

    #[test]
    fn language_literal() {
        let t = SimpleTerm::new_literal_lang("hello", LanguageTag::new("en").unwrap());
        assert_eq!(t.lexical_form().unwrap(), "hello");
        assert_eq!(t.language_tag().unwrap().as_str(), "en");
        assert_eq!(t.datatype().unwrap(), rdf::langString.to_iriref().as_str());
        assert_eq!(t.to_string(), "\"hello\"@en");
    }

    #[test]
    fn language_literals_compare_case_insensitively() {
        let t1 = SimpleTerm::new_literal_lang("hello", LanguageTag::new("en-GB").unwrap());
        let t2 = SimpleTerm::new_literal_lang("hello", LanguageTag::new("en-gb").unwrap());
        assert_eq!(t1, t2);
    }

    #[test]
    fn quoted_triple() {
        let s = SimpleTerm::from(BnodeId::new_unchecked("b1"));
        let p: SimpleTerm = rdf::type_.into();
        let o: SimpleTerm = rdf::Property.into();
        let t = SimpleTerm::new_quoted_triple([s, p, o]);
        assert!(t.is_triple());
        assert!(t.triple().unwrap()[0].is_blank_node());
        assert_eq!(
            t.to_string(),
            "<< _:b1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/1999/02/22-rdf-syntax-ns#Property> >>"
        );
    }
}
