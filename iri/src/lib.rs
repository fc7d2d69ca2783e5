//! This crate is part of [pgrdf],
//! a toolkit projecting labeled property graphs into RDF.
//!
//! It provides thin wrappers around `str`-like types
//! guaranteeing that their content is a valid IRI or IRI reference,
//! as defined by [RFC 3987](https://tools.ietf.org/html/rfc3987).
//!
//! [pgrdf]: https://docs.rs/pgrdf/latest/pgrdf/

#![deny(missing_docs)]

pub mod error;
pub use error::InvalidIri;
mod _wrapper;
pub use _wrapper::*;

/// Check whether `txt` is an absolute IRI (with an optional fragment identifier).
pub fn is_absolute_iri(txt: &str) -> bool {
    oxiri::Iri::parse(txt).is_ok()
}

/// Check whether `txt` is an IRI reference (absolute or relative).
pub fn is_valid_iri_ref(txt: &str) -> bool {
    oxiri::IriRef::parse(txt).is_ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/", true, true; "http")]
    #[test_case("urn:isbn:0451450523", true, true; "urn")]
    #[test_case("neo4j://graph.individuals#42", true, true; "custom scheme with fragment")]
    #[test_case("http://example.org/myType", true, true; "custom datatype")]
    #[test_case("../relative", false, true; "relative path")]
    #[test_case("#frag", false, true; "fragment only")]
    #[test_case("http://exa mple.org/", false, false; "space")]
    #[test_case("a b", false, false; "relative with space")]
    #[test_case("http://[::1", false, false; "unclosed ip literal")]
    fn validity(txt: &str, absolute: bool, reference: bool) {
        assert_eq!(is_absolute_iri(txt), absolute);
        assert_eq!(is_valid_iri_ref(txt), reference);
    }
}
