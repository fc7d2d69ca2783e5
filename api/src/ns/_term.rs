use super::*;
use crate::term::SimpleTerm;

/// An IRI produced by a [`Namespace`].
///
/// It stores the IRI in two parts (namespace and suffix),
/// so that the namespace can be shared by all the terms of a vocabulary.
#[derive(Clone, Copy, Debug)]
pub struct NsTerm<'a> {
    ns: IriRef<&'a str>,
    /// NB: suffix must satisfy that ns+suffix is still a valid IRI reference
    suffix: &'a str,
}

impl fmt::Display for NsTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ns.as_str(), self.suffix)
    }
}

impl<'a> NsTerm<'a> {
    /// Make an NsTerm without checking that it produces a valid IRI.
    pub const fn new_unchecked(ns: IriRef<&'a str>, suffix: &'a str) -> Self {
        NsTerm { ns, suffix }
    }

    /// The namespace part of this term.
    pub fn ns(&self) -> IriRef<&'a str> {
        self.ns
    }

    /// The suffix part of this term.
    pub fn suffix(&self) -> &'a str {
        self.suffix
    }

    /// Return an owned [`IriRef`] representing this term.
    pub fn to_iriref(self) -> IriRef<String> {
        IriRef::new_unchecked(self.to_string())
    }
}

impl PartialEq<str> for NsTerm<'_> {
    fn eq(&self, other: &str) -> bool {
        let ns = self.ns.as_str();
        other.starts_with(ns) && &other[ns.len()..] == self.suffix
    }
}

impl PartialEq<&str> for NsTerm<'_> {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<SimpleTerm> for NsTerm<'_> {
    fn eq(&self, other: &SimpleTerm) -> bool {
        match other.iri() {
            Some(iri) => self == iri.as_str(),
            None => false,
        }
    }
}

impl<'a, 'b> PartialEq<NsTerm<'b>> for NsTerm<'a> {
    fn eq(&self, other: &NsTerm<'b>) -> bool {
        self == other.to_string().as_str()
    }
}

impl Eq for NsTerm<'_> {}

/// Multiplying a string by an [`NsTerm`] produces a literal with that datatype.
impl<'a> std::ops::Mul<NsTerm<'a>> for &str {
    type Output = SimpleTerm;

    fn mul(self, rhs: NsTerm<'a>) -> Self::Output {
        SimpleTerm::new_literal_dt(self, rhs.to_iriref())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ns_term_eq() {
        let ns = IriRef::new_unchecked("http://example.org/");
        let t1a = NsTerm::new_unchecked(ns, "foo");
        let t2a = NsTerm::new_unchecked(ns, "foo/bar");
        let t3a = NsTerm::new_unchecked(ns, "bar");

        assert!(t1a == "http://example.org/foo");
        assert!(t2a == "http://example.org/foo/bar");
        assert!(t3a == "http://example.org/bar");
        assert!(t1a != "http://example.org/foo/bar");
        assert!(t2a != "http://example.org/bar");
        assert!(t3a != "http://example.org/foo");
    }

    #[test]
    fn ns_term_eq_simple_term() {
        let ns = IriRef::new_unchecked("http://example.org/");
        let t = NsTerm::new_unchecked(ns, "foo");
        assert!(t == SimpleTerm::from(t));
        assert!(t != SimpleTerm::from("http://example.org/foo"));
    }
}
