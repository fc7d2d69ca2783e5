//! I define the [`BnodeId`] wrapper type,
//! which guarantees that the underlying `str`
//! satisfies the `BLANK_NODE_LABEL` rule in [Turtle](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL)
//! (without the leading `_:`).
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use thiserror::Error;

lazy_static! {
    /// Turtle's `BLANK_NODE_LABEL` production, without the leading `_:`.
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

/// This wrapper guarantees that the underlying `str`
/// satisfies the `BLANK_NODE_LABEL` rule in [Turtle](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL)
/// (without the leading `_:`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BnodeId<T: Borrow<str>>(T);

impl<T: Borrow<str>> BnodeId<T> {
    /// Build a new [`BnodeId`] from `id`,
    /// returning an error if it is not a valid blank node label.
    pub fn new(id: T) -> Result<Self, InvalidBnodeId> {
        if BNODE_ID.is_match(id.borrow()) {
            Ok(BnodeId(id))
        } else {
            Err(InvalidBnodeId(id.borrow().to_string()))
        }
    }

    /// Build a new [`BnodeId`] from `id`, without checking it.
    pub fn new_unchecked(id: T) -> Self {
        debug_assert!(BNODE_ID.is_match(id.borrow()));
        BnodeId(id)
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Convert reference to a `BnodeId<&str>`
    pub fn as_ref(&self) -> BnodeId<&str> {
        BnodeId(self.0.borrow())
    }

    /// Map a [`BnodeId`]`<T>` to a [`BnodeId`]`<U>`
    /// by applying a function to the wrapped value.
    pub fn map_unchecked<F, U>(self, f: F) -> BnodeId<U>
    where
        F: FnOnce(T) -> U,
        U: Borrow<str>,
    {
        BnodeId(f(self.0))
    }
}

impl<T: Borrow<str>> Borrow<str> for BnodeId<T> {
    fn borrow(&self) -> &str {
        self.0.borrow()
    }
}

/// This error is raised when trying to parse an invalid blank node identifier.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
pub struct InvalidBnodeId(pub String);
