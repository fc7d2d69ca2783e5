//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying `str`
//! is a valid [BCP47](https://tools.ietf.org/search/bcp47) language tag.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// This wrapper guarantees that the underlying `str`
/// is a valid [BCP47](https://tools.ietf.org/search/bcp47) language tag.
///
/// NB: it is actually slightly more permissive than BCP47,
/// as it does not check that the different subtags are registered (language, country...) codes.
///
/// Equality, ordering and hashing are case-insensitive.
#[derive(Clone, Copy, Debug)]
pub struct LanguageTag<T: Borrow<str>>(T);

impl<T: Borrow<str>> LanguageTag<T> {
    /// Build a new [`LanguageTag`] from `tag`,
    /// returning an error if it is not a valid BCP47 language tag.
    pub fn new(tag: T) -> Result<Self, InvalidLanguageTag> {
        if LANG_TAG.is_match(tag.borrow()) {
            Ok(LanguageTag(tag))
        } else {
            Err(InvalidLanguageTag(tag.borrow().to_string()))
        }
    }

    /// Build a new [`LanguageTag`] from `tag`.
    ///
    /// # Panic
    /// Panics if `tag` is not a valid BCP47 language tag.
    pub fn new_unchecked(tag: T) -> Self {
        assert!(LANG_TAG.is_match(tag.borrow()));
        LanguageTag(tag)
    }

    /// Returns the wrapped value, consuming `self`.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Convert reference to a `LanguageTag<&str>`
    pub fn as_ref(&self) -> LanguageTag<&str> {
        LanguageTag(self.0.borrow())
    }

    /// Map a [`LanguageTag`]`<T>` to a [`LanguageTag`]`<U>`
    /// by applying a function to the wrapped value.
    ///
    /// It does not check that the value returned by the function is valid.
    pub fn map_unchecked<F, U>(self, f: F) -> LanguageTag<U>
    where
        F: FnOnce(T) -> U,
        U: Borrow<str>,
    {
        LanguageTag(f(self.0))
    }
}

impl<T: Borrow<str>> Borrow<str> for LanguageTag<T> {
    fn borrow(&self) -> &str {
        self.0.borrow()
    }
}

impl<T: Borrow<str>> AsRef<str> for LanguageTag<T> {
    fn as_ref(&self) -> &str {
        self.0.borrow()
    }
}

impl<T: Borrow<str>, U: Borrow<str>> PartialEq<LanguageTag<T>> for LanguageTag<U> {
    fn eq(&self, other: &LanguageTag<T>) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl<T: Borrow<str>> PartialEq<str> for LanguageTag<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }
}

impl<T: Borrow<str>> Eq for LanguageTag<T> {}

impl<T: Borrow<str>> std::hash::Hash for LanguageTag<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str()
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .for_each(|c| c.hash(state));
    }
}

impl<T: Borrow<str>> fmt::Display for LanguageTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// This error is raised when trying to parse an invalid language tag.
#[derive(Debug, Error)]
#[error("The given language tag '{0}' does not comply with BCP47")]
pub struct InvalidLanguageTag(pub String);

lazy_static! {
    pub(crate) static ref LANG_TAG: Regex = Regex::new(LANG_TAG_SRC).unwrap();
}

/// Match a valid BCP47 language tag
pub static LANG_TAG_SRC: &str = r"(?xi-u)^
(
  (?:
    (?: #language
      (?:
        [A-Z]{2,3}
        (?: #extlang
          (?:
            -[A-Z]{3}
          ){0,3}
        )
      )
    |
      [A-Z]{4,8}
    )
    (?: #script
      -[A-Z]{4}
    )?
    (?: #region
      -
      (?:
        [A-Z]{2}
      |
        [0-9]{3}
      )
    )?
    (?: #variant
      -
      (?:
        [A-Z0-9]{5,8}
      |
        [0-9][A-Z0-9]{3}
      )
    )*
    (?: #extension
      -[0-9A-WY-Z]
      (?:
        -[A-Z0-9]{2,8}
      )+
    )*
    (?: #privateUse
      -X
      (?:
        -[A-Z0-9]{1,8}
      )+
    )?
  )
|
  (?: #privateUse
    X
    (?:
      -[A-Z0-9]{1,8}
    )+
  )
|
  (?: #grandfathered
    en-GB-oed|i-ami|i-bnn|i-default|i-enochian|i-hak|i-klingon|i-lux|i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu|sgn-BE-FR|sgn-BE-NL|sgn-CH-DE
    # NB regular grandfathered tags are not included,
    # as they will be matched by the normal case
  )
)$";
