//! I provide generic wrappers around `str`-like types
//! guaranteeing that their underlying data is a valid IRI or IRI reference.
use super::{is_absolute_iri, is_valid_iri_ref, InvalidIri};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

macro_rules! iri_wrapper {
    ($(#[$attr:meta])* $wid:ident, $check:ident, $kind:literal) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $wid<T: Borrow<str>>(T);

        impl<T: Borrow<str>> $wid<T> {
            #[doc = concat!("Build a new [`", stringify!($wid), "`] from `inner`, checking that it is a valid ", $kind, ".")]
            pub fn new(inner: T) -> Result<Self, InvalidIri> {
                if $check(inner.borrow()) {
                    Ok($wid(inner))
                } else {
                    Err(InvalidIri(inner.borrow().to_string()))
                }
            }

            #[doc = concat!("Build a new [`", stringify!($wid), "`] from `inner`, without checking that it is a valid ", $kind, ".")]
            ///
            /// If it is not, downstream consumers may produce invalid RDF.
            pub fn new_unchecked(inner: T) -> Self {
                debug_assert!($check(inner.borrow()), "invalid {}: {}", $kind, inner.borrow());
                $wid(inner)
            }

            /// Gets a reference to the underlying `str`.
            pub fn as_str(&self) -> &str {
                self.0.borrow()
            }

            #[doc = concat!("Convert reference to a `", stringify!($wid), "<&str>`.")]
            pub fn as_ref(&self) -> $wid<&str> {
                $wid(self.0.borrow())
            }

            /// Returns the wrapped value, consuming `self`.
            pub fn unwrap(self) -> T {
                self.0
            }

            #[doc = concat!("Map a [`", stringify!($wid), "`]`<T>` to a [`", stringify!($wid), "`]`<U>`")]
            /// by applying a function to the wrapped value.
            ///
            /// It does not check that the value returned by the function is valid.
            pub fn map_unchecked<F, U>(self, f: F) -> $wid<U>
            where
                F: FnOnce(T) -> U,
                U: Borrow<str>,
            {
                $wid(f(self.0))
            }
        }

        impl $wid<&'static str> {
            #[doc = concat!("`const` constructor for [`", stringify!($wid), "`].")]
            ///
            /// # Precondition
            #[doc = concat!("`inner` must be a valid ", $kind, ".")]
            pub const fn new_unchecked_const(inner: &'static str) -> Self {
                $wid(inner)
            }
        }

        impl<T: Borrow<str>> Borrow<str> for $wid<T> {
            fn borrow(&self) -> &str {
                self.0.borrow()
            }
        }

        impl<T: Borrow<str>> AsRef<str> for $wid<T> {
            fn as_ref(&self) -> &str {
                self.0.borrow()
            }
        }

        impl<T: Borrow<str>> Deref for $wid<T> {
            type Target = str;
            fn deref(&self) -> &str {
                self.0.borrow()
            }
        }

        impl<T: Borrow<str>> PartialEq<str> for $wid<T> {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl<T: Borrow<str>> PartialEq<&str> for $wid<T> {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl<T: Borrow<str>> fmt::Display for $wid<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

iri_wrapper!(
    /// Wrapper guaranteeing that the underlying `str` is an absolute IRI
    /// (with an optional fragment identifier).
    Iri,
    is_absolute_iri,
    "absolute IRI"
);

iri_wrapper!(
    /// Wrapper guaranteeing that the underlying `str` is an IRI reference
    /// (absolute or relative).
    IriRef,
    is_valid_iri_ref,
    "IRI reference"
);

impl<T: Borrow<str>> From<Iri<T>> for IriRef<T> {
    fn from(other: Iri<T>) -> Self {
        IriRef(other.0)
    }
}

impl<T: Borrow<str>> IriRef<T> {
    /// Whether this IRI reference is an absolute IRI.
    pub fn is_absolute(&self) -> bool {
        is_absolute_iri(self.as_str())
    }
}
