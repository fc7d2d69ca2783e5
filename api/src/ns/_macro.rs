/// Declare, in the current module, a static namespace
/// with one [`NsTerm`](crate::ns::NsTerm) per listed suffix.
///
/// Suffixes that are not valid Rust identifiers (e.g. keywords)
/// are listed after a `;` as `ident, "suffix"` pairs.
///
/// No IRI is validated at runtime;
/// instead, a `test_namespace_iris` module checks all of them under `cargo test`.
///
/// ```
/// mod ex {
///     pgrdf_api::namespace!("http://example.org/ns#", Person, knows; type_, "type");
/// }
/// assert_eq!(ex::Person.to_string(), "http://example.org/ns#Person");
/// assert_eq!(ex::type_.to_string(), "http://example.org/ns#type");
/// ```
#[macro_export]
macro_rules! namespace {
    ($prefix:expr, $($id:ident),*; $($kw:ident, $kw_suffix:expr),*) => {
        /// The IRI of this namespace.
        pub static PREFIX: $crate::ns::IriRef<&'static str> =
            $crate::ns::IriRef::new_unchecked_const($prefix);
        $( $crate::ns_iri!(PREFIX, $id, stringify!($id)); )*
        $( $crate::ns_iri!(PREFIX, $kw, $kw_suffix); )*

    };
    ($prefix:expr, $($id:ident),*) => {
        $crate::namespace!($prefix, $($id),*;);
    };
}

/// Declare a single static [`NsTerm`](crate::ns::NsTerm) named `$id`,
/// made of `$prefix` and `$suffix`.
///
/// This is what [`namespace!`] expands to, for each of its terms.
/// It does not check that the resulting IRI is valid.
#[macro_export]
macro_rules! ns_iri {
    ($prefix:expr, $id:ident, $suffix:expr) => {
        #[allow(non_upper_case_globals)]
        /// A term of this namespace.
        pub static $id: $crate::ns::NsTerm = $crate::ns::NsTerm::new_unchecked($prefix, $suffix);
    };
}
