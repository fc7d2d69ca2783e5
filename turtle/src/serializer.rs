//! Serializers for statement streams.
//!
//! Each serializer has a specific target (typically a file or an in-memory buffer)
//! associated to it.
//! If you want to serialize to two different files,
//! you must create two different serializers.
use pgrdf_api::statement::Statement;
use std::convert::Infallible;
use std::error::Error;

mod _stream_error;
pub use _stream_error::*;
pub mod nq;
pub mod nt;

/// A statement serializer writes statements according to a given format.
pub trait StatementSerializer {
    /// The error type that may be raised during serialization.
    type Error: Error + 'static;

    /// Serialize all statements from the given fallible source,
    /// typically a [projection](https://docs.rs/pgrdf_export/latest/pgrdf_export/struct.Projection.html).
    ///
    /// Serialization stops at the first error, be it raised by the source or by the target.
    fn serialize_statements<I, E>(&mut self, source: I) -> StreamResult<&mut Self, E, Self::Error>
    where
        I: IntoIterator<Item = Result<Statement, E>>,
        E: Error,
        Self: Sized;

    /// Serialize all statements from the given infallible source.
    fn serialize_all<'a, I>(&mut self, statements: I) -> Result<&mut Self, Self::Error>
    where
        I: IntoIterator<Item = &'a Statement>,
        Self: Sized,
    {
        self.serialize_statements(statements.into_iter().map(|st| Ok::<_, Infallible>(st.clone())))
            .map_err(|err| match err {
                SourceError(never) => match never {},
                SinkError(err) => err,
            })
    }
}

/// A stringifier is special kind of [`StatementSerializer`]:
///
/// + it uses a text-based format encoded in UTF8;
/// + it stores the serialize data in memory;
/// + it gives access to the serialized data as `str` or `String`.
pub trait Stringifier {
    /// Borrows the internal serialized data.
    ///
    /// # Note to implementers
    /// It is the responsibility of implementors to ensure that this data is valid UTF8.
    /// The methods [`as_str`](#method.as_str) and
    /// [`to_string`](#method.to_string) rely on this.
    fn as_utf8(&self) -> &[u8];

    /// Borrows the internal serialized data as a `str`.
    fn as_str(&self) -> &str {
        unsafe { std::str::from_utf8_unchecked(self.as_utf8()) }
    }

    /// Copy the internal serialized data to a `String`.
    fn to_string(&self) -> String {
        self.as_str().to_string()
    }
}
