//! Serializer for the [N-Quads] concrete syntax of RDF.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use super::nt::{write_term, write_triple};
use super::*;
use std::io;

/// N-Quads serializer.
pub struct NqSerializer<W> {
    write: W,
    count: usize,
}

impl<W> NqSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Quads serializer writing to `write`.
    pub fn new(write: W) -> Self {
        NqSerializer { write, count: 0 }
    }

    /// The number of statements written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Consume this serializer and return its target.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W> StatementSerializer for NqSerializer<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn serialize_statements<I, E>(&mut self, source: I) -> StreamResult<&mut Self, E, Self::Error>
    where
        I: IntoIterator<Item = Result<Statement, E>>,
        E: Error,
    {
        for st in source {
            let st = st.map_err(SourceError)?;
            let w = &mut self.write;
            write_triple(w, st.s(), st.p(), st.o())
                .and_then(|_| match st.g() {
                    Some(g) => {
                        w.write_all(b" ")?;
                        write_term(w, g)
                    }
                    None => Ok(()),
                })
                .and_then(|_| w.write_all(b".\n"))
                .map_err(SinkError)?;
            self.count += 1;
        }
        Ok(self)
    }
}

impl NqSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[must_use]
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }
}

impl Stringifier for NqSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
