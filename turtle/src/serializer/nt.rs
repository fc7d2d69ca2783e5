//! Serializer for the [N-Triples] concrete syntax of RDF.
//!
//! The graph name of statements, if any, is ignored;
//! see [`nq`](super::nq) to keep it.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use super::*;
use pgrdf_api::ns::xsd;
use pgrdf_api::term::SimpleTerm;
use std::io;

/// N-Triples serializer.
pub struct NtSerializer<W> {
    write: W,
    count: usize,
}

impl<W> NtSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Triples serializer writing to `write`.
    pub fn new(write: W) -> Self {
        NtSerializer { write, count: 0 }
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

impl<W> StatementSerializer for NtSerializer<W>
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
            write_triple(&mut self.write, st.s(), st.p(), st.o())
                .and_then(|_| self.write.write_all(b".\n"))
                .map_err(SinkError)?;
            self.count += 1;
        }
        Ok(self)
    }
}

impl NtSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[must_use]
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }
}

impl Stringifier for NtSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

/// Write the given triple into the given write in the N-Triples format,
/// without the final dot.
pub fn write_triple<W: io::Write>(
    w: &mut W,
    s: &SimpleTerm,
    p: &SimpleTerm,
    o: &SimpleTerm,
) -> io::Result<()> {
    write_term(w, s)?;
    w.write_all(b" ")?;
    write_term(w, p)?;
    w.write_all(b" ")?;
    write_term(w, o)
}

/// Write the given term into the given write in the N-Triples format.
pub fn write_term<W: io::Write>(w: &mut W, t: &SimpleTerm) -> io::Result<()> {
    match t {
        SimpleTerm::Iri(iri) => {
            w.write_all(b"<")?;
            w.write_all(iri.as_bytes())?;
            w.write_all(b">")?;
        }
        SimpleTerm::BlankNode(id) => {
            w.write_all(b"_:")?;
            w.write_all(id.as_str().as_bytes())?;
        }
        SimpleTerm::LiteralLanguage(lex, tag) => {
            w.write_all(b"\"")?;
            quoted_string(w, lex.as_bytes())?;
            w.write_all(b"\"@")?;
            w.write_all(tag.as_str().as_bytes())?;
        }
        SimpleTerm::LiteralDatatype(lex, dt) => {
            w.write_all(b"\"")?;
            quoted_string(w, lex.as_bytes())?;
            if xsd::string != dt.as_str() {
                w.write_all(b"\"^^<")?;
                w.write_all(dt.as_bytes())?;
                w.write_all(b">")?;
            } else {
                w.write_all(b"\"")?;
            }
        }
        SimpleTerm::Triple(spo) => {
            w.write_all(b"<<")?;
            write_triple(w, &spo[0], &spo[1], &spo[2])?;
            w.write_all(b">>")?;
        }
    }
    Ok(())
}

/// Write `txt`, escaping the characters that can not appear in a quoted string.
pub(crate) fn quoted_string<W: io::Write>(w: &mut W, txt: &[u8]) -> io::Result<()> {
    let mut start = 0;
    for (pos, chr) in txt.iter().enumerate() {
        let escaped: &[u8] = match *chr {
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            _ => continue,
        };
        w.write_all(&txt[start..pos])?;
        w.write_all(escaped)?;
        start = pos + 1;
    }
    w.write_all(&txt[start..])
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
