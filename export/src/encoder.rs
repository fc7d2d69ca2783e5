//! Encoding of property values into RDF literals.
use crate::config::{ConfigError, ExportConfig, DEFAULT_CUSTOM_DATATYPE_SEPARATOR, DEFAULT_LANGUAGE_TAG_PATTERN};
use lazy_static::lazy_static;
use pgrdf_api::iri::InvalidIri;
use pgrdf_api::ns::{xsd, NsTerm};
use pgrdf_api::pg::PropertyValue;
use pgrdf_api::term::{Iri, IriRef, LanguageTag, SimpleTerm};
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref DEFAULT_LANGUAGE_TAG: Regex = Regex::new(DEFAULT_LANGUAGE_TAG_PATTERN).unwrap();
    static ref DEFAULT_CUSTOM_DATATYPE: Regex =
        custom_datatype_regex(DEFAULT_CUSTOM_DATATYPE_SEPARATOR).unwrap();
}

fn custom_datatype_regex(separator: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(.*){}(.*)$", regex::escape(separator)))
}

/// Turns [property values](PropertyValue) into RDF literals.
///
/// Strings may carry a language tag (`"hello@en"`)
/// or a custom datatype (`"5^^http://example.org/myType"`);
/// the language tag convention is checked first.
/// When the suffix is not a valid language tag or a valid absolute IRI,
/// the whole string is encoded as a plain `xsd:string` literal.
#[derive(Clone, Debug)]
pub struct ValueEncoder {
    language_tag: Regex,
    custom_datatype: Regex,
}

impl ValueEncoder {
    /// Build the encoder implementing the string conventions of `config`.
    pub fn new(config: &ExportConfig) -> Result<Self, ConfigError> {
        let language_tag = Regex::new(config.language_tag_pattern())?;
        if language_tag.captures_len() < 3 {
            return Err(ConfigError::MissingCaptureGroups(
                config.language_tag_pattern().to_string(),
            ));
        }
        let separator = config.custom_datatype_separator();
        if separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        let custom_datatype = custom_datatype_regex(separator)?;
        Ok(ValueEncoder {
            language_tag,
            custom_datatype,
        })
    }

    /// Encode `value` as a literal.
    ///
    /// # Errors
    /// Arrays and byte arrays can not be read as a string,
    /// and are reported as [`ValueError::Malformed`].
    pub fn encode(&self, value: &PropertyValue) -> Result<SimpleTerm, ValueError> {
        use PropertyValue::*;
        let term = match value {
            String(txt) => self.encode_str(txt),
            Int(i) => typed(i.to_string(), xsd::int),
            Long(i) => typed(i.to_string(), xsd::long),
            Float(f) => typed(float_lexical_form(f64::from(*f), format!("{f:?}")), xsd::float),
            Double(f) => typed(float_lexical_form(*f, format!("{f:?}")), xsd::double),
            Boolean(b) => typed(b.to_string(), xsd::boolean),
            Date(d) => typed(d.format("%Y-%m-%d").to_string(), xsd::date),
            DateTime(dt) => typed(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(), xsd::dateTime),
            Array(_) | Bytes(_) => {
                return Err(ValueError::Malformed {
                    kind: value.kind_name(),
                })
            }
        };
        Ok(term)
    }

    /// Encode a string value, honouring the language tag and custom datatype conventions.
    pub fn encode_str(&self, txt: &str) -> SimpleTerm {
        if let Some(caps) = full_match(&self.language_tag, txt) {
            let lex = caps.get(1).map_or("", |m| m.as_str());
            let tag = caps.get(2).map_or("", |m| m.as_str());
            match LanguageTag::new(tag) {
                Ok(tag) => return SimpleTerm::new_literal_lang(lex, tag),
                Err(err) => log::warn!("Ignoring language tag in {txt:?}: {err}"),
            }
        }
        if let Some(caps) = full_match(&self.custom_datatype, txt) {
            let lex = caps.get(1).map_or("", |m| m.as_str());
            let dt = caps.get(2).map_or("", |m| m.as_str());
            if let Ok(dt) = Iri::new(dt) {
                return SimpleTerm::new_literal_dt(lex, IriRef::from(dt));
            }
        }
        txt.into()
    }

    /// Encode `txt` as an IRI.
    pub fn encode_iri(&self, txt: &str) -> Result<SimpleTerm, ValueError> {
        Ok(IriRef::new(txt)?.into())
    }
}

impl Default for ValueEncoder {
    fn default() -> Self {
        ValueEncoder {
            language_tag: DEFAULT_LANGUAGE_TAG.clone(),
            custom_datatype: DEFAULT_CUSTOM_DATATYPE.clone(),
        }
    }
}

fn full_match<'t>(re: &Regex, txt: &'t str) -> Option<regex::Captures<'t>> {
    re.captures(txt).filter(|caps| {
        caps.get(0)
            .map_or(false, |m| m.start() == 0 && m.end() == txt.len())
    })
}

fn typed(lex: String, datatype: NsTerm) -> SimpleTerm {
    SimpleTerm::new_literal_dt(lex, datatype.to_iriref())
}

/// The XSD spelling of a float, given its Rust shortest round-trip representation.
fn float_lexical_form(value: f64, repr: String) -> String {
    match value {
        f if f == f64::INFINITY => "INF".to_string(),
        f if f == f64::NEG_INFINITY => "-INF".to_string(),
        _ => repr,
    }
}

/// This error is raised when a property value can not be encoded.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The value can not be read as a string.
    #[error("Can not render a {kind} value as a literal")]
    Malformed {
        /// The kind of the offending value
        kind: &'static str,
    },
    /// The textual form of a value can not be coerced to the requested type.
    #[error("Can not coerce {value:?} to {value_type}: {source}")]
    Coercion {
        /// The textual form
        value: String,
        /// The requested type
        value_type: &'static str,
        /// The underlying parse error
        source: ParseError,
    },
    /// A string expected to be an IRI is not one.
    #[error(transparent)]
    InvalidIri(#[from] InvalidIri),
}

/// The reason why a textual value could not be coerced.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Not an integer
    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),
    /// Not a float
    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),
}
