//! Configuration of the projection.
use crate::encoder::ValueEncoder;
use thiserror::Error;

/// The separator between a lexical form and a datatype IRI
/// in string property values, e.g. `"5^^http://example.org/myType"`.
pub const DEFAULT_CUSTOM_DATATYPE_SEPARATOR: &str = "^^";

/// The pattern recognizing a language tag suffix in string property values,
/// e.g. `"hello@en"`.
///
/// Its first capture group is the lexical form, its second one the language tag.
pub const DEFAULT_LANGUAGE_TAG_PATTERN: &str = r"^(.*)@([a-z\-]+)$";

/// Projection configuration.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    reify_relationship_properties: bool,
    custom_datatype_separator: String,
    language_tag_pattern: String,
}

impl ExportConfig {
    /// Build a new default [`ExportConfig`].
    pub fn new() -> Self {
        ExportConfig {
            reify_relationship_properties: false,
            custom_datatype_separator: DEFAULT_CUSTOM_DATATYPE_SEPARATOR.to_string(),
            language_tag_pattern: DEFAULT_LANGUAGE_TAG_PATTERN.to_string(),
        }
    }

    /// Should relationship properties be exported as statements
    /// about the relationship's base statement
    /// (defaults to `false`).
    pub fn reify_relationship_properties(&self) -> bool {
        self.reify_relationship_properties
    }

    /// Separator between a lexical form and a datatype IRI in string values
    /// (defaults to [`DEFAULT_CUSTOM_DATATYPE_SEPARATOR`]).
    ///
    /// NB: there is no escaping mechanism.
    /// A string value containing the separator followed by a valid IRI
    /// is always exported as a datatyped literal.
    pub fn custom_datatype_separator(&self) -> &str {
        &self.custom_datatype_separator
    }

    /// Pattern recognizing a language tag suffix in string values
    /// (defaults to [`DEFAULT_LANGUAGE_TAG_PATTERN`]).
    pub fn language_tag_pattern(&self) -> &str {
        &self.language_tag_pattern
    }

    /// Transform an [`ExportConfig`] by setting the
    /// [`reify_relationship_properties`](ExportConfig::reify_relationship_properties) flag.
    pub fn with_reify_relationship_properties(mut self, b: bool) -> Self {
        self.reify_relationship_properties = b;
        self
    }

    /// Transform an [`ExportConfig`] by setting the
    /// [`custom_datatype_separator`](ExportConfig::custom_datatype_separator).
    pub fn with_custom_datatype_separator<T: ToString>(mut self, separator: T) -> Self {
        self.custom_datatype_separator = separator.to_string();
        self
    }

    /// Transform an [`ExportConfig`] by setting the
    /// [`language_tag_pattern`](ExportConfig::language_tag_pattern).
    ///
    /// The pattern is only checked when [building an encoder](ExportConfig::encoder).
    pub fn with_language_tag_pattern<T: ToString>(mut self, pattern: T) -> Self {
        self.language_tag_pattern = pattern.to_string();
        self
    }

    /// Build the [`ValueEncoder`] implementing the string conventions of this configuration.
    pub fn encoder(&self) -> Result<ValueEncoder, ConfigError> {
        ValueEncoder::new(self)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// This error is raised when a configuration can not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The language tag pattern is not a valid regular expression.
    #[error("Invalid language tag pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// The language tag pattern does not capture a lexical form and a tag.
    #[error("The language tag pattern '{0}' must have two capture groups")]
    MissingCaptureGroups(String),
    /// The custom datatype separator is empty.
    #[error("The custom datatype separator can not be empty")]
    EmptySeparator,
}
