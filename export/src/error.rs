//! Errors raised while projecting rows into statements.
use crate::config::ConfigError;
use crate::encoder::ValueError;
use std::error::Error;

/// An error raised by a [`Projection`](crate::Projection).
///
/// It can be matched to investigate whether the row source (query engine)
/// or the [export policy](crate::ExportPolicy) failed.
/// Policy errors are propagated unchanged.
///
/// # Conversion
///
/// Both variants `SourceError` and `PolicyError` are public exported.
/// Consequently, `ProjectionError` can be constructed with `.map_err(SourceError)`
/// and `.map_err(PolicyError)`.
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError<SourceErr, PolicyErr>
where
    SourceErr: Error,
    PolicyErr: Error,
{
    /// Error caused by the row source
    #[error("Row source failed: {0}")]
    SourceError(#[source] SourceErr),
    /// Error caused by the export policy
    #[error("Export policy failed: {0}")]
    PolicyError(#[source] PolicyErr),
}
pub use ProjectionError::*;

impl<SourceErr, PolicyErr> ProjectionError<SourceErr, PolicyErr>
where
    SourceErr: Error,
    PolicyErr: Error,
{
    /// Checks if `ProjectionError` was raised by the row source.
    pub fn is_source_error(&self) -> bool {
        matches!(self, SourceError(_))
    }
    /// Checks if `ProjectionError` was raised by the export policy.
    pub fn is_policy_error(&self) -> bool {
        matches!(self, PolicyError(_))
    }
    /// Converts `ProjectionError` into an inner error.
    pub fn inner_into<Err>(self) -> Err
    where
        SourceErr: Into<Err>,
        PolicyErr: Into<Err>,
    {
        match self {
            SourceError(err) => err.into(),
            PolicyError(err) => err.into(),
        }
    }
    /// Convert using `f` if a `SourceError`
    pub fn map_source<E, F>(self, f: F) -> ProjectionError<E, PolicyErr>
    where
        E: Error,
        F: FnOnce(SourceErr) -> E,
    {
        match self {
            SourceError(e) => SourceError(f(e)),
            PolicyError(e) => PolicyError(e),
        }
    }
    /// Convert using `f` if a `PolicyError`
    pub fn map_policy<E, F>(self, f: F) -> ProjectionError<SourceErr, E>
    where
        E: Error,
        F: FnOnce(PolicyErr) -> E,
    {
        match self {
            SourceError(e) => SourceError(e),
            PolicyError(e) => PolicyError(f(e)),
        }
    }
}

/// Convenient type alias for [`Result`] whose error is [`ProjectionError`].
pub type ProjectionResult<T, E1, E2> = Result<T, ProjectionError<E1, E2>>;

/// An error raised by [`export_by_search`](crate::export_by_search).
#[derive(Debug, thiserror::Error)]
pub enum SearchError<GraphErr, PolicyErr>
where
    GraphErr: Error,
    PolicyErr: Error,
{
    /// The searched value could not be coerced to the requested type
    #[error(transparent)]
    Value(#[from] ValueError),
    /// The configuration can not be used
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The graph lookup failed
    #[error("Graph lookup failed: {0}")]
    Graph(#[source] GraphErr),
    /// The export policy failed
    #[error("Export policy failed: {0}")]
    Policy(#[source] PolicyErr),
}
