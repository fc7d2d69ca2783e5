use std::error::Error;

/// An error raised when moving statements from a fallible source
/// into a fallible sink (the target of a serializer).
///
/// In case this error is raised it can be matched to investigate if the source
/// or the sink failed.
///
/// # Conversion
///
/// Both variants `SourceError` and `SinkError` are public exported.
/// Consequently, `StreamError` can be constructed with `.map_err(SourceError)`
/// and `.map_err(SinkError)`.
#[derive(Debug, thiserror::Error)]
pub enum StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// Error caused by the source
    #[error("Source failed: {0}")]
    SourceError(#[source] SourceErr),
    /// Error caused by the sink
    #[error("Sink failed: {0}")]
    SinkError(#[source] SinkErr),
}
pub use StreamError::*;

impl<SourceErr, SinkErr> StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// Checks if `StreamError` was raised by the source.
    pub fn is_source_error(&self) -> bool {
        matches!(self, SourceError(_))
    }
    /// Checks if `StreamError` was raised by the sink.
    pub fn is_sink_error(&self) -> bool {
        matches!(self, SinkError(_))
    }
    /// Converts `StreamError` into an inner error.
    pub fn inner_into<Err>(self) -> Err
    where
        SourceErr: Into<Err>,
        SinkErr: Into<Err>,
    {
        match self {
            SourceError(err) => err.into(),
            SinkError(err) => err.into(),
        }
    }
}

/// Convenient type alias for [`Result`] whose error is [`StreamError`].
pub type StreamResult<T, E1, E2> = Result<T, StreamError<E1, E2>>;
