use std::io;

/// Errors produced while assembling or dispatching a request.
///
/// A 4xx/5xx status is not an error at this layer; only transport-level
/// failures and local assembly problems surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request URL was empty.
    #[error("request url must not be empty")]
    EmptyUrl,
    /// The request URL did not parse.
    #[error("invalid request url")]
    Url(#[from] url::ParseError),
    /// A header name or value was rejected while building the request.
    #[error("invalid request")]
    Http(#[from] http::Error),
    /// The JSON payload failed to serialize.
    #[error("failed to serialize json body")]
    Json(#[from] serde_json::Error),
    /// Error returned by the underlying transport.
    // boxed, the ureq error type is large
    #[error("request failed")]
    Transport(#[from] Box<ureq::Error>),
    /// Reading an attachment or the response body failed.
    #[error("i/o error")]
    Io(#[from] io::Error),
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}
