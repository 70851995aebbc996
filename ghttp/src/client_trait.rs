use crate::{Error, HttpResponse, RequestOptions};

/// Verb-level interface to an HTTP transport.
///
/// [`Client`](crate::Client) is the ureq-backed implementation; test code
/// can substitute its own to avoid network access. Each call is one
/// synchronous round trip consuming its options.
pub trait HttpClient {
    fn get(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, Error>;

    fn post(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, Error>;

    fn put(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, Error>;

    fn delete(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, Error>;
}
