//! Typed request-option facade over a blocking HTTP client.
//!
//! A [`RequestOptions`] value describes everything optional about a single
//! request (headers, cookies, query parameters, JSON or form body, file
//! attachments); [`Client`] copies it onto the underlying transport and
//! issues one synchronous round trip, returning a normalized
//! [`HttpResponse`]. The [`HttpClient`] trait is the narrow seam through
//! which the concrete transport can be swapped out, e.g. for tests.

mod error;
pub use error::Error;

mod options;
pub use options::{FileAttachment, HttpOptions, RequestOptions};

mod multipart;
mod request;

mod response;
pub use response::HttpResponse;

mod client_trait;
pub use client_trait::HttpClient;

mod client;
pub use client::Client;
