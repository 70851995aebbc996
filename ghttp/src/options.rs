use std::collections::HashMap;
use std::fmt;
use std::io::Read;

/// Options for a [`Client`](crate::Client), applied to every request it
/// issues.
#[derive(Default)]
pub struct HttpOptions {
    /// `User-Agent` header value used when a request does not set its own.
    pub user_agent: Option<String>,
}

/// Settings for a single request.
///
/// Constructed once per call and consumed by the verb method that uses it.
/// Fields left at their default are omitted from the outgoing request: an
/// empty cookie map produces no `Cookie` header and an empty parameter map
/// leaves the URL untouched.
#[derive(Default)]
pub struct RequestOptions {
    /// `User-Agent` header value, overrides the client-level default.
    pub user_agent: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
    /// Query parameters appended to the request URL.
    pub params: HashMap<String, String>,
    /// Cookies, rendered into a single `Cookie` header.
    pub cookies: HashMap<String, String>,
    /// JSON payload, only used by POST. Takes precedence over `data`.
    pub json: Option<serde_json::Value>,
    /// Form fields, only used by POST.
    pub data: HashMap<String, String>,
    /// File attachments, only used by POST. Non-empty attachments switch the
    /// body to `multipart/form-data`, with `data` fields folded in as text
    /// parts.
    pub files: Vec<FileAttachment>,
}

/// One named file destined for a `multipart/form-data` body.
pub struct FileAttachment {
    /// Form field name of the part.
    pub field_name: String,
    /// File name reported in the part's `Content-Disposition`.
    pub file_name: String,
    /// Content source, drained while the body is encoded.
    pub data: Box<dyn Read + Send>,
}

impl FileAttachment {
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        data: impl Read + Send + 'static,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: file_name.into(),
            data: Box::new(data),
        }
    }
}

impl fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAttachment")
            .field("field_name", &self.field_name)
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}
