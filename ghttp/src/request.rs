use std::collections::HashMap;

use http::header::{CONTENT_TYPE, COOKIE, USER_AGENT};
use http::{Method, Request};
use url::Url;

use crate::multipart;
use crate::options::{FileAttachment, RequestOptions};
use crate::Error;

/// Fallback `User-Agent`, used when neither the request nor the client set
/// one.
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("ghttp/", env!("CARGO_PKG_VERSION"));

/// Body payload selected from the request options.
enum Body {
    Empty,
    Json(Vec<u8>),
    Form(Vec<u8>),
    Multipart { boundary: String, data: Vec<u8> },
}

impl Body {
    fn content_type(&self) -> Option<String> {
        match self {
            Body::Empty => None,
            Body::Json(_) => Some("application/json".to_string()),
            Body::Form(_) => Some("application/x-www-form-urlencoded".to_string()),
            Body::Multipart { boundary, .. } => {
                Some(format!("multipart/form-data; boundary={boundary}"))
            }
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Empty => Vec::new(),
            Body::Json(data) | Body::Form(data) | Body::Multipart { data, .. } => data,
        }
    }
}

/// Builds the outgoing request from one set of options.
///
/// Pure assembly, no network access. Only POST carries a body; the other
/// verbs ignore `json`, `data` and `files`.
pub(crate) fn assemble(
    method: Method,
    url: &str,
    options: RequestOptions,
    default_user_agent: Option<&str>,
) -> Result<Request<Vec<u8>>, Error> {
    if url.is_empty() {
        return Err(Error::EmptyUrl);
    }

    let url = build_url(url, &options.params)?;
    let mut req = Request::builder().uri(url.as_str());

    let user_agent = options
        .user_agent
        .as_deref()
        .or(default_user_agent)
        .unwrap_or(DEFAULT_USER_AGENT);
    req = req.header(USER_AGENT, user_agent);

    for (name, value) in &options.headers {
        // `User-Agent` is a singleton header and already resolved above;
        // `Builder::header` appends, so copying it would duplicate it
        if name.eq_ignore_ascii_case("user-agent") {
            continue;
        }
        req = req.header(name.as_str(), value.as_str());
    }

    if !options.cookies.is_empty() {
        req = req.header(COOKIE, cookie_header(&options.cookies));
    }

    let body = if method == Method::POST {
        select_body(options.json, &options.data, options.files)?
    } else {
        Body::Empty
    };
    if let Some(content_type) = body.content_type() {
        req = req.header(CONTENT_TYPE, content_type);
    }

    Ok(req.method(method).body(body.into_bytes())?)
}

/// Picks the POST body: attachments win, then JSON, then form fields.
fn select_body(
    json: Option<serde_json::Value>,
    data: &HashMap<String, String>,
    files: Vec<FileAttachment>,
) -> Result<Body, Error> {
    if !files.is_empty() {
        let boundary = multipart::boundary();
        let encoded = multipart::encode(&boundary, data, files)?;
        return Ok(Body::Multipart {
            boundary,
            data: encoded,
        });
    }

    if let Some(json) = json {
        return Ok(Body::Json(serde_json::to_vec(&json)?));
    }

    if !data.is_empty() {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut pairs: Vec<_> = data.iter().collect();
        pairs.sort();
        for (name, value) in pairs {
            serializer.append_pair(name, value);
        }
        return Ok(Body::Form(serializer.finish().into_bytes()));
    }

    Ok(Body::Empty)
}

fn build_url(url: &str, params: &HashMap<String, String>) -> Result<Url, Error> {
    let mut url: Url = url.parse()?;
    if !params.is_empty() {
        let mut pairs: Vec<_> = params.iter().collect();
        pairs.sort();
        let mut query = url.query_pairs_mut();
        for (name, value) in pairs {
            query.append_pair(name, value);
        }
        drop(query);
    }
    Ok(url)
}

// Sorted so the header is deterministic.
fn cookie_header(cookies: &HashMap<String, String>) -> String {
    let mut pairs: Vec<_> = cookies.iter().collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
