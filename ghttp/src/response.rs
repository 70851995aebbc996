use std::borrow::Cow;
use std::io::Read;

use http::response::Parts;
use http::{HeaderMap, StatusCode};

use crate::Error;

/// Normalized result of one dispatched request.
///
/// The body is fully materialized before construction; immutable afterwards.
/// Header access goes through [`http::HeaderMap`], which keeps repeated
/// fields in order instead of dropping them.
#[derive(Debug)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its parts, mainly useful for test doubles of
    /// [`HttpClient`](crate::HttpClient).
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Captures the response metadata and drains `body` to completion.
    ///
    /// The reader is dropped before returning, read failure or not.
    pub(crate) fn read_from(parts: Parts, mut body: impl Read) -> Result<Self, Error> {
        let mut buf = Vec::new();
        body.read_to_end(&mut buf)?;
        Ok(Self {
            status: parts.status,
            headers: parts.headers,
            body: buf,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Numeric status code, e.g. `404`.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Canonical reason phrase, empty for non-standard status codes.
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body decoded as UTF-8, lossily.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn parts(status: StatusCode, headers: HeaderMap) -> Parts {
        let (mut parts, ()) = http::Response::new(()).into_parts();
        parts.status = status;
        parts.headers = headers;
        parts
    }

    /// Reader that records whether it was drained and dropped.
    struct TrackingReader {
        data: io::Cursor<Vec<u8>>,
        drained: Arc<AtomicBool>,
        dropped: Arc<AtomicBool>,
    }

    impl Read for TrackingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                self.drained.store(true, Ordering::SeqCst);
            }
            Ok(n)
        }
    }

    impl Drop for TrackingReader {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn debug_formatting_is_available() {
        let response = HttpResponse::new(StatusCode::OK, HeaderMap::new(), b"ok".to_vec());
        let rendered = format!("{response:?}");
        assert!(rendered.contains("HttpResponse"));
        assert!(rendered.contains("200"));
    }

    #[test]
    fn fields_pass_through_unaltered() {
        let response = HttpResponse::read_from(
            parts(StatusCode::NOT_FOUND, HeaderMap::new()),
            io::Cursor::new(b"ok".to_vec()),
        )
        .unwrap();

        assert_eq!(response.status_code(), 404);
        assert_eq!(response.status_text(), "Not Found");
        assert_eq!(response.body(), b"ok");
        assert_eq!(response.text(), "ok");
    }

    #[test]
    fn repeated_headers_are_preserved_in_order() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", "a=1".parse().unwrap());
        headers.append("set-cookie", "b=2".parse().unwrap());

        let response = HttpResponse::read_from(
            parts(StatusCode::OK, headers),
            io::Cursor::new(Vec::new()),
        )
        .unwrap();

        let values: Vec<_> = response.headers().get_all("set-cookie").iter().collect();
        assert_eq!(values, ["a=1", "b=2"]);
    }

    #[test]
    fn body_reader_is_drained_and_dropped() {
        let drained = Arc::new(AtomicBool::new(false));
        let dropped = Arc::new(AtomicBool::new(false));
        let reader = TrackingReader {
            data: io::Cursor::new(b"payload".to_vec()),
            drained: drained.clone(),
            dropped: dropped.clone(),
        };

        let response =
            HttpResponse::read_from(parts(StatusCode::OK, HeaderMap::new()), reader).unwrap();

        assert!(drained.load(Ordering::SeqCst));
        assert!(dropped.load(Ordering::SeqCst));
        assert_eq!(response.body(), b"payload");
    }

    #[test]
    fn read_failure_surfaces_as_error() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("connection reset"))
            }
        }

        let err = HttpResponse::read_from(parts(StatusCode::OK, HeaderMap::new()), FailingReader)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
