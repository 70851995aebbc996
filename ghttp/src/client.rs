use std::time::Duration;

use http::Method;

use crate::request;
use crate::{Error, HttpClient, HttpOptions, HttpResponse, RequestOptions};

/// Blocking HTTP client dispatching through [`ureq`].
///
/// A 4xx/5xx status is returned as a normal response; only transport-level
/// failures produce an error.
#[derive(Default)]
pub struct Client {
    options: HttpOptions,
    timeout: Option<Duration>,
}

impl Client {
    pub fn new(options: HttpOptions) -> Self {
        Self {
            options,
            timeout: None,
        }
    }

    pub fn new_with_timeout(options: HttpOptions, timeout: Duration) -> Self {
        Self {
            options,
            timeout: Some(timeout),
        }
    }

    fn agent(&self) -> ureq::Agent {
        ureq::Agent::config_builder()
            .tls_config(
                ureq::tls::TlsConfig::builder()
                    .provider(ureq::tls::TlsProvider::NativeTls)
                    .root_certs(ureq::tls::RootCerts::PlatformVerifier)
                    .build(),
            )
            .http_status_as_error(false)
            .timeout_global(self.timeout)
            .build()
            .into()
    }

    fn dispatch(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, Error> {
        let req = request::assemble(method, url, options, self.options.user_agent.as_deref())?;
        log::debug!("{} {}", req.method(), req.uri());

        let (parts, body) = req.into_parts();
        let agent = self.agent();
        let res = if body.is_empty() {
            let req = http::Request::from_parts(parts, ureq::SendBody::none());
            agent.run(req)
        } else {
            let req = http::Request::from_parts(parts, &body[..]);
            agent.run(req)
        }
        .map_err(Error::from)?;

        let (parts, body) = res.into_parts();
        HttpResponse::read_from(parts, body.into_reader())
    }
}

impl HttpClient for Client {
    fn get(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, Error> {
        self.dispatch(Method::GET, url, options)
    }

    fn post(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, Error> {
        self.dispatch(Method::POST, url, options)
    }

    fn put(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, Error> {
        self.dispatch(Method::PUT, url, options)
    }

    fn delete(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, Error> {
        self.dispatch(Method::DELETE, url, options)
    }
}
