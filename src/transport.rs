//! Transport seam for performing the HTTP GET.
//!
//! The sans-io core builds [`ThreadRequest`](crate::ThreadRequest)s and
//! decodes [`HttpResponse`]s; a [`Transport`] is the one place bytes move.
//! The library ships a blocking reqwest-backed implementation behind the
//! `reqwest-transport` feature and a [mock](crate::mock) for tests.

use crate::error::Result;
use crate::request::ThreadRequest;

#[cfg(feature = "reqwest-transport")]
use crate::error::Error;

/// A raw HTTP response: status code plus body text.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// Create a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status code indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Synchronous transport performing one HTTP GET per call.
///
/// Implementations block the calling thread until the response (or a
/// transport error) arrives. The library configures no explicit timeout;
/// the transport's own defaults apply.
pub trait Transport {
    /// Perform the GET described by `request`.
    ///
    /// A non-2xx status is not a transport error: it is returned as a
    /// normal [`HttpResponse`] and classified by the caller. Only failures
    /// to complete the exchange (DNS, connect, read) are
    /// [`Error::Transport`](crate::Error::Transport).
    fn fetch(&mut self, request: &ThreadRequest) -> Result<HttpResponse>;
}

/// Blocking transport backed by [`reqwest`].
#[cfg(feature = "reqwest-transport")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest-transport")))]
#[derive(Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "reqwest-transport")]
impl ReqwestTransport {
    /// Create a transport with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "reqwest-transport")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest-transport")))]
impl Transport for ReqwestTransport {
    fn fetch(&mut self, request: &ThreadRequest) -> Result<HttpResponse> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .map_err(|e| Error::Transport(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}
