//! Sans-IO thread client implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::request::ThreadRequest;
use crate::response::{Cast, ThreadResponse};
use crate::transport::HttpResponse;

/// Sans-IO client for the Neynar thread-lookup API.
///
/// This client handles protocol logic without performing any I/O. Build a
/// request with [`thread_request`](Client::thread_request), execute it
/// through your own HTTP layer, and hand the result to
/// [`decode_thread_response`](Client::decode_thread_response). For a
/// batteries-included client see [`ThreadClient`](crate::ThreadClient).
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
}

impl Client {
    /// Create a new client with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Access the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the GET request for all casts in the given thread.
    pub fn thread_request(&self, thread_hash: &str) -> ThreadRequest {
        ThreadRequest::all_casts_in_thread(&self.config, thread_hash)
    }

    /// Decode a thread-lookup response into the casts it carries.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] if the status is not 2xx; the server-reported body
    ///   is carried unchanged as the message, including authorization
    ///   failures for a missing or invalid API key
    /// - [`Error::InvalidResponse`] if a 2xx body is not JSON of the shape
    ///   `{"result": {"casts": [...]}}`
    pub fn decode_thread_response(&self, response: &HttpResponse) -> Result<Vec<Cast>> {
        if !response.is_success() {
            return Err(Error::Http {
                status: response.status,
                message: response.body.clone(),
            });
        }

        let decoded: ThreadResponse = serde_json::from_str(&response.body).map_err(|e| {
            Error::InvalidResponse(format!("body did not match result.casts shape: {e}"))
        })?;

        Ok(decoded.result.casts)
    }
}
