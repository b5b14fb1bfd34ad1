//! Request descriptions for the thread-lookup API.
//!
//! A [`ThreadRequest`] is a transport-neutral description of a single HTTP
//! GET: the URL, query parameters, and headers. Building one performs no
//! I/O; hand it to a [`Transport`](crate::Transport) implementation to
//! execute it.

use crate::config::Config;

/// Header name carrying the API credential.
pub const API_KEY_HEADER: &str = "api_key";

/// Value of the `accept` header sent on every request.
pub const ACCEPT_JSON: &str = "application/json";

/// Query parameter naming the thread to look up.
pub const THREAD_HASH_PARAM: &str = "threadHash";

/// A transport-neutral description of one thread-lookup GET.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadRequest {
    /// Full endpoint URL, without the query string.
    pub url: String,
    /// Query parameters as (name, value) pairs, in emission order.
    pub query: Vec<(String, String)>,
    /// Request headers as (name, value) pairs.
    pub headers: Vec<(String, String)>,
}

impl ThreadRequest {
    /// Build the lookup request for all casts in a thread.
    ///
    /// The credential from `config` is attached unconditionally, even when
    /// empty; credential validation is left to the server.
    pub fn all_casts_in_thread(config: &Config, thread_hash: &str) -> Self {
        Self {
            url: format!("{}/all-casts-in-thread", config.base_url()),
            query: vec![(THREAD_HASH_PARAM.to_string(), thread_hash.to_string())],
            headers: vec![
                ("accept".to_string(), ACCEPT_JSON.to_string()),
                (API_KEY_HEADER.to_string(), config.api_key().to_string()),
            ],
        }
    }

    /// The `threadHash` query parameter, if present.
    pub fn thread_hash(&self) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == THREAD_HASH_PARAM)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.as_str())
    }
}
