//! Client configuration.
//!
//! Configuration is an explicit value passed to the client; nothing is read
//! from the environment at load time. [`Config::from_env`] performs the one
//! environment read when the caller asks for it.

use std::env;

/// Default base URL of the Neynar Farcaster v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.neynar.com/v1/farcaster";

/// Environment variable holding the Neynar API key.
pub const API_KEY_ENV: &str = "NEYNAR_API";

/// Configuration for a thread client.
///
/// The API key is sent as-is on every request; it is not validated locally.
/// An empty or wrong key is rejected server-side and surfaced unchanged as
/// an [`Error::Http`](crate::Error::Http).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    api_key: String,
    base_url: String,
}

impl Config {
    /// Create a configuration with the given API key and the default
    /// Neynar base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the API key from the `NEYNAR_API` environment variable.
    ///
    /// An unset variable yields an empty key; the first request then fails
    /// with the server's authorization error rather than failing locally.
    pub fn from_env() -> Self {
        Self::new(env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Override the API base URL.
    ///
    /// Useful for tests and for pointing the client at a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The API credential sent in the `api_key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_base_url() {
        let config = Config::new("key");
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_override() {
        let config = Config::new("key").with_base_url("http://localhost:8080/v1");
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
    }
}
