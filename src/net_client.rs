//! Generic thread client combining the sans-io core with a transport.
//!
//! [`ThreadClient`] pairs a [`Client`] for protocol logic with any
//! [`Transport`] for I/O. The generic parameter `T` can be the bundled
//! [`ReqwestTransport`](crate::ReqwestTransport), the
//! [`MockTransport`](crate::mock::MockTransport), or your own
//! implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "reqwest-transport")]
//! # {
//! use cast_thread::{Config, ThreadClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = ThreadClient::with_reqwest(Config::from_env());
//! let casts = client.fetch_thread("0x40b1313724c4e4f5449c74fb4995593576dc1ff8")?;
//! println!("thread has {} casts", casts.len());
//! # Ok(())
//! # }
//! # }
//! ```

use crate::client::Client;
use crate::config::Config;
use crate::error::Result;
use crate::response::Cast;
use crate::transport::Transport;

#[cfg(feature = "reqwest-transport")]
use crate::transport::ReqwestTransport;

/// High-level thread client generic over the HTTP transport.
pub struct ThreadClient<T: Transport> {
    /// The sans-io client handling protocol logic.
    client: Client,
    /// The transport performing the HTTP GET.
    transport: T,
}

impl<T: Transport> ThreadClient<T> {
    /// Create a client from a configuration and transport.
    pub fn new(config: Config, transport: T) -> Self {
        Self {
            client: Client::new(config),
            transport,
        }
    }

    /// Fetch all casts in the thread rooted at `thread_hash`.
    ///
    /// Performs one blocking GET against the thread-lookup endpoint. There
    /// are no retries and no caching; the call either returns the decoded
    /// casts or the first error encountered.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`](crate::Error::Transport) if the exchange
    ///   could not be completed
    /// - [`Error::Http`](crate::Error::Http) for a non-2xx status
    /// - [`Error::InvalidResponse`](crate::Error::InvalidResponse) if the
    ///   body is not the expected shape
    pub fn fetch_thread(&mut self, thread_hash: &str) -> Result<Vec<Cast>> {
        let request = self.client.thread_request(thread_hash);
        tracing::debug!(thread_hash, url = %request.url, "fetching thread");

        let response = self.transport.fetch(&request)?;
        let casts = self.client.decode_thread_response(&response)?;

        tracing::debug!(thread_hash, count = casts.len(), "thread fetched");
        Ok(casts)
    }

    /// Access the sans-io client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(feature = "reqwest-transport")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest-transport")))]
impl ThreadClient<ReqwestTransport> {
    /// Create a client using the blocking reqwest transport.
    pub fn with_reqwest(config: Config) -> Self {
        Self::new(config, ReqwestTransport::new())
    }
}
