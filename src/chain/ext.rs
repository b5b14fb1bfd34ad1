//! Extension trait for high-level chain operations.
//!
//! This module defines the `ThreadClientChainExt` trait which adds
//! chain-flattening operations to thread clients.

use crate::error::Result;
use crate::net_client::ThreadClient;
use crate::transport::Transport;

use super::algorithm::build_chains;

/// Extension trait adding chain-flattening operations to thread clients.
///
/// # Example
///
/// ```rust,no_run
/// # #[cfg(feature = "reqwest-transport")]
/// # {
/// use cast_thread::{Config, ThreadClient, ThreadClientChainExt};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = ThreadClient::with_reqwest(Config::from_env());
/// for chain in client.fetch_chains("0x40b1313724c4e4f5449c74fb4995593576dc1ff8")? {
///     println!("{chain}");
/// }
/// # Ok(())
/// # }
/// # }
/// ```
pub trait ThreadClientChainExt {
    /// Fetch a thread and flatten every cast into its conversation chain.
    ///
    /// Chains are returned in timestamp-ascending order of their casts.
    /// A fatal error anywhere in the fetch or the flattening aborts the
    /// whole call with no partial output.
    fn fetch_chains(&mut self, thread_hash: &str) -> Result<Vec<String>>;
}

/// Blanket implementation for all `ThreadClient<T>` where `T: Transport`.
impl<T: Transport> ThreadClientChainExt for ThreadClient<T> {
    fn fetch_chains(&mut self, thread_hash: &str) -> Result<Vec<String>> {
        let casts = self.fetch_thread(thread_hash)?;
        build_chains(casts)
    }
}
