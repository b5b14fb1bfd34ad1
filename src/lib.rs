//! # cast-thread
//!
//! A sans-io client for the Neynar Farcaster thread-lookup API that flattens
//! a nested reply tree into human-readable conversation chains.
//!
//! Every cast in a thread carries a `parentHash` pointing at the cast it
//! replies to. This library retrieves all casts in a thread and, for each
//! one, reconstructs the full ancestor-to-descendant chain as a single line:
//!
//! ```text
//! [@alice]: hi; [@bob]: there
//! ```
//!
//! ## Design Philosophy
//!
//! This library follows the "sans-io" design pattern:
//! - **Protocol Logic**: Request construction and response decoding are pure
//!   functions over in-memory values
//! - **I/O Separation**: The one HTTP GET happens behind the [`Transport`]
//!   trait, with an optional reqwest-backed implementation
//! - **Flexibility**: Bring your own HTTP stack, or use the mock transport
//!   to test without a network
//!
//! ## Examples
//!
//! ### Sans-IO Usage
//!
//! ```rust
//! use cast_thread::{Client, Config};
//!
//! let client = Client::new(Config::new("my-api-key"));
//! let request = client.thread_request("0x40b1313724c4e4f5449c74fb4995593576dc1ff8");
//! // Perform the GET through your own HTTP layer, then decode the result:
//! // let casts = client.decode_thread_response(&response)?;
//! ```
//!
//! ### With the Reqwest Transport
//!
//! ```rust,no_run
//! # #[cfg(feature = "reqwest-transport")]
//! # {
//! use cast_thread::{Config, ThreadClient, ThreadClientChainExt};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = ThreadClient::with_reqwest(Config::from_env());
//! for chain in client.fetch_chains("0x40b1313724c4e4f5449c74fb4995593576dc1ff8")? {
//!     println!("{chain}");
//! }
//! # Ok(())
//! # }
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod chain;
pub mod client;
pub mod config;
pub mod error;
pub mod net_client;
pub mod request;
pub mod response;
pub mod transport;

// Mock transport for testing
pub mod mock;

pub use chain::{build_chains, format_cast, CastIndex, ThreadClientChainExt};
pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use net_client::ThreadClient;
pub use request::ThreadRequest;
pub use response::{Author, Cast};
pub use transport::{HttpResponse, Transport};

#[cfg(feature = "reqwest-transport")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest-transport")))]
pub use transport::ReqwestTransport;
