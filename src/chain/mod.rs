//! High-level chain-flattening API.
//!
//! This module turns the flat list of casts returned by the thread-lookup
//! endpoint into one readable line per cast, each line carrying the full
//! ancestry of the message:
//!
//! - [`CastIndex`]: an owned, immutable lookup from hash to cast plus the
//!   timestamp-sorted emission order
//! - [`build_chains`]: the end-to-end flattening over a whole thread
//! - [`build_chain`]: the ancestor walk for a single cast
//! - [`ThreadClientChainExt`]: extension trait adding chain operations to
//!   [`ThreadClient`](crate::ThreadClient)
//!
//! # Example
//!
//! ```rust
//! use cast_thread::{build_chains, Author, Cast};
//!
//! let casts = vec![
//!     Cast {
//!         hash: "0xr".to_string(),
//!         parent_hash: None,
//!         author: Author { username: "alice".to_string() },
//!         text: "hi".to_string(),
//!         timestamp: "2024-01-01T00:00:00Z".to_string(),
//!     },
//!     Cast {
//!         hash: "0xc".to_string(),
//!         parent_hash: Some("0xr".to_string()),
//!         author: Author { username: "bob".to_string() },
//!         text: "there".to_string(),
//!         timestamp: "2024-01-01T00:00:01Z".to_string(),
//!     },
//! ];
//!
//! let chains = build_chains(casts).unwrap();
//! assert_eq!(chains, vec![
//!     "[@alice]: hi",
//!     "[@alice]: hi; [@bob]: there",
//! ]);
//! ```

mod algorithm;
mod ext;
mod types;

// Re-export public types
pub use algorithm::{build_chain, build_chains, format_cast};
pub use ext::ThreadClientChainExt;
pub use types::CastIndex;
