//! Error types for the thread client library.

use std::fmt;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when fetching or flattening a thread.
///
/// A parent hash that points outside the fetched set is deliberately not an
/// error: the chain builder degrades to an empty ancestor segment instead
/// (see [`build_chain`](crate::chain::build_chain)).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Non-2xx HTTP response from the thread-lookup endpoint
    Http {
        /// HTTP status code reported by the server
        status: u16,
        /// Response body or status text from the server
        message: String,
    },

    /// Malformed or missing field in a cast record (e.g. a bad timestamp)
    Parse(String),

    /// Response body could not be decoded as the expected shape
    InvalidResponse(String),

    /// Transport-level failure while performing the HTTP request
    Transport(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http { status, message } => write!(f, "HTTP error {status}: {message}"),
            Error::Parse(msg) => write!(f, "Parse error: {msg}"),
            Error::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
            Error::Transport(msg) => write!(f, "Transport error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
