//! Response types for the thread-lookup API.
//!
//! The endpoint returns a JSON envelope of the form
//! `{"result": {"casts": [...]}}`. [`Cast`] is the typed record for one
//! message; the envelope types exist only to mirror the wire shape.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The author of a cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Display name of the sender.
    pub username: String,
}

/// One message in a Farcaster discussion thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cast {
    /// Unique identifier; the primary key within a thread.
    pub hash: String,
    /// Hash of the cast this one replies to; `None` for a root cast.
    #[serde(rename = "parentHash", default)]
    pub parent_hash: Option<String>,
    /// The sender.
    pub author: Author,
    /// Message body.
    pub text: String,
    /// Creation time as an RFC 3339 string.
    ///
    /// Used only for emission ordering; chain content does not depend on it.
    pub timestamp: String,
}

impl Cast {
    /// Parse the timestamp into a comparable instant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the timestamp is not valid RFC 3339.
    pub fn parsed_timestamp(&self) -> Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).map_err(|e| {
            Error::Parse(format!(
                "bad timestamp {:?} on cast {}: {e}",
                self.timestamp, self.hash
            ))
        })
    }

    /// Check whether this cast starts a thread or sub-thread.
    pub fn is_root(&self) -> bool {
        self.parent_hash.is_none()
    }
}

/// Envelope of a thread-lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadResponse {
    /// Payload wrapper.
    pub result: ThreadResult,
}

/// Payload of a thread-lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadResult {
    /// All casts in the thread, in server order.
    pub casts: Vec<Cast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_cast() {
        let json = r#"{
            "hash": "0xr",
            "parentHash": null,
            "author": {"username": "alice"},
            "text": "hi",
            "timestamp": "2024-01-01T00:00:00.000Z"
        }"#;

        let cast: Cast = serde_json::from_str(json).unwrap();
        assert_eq!(cast.hash, "0xr");
        assert!(cast.is_root());
        assert_eq!(cast.author.username, "alice");
        assert_eq!(cast.text, "hi");
    }

    #[test]
    fn test_deserialize_cast_missing_parent_hash_key() {
        // Some responses omit parentHash entirely for root casts.
        let json = r#"{
            "hash": "0xr",
            "author": {"username": "alice"},
            "text": "hi",
            "timestamp": "2024-01-01T00:00:00.000Z"
        }"#;

        let cast: Cast = serde_json::from_str(json).unwrap();
        assert!(cast.is_root());
    }

    #[test]
    fn test_deserialize_cast_with_parent() {
        let json = r#"{
            "hash": "0xc",
            "parentHash": "0xr",
            "author": {"username": "bob"},
            "text": "there",
            "timestamp": "2024-01-01T00:00:01.000Z"
        }"#;

        let cast: Cast = serde_json::from_str(json).unwrap();
        assert_eq!(cast.parent_hash.as_deref(), Some("0xr"));
        assert!(!cast.is_root());
    }

    #[test]
    fn test_parsed_timestamp() {
        let cast = Cast {
            hash: "0xr".to_string(),
            parent_hash: None,
            author: Author {
                username: "alice".to_string(),
            },
            text: "hi".to_string(),
            timestamp: "2024-01-01T12:30:00.000Z".to_string(),
        };

        let parsed = cast.parsed_timestamp().unwrap();
        assert_eq!(parsed.timestamp(), 1_704_112_200);
    }

    #[test]
    fn test_parsed_timestamp_invalid() {
        let cast = Cast {
            hash: "0xr".to_string(),
            parent_hash: None,
            author: Author {
                username: "alice".to_string(),
            },
            text: "hi".to_string(),
            timestamp: "yesterday".to_string(),
        };

        match cast.parsed_timestamp() {
            Err(Error::Parse(msg)) => assert!(msg.contains("0xr")),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_envelope() {
        let json = r#"{
            "result": {
                "casts": [
                    {
                        "hash": "0xr",
                        "parentHash": null,
                        "author": {"username": "alice"},
                        "text": "hi",
                        "timestamp": "2024-01-01T00:00:00.000Z"
                    }
                ]
            }
        }"#;

        let response: ThreadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.result.casts.len(), 1);
    }
}
