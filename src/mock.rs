//! Mock transport for testing purposes.
//!
//! This module provides a transport implementation that replays canned
//! responses, so client behavior can be exercised without a network.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::request::ThreadRequest;
use crate::response::Cast;
use crate::transport::{HttpResponse, Transport};

/// A mock transport that replays canned responses in order.
///
/// Every request served is recorded, so tests can assert on the URL, query
/// parameters, and headers the client actually sent. Running out of canned
/// responses is a transport error.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: VecDeque<HttpResponse>,
    requests: Vec<ThreadRequest>,
}

impl MockTransport {
    /// Create a mock that replays the given responses in order.
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: responses.into(),
            requests: Vec::new(),
        }
    }

    /// Create a mock serving a single 200 response carrying the given casts.
    pub fn with_casts(casts: &[Cast]) -> Self {
        Self::new(vec![HttpResponse::new(200, thread_body(casts))])
    }

    /// Create a mock serving a single error response.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self::new(vec![HttpResponse::new(status, body)])
    }

    /// The requests served so far, in order.
    pub fn requests(&self) -> &[ThreadRequest] {
        &self.requests
    }

    /// Check if all canned responses have been served.
    pub fn is_complete(&self) -> bool {
        self.responses.is_empty()
    }
}

impl Transport for MockTransport {
    fn fetch(&mut self, request: &ThreadRequest) -> Result<HttpResponse> {
        self.requests.push(request.clone());
        self.responses
            .pop_front()
            .ok_or_else(|| Error::Transport("no more canned responses".to_string()))
    }
}

/// Encode casts as a thread-lookup response body (`result.casts`).
pub fn thread_body(casts: &[Cast]) -> String {
    serde_json::json!({ "result": { "casts": casts } }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Author;

    fn make_cast(hash: &str) -> Cast {
        Cast {
            hash: hash.to_string(),
            parent_hash: None,
            author: Author {
                username: "tester".to_string(),
            },
            text: "text".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_thread_body_round_trips() {
        let body = thread_body(&[make_cast("0xa")]);
        let decoded: crate::response::ThreadResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded.result.casts.len(), 1);
        assert_eq!(decoded.result.casts[0].hash, "0xa");
    }

    #[test]
    fn test_mock_replays_in_order_and_records() {
        let mut mock = MockTransport::new(vec![
            HttpResponse::new(200, "first"),
            HttpResponse::new(404, "second"),
        ]);

        let config = crate::Config::new("key");
        let request = ThreadRequest::all_casts_in_thread(&config, "0xabc");

        assert_eq!(mock.fetch(&request).unwrap().body, "first");
        assert_eq!(mock.fetch(&request).unwrap().status, 404);
        assert!(mock.is_complete());
        assert_eq!(mock.requests().len(), 2);
        assert_eq!(mock.requests()[0].thread_hash(), Some("0xabc"));
    }

    #[test]
    fn test_mock_exhausted_is_transport_error() {
        let mut mock = MockTransport::new(vec![]);
        let config = crate::Config::new("key");
        let request = ThreadRequest::all_casts_in_thread(&config, "0xabc");

        assert!(matches!(mock.fetch(&request), Err(Error::Transport(_))));
    }
}
