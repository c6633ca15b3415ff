//! Transport implementations: blocking HTTP and a deterministic mock.

use crate::error::SdkError;
use rhevent_domain::Transport;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;

/// Blocking HTTP transport backed by `reqwest`
///
/// No request timeout is configured: a call against an endpoint that
/// accepts the connection but never answers blocks until the peer closes.
/// No authentication headers are sent.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new() -> Result<Self, SdkError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| SdkError::HttpError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    type Error = SdkError;

    fn get_text(&self, url: &str) -> Result<String, Self::Error> {
        debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            return Err(SdkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text()?)
    }
}

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
}

/// Mock transport for deterministic testing
///
/// Returns pre-configured bodies keyed by URL without touching the network.
/// URLs with no configured response answer `404` unless a default body is
/// set. Clones share the response table and the call log.
///
/// # Examples
///
/// ```
/// use rhevent_domain::Transport;
/// use rhevent_sdk::MockTransport;
///
/// let mut transport = MockTransport::new();
/// transport.add_response("http://host/api/events", r#"{"events": []}"#);
/// transport.add_status("http://host/api/events/missing", 404);
///
/// assert_eq!(transport.get_text("http://host/api/events").unwrap(), r#"{"events": []}"#);
/// assert!(transport.get_text("http://host/api/events/missing").is_err());
/// assert_eq!(transport.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Option<String>,
    fail_all: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Create an empty mock; every URL answers `404`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every call fails with a connection error
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Answer URLs with no specific response using `body`
    pub fn with_default(mut self, body: impl Into<String>) -> Self {
        self.default_response = Some(body.into());
        self
    }

    /// Answer `url` with `body`
    pub fn add_response(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), MockResponse::Body(body.into()));
    }

    /// Answer `url` with the serialized form of `value`
    pub fn add_json(&mut self, url: impl Into<String>, value: &serde_json::Value) {
        self.add_response(url, value.to_string());
    }

    /// Answer `url` with an error status
    pub fn add_status(&mut self, url: impl Into<String>, status: u16) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), MockResponse::Status(status));
    }

    /// URLs requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests made so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Transport for MockTransport {
    type Error = SdkError;

    fn get_text(&self, url: &str) -> Result<String, Self::Error> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        if self.fail_all {
            return Err(SdkError::ConnectionError(format!(
                "mock transport refused {}",
                url
            )));
        }

        let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        match responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(SdkError::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => match &self.default_response {
                Some(body) => Ok(body.clone()),
                None => Err(SdkError::Status {
                    status: 404,
                    url: url.to_string(),
                }),
            },
        }
    }
}
