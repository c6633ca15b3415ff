//! Error types for the rhevent SDK.

use thiserror::Error;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// The server answered with a client or server error status
    #[error("HTTP {status} for {url}")]
    Status {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Connection error (network, DNS, refused, etc.)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The base address or a resource path does not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other HTTP client failure
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Response body was not valid JSON, or a document could not be encoded
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Local file I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SdkError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            SdkError::ConnectionError(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => SdkError::Status {
                    status: status.as_u16(),
                    url: e.url().map(|u| u.to_string()).unwrap_or_default(),
                },
                None => SdkError::HttpError(e.to_string()),
            }
        } else {
            SdkError::HttpError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::JsonError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = SdkError::Status {
            status: 404,
            url: "http://localhost:8080/events".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "HTTP 404 for http://localhost:8080/events"
        );

        let err = SdkError::ConnectionError("refused".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = SdkError::from(parse_err);
        assert!(matches!(err, SdkError::JsonError(_)));
    }
}
