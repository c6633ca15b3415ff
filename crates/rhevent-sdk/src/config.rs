//! Client configuration

use serde::{Deserialize, Serialize};

/// Base address used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Configuration for an [`EventClient`](crate::EventClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base address of the timing server's JSON API
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl ClientConfig {
    /// Create a configuration for the given base address
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err("api_url must not be empty".to_string());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!(
                "api_url must start with http:// or https:// (got '{}')",
                url
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
