//! Event client implementation.

use crate::config::ClientConfig;
use crate::error::SdkError;
use crate::transport::HttpTransport;
use crate::Document;
use reqwest::Url;
use rhevent_domain::{EventId, ResourcePath, Transport};
use tracing::{debug, warn};

/// Client for the timing server's event API
///
/// Every fetch is a single blocking GET against the configured base
/// address. `get_*` operations propagate failures to the caller;
/// [`download_api_data`](Self::download_api_data) and
/// [`find_event_id`](Self::find_event_id) swallow them and degrade to an
/// empty result.
pub struct EventClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl EventClient<HttpTransport> {
    /// Create a client talking HTTP to `base_url`
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Ok(Self::with_transport(base_url, HttpTransport::new()?))
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, SdkError> {
        Self::new(&config.api_url)
    }
}

impl<T> EventClient<T> {
    /// Create a client over an arbitrary transport
    ///
    /// Trailing `/` characters are trimmed from `base_url`.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// The base address, without trailing separator
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T> EventClient<T>
where
    T: Transport,
    SdkError: From<T::Error>,
{
    /// Absolute URL of a resource
    ///
    /// `Root` is the base address unchanged. Every other path is absolute and
    /// resolves against the base's origin, so `http://host:8080/api` serves
    /// events from `http://host:8080/events`.
    pub fn url_for(&self, path: &ResourcePath) -> Result<String, SdkError> {
        if matches!(path, ResourcePath::Root) {
            return Ok(self.base_url.clone());
        }

        let base = Url::parse(&self.base_url)
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        let url = base
            .join(&path.to_string())
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", path, e)))?;

        Ok(url.into())
    }

    /// GET an absolute URL and decode the body as JSON
    pub fn fetch_url(&self, url: &str) -> Result<Document, SdkError> {
        let body = self.transport.get_text(url)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch(&self, path: &ResourcePath) -> Result<Document, SdkError> {
        self.fetch_url(&self.url_for(path)?)
    }

    /// Fetch a single event: `/events/<id>`
    pub fn get_event_data(&self, event_id: &EventId) -> Result<Document, SdkError> {
        self.fetch(&ResourcePath::Event(*event_id))
    }

    /// Fetch the event collection: `/events`
    pub fn get_all_events(&self) -> Result<Document, SdkError> {
        self.fetch(&ResourcePath::Events)
    }

    /// Fetch a race: `/events/<event_id>/<race_id>/Race.json`
    pub fn get_race_data(&self, event_id: &EventId, race_id: &str) -> Result<Document, SdkError> {
        self.fetch(&ResourcePath::Race(*event_id, race_id.to_string()))
    }

    /// Fetch an event's rounds and pick the one whose `ID` equals `round_id`
    ///
    /// The lookup is a linear scan over `/events/<event_id>/Rounds.json`.
    /// Returns `Ok(None)` when no round matches, including when the
    /// collection is not a JSON array.
    pub fn get_round_data(
        &self,
        event_id: &EventId,
        round_id: &str,
    ) -> Result<Option<Document>, SdkError> {
        let rounds = self.fetch(&ResourcePath::Rounds(*event_id))?;

        let Document::Array(rounds) = rounds else {
            debug!("Rounds for event {} is not an array", event_id);
            return Ok(None);
        };

        Ok(rounds
            .into_iter()
            .find(|round| round.get("ID").and_then(Document::as_str) == Some(round_id)))
    }

    /// Download the raw body of the base address
    ///
    /// Never fails: any error is logged and an empty string returned.
    pub fn download_api_data(&self) -> String {
        match self.transport.get_text(&self.base_url) {
            Ok(body) => body,
            Err(e) => {
                warn!("Error downloading from API {}: {}", self.base_url, SdkError::from(e));
                String::new()
            }
        }
    }

    /// Discover the current event by scanning the API root for an event reference
    pub fn find_event_id(&self) -> Option<EventId> {
        let api_data = self.download_api_data();
        if api_data.is_empty() {
            return None;
        }

        rhevent_extractor::extract_event_id(&api_data)
    }
}
