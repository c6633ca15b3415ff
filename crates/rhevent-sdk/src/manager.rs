//! Event manager: fetch-through cache of event documents.

use crate::client::EventClient;
use crate::error::SdkError;
use crate::persist::{filter_active, save_json};
use crate::transport::HttpTransport;
use crate::Document;
use rhevent_domain::Transport;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Keeps the last fetched document of every event seen during a run
///
/// The cache lives for the lifetime of the manager, is never evicted and is
/// only written to disk by [`save_events_to_file`](Self::save_events_to_file).
/// It is not synchronised: mutation requires `&mut self`.
pub struct EventManager<T = HttpTransport> {
    client: EventClient<T>,
    cached_events: BTreeMap<String, Document>,
}

impl EventManager<HttpTransport> {
    /// Create a manager talking HTTP to `api_url`
    pub fn new(api_url: &str) -> Result<Self, SdkError> {
        Ok(Self::with_client(EventClient::new(api_url)?))
    }
}

impl<T> EventManager<T>
where
    T: Transport,
    SdkError: From<T::Error>,
{
    /// Create a manager around an existing client
    pub fn with_client(client: EventClient<T>) -> Self {
        Self {
            client,
            cached_events: BTreeMap::new(),
        }
    }

    /// The underlying client
    pub fn client(&self) -> &EventClient<T> {
        &self.client
    }

    /// Extract an event reference from `code`, fetch the event and cache it
    ///
    /// Returns `None` when the code holds no reference or the fetch fails.
    pub fn parse_event_from_js(&mut self, code: &str) -> Option<Document> {
        let event_id = rhevent_extractor::extract_event_id(code)?;

        match self.client.get_event_data(&event_id) {
            Ok(event) => {
                self.cached_events.insert(event_id.to_string(), event.clone());
                Some(event)
            }
            Err(e) => {
                warn!("Error fetching event data for {}: {}", event_id, e);
                None
            }
        }
    }

    /// Fetch every event, keep the active ones and cache those with an `id`
    ///
    /// Returns an empty list when the fetch fails.
    pub fn get_all_active_events(&mut self) -> Vec<Document> {
        let events = match self.client.get_all_events() {
            Ok(events) => events,
            Err(e) => {
                warn!("Error fetching active events: {}", e);
                return Vec::new();
            }
        };

        let active_events = filter_active(&events);
        for event in &active_events {
            if let Some(key) = event.get("id").and_then(cache_key) {
                self.cached_events.insert(key, event.clone());
            }
        }

        active_events
    }

    /// Look up a cached event
    pub fn get_cached_event(&self, event_id: &str) -> Option<&Document> {
        self.cached_events.get(event_id)
    }

    /// All cached events, keyed by identifier
    pub fn cached_events(&self) -> &BTreeMap<String, Document> {
        &self.cached_events
    }

    /// Number of cached events
    pub fn cache_len(&self) -> usize {
        self.cached_events.len()
    }

    /// Write the whole cache to `path` as pretty-printed JSON
    ///
    /// Returns `false` (after logging) when the file cannot be written.
    pub fn save_events_to_file(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match save_json(path, &self.cached_events) {
            Ok(()) => {
                info!("Saved {} event(s) to {}", self.cached_events.len(), path.display());
                true
            }
            Err(e) => {
                warn!("Error saving events to {}: {}", path.display(), e);
                false
            }
        }
    }
}

fn cache_key(id: &Document) -> Option<String> {
    match id {
        Document::String(s) => Some(s.clone()),
        Document::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
