//! rhevent Rust SDK
//!
//! Client library for the event API of a race-timing server.
//!
//! # Example
//!
//! ```no_run
//! use rhevent_sdk::EventClient;
//!
//! let client = EventClient::new("http://localhost:8080/api").expect("Failed to build client");
//!
//! if let Some(event_id) = client.find_event_id() {
//!     let event = client.get_event_data(&event_id).expect("Failed to fetch event");
//!     println!("{}", event);
//! }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod manager;
pub mod persist;
mod transport;

pub use client::EventClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::SdkError;
pub use manager::EventManager;
pub use transport::{HttpTransport, MockTransport};

pub use rhevent_domain::{EventId, ResourcePath, Transport};

/// A JSON document returned by the API, passed through uninterpreted
pub type Document = serde_json::Value;
