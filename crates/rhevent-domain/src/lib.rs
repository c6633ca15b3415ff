//! rhevent Domain Layer
//!
//! Value types shared by every other crate in the workspace. Apart from
//! `uuid` for parsing identifiers it has no external dependencies and does
//! no I/O.
//!
//! ## Key Concepts
//!
//! - **EventId**: canonical lowercase 8-4-4-4-12 identifier of an event
//! - **ResourcePath**: the handful of API resources reachable from an event
//! - **Transport**: the seam between fetch logic and the network

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod event_id;
pub mod resource;
pub mod traits;

// Re-exports for convenience
pub use event_id::{EventId, EVENT_ID_LEN};
pub use resource::ResourcePath;
pub use traits::Transport;
