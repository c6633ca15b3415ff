//! Resource paths on the timing server's JSON API

use crate::EventId;
use std::fmt;

/// Filename of an event's round collection
pub const ROUNDS_FILE: &str = "Rounds.json";

/// Filename of a single race document
pub const RACE_FILE: &str = "Race.json";

/// A resource on the API server
///
/// Rendered paths are absolute (they start with `/`), so resolving one
/// against a base address such as `http://host:8080/api` replaces the base's
/// path: `Events` lives at `http://host:8080/events`. `Root` renders empty
/// and stands for the base address itself.
///
/// # Examples
///
/// ```
/// use rhevent_domain::{EventId, ResourcePath};
///
/// let id = EventId::from_string("b69a294c-a074-4f4e-b949-4ae7de90c3e3").unwrap();
/// assert_eq!(
///     ResourcePath::Rounds(id).to_string(),
///     "/events/b69a294c-a074-4f4e-b949-4ae7de90c3e3/Rounds.json"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePath {
    /// The base address itself
    Root,

    /// `/events`
    Events,

    /// `/events/<id>`
    Event(EventId),

    /// `/events/<id>/Rounds.json`
    Rounds(EventId),

    /// `/events/<id>/<race_id>/Race.json`
    Race(EventId, String),
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourcePath::Root => Ok(()),
            ResourcePath::Events => write!(f, "/events"),
            ResourcePath::Event(id) => write!(f, "/events/{}", id),
            ResourcePath::Rounds(id) => write!(f, "/events/{}/{}", id, ROUNDS_FILE),
            ResourcePath::Race(id, race_id) => {
                write!(f, "/events/{}/{}/{}", id, race_id, RACE_FILE)
            }
        }
    }
}
