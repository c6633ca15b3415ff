//! Locate `events/<uuid>` references in arbitrary text

use once_cell::sync::Lazy;
use regex::Regex;
use rhevent_domain::EventId;

/// Pattern for an event reference; group 1 is the identifier
pub const EVENT_PATTERN: &str =
    r"events/([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})";

static EVENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EVENT_PATTERN).expect("event pattern is valid"));

/// Extract the identifier of the first event reference in `text`
///
/// Returns `None` when no `events/<uuid>` substring is present. Only the
/// leftmost match is considered; later references are ignored.
///
/// # Examples
///
/// ```
/// use rhevent_extractor::extract_event_id;
///
/// let code = r#"var eventManager = new EventManager("events/b69a294c-a074-4f4e-b949-4ae7de90c3e3", tooOld);"#;
/// let id = extract_event_id(code).unwrap();
/// assert_eq!(id.to_string(), "b69a294c-a074-4f4e-b949-4ae7de90c3e3");
///
/// assert!(extract_event_id("").is_none());
/// ```
pub fn extract_event_id(text: &str) -> Option<EventId> {
    let caps = EVENT_RE.captures(text)?;
    let id = caps.get(1)?.as_str();
    // The pattern only admits the canonical form, so this cannot fail
    EventId::from_string(id).ok()
}

/// Extract the first event reference in `text`, including the `events/` prefix
///
/// # Examples
///
/// ```
/// use rhevent_extractor::extract_event_path;
///
/// let code = r#"new EventManager("events/b69a294c-a074-4f4e-b949-4ae7de90c3e3")"#;
/// assert_eq!(
///     extract_event_path(code),
///     Some("events/b69a294c-a074-4f4e-b949-4ae7de90c3e3")
/// );
/// ```
pub fn extract_event_path(text: &str) -> Option<&str> {
    EVENT_RE.find(text).map(|m| m.as_str())
}

/// Extract the identifiers of every event reference in `text`, in order
pub fn extract_event_ids(text: &str) -> Vec<EventId> {
    EVENT_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| EventId::from_string(m.as_str()).ok())
        .collect()
}
