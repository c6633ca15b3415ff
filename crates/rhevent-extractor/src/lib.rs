//! rhevent Extractor
//!
//! Finds the event identifier embedded in client-side initialization code.
//!
//! # Overview
//!
//! Pages served by the timing server bootstrap their scripts with a line like
//!
//! ```text
//! var eventManager = new EventManager("events/b69a294c-a074-4f4e-b949-4ae7de90c3e3", tooOld);
//! ```
//!
//! The extractor scans any text for the first `events/<uuid>` reference and
//! hands back either the identifier or the whole matched path. The functions
//! are pure: no I/O, no shared mutable state, safe to call from any thread.
//!
//! Identifiers must be written in lowercase hex. `events/B69A294C-...` is not
//! a reference.

#![warn(missing_docs)]

mod pattern;

#[cfg(test)]
mod tests;

pub use pattern::{extract_event_id, extract_event_ids, extract_event_path, EVENT_PATTERN};
