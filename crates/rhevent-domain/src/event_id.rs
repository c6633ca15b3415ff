//! Event identifier - the UUID-shaped key of an event on the timing server

use std::fmt;
use std::str::FromStr;

/// Length of the canonical 8-4-4-4-12 form
pub const EVENT_ID_LEN: usize = 36;

/// Identifier of an event, e.g. `b69a294c-a074-4f4e-b949-4ae7de90c3e3`
///
/// Only the canonical lowercase hyphenated form is accepted. Uppercase hex,
/// braced, URN or simple (unhyphenated) forms are rejected, so parsing and
/// displaying an `EventId` gives back the exact input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u128);

impl EventId {
    /// Create an EventId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an EventId from its canonical lowercase form
    ///
    /// # Examples
    ///
    /// ```
    /// use rhevent_domain::EventId;
    ///
    /// let id = EventId::from_string("b69a294c-a074-4f4e-b949-4ae7de90c3e3").unwrap();
    /// assert_eq!(id.to_string(), "b69a294c-a074-4f4e-b949-4ae7de90c3e3");
    ///
    /// assert!(EventId::from_string("B69A294C-A074-4F4E-B949-4AE7DE90C3E3").is_err());
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        if s.len() != EVENT_ID_LEN {
            return Err(format!(
                "Invalid event ID '{}': expected {} characters",
                s, EVENT_ID_LEN
            ));
        }

        let parsed = uuid::Uuid::try_parse(s)
            .map_err(|e| format!("Invalid event ID '{}': {}", s, e))?;

        // try_parse accepts uppercase hex; the canonical form must round-trip
        if parsed.hyphenated().to_string() != s {
            return Err(format!(
                "Invalid event ID '{}': only lowercase hex digits are allowed",
                s
            ));
        }

        Ok(Self(parsed.as_u128()))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0).hyphenated())
    }
}

impl FromStr for EventId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}
