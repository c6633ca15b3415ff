//! Discover command implementation.

use crate::error::Result;
use crate::output::Formatter;
use rhevent_sdk::{EventClient, SdkError, Transport};

/// Execute the discover command.
pub fn execute_discover<T>(client: &EventClient<T>, formatter: &Formatter) -> Result<()>
where
    T: Transport,
    SdkError: From<T::Error>,
{
    match client.find_event_id() {
        Some(event_id) => println!("{}", formatter.event_id(&event_id)),
        None => println!("{}", formatter.warning("No event ID found in API data")),
    }

    Ok(())
}
