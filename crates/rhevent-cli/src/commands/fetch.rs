//! Event, race and round command implementations.

use crate::cli::{EventArgs, RaceArgs, RoundArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rhevent_sdk::{Document, EventClient, EventId, SdkError, Transport};

/// Execute the event command.
pub fn execute_event<T>(
    args: EventArgs,
    client: &EventClient<T>,
    formatter: &Formatter,
) -> Result<()>
where
    T: Transport,
    SdkError: From<T::Error>,
{
    let event_id = parse_event_id(&args.event_id)?;
    print_result(client.get_event_data(&event_id), formatter)
}

/// Execute the race command.
pub fn execute_race<T>(
    args: RaceArgs,
    client: &EventClient<T>,
    formatter: &Formatter,
) -> Result<()>
where
    T: Transport,
    SdkError: From<T::Error>,
{
    let event_id = parse_event_id(&args.event_id)?;
    print_result(client.get_race_data(&event_id, &args.race_id), formatter)
}

/// Execute the round command.
pub fn execute_round<T>(
    args: RoundArgs,
    client: &EventClient<T>,
    formatter: &Formatter,
) -> Result<()>
where
    T: Transport,
    SdkError: From<T::Error>,
{
    let event_id = parse_event_id(&args.event_id)?;

    match client.get_round_data(&event_id, &args.round_id) {
        Ok(Some(round)) => println!("{}", formatter.format_document(&round)?),
        Ok(None) => println!(
            "{}",
            formatter.warning(&format!("Round '{}' not found in event {}", args.round_id, event_id))
        ),
        Err(e) => println!("{}", formatter.error(&format!("Error fetching round: {}", e))),
    }

    Ok(())
}

fn parse_event_id(raw: &str) -> Result<EventId> {
    EventId::from_string(raw).map_err(CliError::InvalidInput)
}

/// Print a fetched document, or report the fetch failure and carry on.
fn print_result(result: std::result::Result<Document, SdkError>, formatter: &Formatter) -> Result<()> {
    match result {
        Ok(document) => println!("{}", formatter.format_document(&document)?),
        Err(e) => println!("{}", formatter.error(&format!("Error fetching from URL: {}", e))),
    }
    Ok(())
}
