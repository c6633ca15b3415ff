//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use rhevent_sdk::persist::{filter_active, save_json};
use rhevent_sdk::{Document, EventClient, ResourcePath, SdkError, Transport};
use std::path::Path;

/// Execute the list command.
pub fn execute_list<T>(
    args: ListArgs,
    client: &EventClient<T>,
    formatter: &Formatter,
) -> Result<()>
where
    T: Transport,
    SdkError: From<T::Error>,
{
    let url = client.url_for(&ResourcePath::Events)?;
    println!("{}", formatter.info(&format!("Fetching events from: {}", url)));

    let events = match client.get_all_events() {
        Ok(events) => events,
        Err(e) => {
            println!("{}", formatter.error(&format!("Error fetching from URL: {}", e)));
            return Ok(());
        }
    };

    if args.active_only && events.is_object() {
        let active = filter_active(&events);
        println!("{}", formatter.info(&format!("Found {} active event(s)", active.len())));
        println!("{}", formatter.format_events(&active)?);
    } else {
        println!("{}", formatter.format_document(&events)?);
    }

    if let Some(path) = &args.save {
        if !is_empty_document(&events) {
            save_events(path, &events, formatter);
        }
    }

    Ok(())
}

/// Write the whole fetched collection; failures are reported, not propagated.
fn save_events(path: &Path, events: &Document, formatter: &Formatter) -> bool {
    match save_json(path, events) {
        Ok(()) => {
            println!("{}", formatter.success(&format!("Events saved to {}", path.display())));
            true
        }
        Err(e) => {
            println!(
                "{}",
                formatter.error(&format!("Error saving events to {}: {}", path.display(), e))
            );
            false
        }
    }
}

/// Nothing worth saving: null, `{}`, `[]` or `""`.
fn is_empty_document(document: &Document) -> bool {
    match document {
        Document::Null => true,
        Document::Object(map) => map.is_empty(),
        Document::Array(items) => items.is_empty(),
        Document::String(s) => s.is_empty(),
        _ => false,
    }
}
