//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rhevent_extractor::{extract_event_id, extract_event_ids};
use rhevent_sdk::{EventClient, ResourcePath, SdkError, Transport};
use std::fs;

/// Execute the parse command.
pub fn execute_parse<T>(
    args: ParseArgs,
    client: &EventClient<T>,
    formatter: &Formatter,
) -> Result<()>
where
    T: Transport,
    SdkError: From<T::Error>,
{
    let code = read_input(&args)?;

    if args.all {
        let ids = extract_event_ids(&code);
        if ids.is_empty() {
            println!("{}", formatter.warning("No event ID found in the code"));
        }
        for id in &ids {
            println!("{}", formatter.event_id(id));
        }
        return Ok(());
    }

    let Some(event_id) = extract_event_id(&code) else {
        println!("{}", formatter.warning("No event ID found in the code"));
        return Ok(());
    };

    println!("{}", formatter.event_id(&event_id));

    if args.fetch {
        let url = client.url_for(&ResourcePath::Event(event_id))?;
        println!("{}", formatter.info(&format!("Fetching from URL: {}", url)));

        match client.get_event_data(&event_id) {
            Ok(event) => println!("{}", formatter.format_document(&event)?),
            Err(e) => println!("{}", formatter.error(&format!("Error fetching from URL: {}", e))),
        }
    }

    Ok(())
}

/// The code to scan: the positional argument or the contents of `--file`.
fn read_input(args: &ParseArgs) -> Result<String> {
    match (&args.code, &args.file) {
        (Some(code), _) => Ok(code.clone()),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(CliError::InvalidInput(
            "Provide code or --file".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use rhevent_sdk::MockTransport;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const JS_SNIPPET: &str =
        r#"var eventManager = new EventManager("events/b69a294c-a074-4f4e-b949-4ae7de90c3e3", tooOld);"#;

    fn args(code: Option<&str>, fetch: bool) -> ParseArgs {
        ParseArgs {
            code: code.map(str::to_string),
            file: None,
            fetch,
            all: false,
        }
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "<script>{}</script>", JS_SNIPPET).unwrap();

        let parse_args = ParseArgs {
            code: None,
            file: Some(file.path().to_path_buf()),
            fetch: false,
            all: false,
        };
        let code = read_input(&parse_args).unwrap();
        assert!(code.contains("events/b69a294c"));
    }

    #[test]
    fn test_read_input_missing() {
        assert!(matches!(read_input(&args(None, false)), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_without_fetch_makes_no_request() {
        let transport = MockTransport::new();
        let client = EventClient::with_transport("http://host/api", transport.clone());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_parse(args(Some(JS_SNIPPET), false), &client, &formatter).unwrap();
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_parse_fetch_failure_is_not_fatal() {
        let transport = MockTransport::failing();
        let client = EventClient::with_transport("http://host/api", transport.clone());
        let formatter = Formatter::new(OutputFormat::Json, false);

        assert!(execute_parse(args(Some(JS_SNIPPET), true), &client, &formatter).is_ok());
        assert_eq!(
            transport.calls(),
            vec!["http://host/events/b69a294c-a074-4f4e-b949-4ae7de90c3e3"]
        );
    }

    #[test]
    fn test_parse_no_reference_skips_fetch() {
        let transport = MockTransport::new();
        let client = EventClient::with_transport("http://host/api", transport.clone());
        let formatter = Formatter::new(OutputFormat::Table, false);

        execute_parse(args(Some("var x = 1;"), true), &client, &formatter).unwrap();
        assert_eq!(transport.call_count(), 0);
    }
}
