//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rhevent_sdk::{Document, EventId};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a single fetched document.
    pub fn format_document(&self, document: &Document) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
            OutputFormat::Table => self.format_document_table(document),
            OutputFormat::Quiet => Ok(serde_json::to_string(document)?),
        }
    }

    /// Format a list of events.
    pub fn format_events(&self, events: &[Document]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(events)?),
            OutputFormat::Table => Ok(self.format_events_table(events)),
            OutputFormat::Quiet => Ok(events
                .iter()
                .filter_map(|e| e.get("id").map(display_value))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format an extracted event ID.
    pub fn event_id(&self, event_id: &EventId) -> String {
        match self.format {
            OutputFormat::Quiet => event_id.to_string(),
            _ => self.success(&format!("Found event ID: {}", event_id)),
        }
    }

    /// Top-level fields of an object as a two-column table.
    fn format_document_table(&self, document: &Document) -> Result<String> {
        let Some(fields) = document.as_object() else {
            return Ok(serde_json::to_string_pretty(document)?);
        };

        if fields.is_empty() {
            return Ok(self.colorize("Empty document.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, value) in fields {
            builder.push_record([key.clone(), display_value(value)]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format events as a table.
    fn format_events_table(&self, events: &[Document]) -> String {
        if events.is_empty() {
            return self.colorize("No events found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Status"]);

        for event in events {
            builder.push_record([
                field_or_dash(event, "id"),
                field_or_dash(event, "name"),
                field_or_dash(event, "status"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Strings unquoted, everything else as compact JSON.
fn display_value(value: &Document) -> String {
    match value {
        Document::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn field_or_dash(event: &Document, key: &str) -> String {
    event
        .get(key)
        .map(display_value)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_events() -> Vec<Document> {
        vec![
            json!({"id": "e1", "name": "Club Night", "status": "active"}),
            json!({"id": "e2", "status": "finished"}),
        ]
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_events(&sample_events()).unwrap();
        assert!(output.contains("\"name\": \"Club Night\""));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_events(&sample_events()).unwrap();
        assert_eq!(output, "e1\ne2");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_events(&sample_events()).unwrap();
        assert!(output.contains("Status"));
        assert!(output.contains("Club Night"));
        assert!(output.contains('-'));
    }

    #[test]
    fn test_empty_events() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_events(&[]).unwrap();
        assert!(output.contains("No events found"));
    }

    #[test]
    fn test_document_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_document(&json!({"name": "Club Night", "rounds": [1, 2]}))
            .unwrap();
        assert!(output.contains("Field"));
        assert!(output.contains("Club Night"));
        assert!(output.contains("[1,2]"));
    }

    #[test]
    fn test_document_table_non_object() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_document(&json!([1, 2])).unwrap();
        assert!(output.starts_with('['));
    }

    #[test]
    fn test_event_id_quiet() {
        let id = EventId::from_string("b69a294c-a074-4f4e-b949-4ae7de90c3e3").unwrap();

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.event_id(&id), "b69a294c-a074-4f4e-b949-4ae7de90c3e3");

        let table = Formatter::new(OutputFormat::Table, false);
        assert_eq!(
            table.event_id(&id),
            "✓ Found event ID: b69a294c-a074-4f4e-b949-4ae7de90c3e3"
        );
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
