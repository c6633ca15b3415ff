//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rhevent - Find the running event on a race-timing server and fetch its data.
#[derive(Debug, Parser)]
#[command(name = "rhevent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API base URL (overrides the active profile)
    #[arg(long, env = "RHEVENT_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the event ID from initialization code
    Parse(ParseArgs),

    /// List events
    List(ListArgs),

    /// Find the running event by scanning the API root
    Discover,

    /// Fetch a single event
    Event(EventArgs),

    /// Fetch a race of an event
    Race(RaceArgs),

    /// Fetch a round of an event
    Round(RoundArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Code containing the event initialization, e.g. `new EventManager("events/<id>")`
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub code: Option<String>,

    /// Read the code from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Fetch event data after parsing
    #[arg(long, conflicts_with = "all")]
    pub fetch: bool,

    /// Report every event ID in the input, not just the first
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Show only active events
    #[arg(long)]
    pub active_only: bool,

    /// Save the fetched events to a JSON file
    #[arg(long, value_name = "FILENAME")]
    pub save: Option<PathBuf>,
}

/// Arguments for the event command.
#[derive(Debug, Parser)]
pub struct EventArgs {
    /// Event ID
    pub event_id: String,
}

/// Arguments for the race command.
#[derive(Debug, Parser)]
pub struct RaceArgs {
    /// Event ID
    pub event_id: String,

    /// Race ID
    pub race_id: String,
}

/// Arguments for the round command.
#[derive(Debug, Parser)]
pub struct RoundArgs {
    /// Event ID
    pub event_id: String,

    /// Round ID (matched against the `ID` field of each round)
    pub round_id: String,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// API base URL
        #[arg(short, long)]
        url: String,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JS_SNIPPET: &str =
        r#"var eventManager = new EventManager("events/b69a294c-a074-4f4e-b949-4ae7de90c3e3", tooOld);"#;

    #[test]
    fn test_parse_command() {
        let cli = Cli::parse_from(["rhevent", "parse", JS_SNIPPET, "--fetch"]);
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.code.as_deref(), Some(JS_SNIPPET));
                assert!(args.fetch);
                assert!(!args.all);
            }
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_parse_requires_input() {
        assert!(Cli::try_parse_from(["rhevent", "parse"]).is_err());
        assert!(Cli::try_parse_from(["rhevent", "parse", "x", "--file", "y.js"]).is_err());
        assert!(Cli::try_parse_from(["rhevent", "parse", "--file", "y.js"]).is_ok());
    }

    #[test]
    fn test_parse_all_conflicts_with_fetch() {
        assert!(Cli::try_parse_from(["rhevent", "parse", JS_SNIPPET, "--all", "--fetch"]).is_err());
        assert!(Cli::try_parse_from(["rhevent", "parse", JS_SNIPPET, "--all"]).is_ok());
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::parse_from(["rhevent", "list", "--active-only", "--save", "events.json"]);
        match cli.command {
            Command::List(args) => {
                assert!(args.active_only);
                assert_eq!(args.save, Some(PathBuf::from("events.json")));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_global_api_url() {
        let cli = Cli::parse_from(["rhevent", "discover", "--api-url", "http://10.0.0.2:5000/api"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.2:5000/api"));
        assert!(matches!(cli.command, Command::Discover));
    }

    #[test]
    fn test_round_command() {
        let cli = Cli::parse_from([
            "rhevent",
            "round",
            "b69a294c-a074-4f4e-b949-4ae7de90c3e3",
            "round-1",
        ]);
        match cli.command {
            Command::Round(args) => assert_eq!(args.round_id, "round-1"),
            _ => panic!("Expected Round command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["rhevent"]).is_err());
    }
}
