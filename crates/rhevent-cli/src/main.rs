//! rhevent CLI - find the running event on a race-timing server and fetch its data.

use clap::Parser;
use rhevent_cli::commands;
use rhevent_cli::{Cli, Command, Config, Formatter};
use rhevent_sdk::EventClient;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> rhevent_cli::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let api_url = cli.api_url.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Command::Profile(args) => commands::execute_profile(args, profile, &mut config, &formatter)?,
        Command::Parse(args) => {
            commands::execute_parse(args, &connect(&config, api_url, profile)?, &formatter)?
        }
        Command::List(args) => {
            commands::execute_list(args, &connect(&config, api_url, profile)?, &formatter)?
        }
        Command::Discover => commands::execute_discover(&connect(&config, api_url, profile)?, &formatter)?,
        Command::Event(args) => {
            commands::execute_event(args, &connect(&config, api_url, profile)?, &formatter)?
        }
        Command::Race(args) => {
            commands::execute_race(args, &connect(&config, api_url, profile)?, &formatter)?
        }
        Command::Round(args) => {
            commands::execute_round(args, &connect(&config, api_url, profile)?, &formatter)?
        }
    }

    Ok(())
}

/// Build a client for the URL picked by `--api-url`, `--profile` or the active profile.
fn connect(config: &Config, api_url: Option<&str>, profile: Option<&str>) -> rhevent_cli::Result<EventClient> {
    let client_config = config.resolve_api_url(api_url, profile)?;
    Ok(EventClient::from_config(&client_config)?)
}
