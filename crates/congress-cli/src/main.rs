use clap::Parser;
use congress_core::storage::config::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

/// Log to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let settings = match Settings::load(settings_path.clone()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    if let Some(config_dir) = &cli.config_dir {
        log::debug!("Using config directory: {}", config_dir);
    }

    let dispatcher = Dispatcher::new(settings, settings_path, cli.api_key, cli.format);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
