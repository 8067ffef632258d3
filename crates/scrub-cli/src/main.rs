mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use scrub_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for redacted output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!("Loaded config from {}", config_path.display());

    match cli.command {
        cli::Commands::Serve { host, port } => commands::serve::handle(&config, host, port).await,
        cli::Commands::Redact {
            file,
            json,
            no_limits,
        } => commands::redact::handle(&config, file, json, no_limits),
        cli::Commands::Score { file, no_limits } => {
            commands::score::handle(&config, file, no_limits)
        }
        cli::Commands::Categories => commands::categories::handle(),
    }
}
