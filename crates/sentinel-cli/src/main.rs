mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use sentinel_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for scan output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Scan(args) => commands::scan::handle(args, &config).await,
        cli::Commands::Patterns { patterns } => commands::patterns::handle(&patterns, &config),
        cli::Commands::Config(cmd) => commands::config::handle(cmd, cli.config.as_deref(), &config),
    }
}
