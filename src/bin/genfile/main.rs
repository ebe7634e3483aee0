use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};
use spaceforms::SpaceformsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let config = match &cli.config {
        Some(path) => SpaceformsConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SpaceformsConfig::default(),
    };

    match cli.command {
        Commands::Inspect { file } => commands::inspect(&config, &file),
        Commands::Validate { file } => commands::validate_file(&config, &file),
        Commands::Format {
            file,
            output,
            precision,
        } => commands::format(&config, &file, output.as_deref(), precision),
    }
}
