use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vecx_tools::{
    bridge,
    cli::{Cli, Commands},
    config, dump,
};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Validate log level
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Diagnostics go to stderr; stdout carries only protocol data.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve { model } => {
            let mut bridge_config = config.bridge.clone();
            if let Some(model) = model {
                bridge_config.model_path = model;
            }
            bridge::run(&bridge_config).await?;
        }
        Commands::Dump { dir, output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.dump.output_path));
            let summary = dump::dump_directory(&dir, &output)?;
            info!(
                "Processed {} files into {} ({} unreadable)",
                summary.files,
                output.display(),
                summary.errors
            );
        }
    }

    Ok(())
}
