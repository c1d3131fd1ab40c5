//! seoreport
//!
//! Monthly SEO report generator: serve the form, or render reports from
//! TOML submission files.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use seoreport_cli::cli::{Args, Command};
use seoreport_cli::{commands, config_handlers};
use seoreport_core::{AppConfig, ConfigManager};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "debug"
    } else {
        "info,seoreport=debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .init();

    let config_path = args.config.as_deref();
    match args.command {
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action)?;
        }
        Command::Serve { host, port } => {
            let config = AppConfig::load(config_path)?;
            commands::serve(config, host, port).await?;
        }
        Command::Render { submission, out } => {
            let config = AppConfig::load(config_path)?;
            let written = commands::render(&config, &submission, &out)
                .with_context(|| format!("rendering {}", submission.display()))?;
            println!("{}", written.display());
        }
        Command::Period { month, year } => {
            let config = AppConfig::load(config_path)?;
            println!("{}", commands::period(&config, &month, year)?);
        }
    }

    Ok(())
}
