//! Showcase CLI
//!
//! Browse the hosted project portfolio from the terminal.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use showcase_cli::ShowcaseConfig;
use showcase_cli::cli::{Args, Command};
use showcase_cli::commands::{build_source, run_detail, run_list, run_random, run_session};
use showcase_cli::config_handlers::handle_config_command;
use showcase_cli::logging;
use showcase_client::ProjectSource;

/// Loads config, starts logging and picks the project source.
fn prepare(
    config_path: Option<&str>,
    file: Option<&str>,
    verbose: bool,
) -> Result<(ShowcaseConfig, Arc<dyn ProjectSource>)> {
    let config = ShowcaseConfig::load(config_path)?;
    logging::init(&config.logging.level, verbose);
    tracing::debug!(store = ?config.store, "Configuration loaded");
    let source = build_source(&config, file)?;
    Ok((config, source))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.as_deref();
    let file = args.file.as_deref();
    let mut stdout = std::io::stdout();

    match args.command {
        // Skips loading so a broken file can still be replaced.
        Command::Config { action } => {
            logging::init(&ShowcaseConfig::default().logging.level, args.verbose);
            handle_config_command(config_path, action, &mut stdout)?;
        }
        Command::List => {
            let (_, source) = prepare(config_path, file, args.verbose)?;
            run_list(&source, &mut stdout).await?;
        }
        Command::Random => {
            let (_, source) = prepare(config_path, file, args.verbose)?;
            run_random(&source, &mut stdout).await?;
        }
        Command::Detail(detail) => {
            let (config, source) = prepare(config_path, file, args.verbose)?;
            let developer = config.developer.as_ref();
            let screen = run_detail(&source, &detail, developer, &mut stdout).await?;
            if detail.interactive {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                run_session(screen, stdin, &mut stdout).await?;
            }
        }
    }

    Ok(())
}
