//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_checker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_checker::initialization::init_logger_with;
use domain_checker::{run_check, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_check(config).await {
        eprintln!("domain_checker error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
