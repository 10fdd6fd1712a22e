use clap::Parser;
use config::ProgramConfig;
use error::AppError;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod config;
mod demo;
mod error;

use cli::CliArgs;

fn main() {
    if let Err(e) = bootstrap() {
        eprintln!("Error: {e}");
        // Log the full error for debugging
        error!(error = ?e, "Application failed");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<(), AppError> {
    // Parse command-line arguments
    let args = CliArgs::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Initialization(e.to_string()))?;

    info!("=== Modular Media Streaming Suite Demo ===");
    info!("");

    let program_config = ProgramConfig::load(args.config.as_deref())?;

    let report = demo::run(&program_config, None)?;
    info!(
        software_chunks = report.software.chunks_rendered,
        hardware_chunks = report.hardware.chunks_rendered,
        "Both runs finished"
    );

    info!("");
    info!("=== Demo Complete ===");
    Ok(())
}
