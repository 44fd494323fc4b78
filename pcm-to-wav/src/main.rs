//! pcm-to-wav - Main entry point
//!
//! `pcm-to-wav <directory> <output_file>`
//!
//! Standard output carries only the usage line or the confirmation line; logs
//! go to standard error. Exit codes: 0 on success, 1 on a usage error or any
//! filesystem failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use pcm_to_wav::{ContainerSummary, Converter};

/// Command-line arguments for pcm-to-wav
#[derive(Parser, Debug)]
#[command(name = "pcm-to-wav")]
#[command(about = "Concatenate a directory of raw PCM fragments into one WAV file")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Directory containing the .pcm fragments
    directory: PathBuf,

    /// WAV file to create (truncated if it exists)
    output_file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pcm_to_wav=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "pcm-to-wav".to_string());

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            debug!("Argument error: {}", e.kind());
            println!("Usage: {} <directory> <output_file>", program);
            return ExitCode::from(1);
        }
    };

    info!("Starting pcm-to-wav v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(_) => {
            println!("Saved PCM data to {}", args.output_file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<ContainerSummary> {
    info!("Fragment directory: {}", args.directory.display());
    info!("Output file: {}", args.output_file.display());

    Converter::default()
        .convert(&args.directory, &args.output_file)
        .with_context(|| {
            format!(
                "Failed to convert {} into {}",
                args.directory.display(),
                args.output_file.display()
            )
        })
}
