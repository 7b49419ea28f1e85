//! wgo CLI - workspace-aware dependency vendoring for Go

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wgo::VendorError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        if let Some(lines) = e.downcast_ref::<VendorError>().and_then(VendorError::remediation) {
            for line in lines {
                eprintln!("{}", line);
            }
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("wgo=debug")
    } else {
        EnvFilter::new("wgo=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Save(args) => commands::save::execute(args),
        Commands::Vendor(args) => commands::vendor::execute(args),
        Commands::Restore(args) => commands::restore::execute(args),
    }
}
