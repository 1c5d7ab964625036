//! Profile Validator Binary
//!
//! Validates every profile under the profile root and exits non-zero if any
//! profile fails.

use clap::Parser;
use profile_validator::cli::{map_error, resolve_config, Cli, RunContext};
use profile_validator::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging before any validation output
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(root = %config.root.display(), "Profile validator starting");

    let context = RunContext::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match context.execute(&mut out) {
        Ok(code) => {
            info!(exit_code = code, "Validation completed");
            process::exit(code);
        }
        Err(e) => {
            error!("Validation failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
