//! CLI route: config resolution and run context. Dispatches to the validator and presentation.

use crate::cli::output::map_error;
use crate::cli::parse::Cli;
use crate::cli::presentation::{format_header, format_summary};
use crate::config::{ConfigLoader, ValidatorConfig};
use crate::error::ValidatorError;
use crate::validator::ProfileValidator;
use std::io::Write;
use tracing::{debug, error};

/// Build the effective configuration from config sources and CLI flags.
/// Precedence: CLI flags override environment override config files override defaults.
pub fn resolve_config(cli: &Cli) -> Result<ValidatorConfig, ValidatorError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load(&cli.workspace)?,
    };

    if let Some(ref root) = cli.root {
        config.root = root.clone();
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.logging.file = Some(file.clone());
    }

    config.validate().map_err(ValidatorError::Config)?;
    Ok(config)
}

/// Runtime context for one validation run.
pub struct RunContext {
    config: ValidatorConfig,
}

impl RunContext {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Run the validation and write the full report to `out`.
    ///
    /// Returns the process exit status. A walk failure is reported on `out`
    /// and yields status 1; only output failures are returned as `Err`.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<i32, ValidatorError> {
        debug!(root = %self.config.root.display(), "Starting validation run");
        out.write_all(format_header().as_bytes())?;

        let validator = ProfileValidator::new(&self.config.root);
        let code = match validator.run(&mut *out) {
            Ok(report) => {
                out.write_all(format_summary(&report).as_bytes())?;
                report.exit_code()
            }
            Err(e @ ValidatorError::Walk { .. }) => {
                error!(error = %e, "Validation aborted");
                writeln!(out, "{}", map_error(&e))?;
                1
            }
            Err(e) => return Err(e),
        };

        out.flush()?;
        Ok(code)
    }
}
