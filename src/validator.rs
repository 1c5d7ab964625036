//! Profile Validator
//!
//! Single sequential pass over the profile root: walk, read, parse, check,
//! and fold each file into a [`ValidationReport`]. Progress lines are written
//! as each file finishes; the summary is rendered by [`crate::cli`].

use crate::error::ValidatorError;
use crate::report::{FileReport, ValidationReport};
use crate::rules;
use crate::tree::{ProfileFile, Walker};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Validates every profile document under a root directory
pub struct ProfileValidator {
    walker: Walker,
}

impl ProfileValidator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            walker: Walker::new(root),
        }
    }

    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// Validate the whole tree without producing output.
    pub fn validate(&self) -> Result<ValidationReport, ValidatorError> {
        self.run(&mut std::io::sink())
    }

    /// Validate the whole tree, writing one `Checking <file>... <marker>`
    /// line per profile to `out`.
    ///
    /// A walk error aborts the run; lines already written stay written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ValidationReport, ValidatorError> {
        info!(root = %self.root().display(), "Validating profiles");
        let mut report = ValidationReport::default();

        for file in self.walker.profiles() {
            let file = file.map_err(|e| {
                warn!(root = %self.root().display(), error = %e, "Profile walk failed");
                e
            })?;

            write!(out, "Checking {}... ", file.display)?;
            let file_report = check_file(&file);
            debug!(
                file = %file.display,
                errors = file_report.findings.errors.len(),
                warnings = file_report.findings.warnings.len(),
                "Profile checked"
            );
            let outcome = report.record(file_report);
            writeln!(out, "{}", outcome.marker())?;
        }

        info!(
            checked = report.checked,
            passed = report.passed,
            failed = report.failed,
            warnings = report.warnings.len(),
            "Validation finished"
        );
        Ok(report)
    }
}

/// Read, parse and check one profile file.
pub fn check_file(file: &ProfileFile) -> FileReport {
    let findings = match std::fs::read(&file.path) {
        Ok(bytes) => rules::check_document(&bytes),
        Err(e) => rules::read_failure(&e),
    };
    FileReport::new(file.display.clone(), findings)
}
