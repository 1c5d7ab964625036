//! Validation findings and run report.

use std::fmt;

/// A problem that fails the file it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path relative to the profile root
    pub file: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// An advisory finding; never affects the outcome of a file or run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub file: String,
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Rule messages produced for a single document, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Findings {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Pass/fail outcome of one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Passed,
    Failed,
}

impl FileOutcome {
    /// Progress marker printed after `Checking <file>... `
    pub fn marker(self) -> &'static str {
        match self {
            FileOutcome::Passed => "✅ PASSED",
            FileOutcome::Failed => "❌ FAILED",
        }
    }
}

/// Result of validating one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub findings: Findings,
}

impl FileReport {
    pub fn new(file: impl Into<String>, findings: Findings) -> Self {
        Self {
            file: file.into(),
            findings,
        }
    }

    /// A file fails iff at least one error was recorded for it.
    pub fn outcome(&self) -> FileOutcome {
        if self.findings.has_errors() {
            FileOutcome::Failed
        } else {
            FileOutcome::Passed
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome() == FileOutcome::Passed
    }
}

/// Aggregated result of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: Vec<ValidationWarning>,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Fold one file into the report, preserving walk order then check order.
    pub fn record(&mut self, file: FileReport) -> FileOutcome {
        let outcome = file.outcome();
        self.checked += 1;
        match outcome {
            FileOutcome::Passed => self.passed += 1,
            FileOutcome::Failed => self.failed += 1,
        }

        let FileReport { file, findings } = file;
        self.warnings
            .extend(findings.warnings.into_iter().map(|message| ValidationWarning {
                file: file.clone(),
                message,
            }));
        self.errors
            .extend(findings.errors.into_iter().map(|message| ValidationError {
                file: file.clone(),
                message,
            }));
        outcome
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit status for a completed run.
    pub fn exit_code(&self) -> i32 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }
}
