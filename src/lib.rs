//! Profile Validator: schema and content checks for profile documents
//!
//! Walks a directory of JSON profile documents, checks each one against the
//! profile schema and content rules, and reports per-file pass/fail plus a
//! summary of all errors and warnings.
//!
//! ```text
//! Walker → read → Profile::from_slice → rules::check_profile → ValidationReport
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod profile;
pub mod report;
pub mod rules;
pub mod tree;
pub mod validator;

pub use error::ValidatorError;
pub use profile::{Detection, Marketplace, McpServer, Profile};
pub use report::{FileOutcome, FileReport, ValidationError, ValidationReport, ValidationWarning};
pub use validator::ProfileValidator;
