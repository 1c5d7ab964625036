//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ValidatorError;

/// Map a fatal error to the line printed for it.
pub fn map_error(e: &ValidatorError) -> String {
    e.to_string()
}
