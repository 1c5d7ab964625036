//! Profile Tree
//!
//! Discovery of profile documents under the profile root.

pub mod path;
pub mod walker;

pub use walker::{ProfileFile, ProfileFiles, Walker};
