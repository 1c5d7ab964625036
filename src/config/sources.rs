//! File sources for the configuration builder.

pub mod global_file;
pub mod workspace_file;
