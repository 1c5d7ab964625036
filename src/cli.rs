//! CLI domain: parse, route, output, and presentation only.
//! Validation itself lives in [`crate::validator`].

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_header, format_summary};
pub use route::{resolve_config, RunContext};
