//! Configuration System
//!
//! Layered configuration built with the `config` crate. Lowest to highest
//! precedence: built-in defaults, global config file, workspace config file,
//! `PROFILE_VALIDATOR__*` environment variables. CLI flags are applied on top
//! by the binary. Configuration never changes the validation rules.

use crate::logging::LoggingConfig;
use config::{ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

pub use merge::ENV_PREFIX;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Directory walked for profile documents
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_root() -> PathBuf {
    PathBuf::from("profiles")
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ValidatorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("Profile root cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Loads [`ValidatorConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, global file, workspace file and environment overrides.
    pub fn load(workspace_root: &Path) -> Result<ValidatorConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        builder
            .add_source(merge::environment())
            .build()?
            .try_deserialize()
    }

    /// Load from an explicit file instead of the global and workspace files.
    /// The file must exist.
    pub fn load_from_file(path: &Path) -> Result<ValidatorConfig, ConfigError> {
        merge::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(merge::environment())
            .build()?
            .try_deserialize()
    }
}

/// Parse a configuration from a TOML string on top of the defaults.
pub fn from_toml_str(contents: &str) -> Result<ValidatorConfig, ConfigError> {
    merge::builder_with_defaults()?
        .add_source(File::from_str(contents, config::FileFormat::Toml))
        .build()?
        .try_deserialize()
}
