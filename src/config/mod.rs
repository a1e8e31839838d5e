// src/config/mod.rs
mod loader;
mod schema;

use std::path::Path;

pub use schema::{Config, GlobalConfig, FuzzingConfig, ToolConfig};

use crate::error::{ReconResult, ReconError};

impl Config {
    /// Load configuration from a file or built-in defaults
    pub fn load(config_path: Option<&Path>) -> ReconResult<Self> {
        loader::load_config(config_path)
            .map_err(|e| ReconError::ConfigError(e.to_string()))
    }
}
