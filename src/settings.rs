//! Runtime settings, read from an optional TOML file with environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// File consulted when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "gridbook";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub listen_address: String,
}

impl Settings {
    /// Layered lookup: built-in defaults, then the config file (required only
    /// when the caller named one explicitly), then `GRIDBOOK_*` variables.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = path.unwrap_or(DEFAULT_CONFIG_FILE);
        let settings = Config::builder()
            .set_default("listen_address", "127.0.0.1:8080")?
            .add_source(File::with_name(file).required(path.is_some()))
            .add_source(Environment::with_prefix("GRIDBOOK"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
