//! Loading generator configuration from TOML files.

use crate::{CliError, Result};
use orders_core::config::GeneratorConfig;
use std::path::Path;

/// Loads and validates a generator configuration from a TOML file.
///
/// Fields absent from the file fall back to the reference dataset defaults.
pub fn load_generator_config(path: &Path) -> Result<GeneratorConfig> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let contents = std::fs::read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
