//! Check command implementation
//!
//! Validates a generator configuration file without generating anything.

use std::path::Path;

use tracing::info;

use crate::Result;

/// Run the check command
pub fn run(config_path: &Path) -> Result<()> {
    let config = crate::config::load_generator_config(config_path)?;

    info!("Configuration '{}' is valid", config_path.display());
    info!("  Currencies: {}", config.currencies.len());
    info!("  Base currency: {}", config.base_currency);
    info!("  Liquidity providers: {}", config.liquidity_providers.len());

    Ok(())
}
