//! Configuration loading.
//!
//! A run is configured through an optional TOML file. Without a file the
//! built-in defaults target the Swift documentation translation repository.

mod error;
mod sync_config;

pub use error::ConfigError;
pub use sync_config::{SyncConfig, DEFAULT_BODY_TEMPLATE};

use std::path::Path;
use tracing::info;

/// Loads the sync configuration, falling back to defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be loaded or the resulting
/// configuration is invalid.
pub fn load_config(path: Option<&Path>) -> Result<SyncConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration file");
            SyncConfig::load(path)?
        }
        None => {
            info!("No configuration file given, using defaults");
            let config = SyncConfig::default();
            config.validate("defaults")?;
            config
        }
    };

    info!(
        repo = %config.full_name(),
        branch = %config.branch,
        directories = config.directories.len(),
        "Configuration loaded"
    );
    Ok(config)
}
