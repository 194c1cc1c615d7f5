//! Runner configuration.

use crate::config::SyncConfig;

/// Configuration for a synchronization run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// What to synchronize.
    sync: SyncConfig,
    /// GitHub token used for API calls.
    token: String,
    /// Whether to preview changes without creating issues.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(sync: SyncConfig, token: String, dry_run: bool) -> Self {
        Self {
            sync,
            token,
            dry_run,
        }
    }

    /// Returns the sync settings.
    pub fn sync(&self) -> &SyncConfig {
        &self.sync
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
