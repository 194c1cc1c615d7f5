//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Tracker(#[from] crate::tracker::TrackerError),

    /// Existing issues could not be fetched.
    #[error(transparent)]
    Inventory(#[from] crate::inventory::InventoryError),

    /// An issue could not be created.
    #[error(transparent)]
    Issue(#[from] crate::issues::IssueError),
}
