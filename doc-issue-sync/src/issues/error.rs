//! Issue creation error types.

use crate::templates::TemplateError;
use crate::tracker::TrackerError;
use thiserror::Error;

/// Errors that can occur while synthesizing or submitting an issue.
#[derive(Debug, Error)]
pub enum IssueError {
    /// Every attempt allowed by the retry policy failed.
    #[error("Failed to create issue '{title}' after {attempts} attempt(s): {source}")]
    AttemptsExhausted {
        title: String,
        attempts: u32,
        #[source]
        source: TrackerError,
    },

    /// Body template rendering error.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
