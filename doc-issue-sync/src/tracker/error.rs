//! Tracker error types.

use thiserror::Error;

/// Errors returned by an [`IssueTracker`](super::IssueTracker).
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The tracker answered with a non-success status.
    #[error("Tracker rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Transport, client or response parsing error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[source] octocrab::Error),

    /// The tracker returned no content for a file.
    #[error("No content returned for '{path}'")]
    NoContent { path: String },

    /// File content was not valid base64-encoded UTF-8.
    #[error("Failed to decode content of '{path}': {message}")]
    Decode { path: String, message: String },
}

impl From<octocrab::Error> for TrackerError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Self::Rejected {
                status: source.status_code.as_u16(),
                message: source.message.clone(),
            },
            other => Self::GitHubError(other),
        }
    }
}
