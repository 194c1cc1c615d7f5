//! Orchestrates a synchronization run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::SyncConfig;
use crate::inventory::fetch_existing_titles;
use crate::issues::{sync_document, IssueStatus, SyncedDocument};
use crate::scanner::scan_directory;
use crate::summary::RunSummary;
use crate::templates::TemplateRenderer;
use crate::tracker::{GitHubTracker, IssueTracker};
use tracing::{error, info};

/// Runs synchronization against GitHub.
pub struct Runner {
    config: RunnerConfig,
    tracker: GitHubTracker,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Tracker`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let tracker = GitHubTracker::new(config.token(), config.sync())?;
        Ok(Self { config, tracker })
    }

    /// Executes the full synchronization flow.
    ///
    /// # Errors
    ///
    /// See [`synchronize`].
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        synchronize(&self.tracker, self.config.sync(), self.config.dry_run()).await
    }
}

/// Synchronizes every configured directory with the tracker.
///
/// Directories are processed in configuration order and documents in listing
/// order, one request at a time.
///
/// # Errors
///
/// Returns [`RunnerError::Inventory`] if existing issues cannot be fetched.
/// Returns [`RunnerError::Issue`] on the first failed submission unless
/// `continue_on_failure` is set, in which case failures are recorded in the
/// summary instead.
pub async fn synchronize<T: IssueTracker + ?Sized>(
    tracker: &T,
    config: &SyncConfig,
    dry_run: bool,
) -> Result<RunSummary, RunnerError> {
    let mut summary = RunSummary::new(dry_run);
    let renderer = TemplateRenderer::new();

    let existing = fetch_existing_titles(tracker, config).await?;
    info!(count = existing.len(), "Found existing issues");
    summary.existing_issues = existing.len();

    for directory in &config.directories {
        info!(directory = %directory, "Processing directory");
        let documents = scan_directory(tracker, directory, config).await;
        summary.directories_scanned += 1;
        summary.documents_found += documents.len();

        for document in &documents {
            let synced =
                match sync_document(tracker, document, &existing, config, &renderer, dry_run).await
                {
                    Ok(synced) => synced,
                    Err(e) if config.continue_on_failure => {
                        error!(path = %document.path, error = %e, "Failed to synchronize document");
                        SyncedDocument {
                            document: document.clone(),
                            title: None,
                            status: IssueStatus::Failed {
                                error: e.to_string(),
                            },
                        }
                    }
                    Err(e) => return Err(e.into()),
                };
            summary.record(&synced);
        }
    }

    Ok(summary)
}
