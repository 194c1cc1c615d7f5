//! Run summary types.

use crate::issues::{IssueStatus, SyncedDocument};

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of issues already in the tracker when the run started.
    pub existing_issues: usize,

    /// Number of directories scanned.
    pub directories_scanned: usize,

    /// Number of documents found across all directories.
    pub documents_found: usize,

    /// Number of issues successfully created.
    pub issues_created: usize,

    /// Number of issues that would have been created (dry run).
    pub issues_planned: usize,

    /// Number of documents skipped (existing issue, unreadable content).
    pub issues_skipped: usize,

    /// Number of issues that failed to create.
    pub issues_failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a document outcome.
    pub fn record(&mut self, synced: &SyncedDocument) {
        match &synced.status {
            IssueStatus::Created { .. } => self.issues_created += 1,
            IssueStatus::Planned => self.issues_planned += 1,
            IssueStatus::Skipped { .. } => self.issues_skipped += 1,
            IssueStatus::Failed { .. } => self.issues_failed += 1,
        }
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.issues_failed > 0
    }
}
