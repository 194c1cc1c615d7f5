//! Per-document synchronization outcome.

use super::IssueStatus;
use crate::scanner::DocumentReference;

/// What happened to one scanned document.
#[derive(Debug, Clone)]
pub struct SyncedDocument {
    /// Source document.
    pub document: DocumentReference,

    /// Derived title, when one could be derived.
    pub title: Option<String>,

    /// Outcome.
    pub status: IssueStatus,
}
