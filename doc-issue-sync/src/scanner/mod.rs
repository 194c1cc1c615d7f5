//! Document discovery.
//!
//! Lists the translatable documents directly under a source directory at the
//! configured branch.

mod document;

pub use document::DocumentReference;

use crate::config::SyncConfig;
use crate::tracker::{EntryKind, IssueTracker};
use tracing::{debug, error, info, info_span, Instrument};

/// Lists the documents directly under `directory`.
///
/// Only regular files whose name ends in the configured extension are
/// returned, in listing order. Subdirectories are not descended into.
///
/// A failed listing is logged and treated as an empty directory, so one
/// unreachable directory does not stop the run.
pub async fn scan_directory<T: IssueTracker + ?Sized>(
    tracker: &T,
    directory: &str,
    config: &SyncConfig,
) -> Vec<DocumentReference> {
    let span = info_span!("scan", directory = %directory, branch = %config.branch);

    async {
        let entries = match tracker.list_directory(directory, &config.branch).await {
            Ok(entries) => entries,
            Err(e) => {
                error!(error = %e, "Failed to get directory contents");
                return Vec::new();
            }
        };

        let documents: Vec<DocumentReference> = entries
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::File && entry.name.ends_with(&config.extension))
            .map(|entry| {
                debug!(path = %entry.path, "Found document");
                DocumentReference::from_path(&entry.path)
            })
            .collect();

        info!(count = documents.len(), "Scan complete");
        documents
    }
    .instrument(span)
    .await
}
