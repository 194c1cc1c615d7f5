//! Issue synthesis and submission.
//!
//! Each scanned document becomes an [`IssueDraft`] unless an issue with the
//! derived title already exists. Drafts are submitted under a [`RetryPolicy`].

mod draft;
mod error;
mod retry;
mod status;
mod synced_document;

pub use draft::IssueDraft;
pub use error::IssueError;
pub use retry::RetryPolicy;
pub use status::IssueStatus;
pub use synced_document::SyncedDocument;

use crate::config::SyncConfig;
use crate::estimate::extract_estimate;
use crate::inventory::ExistingIssueSet;
use crate::scanner::DocumentReference;
use crate::templates::{derive_title, TemplateRenderer};
use crate::tracker::{CreatedIssue, IssueTracker};
use tracing::{debug, info, info_span, warn, Instrument};

/// Synchronizes one document with the tracker.
///
/// This function:
/// 1. Fetches the document content when the title style needs the estimate
/// 2. Derives the title and skips the document if the title already exists
/// 3. Renders the body
/// 4. Submits the issue (or only plans it when `dry_run` is set)
///
/// A document whose content cannot be fetched is skipped with a warning.
///
/// # Errors
///
/// Returns [`IssueError`] if the body cannot be rendered or every submission
/// attempt fails.
pub async fn sync_document<T: IssueTracker + ?Sized>(
    tracker: &T,
    document: &DocumentReference,
    existing: &ExistingIssueSet,
    config: &SyncConfig,
    renderer: &TemplateRenderer,
    dry_run: bool,
) -> Result<SyncedDocument, IssueError> {
    let span = info_span!("document", path = %document.path);

    async {
        let estimate = if config.title_style.needs_content() {
            match tracker
                .fetch_file_content(&document.path, &config.branch)
                .await
            {
                Ok(content) => extract_estimate(&content),
                Err(e) => {
                    warn!(error = %e, "Failed to fetch document content, skipping");
                    return Ok(SyncedDocument {
                        document: document.clone(),
                        title: None,
                        status: IssueStatus::Skipped {
                            reason: format!("content unavailable: {e}"),
                        },
                    });
                }
            }
        } else {
            None
        };

        let title = derive_title(
            document,
            config.title_style,
            &config.extension,
            estimate.as_deref(),
        );

        if existing.contains(&title) {
            info!(title = %title, "Issue already exists");
            return Ok(SyncedDocument {
                document: document.clone(),
                title: Some(title),
                status: IssueStatus::Skipped {
                    reason: "already exists".to_string(),
                },
            });
        }

        let draft = synthesize_draft(document, title, estimate.as_deref(), config, renderer)?;

        if dry_run {
            info!(title = %draft.title, "Would create issue");
            return Ok(SyncedDocument {
                document: document.clone(),
                title: Some(draft.title),
                status: IssueStatus::Planned,
            });
        }

        let created = submit_issue(tracker, &draft, &config.retry).await?;
        Ok(SyncedDocument {
            document: document.clone(),
            title: Some(draft.title),
            status: IssueStatus::Created {
                number: created.number,
                url: created.url,
            },
        })
    }
    .instrument(span)
    .await
}

/// Builds the draft for a document whose title is already known.
///
/// # Errors
///
/// Returns [`IssueError::Template`] if the body template fails to render.
pub fn synthesize_draft(
    document: &DocumentReference,
    title: String,
    estimate: Option<&str>,
    config: &SyncConfig,
    renderer: &TemplateRenderer,
) -> Result<IssueDraft, IssueError> {
    let body = renderer.render_issue_body(&config.body_template, document, config, estimate)?;

    Ok(IssueDraft {
        title,
        body,
        labels: config.labels.clone(),
    })
}

/// Submits a draft, retrying according to `policy`.
///
/// Attempts are strictly sequential; between attempts the task sleeps for
/// [`RetryPolicy::delay_after`].
///
/// # Errors
///
/// Returns [`IssueError::AttemptsExhausted`] carrying the last tracker error
/// once every allowed attempt has failed. Every tracker error counts against
/// the policy; GitHub reports secondary rate limits as 403.
pub async fn submit_issue<T: IssueTracker + ?Sized>(
    tracker: &T,
    draft: &IssueDraft,
    policy: &RetryPolicy,
) -> Result<CreatedIssue, IssueError> {
    let max_attempts = policy.max_attempts().max(1);
    let mut attempt = 0;

    loop {
        debug!(title = %draft.title, attempt = attempt + 1, "Creating issue");

        match tracker.create_issue(draft).await {
            Ok(created) => {
                info!(
                    title = %draft.title,
                    issue_number = created.number,
                    "Issue created successfully"
                );
                return Ok(created);
            }
            Err(e) => {
                warn!(
                    title = %draft.title,
                    attempt = attempt + 1,
                    max_attempts,
                    error = %e,
                    "Error creating issue"
                );

                if attempt + 1 >= max_attempts {
                    return Err(IssueError::AttemptsExhausted {
                        title: draft.title.clone(),
                        attempts: attempt + 1,
                        source: e,
                    });
                }

                tokio::time::sleep(policy.delay_after(attempt)).await;
                attempt += 1;
            }
        }
    }
}
