//! GitHub-backed tracker.

use super::{decode_content, ContentEntry, CreatedIssue, EntryKind, IssueTracker, TrackerError};
use crate::config::SyncConfig;
use crate::issues::IssueDraft;
use crate::rate_limit::wait_for_core_rate_limit;
use async_trait::async_trait;
use octocrab::{params, Octocrab};
use tracing::debug;

/// [`IssueTracker`] backed by the GitHub REST API.
pub struct GitHubTracker {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubTracker {
    /// Builds an authenticated client for the configured repository.
    ///
    /// The token is not checked here; a missing or invalid token surfaces as
    /// an authentication error on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] if the client cannot be built or `api_url` is invalid.
    pub fn new(token: &str, config: &SyncConfig) -> Result<Self, TrackerError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(api_url) = &config.api_url {
            builder = builder.base_uri(api_url.as_str())?;
        }

        Ok(Self {
            octocrab: builder.build()?,
            owner: config.owner.clone(),
            repo: config.repo.clone(),
        })
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn list_issue_titles(
        &self,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<String>, TrackerError> {
        debug!(page, per_page, "Listing issues");

        let issues = self
            .octocrab
            .issues(&self.owner, &self.repo)
            .list()
            .state(params::State::All)
            .per_page(per_page)
            .page(page)
            .send()
            .await?;

        Ok(issues.items.into_iter().map(|issue| issue.title).collect())
    }

    async fn list_directory(
        &self,
        path: &str,
        reference: &str,
    ) -> Result<Vec<ContentEntry>, TrackerError> {
        debug!(path, reference, "Listing directory");

        let contents = self
            .octocrab
            .repos(&self.owner, &self.repo)
            .get_content()
            .path(path)
            .r#ref(reference)
            .send()
            .await?;

        Ok(contents
            .items
            .into_iter()
            .map(|item| ContentEntry {
                kind: EntryKind::from(item.r#type.as_str()),
                name: item.name,
                path: item.path,
            })
            .collect())
    }

    async fn fetch_file_content(
        &self,
        path: &str,
        reference: &str,
    ) -> Result<String, TrackerError> {
        debug!(path, reference, "Fetching file content");

        let contents = self
            .octocrab
            .repos(&self.owner, &self.repo)
            .get_content()
            .path(path)
            .r#ref(reference)
            .send()
            .await?;

        let encoded = contents
            .items
            .into_iter()
            .next()
            .and_then(|item| item.content)
            .ok_or_else(|| TrackerError::NoContent {
                path: path.to_string(),
            })?;

        decode_content(path, &encoded)
    }

    async fn create_issue(&self, draft: &IssueDraft) -> Result<CreatedIssue, TrackerError> {
        wait_for_core_rate_limit(&self.octocrab).await;

        let issue = self
            .octocrab
            .issues(&self.owner, &self.repo)
            .create(&draft.title)
            .body(&draft.body)
            .labels(draft.labels.clone())
            .send()
            .await?;

        Ok(CreatedIssue {
            number: issue.number,
            url: issue.html_url.to_string(),
        })
    }
}
