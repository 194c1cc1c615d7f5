//! In-process tracker.

use super::{ContentEntry, CreatedIssue, EntryKind, IssueTracker, TrackerError};
use crate::issues::IssueDraft;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::time::Instant;

/// A request received by a [`MemoryTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerRequest {
    /// Page of the issue inventory.
    ListIssues { page: u32, per_page: u8 },
    /// Directory listing.
    ListDirectory { path: String, reference: String },
    /// File content fetch.
    FetchContent { path: String, reference: String },
    /// Issue creation attempt.
    CreateIssue { title: String },
}

#[derive(Debug, Default)]
struct State {
    /// Titles of all issues, oldest first.
    issues: Vec<String>,
    /// Repository files by path.
    files: BTreeMap<String, String>,
    failing_inventory: bool,
    failing_directories: HashSet<String>,
    failing_content: HashSet<String>,
    /// Number of upcoming create calls that fail.
    create_failures: usize,
    requests: Vec<(Instant, TrackerRequest)>,
    created: Vec<IssueDraft>,
}

/// [`IssueTracker`] that keeps issues and files in memory.
///
/// Every request is recorded, and created issues become visible to later
/// inventory requests, so consecutive runs against the same tracker behave
/// like consecutive runs against a real repository. The reference argument
/// of content requests is recorded but not otherwise interpreted.
#[derive(Debug, Default)]
pub struct MemoryTracker {
    state: Mutex<State>,
}

impl MemoryTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an existing issue.
    #[must_use]
    pub fn with_issue(self, title: impl Into<String>) -> Self {
        self.lock().issues.push(title.into());
        self
    }

    /// Adds a repository file.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.lock().files.insert(path.into(), content.into());
        self
    }

    /// Makes every inventory page request fail.
    #[must_use]
    pub fn failing_inventory(self) -> Self {
        self.lock().failing_inventory = true;
        self
    }

    /// Makes listings of `path` fail.
    #[must_use]
    pub fn failing_directory(self, path: impl Into<String>) -> Self {
        self.lock().failing_directories.insert(path.into());
        self
    }

    /// Makes content fetches of `path` fail.
    #[must_use]
    pub fn failing_content(self, path: impl Into<String>) -> Self {
        self.lock().failing_content.insert(path.into());
        self
    }

    /// Makes the next `count` create calls fail. `usize::MAX` fails them all.
    #[must_use]
    pub fn failing_creates(self, count: usize) -> Self {
        self.lock().create_failures = count;
        self
    }

    /// Returns every request received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<TrackerRequest> {
        self.lock()
            .requests
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }

    /// Returns the instants at which create calls were received.
    #[must_use]
    pub fn create_attempts(&self) -> Vec<Instant> {
        self.lock()
            .requests
            .iter()
            .filter(|(_, request)| matches!(request, TrackerRequest::CreateIssue { .. }))
            .map(|(at, _)| *at)
            .collect()
    }

    /// Returns the drafts of successfully created issues.
    #[must_use]
    pub fn created(&self) -> Vec<IssueDraft> {
        self.lock().created.clone()
    }

    /// Returns the titles of all issues, existing and created.
    #[must_use]
    pub fn issue_titles(&self) -> Vec<String> {
        self.lock().issues.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(state: &mut State, request: TrackerRequest) {
        state.requests.push((Instant::now(), request));
    }
}

fn not_found() -> TrackerError {
    TrackerError::Rejected {
        status: 404,
        message: "Not Found".to_string(),
    }
}

#[async_trait]
impl IssueTracker for MemoryTracker {
    async fn list_issue_titles(
        &self,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<String>, TrackerError> {
        let mut state = self.lock();
        Self::record(&mut state, TrackerRequest::ListIssues { page, per_page });

        if state.failing_inventory {
            return Err(TrackerError::Rejected {
                status: 401,
                message: "Bad credentials".to_string(),
            });
        }

        let per_page = usize::from(per_page);
        let skip = (page.saturating_sub(1) as usize).saturating_mul(per_page);
        Ok(state
            .issues
            .iter()
            .skip(skip)
            .take(per_page)
            .cloned()
            .collect())
    }

    async fn list_directory(
        &self,
        path: &str,
        reference: &str,
    ) -> Result<Vec<ContentEntry>, TrackerError> {
        let mut state = self.lock();
        Self::record(
            &mut state,
            TrackerRequest::ListDirectory {
                path: path.to_string(),
                reference: reference.to_string(),
            },
        );

        if state.failing_directories.contains(path) {
            return Err(TrackerError::Rejected {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }

        let prefix = format!("{}/", path.trim_end_matches('/'));
        let mut entries = Vec::new();
        let mut directories = BTreeSet::new();

        for file_path in state.files.keys() {
            let Some(rest) = file_path.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                None => entries.push(ContentEntry {
                    name: rest.to_string(),
                    path: file_path.clone(),
                    kind: EntryKind::File,
                }),
                Some((dir, _)) => {
                    directories.insert(dir.to_string());
                }
            }
        }

        if entries.is_empty() && directories.is_empty() {
            return Err(not_found());
        }

        entries.extend(directories.into_iter().map(|dir| ContentEntry {
            path: format!("{prefix}{dir}"),
            name: dir,
            kind: EntryKind::Dir,
        }));
        Ok(entries)
    }

    async fn fetch_file_content(
        &self,
        path: &str,
        reference: &str,
    ) -> Result<String, TrackerError> {
        let mut state = self.lock();
        Self::record(
            &mut state,
            TrackerRequest::FetchContent {
                path: path.to_string(),
                reference: reference.to_string(),
            },
        );

        if state.failing_content.contains(path) {
            return Err(TrackerError::NoContent {
                path: path.to_string(),
            });
        }

        state.files.get(path).cloned().ok_or_else(not_found)
    }

    async fn create_issue(&self, draft: &IssueDraft) -> Result<CreatedIssue, TrackerError> {
        let mut state = self.lock();
        Self::record(
            &mut state,
            TrackerRequest::CreateIssue {
                title: draft.title.clone(),
            },
        );

        if state.create_failures > 0 {
            if state.create_failures != usize::MAX {
                state.create_failures -= 1;
            }
            return Err(TrackerError::Rejected {
                status: 502,
                message: "Bad Gateway".to_string(),
            });
        }

        state.issues.push(draft.title.clone());
        state.created.push(draft.clone());
        let number = state.issues.len() as u64;

        Ok(CreatedIssue {
            number,
            url: format!("https://github.com/example/repo/issues/{number}"),
        })
    }
}
