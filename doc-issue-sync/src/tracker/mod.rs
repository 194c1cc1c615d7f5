//! Issue tracker access.
//!
//! [`IssueTracker`] is the seam between synchronization logic and the remote
//! API. [`GitHubTracker`] talks to GitHub; [`MemoryTracker`] keeps everything
//! in process for tests and rehearsals.

mod error;
mod github;
mod memory;

pub use error::TrackerError;
pub use github::GitHubTracker;
pub use memory::{MemoryTracker, TrackerRequest};

use crate::issues::IssueDraft;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

/// Kind of a directory listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Symlinks, submodules and anything else.
    Other,
}

impl From<&str> for EntryKind {
    fn from(kind: &str) -> Self {
        match kind {
            "file" => Self::File,
            "dir" => Self::Dir,
            _ => Self::Other,
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentEntry {
    /// Entry name (e.g., "TheBasics.md").
    pub name: String,

    /// Repository-relative path.
    pub path: String,

    /// Entry kind.
    pub kind: EntryKind,
}

/// An issue created by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedIssue {
    /// Issue number.
    pub number: u64,

    /// Issue URL.
    pub url: String,
}

/// Remote operations needed by a synchronization run.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Returns the titles of one page of issues in any state.
    ///
    /// Pages are numbered from 1. An empty result marks the end of the list.
    async fn list_issue_titles(&self, page: u32, per_page: u8)
        -> Result<Vec<String>, TrackerError>;

    /// Lists the entries directly under `path` at `reference`.
    async fn list_directory(
        &self,
        path: &str,
        reference: &str,
    ) -> Result<Vec<ContentEntry>, TrackerError>;

    /// Fetches and decodes the text of the file at `path` at `reference`.
    async fn fetch_file_content(&self, path: &str, reference: &str)
        -> Result<String, TrackerError>;

    /// Creates an issue from a draft.
    async fn create_issue(&self, draft: &IssueDraft) -> Result<CreatedIssue, TrackerError>;
}

/// Decodes base64 file content as returned by the contents API.
///
/// The API wraps the encoded payload at 60 columns, so whitespace is ignored.
pub(crate) fn decode_content(path: &str, encoded: &str) -> Result<String, TrackerError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = STANDARD.decode(compact).map_err(|e| TrackerError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| TrackerError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_decode_wrapped_content() {
        let encoded = STANDARD.encode("翻译估计用时：⭐️⭐️\n# The Basics\n");
        let (head, tail) = encoded.split_at(20);
        let wrapped = format!("{head}\n{tail}\n");

        let content = decode_content("a.md", &wrapped).unwrap();
        assert_eq!(content, "翻译估计用时：⭐️⭐️\n# The Basics\n");
    }

    #[test]
    fn rejects_invalid_base64() {
        let result = decode_content("a.md", "not base64!");
        assert!(matches!(result, Err(TrackerError::Decode { .. })));
    }

    #[test]
    fn rejects_non_utf8() {
        let encoded = STANDARD.encode([0xff, 0xfe, 0xfd]);
        let result = decode_content("a.md", &encoded);
        assert!(matches!(result, Err(TrackerError::Decode { .. })));
    }

    #[test]
    fn can_map_entry_kind() {
        assert_eq!(EntryKind::from("file"), EntryKind::File);
        assert_eq!(EntryKind::from("dir"), EntryKind::Dir);
        assert_eq!(EntryKind::from("symlink"), EntryKind::Other);
    }
}
