//! Scanned document information.

use serde::Serialize;

/// A translatable document found in a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReference {
    /// Repository-relative path (e.g., "swift-6-beta.docc/LanguageGuide/TheBasics.md").
    pub path: String,

    /// Name of the immediate parent directory (e.g., "LanguageGuide").
    pub folder: String,

    /// File name including its extension (e.g., "TheBasics.md").
    pub file_name: String,
}

impl DocumentReference {
    /// Splits a repository path into folder and file name.
    ///
    /// A path without a parent directory has an empty folder.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let mut parts = path.trim_matches('/').rsplit('/');
        let file_name = parts.next().unwrap_or_default().to_string();
        let folder = parts.next().unwrap_or_default().to_string();

        Self {
            path: path.to_string(),
            folder,
            file_name,
        }
    }
}
