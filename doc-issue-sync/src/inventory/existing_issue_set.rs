//! Titles of issues already present in the tracker.

use std::collections::HashSet;

/// The titles of every issue (open or closed) known at the start of a run.
///
/// Used only for membership tests against derived titles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingIssueSet {
    titles: HashSet<String>,
}

impl ExistingIssueSet {
    /// Returns true if an issue with exactly this title exists.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    /// Number of distinct titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true if no issues exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl FromIterator<String> for ExistingIssueSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            titles: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for ExistingIssueSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.titles.extend(iter);
    }
}
