//! Issue drafts.

use serde::Serialize;

/// An issue ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDraft {
    /// Derived title; the idempotence key.
    pub title: String,

    /// Rendered body.
    pub body: String,

    /// Labels to attach.
    pub labels: Vec<String>,
}
