#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod estimate;
pub mod inventory;
pub mod issues;
pub mod rate_limit;
pub mod runner;
pub mod scanner;
pub mod summary;
pub mod templates;
pub mod tracker;

pub use config::{load_config, ConfigError, SyncConfig, DEFAULT_BODY_TEMPLATE};
pub use estimate::extract_estimate;
pub use inventory::{fetch_existing_titles, ExistingIssueSet, InventoryError};
pub use issues::{
    submit_issue, sync_document, IssueDraft, IssueError, IssueStatus, RetryPolicy, SyncedDocument,
};
pub use rate_limit::{check_core_rate_limit, wait_for_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use runner::{synchronize, Runner, RunnerConfig, RunnerError};
pub use scanner::{scan_directory, DocumentReference};
pub use summary::RunSummary;
pub use templates::{derive_title, hyphenate, TemplateError, TemplateRenderer, TitleStyle};
pub use tracker::{
    ContentEntry, CreatedIssue, EntryKind, GitHubTracker, IssueTracker, MemoryTracker,
    TrackerError, TrackerRequest,
};
