//! Inventory error types.

use crate::tracker::TrackerError;
use thiserror::Error;

/// Errors that can occur while fetching existing issues.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A page request failed.
    #[error("Failed to fetch issue page {page}: {source}")]
    Tracker {
        page: u32,
        #[source]
        source: TrackerError,
    },

    /// The tracker kept returning issues past the page limit.
    #[error("Issue list still not exhausted after {max_pages} pages")]
    PageLimitExceeded { max_pages: u32 },
}
