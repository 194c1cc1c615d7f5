//! Existing issue inventory.
//!
//! Nothing is persisted between runs: every run rebuilds the set of existing
//! titles by paging through all issues in the tracker.

mod error;
mod existing_issue_set;

pub use error::InventoryError;
pub use existing_issue_set::ExistingIssueSet;

use crate::config::SyncConfig;
use crate::tracker::IssueTracker;
use tracing::{debug, info, info_span, Instrument};

/// Fetches the titles of all issues, open and closed.
///
/// Pages are requested one at a time, starting at page 1, until a page comes
/// back empty. Any failure aborts the fetch; there is no retry on this path.
///
/// # Errors
///
/// Returns [`InventoryError::Tracker`] if a page request fails, or
/// [`InventoryError::PageLimitExceeded`] if `max_pages` pages were all
/// non-empty. A partial inventory is never returned, since it would let the
/// run create duplicate issues.
pub async fn fetch_existing_titles<T: IssueTracker + ?Sized>(
    tracker: &T,
    config: &SyncConfig,
) -> Result<ExistingIssueSet, InventoryError> {
    let span = info_span!("inventory", repo = %config.full_name());

    async {
        info!("Fetching existing issues");
        let mut existing = ExistingIssueSet::default();

        for page in 1..=config.max_pages {
            let titles = tracker
                .list_issue_titles(page, config.per_page)
                .await
                .map_err(|source| InventoryError::Tracker { page, source })?;

            if titles.is_empty() {
                info!(count = existing.len(), pages = page, "Inventory complete");
                return Ok(existing);
            }

            debug!(page, count = titles.len(), "Fetched issue page");
            existing.extend(titles);
        }

        Err(InventoryError::PageLimitExceeded {
            max_pages: config.max_pages,
        })
    }
    .instrument(span)
    .await
}
