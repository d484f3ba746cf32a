//! Service traits the application layer depends on.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ScoutResult;

/// Supplies the raw listing page for one calendar date.
///
/// The production implementation performs the HTTP fetch; tests substitute
/// canned documents.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the decoded listing body for `date`.
    ///
    /// Anything but a clean 200 answer is an error; there is no retry.
    async fn fetch_listing(&self, date: NaiveDate) -> ScoutResult<String>;
}
