//! Port for fetching the day's reference answer.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::FetchError;

/// Port trait for the upstream daily-answer source.
///
/// The cache depends on this trait, not on a concrete HTTP client, so tests
/// can inject a fake source and the production adapter can own transport
/// concerns (timeouts, decoding) on its side of the seam.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the cache serializes calls behind
/// its own lock, but the trait object is shared across request contexts.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Fetch the reference answer for the given calendar day.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, a non-success upstream
    /// status, a payload that does not decode, or an empty solution.
    async fn fetch_answer(&self, date: NaiveDate) -> Result<String, FetchError>;
}
