//! Single-entry, day-keyed answer cache.
//!
//! Holds at most one `(date, answer)` pair and refreshes it through the
//! [`AnswerSource`] port at most once per calendar day. One mutex spans the
//! whole check-fetch-update sequence, so concurrent callers serialize and
//! the classic check-then-act race cannot issue a second same-day fetch.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::domain::errors::FetchError;
use crate::domain::ports::{AnswerSource, Clock, SystemClock};

/// Cached answer for a single calendar day.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// Day the answer was fetched for.
    date: NaiveDate,
    /// The fetched answer. Non-empty by construction.
    answer: String,
}

/// Read-through cache for the current day's reference answer.
///
/// Owned by a backend instance; backends do not share caches, so multiple
/// concurrent backend instances may each fetch once per day (accepted
/// limitation at this scale).
pub struct DailyAnswerCache {
    /// Upstream answer source.
    source: Arc<dyn AnswerSource>,
    /// Calendar-day provider.
    clock: Arc<dyn Clock>,
    /// The single cached entry. The lock spans check, fetch, and update.
    entry: Mutex<Option<CacheEntry>>,
}

impl DailyAnswerCache {
    /// Create a cache over the given source, using the system clock.
    pub fn new(source: Arc<dyn AnswerSource>) -> Self {
        Self::with_clock(source, Arc::new(SystemClock))
    }

    /// Create a cache with an injected clock.
    pub fn with_clock(source: Arc<dyn AnswerSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            entry: Mutex::new(None),
        }
    }

    /// Return today's answer, fetching it if the cached entry is stale.
    ///
    /// The fetch is awaited while the entry lock is held: concurrent callers
    /// on a cache-miss day serialize behind the single in-flight fetch, and
    /// same-day calls never re-fetch. A failed fetch leaves the previous
    /// entry (if any) untouched and surfaces the error.
    pub async fn current(&self) -> Result<String, FetchError> {
        let mut entry = self.entry.lock().await;
        let today = self.clock.today();

        if let Some(cached) = entry.as_ref() {
            if cached.date == today {
                tracing::debug!(date = %today, "answer cache hit");
                return Ok(cached.answer.clone());
            }
        }

        tracing::debug!(date = %today, "answer cache miss, fetching");
        let answer = match self.source.fetch_answer(today).await {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(date = %today, error = %err, "daily answer fetch failed");
                return Err(err);
            }
        };

        *entry = Some(CacheEntry {
            date: today,
            answer: answer.clone(),
        });
        Ok(answer)
    }
}
