//! Wordle API HTTP client.
//!
//! Wraps the daily-solution endpoint of the puzzle publisher, exposing a
//! single typed fetch used by the answer cache. The request timeout is
//! explicit and bounded rather than relying on transport defaults.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use crate::domain::errors::FetchError;
use crate::domain::models::UpstreamConfig;
use crate::domain::ports::AnswerSource;

use super::models::DailySolution;

/// Base URL for the daily-solution API.
const WORDLE_API_BASE: &str = "https://www.nytimes.com/svc/wordle/v2";

/// Default request timeout for answer fetches.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the daily-solution endpoint.
///
/// All methods return [`FetchError`]; transport and decode failures never
/// panic and never surface as denials.
#[derive(Debug, Clone)]
pub struct WordleApiClient {
    /// The underlying HTTP client.
    http: Client,
    /// Base URL, overridable for tests and self-hosted mirrors.
    base_url: String,
}

impl WordleApiClient {
    /// Create a client against the production endpoint with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(WORDLE_API_BASE, DEFAULT_TIMEOUT)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Create a client from upstream configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, FetchError> {
        Self::with_base_url(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Fetch the daily-solution payload for a calendar day.
    async fn get_solution(&self, date: NaiveDate) -> Result<DailySolution, FetchError> {
        let url = format!("{}/{}.json", self.base_url, date.format("%Y-%m-%d"));
        tracing::debug!(%url, "fetching daily solution");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("solution request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::UpstreamStatus { status, body });
        }

        resp.json::<DailySolution>()
            .await
            .map_err(|e| FetchError::Decode(format!("solution payload decode failed: {e}")))
    }
}

#[async_trait]
impl AnswerSource for WordleApiClient {
    async fn fetch_answer(&self, date: NaiveDate) -> Result<String, FetchError> {
        let payload = self.get_solution(date).await?;
        if payload.solution.is_empty() {
            return Err(FetchError::EmptySolution { date });
        }
        tracing::debug!(puzzle_id = payload.id, %date, "fetched daily solution");
        Ok(payload.solution)
    }
}
