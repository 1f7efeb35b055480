//! Common test utilities for integration tests
//!
//! Provides shared test doubles used across multiple integration test
//! files: a scripted answer source and a manually steppable clock.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use wordle_auth::{AnswerSource, Clock, FetchError};

/// Answer source returning a scripted result and counting fetches.
pub struct StubAnswerSource {
    result: Mutex<Result<String, String>>,
    fetches: AtomicUsize,
}

impl StubAnswerSource {
    /// Source that always yields the given answer.
    pub fn with_answer(answer: &str) -> Self {
        Self {
            result: Mutex::new(Ok(answer.to_string())),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Source that always fails with a transport error.
    pub fn failing(message: &str) -> Self {
        Self {
            result: Mutex::new(Err(message.to_string())),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Change the scripted answer (e.g. for a new day).
    pub fn set_answer(&self, answer: &str) {
        *self.result.lock().unwrap() = Ok(answer.to_string());
    }

    /// Make subsequent fetches fail.
    pub fn set_failure(&self, message: &str) {
        *self.result.lock().unwrap() = Err(message.to_string());
    }

    /// Number of upstream fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnswerSource for StubAnswerSource {
    async fn fetch_answer(&self, _date: NaiveDate) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.result
            .lock()
            .unwrap()
            .clone()
            .map_err(FetchError::Transport)
    }
}

/// Clock pinned to an injectable day.
pub struct ManualClock {
    today: Mutex<NaiveDate>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Move the clock to a different day.
    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap() = today;
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}

/// Shorthand for building test dates.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
