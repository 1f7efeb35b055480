//! Port for reading the current calendar day.

use chrono::{Local, NaiveDate};

/// Port trait for the current calendar day.
///
/// Cache entries are keyed by calendar day, so "today" is an injectable
/// dependency: production uses [`SystemClock`], tests inject a steppable
/// clock to simulate day rollover.
pub trait Clock: Send + Sync {
    /// The current calendar day.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by system time in the process-local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
