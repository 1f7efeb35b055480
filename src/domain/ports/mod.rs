//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interfaces that adapters must implement:
//! - `AnswerSource`: fetching the day's reference answer
//! - `Clock`: reading the current calendar day
//!
//! These traits define the contracts that allow the domain to be independent
//! of specific infrastructure implementations, and let tests inject fakes
//! for the upstream fetch and the current day.

pub mod answer_source;
pub mod clock;

pub use answer_source::AnswerSource;
pub use clock::{Clock, SystemClock};
