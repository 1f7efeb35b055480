//! Daily puzzle answer adapter for the NYT Wordle API.

pub mod client;
pub mod models;

pub use client::WordleApiClient;
pub use models::DailySolution;
