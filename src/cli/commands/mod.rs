//! CLI command implementations.

pub mod answer;
pub mod login;
