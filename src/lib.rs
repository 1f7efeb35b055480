//! Wordle Auth - Daily-Word Credential Backend
//!
//! Wordle Auth is an example credential backend that gates logins on today's
//! word puzzle answer. It fetches the answer from the puzzle publisher at most
//! once per calendar day, compares submitted candidates against it, and issues
//! a fixed, renewable lease grant on a match.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Request/grant models, port traits, and the
//!   error taxonomy
//! - **Service Layer** (`services`): The daily answer cache and the credential
//!   backend built on top of it
//! - **Adapters** (`adapters`): The upstream puzzle-answer HTTP client
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line demo harness
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wordle_auth::{CredentialBackend, LoginRequest, WordleApiClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(WordleApiClient::new()?);
//!     let backend = CredentialBackend::new(client);
//!     let grant = backend.login(&LoginRequest::new("crane")).await?;
//!     println!("policies: {:?}", grant.policies);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::nytimes::WordleApiClient;
pub use domain::errors::{AuthError, FetchError, RenewalError};
pub use domain::models::{
    AuthGrant, Config, LeaseExtension, LeaseOptions, LoggingConfig, LoginRequest, UpstreamConfig,
};
pub use domain::ports::{AnswerSource, Clock, SystemClock};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CredentialBackend, DailyAnswerCache};
