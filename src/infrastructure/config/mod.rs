//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment: programmatic defaults, an
//! optional `wordle-auth.yaml`, and `WORDLE_AUTH_*` environment overrides,
//! validated after extraction.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
