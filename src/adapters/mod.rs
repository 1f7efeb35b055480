//! Outbound adapters for external systems.
//!
//! Each sub-module corresponds to an external endpoint and implements the
//! domain port traits directly.

pub mod nytimes;
