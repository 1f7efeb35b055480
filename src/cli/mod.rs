//! Command-line demo harness for the credential backend.
//!
//! The CLI stands in for the host process during demos and manual testing;
//! the library stays fully usable without it.

pub mod commands;
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::errors::AuthError;

/// Print an error and exit with the conventional status code.
///
/// Permission denials exit with code 2 so scripts can distinguish a wrong
/// guess from a systemic failure (code 1).
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    let denied = err
        .downcast_ref::<AuthError>()
        .is_some_and(|e| matches!(e, AuthError::PermissionDenied));

    if json {
        eprintln!("{}", serde_json::json!({ "error": err.to_string() }));
    } else {
        eprintln!("Error: {err:#}");
    }

    std::process::exit(if denied { 2 } else { 1 });
}
