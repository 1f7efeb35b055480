//! Domain errors for the daily-word credential backend.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors reaching or decoding the upstream answer endpoint.
///
/// These are system failures, never denials: a failed fetch leaves the
/// answer cache untouched and is surfaced to the caller as-is.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("answer request failed: {0}")]
    Transport(String),

    #[error("answer endpoint returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("failed to decode answer payload: {0}")]
    Decode(String),

    #[error("answer endpoint returned an empty solution for {date}")]
    EmptySolution { date: NaiveDate },
}

/// Why a renewal attempt was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalError {
    #[error("renewal request carried no auth context")]
    MissingContext,

    #[error("internal marker does not match")]
    MarkerMismatch,
}

/// Errors surfaced by the credential backend.
///
/// Denials are a distinct kind from system failures: a host audits wrong
/// guesses and upstream outages separately. `PermissionDenied` carries no
/// detail about which check failed.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to resolve today's answer: {0}")]
    Fetch(#[from] FetchError),

    #[error("permission denied")]
    PermissionDenied,

    #[error("renewal rejected: {0}")]
    Renewal(#[from] RenewalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_converts_into_auth_error() {
        let err: AuthError = FetchError::Transport("connection refused".to_string()).into();
        assert!(matches!(err, AuthError::Fetch(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn renewal_error_converts_into_auth_error() {
        let err: AuthError = RenewalError::MarkerMismatch.into();
        assert!(matches!(
            err,
            AuthError::Renewal(RenewalError::MarkerMismatch)
        ));
    }

    #[test]
    fn permission_denied_reveals_no_detail() {
        assert_eq!(AuthError::PermissionDenied.to_string(), "permission denied");
    }
}
