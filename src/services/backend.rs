//! Credential backend: login and lease renewal.
//!
//! Validates a submitted candidate against today's reference answer and
//! issues a fixed lease grant on a match. Renewal re-checks the opaque
//! internal marker stored in the grant; it never re-validates the answer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::{AuthError, RenewalError};
use crate::domain::models::{AuthGrant, LeaseExtension, LeaseOptions, LoginRequest};
use crate::domain::ports::{AnswerSource, Clock};
use crate::services::answer_cache::DailyAnswerCache;

/// Marker stored in every grant and re-checked at renewal.
pub const INTERNAL_MARKER: &str = "abcd1234";

/// Byte length every candidate must have to be considered at all.
pub const ANSWER_LENGTH: usize = 5;

/// Initial lease time-to-live.
pub const LEASE_TTL: Duration = Duration::from_secs(30);

/// Upper bound on the total lease lifetime across renewals.
pub const LEASE_MAX_TTL: Duration = Duration::from_secs(60 * 60);

/// Policies attached to every grant.
const POLICIES: [&str; 2] = ["my-policy", "other-policy"];

/// Credential backend exposing the login and renew entry points.
///
/// One backend owns one [`DailyAnswerCache`]; the host dispatches requests
/// concurrently and the cache serializes the shared state internally, so
/// `&self` methods are safe to call from any number of request contexts.
pub struct CredentialBackend {
    cache: DailyAnswerCache,
}

impl CredentialBackend {
    /// Create a backend fetching answers from the given source.
    pub fn new(source: Arc<dyn AnswerSource>) -> Self {
        Self {
            cache: DailyAnswerCache::new(source),
        }
    }

    /// Create a backend with an injected clock (used to simulate rollover).
    pub fn with_clock(source: Arc<dyn AnswerSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: DailyAnswerCache::with_clock(source, clock),
        }
    }

    /// Validate a candidate against today's answer and issue a grant.
    ///
    /// A fetch failure propagates as [`AuthError::Fetch`]; a wrong length or
    /// a mismatch is [`AuthError::PermissionDenied`]. The comparison is
    /// byte-exact and case-sensitive on the trimmed candidate.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, AuthError> {
        let candidate = request.candidate();
        let answer = self.cache.current().await?;

        if candidate.len() != ANSWER_LENGTH || candidate != answer {
            tracing::info!("login denied");
            return Err(AuthError::PermissionDenied);
        }

        tracing::info!("login accepted, issuing lease");
        Ok(Self::issue_grant())
    }

    /// Extend an existing lease without re-validating the answer.
    ///
    /// Fails when no prior grant is supplied or when its internal marker
    /// does not match the backend's constant. Expiry arithmetic and max-TTL
    /// capping are the host's concern.
    pub fn renew(&self, prior: Option<&AuthGrant>) -> Result<LeaseExtension, AuthError> {
        let grant = prior.ok_or(RenewalError::MissingContext)?;

        if grant.internal_marker != INTERNAL_MARKER {
            tracing::warn!("renewal rejected: marker mismatch");
            return Err(RenewalError::MarkerMismatch.into());
        }

        Ok(LeaseExtension {
            ttl: LEASE_TTL,
            max_ttl: LEASE_MAX_TTL,
        })
    }

    /// The fixed grant issued on every successful login.
    fn issue_grant() -> AuthGrant {
        AuthGrant {
            internal_marker: INTERNAL_MARKER.to_string(),
            policies: POLICIES.iter().map(ToString::to_string).collect(),
            metadata: HashMap::from([("fruit".to_string(), "banana".to_string())]),
            lease: LeaseOptions {
                ttl: LEASE_TTL,
                max_ttl: LEASE_MAX_TTL,
                renewable: true,
            },
        }
    }
}
