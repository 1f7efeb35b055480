//! Authorization grant and lease models.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lease timing attached to a grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseOptions {
    /// Initial time-to-live of the lease.
    pub ttl: Duration,

    /// Upper bound on the total lease lifetime across renewals.
    pub max_ttl: Duration,

    /// Whether the host may renew this lease before it expires.
    pub renewable: bool,
}

/// Authorization grant issued at login.
///
/// The internal marker is an opaque constant re-checked at renewal time; it
/// is not a rotating secret. Renewal never mutates a grant, it only extends
/// the lease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthGrant {
    /// Opaque marker stored at login and re-validated at renewal.
    pub internal_marker: String,

    /// Policy names attached to the grant.
    pub policies: Vec<String>,

    /// Free-form metadata attached to the grant.
    pub metadata: HashMap<String, String>,

    /// Lease timing for this grant.
    pub lease: LeaseOptions,
}

/// Outcome of a successful renewal.
///
/// Carries the same TTL constants used at login; expiry arithmetic and
/// max-TTL capping belong to the host's lease-extension policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseExtension {
    /// Time-to-live granted by this renewal.
    pub ttl: Duration,

    /// Upper bound on the total lease lifetime.
    pub max_ttl: Duration,
}
