//! Login request model.

use serde::{Deserialize, Serialize};

/// Request accepted by the backend's unauthenticated login path.
///
/// The host contract exposes a single string field named `wordle`; this
/// struct is the statically-typed form of that payload, validated at the
/// boundary by serde instead of runtime casts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The submitted candidate for today's puzzle answer.
    pub wordle: String,
}

impl LoginRequest {
    /// Build a request from a candidate word.
    pub fn new(candidate: impl Into<String>) -> Self {
        Self {
            wordle: candidate.into(),
        }
    }

    /// The candidate with surrounding whitespace removed.
    pub fn candidate(&self) -> &str {
        self.wordle.trim()
    }
}
