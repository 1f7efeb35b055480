//! Property-based tests for login candidate validation.

mod common;

use std::sync::Arc;

use proptest::prelude::*;

use common::StubAnswerSource;
use wordle_auth::{AuthError, AuthGrant, CredentialBackend, LoginRequest};

const ANSWER: &str = "crane";

fn login(candidate: &str) -> Result<AuthGrant, AuthError> {
    let backend = CredentialBackend::new(Arc::new(StubAnswerSource::with_answer(ANSWER)));
    tokio_test::block_on(backend.login(&LoginRequest::new(candidate)))
}

proptest! {
    /// Property: any candidate whose trimmed length is not 5 bytes is
    /// denied, regardless of content.
    #[test]
    fn prop_wrong_length_always_denied(candidate in "\\PC{0,12}") {
        prop_assume!(candidate.trim().len() != 5);
        prop_assert!(matches!(login(&candidate), Err(AuthError::PermissionDenied)));
    }

    /// Property: surrounding whitespace never affects a correct answer.
    #[test]
    fn prop_whitespace_padding_is_ignored(left in "[ \\t]{0,4}", right in "[ \\t\\n]{0,4}") {
        let candidate = format!("{left}{ANSWER}{right}");
        prop_assert!(login(&candidate).is_ok());
    }

    /// Property: any 5-letter word other than the answer is denied.
    #[test]
    fn prop_five_letter_mismatch_denied(candidate in "[a-z]{5}") {
        prop_assume!(candidate != ANSWER);
        prop_assert!(matches!(login(&candidate), Err(AuthError::PermissionDenied)));
    }

    /// Property: the correct answer followed by junk is denied even though
    /// it contains the answer.
    #[test]
    fn prop_answer_with_trailing_junk_denied(pad in "[a-z]{1,3}") {
        let candidate = format!("{ANSWER}{pad}");
        prop_assert!(matches!(login(&candidate), Err(AuthError::PermissionDenied)));
    }
}
