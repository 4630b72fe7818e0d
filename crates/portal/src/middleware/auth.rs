//! Authentication extractor for the dealer surface.
//!
//! Every `/dealer/*` route requires the shared portal access key in the
//! `x-portal-key` header. The public locator endpoint stays open.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use secrecy::ExposeSecret;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the dealer access key.
pub const ACCESS_KEY_HEADER: &str = "x-portal-key";

/// Extractor that requires the portal access key.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_auth: RequireKey) -> impl IntoResponse {
///     "dealers only"
/// }
/// ```
pub struct RequireKey;

impl FromRequestParts<AppState> for RequireKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(ACCESS_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("missing portal access key".to_string()))?;

        let expected = state.config().access_key.expose_secret();
        if !constant_time_eq(presented.as_bytes(), expected.as_bytes()) {
            return Err(AppError::Unauthorized(
                "invalid portal access key".to_string(),
            ));
        }

        Ok(Self)
    }
}

// Comparison time must not depend on where the first mismatch sits.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_keys_match() {
        assert!(constant_time_eq(b"k9PzQ4vXw2Lr8NtB", b"k9PzQ4vXw2Lr8NtB"));
    }

    #[test]
    fn different_keys_do_not_match() {
        assert!(!constant_time_eq(b"k9PzQ4vXw2Lr8NtB", b"k9PzQ4vXw2Lr8NtC"));
    }

    #[test]
    fn length_mismatch_does_not_match() {
        assert!(!constant_time_eq(b"short", b"much-longer-key"));
    }

    #[test]
    fn empty_keys_match() {
        assert!(constant_time_eq(b"", b""));
    }
}
