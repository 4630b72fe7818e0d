//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, AppError>`. Bodies are JSON with a human-readable `error` and
//! a machine-readable `kind`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use ironwood_core::OpsError;

use crate::geocode::GeocodeError;

/// Message returned for every failed ZIP resolution.
///
/// Unknown ZIPs and geocoder outages answer identically so the public
/// locator never reveals upstream health.
const ZIP_NOT_FOUND_MESSAGE: &str = "No location found for that ZIP code";

/// Application-level error type for the portal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Operations backend rejected or failed the request.
    #[error(transparent)]
    Ops(#[from] OpsError),

    /// ZIP resolution failed.
    #[error("Geocode error: {0}")]
    Geocode(#[from] GeocodeError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid portal access key.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry
        if matches!(self, Self::Internal(_) | Self::Ops(OpsError::Upstream(_))) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, kind, message) = match &self {
            Self::Ops(err) => match err {
                OpsError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "not_found", err.to_string())
                }
                OpsError::InvalidInput(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
                }
                OpsError::InvalidTransition { .. } => {
                    (StatusCode::CONFLICT, "invalid_transition", err.to_string())
                }
                // Don't expose upstream error details to clients
                OpsError::Upstream(_) => (
                    StatusCode::BAD_GATEWAY,
                    "upstream_failure",
                    "Upstream service error".to_string(),
                ),
            },
            Self::Geocode(err) => {
                match err {
                    GeocodeError::ZipNotFound(zip) => {
                        tracing::debug!(zip = %zip, "ZIP not found");
                    }
                    other => {
                        tracing::warn!(error = %other, "Geocoder unavailable");
                    }
                }
                (
                    StatusCode::NOT_FOUND,
                    "not_found",
                    ZIP_NOT_FOUND_MESSAGE.to_string(),
                )
            }
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "invalid_input", message.clone())
            }
            Self::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message.clone())
            }
            // Don't expose internal error details to clients
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
            "kind": kind,
        }));

        (status, body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    async fn get_body(err: AppError) -> serde_json::Value {
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            get_status(AppError::Ops(OpsError::not_found("order", "ord-9"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Ops(OpsError::InvalidInput("bad".to_string()))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Ops(OpsError::invalid_transition(
                "order", "draft", "shipped"
            ))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Ops(OpsError::Upstream("erp down".to_string()))),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::BadRequest("bad zip".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Unauthorized("no key".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Internal("oops".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_body_carries_kind() {
        let body = get_body(AppError::Ops(OpsError::not_found("lead", "lead-1"))).await;
        assert_eq!(body["kind"], "not_found");
        assert_eq!(body["error"], "lead not found: lead-1");

        let body = get_body(AppError::Ops(OpsError::invalid_transition(
            "ticket", "open", "resolved",
        )))
        .await;
        assert_eq!(body["kind"], "invalid_transition");
    }

    #[tokio::test]
    async fn test_geocode_failures_answer_identically() {
        let not_found = get_body(AppError::Geocode(GeocodeError::ZipNotFound(
            "99999".to_string(),
        )))
        .await;
        let timeout = get_body(AppError::Geocode(GeocodeError::Timeout)).await;
        let api = get_body(AppError::Geocode(GeocodeError::Api { status: 502 })).await;

        assert_eq!(not_found, timeout);
        assert_eq!(not_found, api);
        assert_eq!(not_found["error"], "No location found for that ZIP code");
        assert_eq!(not_found["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_upstream_details_are_not_exposed() {
        let body = get_body(AppError::Ops(OpsError::Upstream(
            "erp connection refused at 10.0.3.7".to_string(),
        )))
        .await;
        assert_eq!(body["error"], "Upstream service error");
        assert_eq!(body["kind"], "upstream_failure");
    }
}
