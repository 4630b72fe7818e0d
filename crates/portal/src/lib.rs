//! Ironwood dealer portal library.
//!
//! This crate provides the portal functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod directory;
pub mod error;
pub mod geocode;
pub mod middleware;
pub mod ops;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the portal router with health checks and middleware attached.
///
/// The Sentry tower layers are attached in `main`, not here.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Exercises the operations backend before returning OK.
/// Returns 503 Service Unavailable if the backend is not usable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.ops().profile().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
