//! Sales analytics route handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use ironwood_core::DealerAnalytics;

use crate::error::Result;
use crate::middleware::RequireKey;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub analytics: DealerAnalytics,
}

/// Dashboard numbers for the dealer's account.
///
/// # Errors
///
/// Returns an error if the backend is unreachable.
pub async fn show(
    _auth: RequireKey,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>> {
    let analytics = state.ops().analytics().await?;
    Ok(Json(AnalyticsResponse { analytics }))
}
