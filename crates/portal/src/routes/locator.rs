//! Public dealer locator handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ironwood_core::{DistanceResult, nearest};

use crate::directory;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Results returned when the caller does not ask for a count.
const DEFAULT_LIMIT: i64 = 5;

/// Locator query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub zip: String,
    pub limit: Option<i64>,
}

/// Locator response payload.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub zip: String,
    pub results: Vec<DistanceResult>,
}

/// Find the dealers closest to a ZIP code.
///
/// # Errors
///
/// Returns an error if the ZIP is malformed or cannot be resolved.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let zip = query.zip.trim();
    if !is_valid_zip(zip) {
        return Err(AppError::BadRequest(
            "Valid 5-digit ZIP code required".to_string(),
        ));
    }

    let origin = state.geocoder().resolve(zip).await?;
    let results = nearest(origin, directory::all(), normalize_limit(query.limit));

    Ok(Json(SearchResponse {
        zip: zip.to_string(),
        results,
    }))
}

fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}

// Negative or oversized limits collapse instead of panicking.
fn normalize_limit(limit: Option<i64>) -> usize {
    usize::try_from(limit.unwrap_or(DEFAULT_LIMIT)).unwrap_or(0)
}
