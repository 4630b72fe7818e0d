//! Inventory route handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use ironwood_core::InventoryItem;

use crate::error::Result;
use crate::middleware::RequireKey;
use crate::state::AppState;

/// Inventory query parameters.
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub product: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub inventory: Vec<InventoryItem>,
}

/// Current stock levels, optionally filtered to one product slug.
///
/// # Errors
///
/// Returns an error if a requested product slug is unknown.
pub async fn index(
    _auth: RequireKey,
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<Json<InventoryResponse>> {
    let inventory = match query.product {
        Some(slug) => state.ops().product_inventory(&slug).await?,
        None => state.ops().inventory().await?,
    };
    Ok(Json(InventoryResponse { inventory }))
}
