//! Lead pipeline route handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ironwood_core::{Lead, LeadId, LeadStatus};

use crate::error::{AppError, Result};
use crate::middleware::RequireKey;
use crate::state::AppState;

/// Lead list query parameters.
#[derive(Debug, Deserialize)]
pub struct LeadQuery {
    pub id: Option<LeadId>,
}

#[derive(Debug, Serialize)]
pub struct LeadsResponse {
    pub leads: Vec<Lead>,
}

#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub lead: Lead,
}

/// Body for advancing a lead.
#[derive(Debug, Deserialize)]
pub struct LeadStatusBody {
    pub id: LeadId,
    pub status: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Body for attaching a note.
#[derive(Debug, Deserialize)]
pub struct LeadNoteBody {
    pub id: LeadId,
    pub note: String,
}

/// List leads, or one lead when `?id=` is present.
///
/// # Errors
///
/// Returns an error if a requested lead does not exist.
pub async fn index(
    _auth: RequireKey,
    State(state): State<AppState>,
    Query(query): Query<LeadQuery>,
) -> Result<Response> {
    match query.id {
        Some(id) => {
            let lead = state.ops().lead(&id).await?;
            Ok(Json(LeadResponse { lead }).into_response())
        }
        None => {
            let leads = state.ops().leads().await?;
            Ok(Json(LeadsResponse { leads }).into_response())
        }
    }
}

/// Advance a lead through the pipeline.
///
/// # Errors
///
/// Returns an error if the status name is unknown or the move is not a
/// legal step in the lead lifecycle.
#[instrument(skip(state, _auth))]
pub async fn update_status(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<LeadStatusBody>,
) -> Result<Json<LeadResponse>> {
    let status: LeadStatus = body.status.parse().map_err(AppError::BadRequest)?;
    let lead = state
        .ops()
        .update_lead_status(&body.id, status, body.note)
        .await?;
    Ok(Json(LeadResponse { lead }))
}

/// Attach a free-form note to a lead.
///
/// # Errors
///
/// Returns an error if the lead does not exist or the note is blank.
pub async fn add_note(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<LeadNoteBody>,
) -> Result<Json<LeadResponse>> {
    let lead = state.ops().add_lead_note(&body.id, body.note).await?;
    Ok(Json(LeadResponse { lead }))
}
