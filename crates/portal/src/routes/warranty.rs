//! Warranty registration and claim route handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ironwood_core::{ClaimId, ClaimStatus, WarrantyClaim, WarrantyRegistration};

use crate::error::{AppError, Result};
use crate::middleware::RequireKey;
use crate::ops::{NewClaim, NewRegistration};
use crate::state::AppState;

/// Warranty query parameters.
#[derive(Debug, Deserialize)]
pub struct WarrantyQuery {
    /// `registrations` or `claims`; both when absent.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "claimId")]
    pub claim_id: Option<ClaimId>,
}

/// Combined warranty view.
#[derive(Debug, Serialize)]
pub struct WarrantyOverview {
    pub claims: Vec<WarrantyClaim>,
    pub registrations: Vec<WarrantyRegistration>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationsResponse {
    pub registrations: Vec<WarrantyRegistration>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub registration: WarrantyRegistration,
}

#[derive(Debug, Serialize)]
pub struct ClaimsResponse {
    pub claims: Vec<WarrantyClaim>,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub claim: WarrantyClaim,
}

/// Body for advancing a claim.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStatusBody {
    pub claim_id: ClaimId,
    pub status: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Body for a claim thread message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimMessageBody {
    pub claim_id: ClaimId,
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// Registrations and claims for the account.
///
/// `?claimId=` returns one claim with its thread. `?type=registrations`
/// or `?type=claims` narrows the overview to one list.
///
/// # Errors
///
/// Returns an error if a requested claim does not exist.
pub async fn index(
    _auth: RequireKey,
    State(state): State<AppState>,
    Query(query): Query<WarrantyQuery>,
) -> Result<Response> {
    let ops = state.ops();
    if let Some(claim_id) = query.claim_id {
        let claim = ops.claim(&claim_id).await?;
        return Ok(Json(ClaimResponse { claim }).into_response());
    }
    match query.kind.as_deref() {
        Some("registrations") => {
            let registrations = ops.registrations().await?;
            Ok(Json(RegistrationsResponse { registrations }).into_response())
        }
        Some("claims") => {
            let claims = ops.claims().await?;
            Ok(Json(ClaimsResponse { claims }).into_response())
        }
        _ => Ok(Json(WarrantyOverview {
            claims: ops.claims().await?,
            registrations: ops.registrations().await?,
        })
        .into_response()),
    }
}

/// Register a delivered product or submit a claim.
///
/// Bodies carrying `registrationId` open a claim against that
/// registration; everything else is treated as a new registration.
///
/// # Errors
///
/// Returns an error if the body matches neither shape, or if a claim
/// references a registration that does not exist.
#[instrument(skip(state, _auth, body))]
pub async fn create(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response> {
    let ops = state.ops();
    if body.get("registrationId").is_some() {
        let request: NewClaim = serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(format!("invalid claim: {e}")))?;
        let claim = ops.submit_claim(request).await?;
        return Ok((StatusCode::CREATED, Json(ClaimResponse { claim })).into_response());
    }

    let request: NewRegistration = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("invalid registration: {e}")))?;
    let registration = ops.register_warranty(request).await?;
    Ok((StatusCode::CREATED, Json(RegistrationResponse { registration })).into_response())
}

/// Advance a warranty claim.
///
/// # Errors
///
/// Returns an error if the status name is unknown or the move is not a
/// legal step in the claim lifecycle.
#[instrument(skip(state, _auth))]
pub async fn update_claim_status(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<ClaimStatusBody>,
) -> Result<Json<ClaimResponse>> {
    let status: ClaimStatus = body.status.parse().map_err(AppError::BadRequest)?;
    let claim = state
        .ops()
        .update_claim_status(&body.claim_id, status, body.note)
        .await?;
    Ok(Json(ClaimResponse { claim }))
}

/// Add a message to a claim thread.
///
/// The author defaults to the dealer's contact name when absent.
///
/// # Errors
///
/// Returns an error if the claim does not exist or the body is blank.
pub async fn add_message(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<ClaimMessageBody>,
) -> Result<Json<ClaimResponse>> {
    let claim = state
        .ops()
        .add_claim_message(&body.claim_id, body.author, body.body)
        .await?;
    Ok(Json(ClaimResponse { claim }))
}
