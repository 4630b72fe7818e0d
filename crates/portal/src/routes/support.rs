//! Support ticket route handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ironwood_core::{SupportTicket, TicketId, TicketStatus};

use crate::error::{AppError, Result};
use crate::middleware::RequireKey;
use crate::ops::NewTicket;
use crate::state::AppState;

/// Ticket list query parameters.
#[derive(Debug, Deserialize)]
pub struct TicketQuery {
    pub id: Option<TicketId>,
}

#[derive(Debug, Serialize)]
pub struct TicketsResponse {
    pub tickets: Vec<SupportTicket>,
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub ticket: SupportTicket,
}

/// Body for advancing a ticket.
#[derive(Debug, Deserialize)]
pub struct TicketStatusBody {
    pub id: TicketId,
    pub status: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Body for a ticket thread message.
#[derive(Debug, Deserialize)]
pub struct TicketMessageBody {
    pub id: TicketId,
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// List tickets, or one ticket when `?id=` is present.
///
/// # Errors
///
/// Returns an error if a requested ticket does not exist.
pub async fn index(
    _auth: RequireKey,
    State(state): State<AppState>,
    Query(query): Query<TicketQuery>,
) -> Result<Response> {
    match query.id {
        Some(id) => {
            let ticket = state.ops().ticket(&id).await?;
            Ok(Json(TicketResponse { ticket }).into_response())
        }
        None => {
            let tickets = state.ops().tickets().await?;
            Ok(Json(TicketsResponse { tickets }).into_response())
        }
    }
}

/// Open a support ticket.
///
/// # Errors
///
/// Returns an error if the subject is blank.
#[instrument(skip(state, _auth, body))]
pub async fn create(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<NewTicket>,
) -> Result<(StatusCode, Json<TicketResponse>)> {
    let ticket = state.ops().create_ticket(body).await?;
    Ok((StatusCode::CREATED, Json(TicketResponse { ticket })))
}

/// Advance a ticket through its workflow.
///
/// # Errors
///
/// Returns an error if the status name is unknown or the move is not a
/// legal step in the ticket lifecycle.
#[instrument(skip(state, _auth))]
pub async fn update_status(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<TicketStatusBody>,
) -> Result<Json<TicketResponse>> {
    let status: TicketStatus = body.status.parse().map_err(AppError::BadRequest)?;
    let ticket = state
        .ops()
        .update_ticket_status(&body.id, status, body.note)
        .await?;
    Ok(Json(TicketResponse { ticket }))
}

/// Add a message to a ticket thread.
///
/// The author defaults to the dealer's contact name when absent.
///
/// # Errors
///
/// Returns an error if the ticket does not exist or the body is blank.
pub async fn add_message(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<TicketMessageBody>,
) -> Result<Json<TicketResponse>> {
    let ticket = state
        .ops()
        .add_ticket_message(&body.id, body.author, body.body)
        .await?;
    Ok(Json(TicketResponse { ticket }))
}
