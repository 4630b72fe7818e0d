//! Notification and announcement route handlers.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::json;

use ironwood_core::{Announcement, Notification, NotificationId};

use crate::error::Result;
use crate::middleware::RequireKey;
use crate::state::AppState;

/// Body for marking a notification read.
#[derive(Debug, Deserialize)]
pub struct MarkReadBody {
    pub id: NotificationId,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
pub struct AnnouncementsResponse {
    pub announcements: Vec<Announcement>,
}

/// Notification feed for the account.
///
/// # Errors
///
/// Returns an error if the backend is unreachable.
pub async fn index(
    _auth: RequireKey,
    State(state): State<AppState>,
) -> Result<Json<NotificationsResponse>> {
    let notifications = state.ops().notifications().await?;
    Ok(Json(NotificationsResponse { notifications }))
}

/// Mark one notification read. Idempotent for already-read ids.
///
/// # Errors
///
/// Returns an error if the id is unknown.
pub async fn mark_read(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<MarkReadBody>,
) -> Result<Json<serde_json::Value>> {
    state.ops().mark_notification_read(&body.id).await?;
    Ok(Json(json!({ "success": true })))
}

/// Manufacturer announcements, newest first.
///
/// # Errors
///
/// Returns an error if the backend is unreachable.
pub async fn announcements(
    _auth: RequireKey,
    State(state): State<AppState>,
) -> Result<Json<AnnouncementsResponse>> {
    let announcements = state.ops().announcements().await?;
    Ok(Json(AnnouncementsResponse { announcements }))
}
