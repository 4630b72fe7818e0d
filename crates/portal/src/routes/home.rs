//! Dealer profile and home feed handlers.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use ironwood_core::{Announcement, DealerProfile, Notification};

use crate::error::Result;
use crate::middleware::RequireKey;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: DealerProfile,
}

/// Everything the portal dashboard needs in one call.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub profile: DealerProfile,
    pub notifications: Vec<Notification>,
    pub announcements: Vec<Announcement>,
}

/// Return the signed-in dealer's profile.
///
/// # Errors
///
/// Returns an error if the backend is unreachable.
pub async fn profile(
    _auth: RequireKey,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>> {
    let profile = state.ops().profile().await?;
    Ok(Json(ProfileResponse { profile }))
}

/// Return the dashboard feed.
///
/// # Errors
///
/// Returns an error if the backend is unreachable.
pub async fn home(_auth: RequireKey, State(state): State<AppState>) -> Result<Json<HomeResponse>> {
    let ops = state.ops();
    let profile = ops.profile().await?;
    let notifications = ops.notifications().await?;
    let announcements = ops.announcements().await?;
    Ok(Json(HomeResponse {
        profile,
        notifications,
        announcements,
    }))
}
