//! HTTP route handlers for the dealer portal.
//!
//! # Route Structure
//!
//! ```text
//! GET   /health                    - Liveness check
//! GET   /health/ready              - Readiness check (exercises the backend)
//!
//! # Public locator
//! GET   /dealers/search            - Nearest dealers for a ZIP code
//!
//! # Dealer surface (requires x-portal-key)
//! GET   /dealer/profile            - Dealer account profile
//! GET   /dealer/home               - Profile, notifications, announcements in one call
//! GET   /dealer/orders             - Order list
//! POST  /dealer/orders             - Create a draft order
//! GET   /dealer/orders/{id}        - Order detail with timeline
//! PATCH /dealer/orders/{id}/status - Advance an order
//! GET   /dealer/leads              - Lead list (one lead with ?id=)
//! PATCH /dealer/leads              - Advance a lead
//! POST  /dealer/leads/notes        - Attach a note to a lead
//! GET   /dealer/inventory          - Stock levels (one product with ?product=)
//! GET   /dealer/warranty           - Registrations and claims
//! POST  /dealer/warranty           - Register a product or submit a claim
//! PATCH /dealer/warranty           - Advance a claim
//! POST  /dealer/warranty/messages  - Message on a claim thread
//! GET   /dealer/support            - Ticket list (one ticket with ?id=)
//! POST  /dealer/support            - Open a ticket
//! PATCH /dealer/support            - Advance a ticket
//! POST  /dealer/support/messages   - Message on a ticket thread
//! GET   /dealer/notifications      - Notification feed
//! POST  /dealer/notifications/read - Mark a notification read
//! GET   /dealer/announcements      - Manufacturer announcements
//! GET   /dealer/analytics          - Sales dashboard numbers
//! ```

pub mod analytics;
pub mod home;
pub mod inventory;
pub mod leads;
pub mod locator;
pub mod notifications;
pub mod orders;
pub mod support;
pub mod warranty;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Create the authenticated dealer routes router.
pub fn dealer_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(home::profile))
        .route("/home", get(home::home))
        // Orders
        .route("/orders", get(orders::index).post(orders::create))
        .route("/orders/{id}", get(orders::show))
        .route("/orders/{id}/status", patch(orders::update_status))
        // Leads
        .route("/leads", get(leads::index).patch(leads::update_status))
        .route("/leads/notes", post(leads::add_note))
        // Inventory
        .route("/inventory", get(inventory::index))
        // Warranty
        .route(
            "/warranty",
            get(warranty::index)
                .post(warranty::create)
                .patch(warranty::update_claim_status),
        )
        .route("/warranty/messages", post(warranty::add_message))
        // Support
        .route(
            "/support",
            get(support::index)
                .post(support::create)
                .patch(support::update_status),
        )
        .route("/support/messages", post(support::add_message))
        // Notices
        .route("/notifications", get(notifications::index))
        .route("/notifications/read", post(notifications::mark_read))
        .route("/announcements", get(notifications::announcements))
        // Analytics
        .route("/analytics", get(analytics::show))
}

/// Create all routes for the portal.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Public dealer locator
        .route("/dealers/search", get(locator::search))
        // Authenticated dealer surface
        .nest("/dealer", dealer_routes())
}
