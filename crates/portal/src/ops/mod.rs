//! The operations backend seam.
//!
//! Route handlers talk to [`DealerOps`] and never to a concrete backend.
//! The mock adapter serves seeded in-memory data; a live adapter will sit
//! behind the same trait once the factory ERP API ships.

pub mod mock;

mod fixtures;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use ironwood_core::{
    Announcement, ClaimId, ClaimStatus, DealerAnalytics, DealerId, DealerProfile, InventoryItem,
    Lead, LeadId, LeadStatus, Notification, NotificationId, OpsError, Order, OrderId, OrderStatus,
    RegistrationId, SupportTicket, TicketCategory, TicketId, TicketPriority, TicketStatus,
    WarrantyClaim, WarrantyRegistration,
};

/// Everything the dealer gateway needs from an operations backend.
///
/// Reads return snapshots. Writes validate first and mutate only when the
/// whole request is legal, so a failed call leaves no partial state behind.
#[async_trait]
pub trait DealerOps: Send + Sync {
    /// The authenticated dealer's account profile.
    async fn profile(&self) -> Result<DealerProfile, OpsError>;

    // Orders
    async fn orders(&self) -> Result<Vec<Order>, OpsError>;
    async fn order(&self, id: &OrderId) -> Result<Order, OpsError>;
    async fn create_order(&self, new_order: NewOrder) -> Result<Order, OpsError>;
    async fn update_order_status(
        &self,
        id: &OrderId,
        next: OrderStatus,
        note: Option<String>,
    ) -> Result<Order, OpsError>;

    // Leads
    async fn leads(&self) -> Result<Vec<Lead>, OpsError>;
    async fn lead(&self, id: &LeadId) -> Result<Lead, OpsError>;
    async fn update_lead_status(
        &self,
        id: &LeadId,
        next: LeadStatus,
        note: Option<String>,
    ) -> Result<Lead, OpsError>;
    async fn add_lead_note(&self, id: &LeadId, note: String) -> Result<Lead, OpsError>;

    // Inventory
    async fn inventory(&self) -> Result<Vec<InventoryItem>, OpsError>;
    async fn product_inventory(&self, product_slug: &str) -> Result<Vec<InventoryItem>, OpsError>;

    // Warranty
    async fn registrations(&self) -> Result<Vec<WarrantyRegistration>, OpsError>;
    async fn register_warranty(
        &self,
        new_registration: NewRegistration,
    ) -> Result<WarrantyRegistration, OpsError>;
    async fn claims(&self) -> Result<Vec<WarrantyClaim>, OpsError>;
    async fn claim(&self, id: &ClaimId) -> Result<WarrantyClaim, OpsError>;
    async fn submit_claim(&self, new_claim: NewClaim) -> Result<WarrantyClaim, OpsError>;
    async fn update_claim_status(
        &self,
        id: &ClaimId,
        next: ClaimStatus,
        note: Option<String>,
    ) -> Result<WarrantyClaim, OpsError>;
    async fn add_claim_message(
        &self,
        id: &ClaimId,
        author: Option<String>,
        body: String,
    ) -> Result<WarrantyClaim, OpsError>;

    // Support
    async fn tickets(&self) -> Result<Vec<SupportTicket>, OpsError>;
    async fn ticket(&self, id: &TicketId) -> Result<SupportTicket, OpsError>;
    async fn create_ticket(&self, new_ticket: NewTicket) -> Result<SupportTicket, OpsError>;
    async fn update_ticket_status(
        &self,
        id: &TicketId,
        next: TicketStatus,
        note: Option<String>,
    ) -> Result<SupportTicket, OpsError>;
    async fn add_ticket_message(
        &self,
        id: &TicketId,
        author: Option<String>,
        body: String,
    ) -> Result<SupportTicket, OpsError>;

    // Notices
    async fn notifications(&self) -> Result<Vec<Notification>, OpsError>;
    async fn mark_notification_read(&self, id: &NotificationId) -> Result<(), OpsError>;
    async fn announcements(&self) -> Result<Vec<Announcement>, OpsError>;

    // Analytics
    async fn analytics(&self) -> Result<DealerAnalytics, OpsError>;
}

/// Body for `POST /dealer/orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub dealer_id: DealerId,
    pub line_items: Vec<NewLineItem>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
}

/// One requested line on a new order. Pricing is dealer cost; the backend
/// derives line and order totals from it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLineItem {
    pub product_slug: String,
    pub product_name: String,
    pub model: String,
    pub finish: String,
    #[serde(default)]
    pub felt_color: Option<String>,
    pub size: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub accessories: Vec<String>,
}

/// Body for `POST /dealer/warranty` when registering a delivered product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    pub serial_number: String,
    pub product_name: String,
    pub product_slug: String,
    pub customer_name: String,
    pub customer_email: String,
    pub delivery_address: String,
    pub delivery_date: NaiveDate,
    pub installer_name: String,
}

/// Body for `POST /dealer/warranty` when submitting a claim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClaim {
    pub registration_id: RegistrationId,
    pub issue_description: String,
    pub requested_resolution: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Body for `POST /dealer/support`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub category: TicketCategory,
    #[serde(default)]
    pub priority: TicketPriority,
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Body for the `/status` PATCH routes.
///
/// The status arrives as a string and is parsed against the entity's
/// lifecycle in the handler, so an unknown name is a 400, not a 409.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: String,
    #[serde(default)]
    pub note: Option<String>,
}
