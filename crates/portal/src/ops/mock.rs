//! In-memory operations backend.
//!
//! Holds the seeded dataset behind a [`tokio::sync::RwLock`]. Reads hand out
//! clones of the current state. Writes validate before mutating, so a failed
//! request leaves the dataset exactly as it was.

use async_trait::async_trait;
use chrono::{Months, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use ironwood_core::{
    Announcement, ClaimId, ClaimStatus, DealerAnalytics, DealerProfile, InventoryItem, Lead,
    LeadId, LeadStatus, Notification, NotificationId, OpsError, Order, OrderId, OrderLineItem,
    OrderStatus, RegistrationId, SupportTicket, TicketId, TicketStatus, Timeline, WarrantyClaim,
    WarrantyRegistration,
};

use super::{fixtures, DealerOps, NewClaim, NewOrder, NewRegistration, NewTicket};

/// Every registration carries a five year parts warranty from delivery.
const WARRANTY_TERM_MONTHS: u32 = 60;

/// Everything the mock backend knows about the signed-in dealer.
pub(super) struct MockData {
    pub profile: DealerProfile,
    pub orders: Vec<Order>,
    pub leads: Vec<Lead>,
    pub registrations: Vec<WarrantyRegistration>,
    pub claims: Vec<WarrantyClaim>,
    pub tickets: Vec<SupportTicket>,
    pub inventory: Vec<InventoryItem>,
    pub notifications: Vec<Notification>,
    pub announcements: Vec<Announcement>,
    pub analytics: DealerAnalytics,
}

pub struct MockBackend {
    data: RwLock<MockData>,
}

impl MockBackend {
    /// Backend pre-loaded with the Lone Star Game Rooms dataset.
    pub fn seeded() -> Self {
        Self {
            data: RwLock::new(fixtures::seed()),
        }
    }
}

#[async_trait]
impl DealerOps for MockBackend {
    async fn profile(&self) -> Result<DealerProfile, OpsError> {
        Ok(self.data.read().await.profile.clone())
    }

    async fn orders(&self) -> Result<Vec<Order>, OpsError> {
        Ok(self.data.read().await.orders.clone())
    }

    async fn order(&self, id: &OrderId) -> Result<Order, OpsError> {
        self.data
            .read()
            .await
            .orders
            .iter()
            .find(|order| &order.id == id)
            .cloned()
            .ok_or_else(|| OpsError::not_found("order", id.as_str()))
    }

    async fn create_order(&self, new_order: NewOrder) -> Result<Order, OpsError> {
        if new_order.dealer_id.as_str().trim().is_empty() {
            return Err(OpsError::InvalidInput("dealer id is required".to_string()));
        }
        if new_order.line_items.is_empty() {
            return Err(OpsError::InvalidInput(
                "order needs at least one line item".to_string(),
            ));
        }
        if new_order.line_items.iter().any(|item| item.quantity == 0) {
            return Err(OpsError::InvalidInput(
                "line item quantity must be at least 1".to_string(),
            ));
        }

        let mut data = self.data.write().await;
        let now = Utc::now();
        let line_items: Vec<OrderLineItem> = new_order
            .line_items
            .into_iter()
            .map(|item| OrderLineItem {
                id: format!("li-{}", Uuid::new_v4()),
                total_price: item.unit_price * Decimal::from(item.quantity),
                product_slug: item.product_slug,
                product_name: item.product_name,
                model: item.model,
                finish: item.finish,
                felt_color: item.felt_color,
                size: item.size,
                quantity: item.quantity,
                unit_price: item.unit_price,
                accessories: item.accessories,
            })
            .collect();
        let subtotal: Decimal = line_items.iter().map(|item| item.total_price).sum();

        let order = Order {
            id: OrderId::new(format!("ord-{}", Uuid::new_v4())),
            order_number: format!("IW-{}", 1000 + data.orders.len() + 1),
            dealer_id: new_order.dealer_id,
            status: OrderStatus::Draft,
            created: now,
            updated: now,
            line_items,
            subtotal,
            shipping: Decimal::ZERO,
            total: subtotal,
            customer_name: new_order.customer_name,
            customer_email: new_order.customer_email,
            timeline: Timeline::new(),
            shipping_info: None,
            notes: vec![],
            eta: None,
        };
        data.orders.push(order.clone());
        Ok(order)
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
        note: Option<String>,
    ) -> Result<Order, OpsError> {
        let mut data = self.data.write().await;
        let order = data
            .orders
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| OpsError::not_found("order", id.as_str()))?;
        order.advance(status, Utc::now(), note)?;
        Ok(order.clone())
    }

    async fn leads(&self) -> Result<Vec<Lead>, OpsError> {
        Ok(self.data.read().await.leads.clone())
    }

    async fn lead(&self, id: &LeadId) -> Result<Lead, OpsError> {
        self.data
            .read()
            .await
            .leads
            .iter()
            .find(|lead| &lead.id == id)
            .cloned()
            .ok_or_else(|| OpsError::not_found("lead", id.as_str()))
    }

    async fn update_lead_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
        note: Option<String>,
    ) -> Result<Lead, OpsError> {
        let mut data = self.data.write().await;
        let lead = data
            .leads
            .iter_mut()
            .find(|lead| &lead.id == id)
            .ok_or_else(|| OpsError::not_found("lead", id.as_str()))?;
        lead.advance(status, Utc::now(), note)?;
        Ok(lead.clone())
    }

    async fn add_lead_note(&self, id: &LeadId, note: String) -> Result<Lead, OpsError> {
        if note.trim().is_empty() {
            return Err(OpsError::InvalidInput("note text is required".to_string()));
        }
        let mut data = self.data.write().await;
        let lead = data
            .leads
            .iter_mut()
            .find(|lead| &lead.id == id)
            .ok_or_else(|| OpsError::not_found("lead", id.as_str()))?;
        lead.add_note(note, Utc::now());
        Ok(lead.clone())
    }

    async fn inventory(&self) -> Result<Vec<InventoryItem>, OpsError> {
        Ok(self.data.read().await.inventory.clone())
    }

    async fn product_inventory(&self, slug: &str) -> Result<Vec<InventoryItem>, OpsError> {
        let rows: Vec<InventoryItem> = self
            .data
            .read()
            .await
            .inventory
            .iter()
            .filter(|item| item.product_slug == slug)
            .cloned()
            .collect();
        if rows.is_empty() {
            return Err(OpsError::not_found("product", slug));
        }
        Ok(rows)
    }

    async fn registrations(&self) -> Result<Vec<WarrantyRegistration>, OpsError> {
        Ok(self.data.read().await.registrations.clone())
    }

    async fn register_warranty(
        &self,
        new: NewRegistration,
    ) -> Result<WarrantyRegistration, OpsError> {
        if new.serial_number.trim().is_empty() {
            return Err(OpsError::InvalidInput(
                "serial number is required".to_string(),
            ));
        }
        let expiration = new
            .delivery_date
            .checked_add_months(Months::new(WARRANTY_TERM_MONTHS))
            .ok_or_else(|| OpsError::InvalidInput("delivery date out of range".to_string()))?;

        let mut data = self.data.write().await;
        let registration = WarrantyRegistration {
            id: RegistrationId::new(format!("reg-{}", Uuid::new_v4())),
            serial_number: new.serial_number,
            product_name: new.product_name,
            product_slug: new.product_slug,
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            delivery_address: new.delivery_address,
            delivery_date: new.delivery_date,
            installer_name: new.installer_name,
            registration_date: Utc::now().date_naive(),
            warranty_expiration: expiration,
            dealer_id: data.profile.id.clone(),
        };
        data.registrations.push(registration.clone());
        Ok(registration)
    }

    async fn claims(&self) -> Result<Vec<WarrantyClaim>, OpsError> {
        Ok(self.data.read().await.claims.clone())
    }

    async fn claim(&self, id: &ClaimId) -> Result<WarrantyClaim, OpsError> {
        self.data
            .read()
            .await
            .claims
            .iter()
            .find(|claim| &claim.id == id)
            .cloned()
            .ok_or_else(|| OpsError::not_found("claim", id.as_str()))
    }

    async fn submit_claim(&self, new: NewClaim) -> Result<WarrantyClaim, OpsError> {
        if new.issue_description.trim().is_empty() {
            return Err(OpsError::InvalidInput(
                "issue description is required".to_string(),
            ));
        }

        let mut data = self.data.write().await;
        let registration = data
            .registrations
            .iter()
            .find(|registration| registration.id == new.registration_id)
            .cloned()
            .ok_or_else(|| {
                OpsError::not_found("registration", new.registration_id.as_str())
            })?;

        let now = Utc::now();
        let claim = WarrantyClaim {
            id: ClaimId::new(format!("clm-{}", Uuid::new_v4())),
            claim_number: format!("WC-{}", 3100 + data.claims.len() + 1),
            registration_id: registration.id.clone(),
            serial_number: registration.serial_number,
            product_name: registration.product_name,
            customer_name: registration.customer_name,
            issue_description: new.issue_description,
            requested_resolution: new.requested_resolution,
            status: ClaimStatus::Submitted,
            photos: new.photos,
            created: now,
            updated: now,
            timeline: Timeline::seeded(
                ClaimStatus::Submitted,
                now,
                Some("Claim received".to_string()),
            ),
            messages: vec![],
        };
        data.claims.push(claim.clone());
        Ok(claim)
    }

    async fn update_claim_status(
        &self,
        id: &ClaimId,
        status: ClaimStatus,
        note: Option<String>,
    ) -> Result<WarrantyClaim, OpsError> {
        let mut data = self.data.write().await;
        let claim = data
            .claims
            .iter_mut()
            .find(|claim| &claim.id == id)
            .ok_or_else(|| OpsError::not_found("claim", id.as_str()))?;
        claim.advance(status, Utc::now(), note)?;
        Ok(claim.clone())
    }

    async fn add_claim_message(
        &self,
        id: &ClaimId,
        author: Option<String>,
        body: String,
    ) -> Result<WarrantyClaim, OpsError> {
        if body.trim().is_empty() {
            return Err(OpsError::InvalidInput(
                "message body is required".to_string(),
            ));
        }
        let mut data = self.data.write().await;
        let author = author.unwrap_or_else(|| data.profile.contact_name.clone());
        let claim = data
            .claims
            .iter_mut()
            .find(|claim| &claim.id == id)
            .ok_or_else(|| OpsError::not_found("claim", id.as_str()))?;
        claim.add_message(author, body, Utc::now());
        Ok(claim.clone())
    }

    async fn tickets(&self) -> Result<Vec<SupportTicket>, OpsError> {
        Ok(self.data.read().await.tickets.clone())
    }

    async fn ticket(&self, id: &TicketId) -> Result<SupportTicket, OpsError> {
        self.data
            .read()
            .await
            .tickets
            .iter()
            .find(|ticket| &ticket.id == id)
            .cloned()
            .ok_or_else(|| OpsError::not_found("ticket", id.as_str()))
    }

    async fn create_ticket(&self, new: NewTicket) -> Result<SupportTicket, OpsError> {
        if new.subject.trim().is_empty() {
            return Err(OpsError::InvalidInput("subject is required".to_string()));
        }

        let mut data = self.data.write().await;
        let now = Utc::now();
        let ticket = SupportTicket {
            id: TicketId::new(format!("tk-{}", Uuid::new_v4())),
            ticket_number: format!("ST-{}", 4100 + data.tickets.len() + 1),
            dealer_id: data.profile.id.clone(),
            category: new.category,
            priority: new.priority,
            status: TicketStatus::Open,
            subject: new.subject,
            description: new.description,
            attachments: new.attachments,
            created: now,
            updated: now,
            timeline: Timeline::seeded(TicketStatus::Open, now, None),
            messages: vec![],
        };
        data.tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn update_ticket_status(
        &self,
        id: &TicketId,
        status: TicketStatus,
        note: Option<String>,
    ) -> Result<SupportTicket, OpsError> {
        let mut data = self.data.write().await;
        let ticket = data
            .tickets
            .iter_mut()
            .find(|ticket| &ticket.id == id)
            .ok_or_else(|| OpsError::not_found("ticket", id.as_str()))?;
        ticket.advance(status, Utc::now(), note)?;
        Ok(ticket.clone())
    }

    async fn add_ticket_message(
        &self,
        id: &TicketId,
        author: Option<String>,
        body: String,
    ) -> Result<SupportTicket, OpsError> {
        if body.trim().is_empty() {
            return Err(OpsError::InvalidInput(
                "message body is required".to_string(),
            ));
        }
        let mut data = self.data.write().await;
        let author = author.unwrap_or_else(|| data.profile.contact_name.clone());
        let ticket = data
            .tickets
            .iter_mut()
            .find(|ticket| &ticket.id == id)
            .ok_or_else(|| OpsError::not_found("ticket", id.as_str()))?;
        ticket.add_message(author, body, Utc::now());
        Ok(ticket.clone())
    }

    async fn notifications(&self) -> Result<Vec<Notification>, OpsError> {
        Ok(self.data.read().await.notifications.clone())
    }

    async fn mark_notification_read(&self, id: &NotificationId) -> Result<(), OpsError> {
        let mut data = self.data.write().await;
        let notification = data
            .notifications
            .iter_mut()
            .find(|notification| &notification.id == id)
            .ok_or_else(|| OpsError::not_found("notification", id.as_str()))?;
        notification.read = true;
        Ok(())
    }

    async fn announcements(&self) -> Result<Vec<Announcement>, OpsError> {
        Ok(self.data.read().await.announcements.clone())
    }

    async fn analytics(&self) -> Result<DealerAnalytics, OpsError> {
        Ok(self.data.read().await.analytics.clone())
    }
}

// =============================================================================
// Tests
// =============================================================================
