//! Warranty registration and claim types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ClaimId, DealerId, RegistrationId};
use super::status::{ClaimStatus, Lifecycle};
use super::timeline::Timeline;
use crate::error::OpsError;

/// One message on a claim or ticket thread.
///
/// Internal messages are staff-to-staff and flagged so a client UI can
/// hide them from customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub at: DateTime<Utc>,
    pub author: String,
    pub body: String,
    pub internal: bool,
}

/// A product registered for warranty coverage after delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyRegistration {
    pub id: RegistrationId,
    pub serial_number: String,
    pub product_name: String,
    pub product_slug: String,
    pub customer_name: String,
    pub customer_email: String,
    pub delivery_address: String,
    pub delivery_date: NaiveDate,
    pub installer_name: String,
    pub registration_date: NaiveDate,
    pub warranty_expiration: NaiveDate,
    pub dealer_id: DealerId,
}

/// A warranty claim filed against a registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaim {
    pub id: ClaimId,
    pub claim_number: String,
    pub registration_id: RegistrationId,
    pub serial_number: String,
    pub product_name: String,
    pub customer_name: String,
    pub issue_description: String,
    pub requested_resolution: String,
    pub status: ClaimStatus,
    pub photos: Vec<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub timeline: Timeline<ClaimStatus>,
    pub messages: Vec<Message>,
}

impl WarrantyClaim {
    /// Apply a status transition, recording it on the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidTransition`] and leaves the claim
    /// untouched if the move is not legal from the current status.
    pub fn advance(
        &mut self,
        next: ClaimStatus,
        at: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<(), OpsError> {
        if !self.status.can_transition_to(next) {
            return Err(OpsError::invalid_transition("claim", self.status, next));
        }
        self.status = next;
        self.timeline.record(next, at, note);
        self.updated = at;
        Ok(())
    }

    /// Append a message to the claim thread.
    pub fn add_message(&mut self, author: String, body: String, at: DateTime<Utc>) {
        self.messages.push(Message {
            at,
            author,
            body,
            internal: false,
        });
        self.updated = at;
    }
}
