//! Support ticket types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{DealerId, TicketId};
use super::status::{Lifecycle, TicketStatus};
use super::timeline::Timeline;
use super::warranty::Message;
use crate::error::OpsError;

/// What a support ticket is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    OrderIssue,
    WarrantyClaim,
    ProductQuestion,
    MarketingRequest,
    PortalHelp,
    #[default]
    Other,
}

/// Ticket urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    #[default]
    Standard,
    Urgent,
}

/// A dealer support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: TicketId,
    pub ticket_number: String,
    pub dealer_id: DealerId,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub subject: String,
    pub description: String,
    pub attachments: Vec<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub timeline: Timeline<TicketStatus>,
    pub messages: Vec<Message>,
}

impl SupportTicket {
    /// Apply a status transition, recording it on the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidTransition`] and leaves the ticket
    /// untouched if the move is not legal from the current status.
    pub fn advance(
        &mut self,
        next: TicketStatus,
        at: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<(), OpsError> {
        if !self.status.can_transition_to(next) {
            return Err(OpsError::invalid_transition("ticket", self.status, next));
        }
        self.status = next;
        self.timeline.record(next, at, note);
        self.updated = at;
        Ok(())
    }

    /// Append a message to the ticket thread.
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, day, 11, 30, 0).unwrap()
    }

    fn open_ticket() -> SupportTicket {
        SupportTicket {
            id: TicketId::new("st-test"),
            ticket_number: "ST-4199".to_string(),
            dealer_id: DealerId::new("d1"),
            category: TicketCategory::PortalHelp,
            priority: TicketPriority::Standard,
            status: TicketStatus::Open,
            subject: "Cannot download spec sheets".to_string(),
            description: "The spec sheet links on the product pages time out".to_string(),
            attachments: Vec::new(),
            created: ts(1),
            updated: ts(1),
            timeline: Timeline::seeded(TicketStatus::Open, ts(1), None),
            messages: Vec::new(),
        }
    }

    #[test]
    fn test_ticket_oscillates_then_resolves() {
        let mut ticket = open_ticket();
        ticket.advance(TicketStatus::InProgress, ts(2), None).unwrap();
        ticket
            .advance(TicketStatus::AwaitingResponse, ts(3), None)
            .unwrap();
        ticket.advance(TicketStatus::InProgress, ts(4), None).unwrap();
        ticket.advance(TicketStatus::Resolved, ts(5), None).unwrap();

        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(ticket.timeline.len(), 5);
        assert_eq!(ticket.timeline.current(), Some(TicketStatus::Resolved));
    }

    #[test]
    fn test_open_cannot_jump_to_resolved() {
        let mut ticket = open_ticket();
        let before = ticket.clone();

        assert!(ticket.advance(TicketStatus::Resolved, ts(2), None).is_err());
        assert_eq!(ticket, before);
    }

    #[test]
    fn test_category_wire_values() {
        let json = serde_json::to_string(&TicketCategory::MarketingRequest).unwrap();
        assert_eq!(json, "\"marketing_request\"");
        let json = serde_json::to_string(&TicketPriority::Urgent).unwrap();
        assert_eq!(json, "\"urgent\"");
    }
}
