//! Sales lead types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::LeadId;
use super::status::{LeadStatus, Lifecycle};
use super::timeline::Timeline;
use crate::error::OpsError;

/// How a lead reached the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    #[default]
    Website,
    TradeShow,
    Referral,
    Phone,
    Campaign,
}

/// One entry in a lead's narrative activity log.
///
/// The activity log is free-form history (calls, emails, showroom visits)
/// and stays separate from the status timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub kind: String,
    pub detail: String,
}

/// A customer lead routed to the dealer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub zip: String,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub product_interest: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub timeline: Timeline<LeadStatus>,
    pub activity: Vec<ActivityEntry>,
    pub notes: Vec<String>,
}

impl Lead {
    /// Apply a status transition, recording it on the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidTransition`] and leaves the lead
    /// untouched if the move is not legal from the current status.
    pub fn advance(
        &mut self,
        next: LeadStatus,
        at: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<(), OpsError> {
        if !self.status.can_transition_to(next) {
            return Err(OpsError::invalid_transition("lead", self.status, next));
        }
        self.status = next;
        self.timeline.record(next, at, note);
        self.updated = at;
        Ok(())
    }

    /// Append a note and a matching activity entry. Does not touch status.
    pub fn add_note(&mut self, note: String, at: DateTime<Utc>) {
        self.activity.push(ActivityEntry {
            at,
            kind: "note_added".to_string(),
            detail: note.clone(),
        });
        self.notes.push(note);
        self.updated = at;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, day, 9, 0, 0).unwrap()
    }

    fn new_lead() -> Lead {
        Lead {
            id: LeadId::new("lead-test"),
            customer_name: "Dana Whitfield".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(512) 555-0139".to_string(),
            location: "Austin, TX".to_string(),
            zip: "78759".to_string(),
            source: LeadSource::Website,
            status: LeadStatus::New,
            product_interest: vec!["caldwell".to_string()],
            room_size: None,
            budget_range: Some("$4,000-$6,000".to_string()),
            created: ts(1),
            updated: ts(1),
            timeline: Timeline::seeded(LeadStatus::New, ts(1), None),
            activity: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_advance_to_lost_from_anywhere() {
        let mut lead = new_lead();
        lead.advance(LeadStatus::Contacted, ts(2), None).unwrap();
        lead.advance(LeadStatus::Lost, ts(3), Some("went with another brand".to_string()))
            .unwrap();

        assert_eq!(lead.status, LeadStatus::Lost);
        assert_eq!(lead.timeline.len(), 3);
        assert_eq!(lead.timeline.current(), Some(LeadStatus::Lost));
    }

    #[test]
    fn test_terminal_lead_rejects_updates() {
        let mut lead = new_lead();
        lead.advance(LeadStatus::Lost, ts(2), None).unwrap();
        let before = lead.clone();

        assert!(lead.advance(LeadStatus::Contacted, ts(3), None).is_err());
        assert_eq!(lead, before);
    }

    #[test]
    fn test_add_note_keeps_status() {
        let mut lead = new_lead();
        lead.add_note("asked about felt colors".to_string(), ts(2));

        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.notes.len(), 1);
        assert_eq!(lead.activity.len(), 1);
        assert_eq!(lead.activity[0].kind, "note_added");
        assert_eq!(lead.timeline.len(), 1);
        assert_eq!(lead.updated, ts(2));
    }

    #[test]
    fn test_source_wire_values() {
        let json = serde_json::to_string(&LeadSource::TradeShow).unwrap();
        assert_eq!(json, "\"trade_show\"");
    }
}
