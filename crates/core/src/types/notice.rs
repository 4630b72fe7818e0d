//! Dealer notifications and factory announcements.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::{AnnouncementId, NotificationId};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewLead,
    OrderUpdate,
    Announcement,
    PriceUpdate,
    ProductLaunch,
}

/// A per-dealer notification with an unread flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub at: DateTime<Utc>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_tab: Option<String>,
}

/// Announcement topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementCategory {
    ProductUpdate,
    Pricing,
    Operations,
    Marketing,
}

/// A factory-wide announcement shown to every dealer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: AnnouncementId,
    pub date: NaiveDate,
    pub title: String,
    pub body: String,
    pub category: AnnouncementCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_tab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_href: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_notification_kind_rides_as_type() {
        let notification = Notification {
            id: NotificationId::new("n-1"),
            kind: NotificationKind::NewLead,
            title: "New lead in your territory".to_string(),
            body: "Dana Whitfield asked about The Caldwell".to_string(),
            at: Utc.with_ymd_and_hms(2026, 8, 1, 16, 20, 0).unwrap(),
            read: false,
            link_to: Some("/dealer/leads".to_string()),
            link_tab: None,
        };
        let json = serde_json::to_value(&notification).unwrap();

        assert_eq!(json["type"], "new_lead");
        assert_eq!(json["read"], false);
        assert_eq!(json["linkTo"], "/dealer/leads");
        assert!(json.get("linkTab").is_none());
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_announcement_wire_shape() {
        let announcement = Announcement {
            id: AnnouncementId::new("a-1"),
            date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            title: "Fall finish lineup".to_string(),
            body: "Weathered Oak joins the standard finish set in September".to_string(),
            category: AnnouncementCategory::ProductUpdate,
            action_label: Some("View finishes".to_string()),
            action_tab: None,
            action_href: Some("/finishes".to_string()),
        };
        let json = serde_json::to_value(&announcement).unwrap();

        assert_eq!(json["category"], "product_update");
        assert_eq!(json["date"], "2026-07-15");
        assert_eq!(json["actionLabel"], "View finishes");
        assert!(json.get("actionTab").is_none());
    }
}
