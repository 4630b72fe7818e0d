//! Dealer order types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{DealerId, OrderId};
use super::status::{Lifecycle, OrderStatus};
use super::timeline::Timeline;
use crate::error::OpsError;

/// One product line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub id: String,
    pub product_slug: String,
    pub product_name: String,
    pub model: String,
    pub finish: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub felt_color: Option<String>,
    pub size: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub accessories: Vec<String>,
}

/// Carrier details once an order ships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub carrier: String,
    pub tracking_number: String,
    pub estimated_delivery: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipped_date: Option<NaiveDate>,
}

/// A dealer's purchase order.
///
/// Monetary invariants: `total = subtotal + shipping` and `subtotal` is
/// the sum of line item totals. Timeline invariant: the last timeline
/// entry matches `status`, except a `draft` order whose timeline is empty
/// until submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub dealer_id: DealerId,
    pub status: OrderStatus,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub line_items: Vec<OrderLineItem>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub timeline: Timeline<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_info: Option<ShippingInfo>,
    pub notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<NaiveDate>,
}

impl Order {
    /// Apply a status transition, recording it on the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidTransition`] and leaves the order
    /// untouched if the move is not legal from the current status.
    pub fn advance(
        &mut self,
        next: OrderStatus,
        at: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<(), OpsError> {
        if !self.status.can_transition_to(next) {
            return Err(OpsError::invalid_transition("order", self.status, next));
        }
        self.status = next;
        self.timeline.record(next, at, note);
        self.updated = at;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, day, 10, 0, 0).unwrap()
    }

    fn draft_order() -> Order {
        let unit_price = Decimal::from(5295);
        Order {
            id: OrderId::new("ord-test"),
            order_number: "IW-1099".to_string(),
            dealer_id: DealerId::new("d1"),
            status: OrderStatus::Draft,
            created: ts(1),
            updated: ts(1),
            line_items: vec![OrderLineItem {
                id: "li-1".to_string(),
                product_slug: "caldwell".to_string(),
                product_name: "The Caldwell".to_string(),
                model: "Caldwell 8ft".to_string(),
                finish: "Windsor Cherry".to_string(),
                felt_color: Some("Championship Green".to_string()),
                size: "8ft".to_string(),
                quantity: 2,
                unit_price,
                total_price: unit_price * Decimal::from(2),
                accessories: vec!["Premium Cue Rack".to_string()],
            }],
            subtotal: unit_price * Decimal::from(2),
            shipping: Decimal::ZERO,
            total: unit_price * Decimal::from(2),
            customer_name: None,
            customer_email: None,
            timeline: Timeline::new(),
            shipping_info: None,
            notes: Vec::new(),
            eta: None,
        }
    }

    #[test]
    fn test_draft_has_empty_timeline() {
        let order = draft_order();
        assert_eq!(order.status, OrderStatus::Draft);
        assert!(order.timeline.is_empty());
    }

    #[test]
    fn test_submit_records_first_timeline_entry() {
        let mut order = draft_order();
        order.advance(OrderStatus::Submitted, ts(2), None).unwrap();

        assert_eq!(order.status, OrderStatus::Submitted);
        assert_eq!(order.timeline.len(), 1);
        assert_eq!(order.timeline.current(), Some(OrderStatus::Submitted));
        assert_eq!(order.updated, ts(2));
    }

    #[test]
    fn test_illegal_transition_leaves_order_unchanged() {
        let mut order = draft_order();
        order.advance(OrderStatus::Submitted, ts(2), None).unwrap();
        let before = order.clone();

        let err = order
            .advance(OrderStatus::Shipped, ts(3), None)
            .unwrap_err();
        assert!(matches!(err, OpsError::InvalidTransition { .. }));
        assert_eq!(order, before);
    }

    #[test]
    fn test_full_walk_to_delivered() {
        let mut order = draft_order();
        let steps = [
            OrderStatus::Submitted,
            OrderStatus::Confirmed,
            OrderStatus::InProduction,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ];
        for (i, step) in steps.into_iter().enumerate() {
            order
                .advance(step, ts(u32::try_from(i).unwrap() + 2), None)
                .unwrap();
        }

        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.timeline.len(), 5);
        assert_eq!(order.timeline.current(), Some(OrderStatus::Delivered));
        assert!(order
            .advance(OrderStatus::Delivered, ts(9), None)
            .is_err());
    }

    #[test]
    fn test_totals_add_up() {
        let order = draft_order();
        let line_sum: Decimal = order.line_items.iter().map(|l| l.total_price).sum();
        assert_eq!(order.subtotal, line_sum);
        assert_eq!(order.total, order.subtotal + order.shipping);
    }

    #[test]
    fn test_wire_shape() {
        let order = draft_order();
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["orderNumber"], "IW-1099");
        assert_eq!(json["dealerId"], "d1");
        assert_eq!(json["status"], "draft");
        // Decimals ride the wire as strings.
        assert_eq!(json["subtotal"], "10590");
        assert_eq!(json["lineItems"][0]["unitPrice"], "5295");
        assert_eq!(json["lineItems"][0]["feltColor"], "Championship Green");
        assert!(json["timeline"].as_array().unwrap().is_empty());
        // Unset optionals are omitted.
        assert!(json.get("eta").is_none());
        assert!(json.get("shippingInfo").is_none());
    }
}
