//! Factory inventory types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stock availability as reported by the factory.
///
/// Availability is upstream truth, not derived from `available_qty`. A
/// made-to-order row legitimately carries a quantity of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
    MadeToOrder,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => write!(f, "in_stock"),
            Self::LowStock => write!(f, "low_stock"),
            Self::OutOfStock => write!(f, "out_of_stock"),
            Self::MadeToOrder => write!(f, "made_to_order"),
        }
    }
}

/// One warehouse row for a product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product_slug: String,
    pub product_name: String,
    pub category: String,
    pub finish: String,
    pub size: String,
    pub available_qty: u32,
    pub status: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock_date: Option<NaiveDate>,
    pub lead_time_days: u32,
    pub warehouse: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let item = InventoryItem {
            product_slug: "caldwell".to_string(),
            product_name: "The Caldwell".to_string(),
            category: "Pool Tables".to_string(),
            finish: "Windsor Cherry".to_string(),
            size: "8ft".to_string(),
            available_qty: 0,
            status: Availability::MadeToOrder,
            restock_date: None,
            lead_time_days: 45,
            warehouse: "Central (Tomball, TX)".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["productSlug"], "caldwell");
        assert_eq!(json["availableQty"], 0);
        assert_eq!(json["status"], "made_to_order");
        assert_eq!(json["leadTimeDays"], 45);
        // Made-to-order rows have no restock date on the wire.
        assert!(json.get("restockDate").is_none());
    }
}
