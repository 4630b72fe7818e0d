//! Dealer performance rollups.
//!
//! These figures are computed upstream and served as-is. Percentages are
//! whole numbers (12 means 12%), and monetary values follow the same
//! string-serialized [`Decimal`] convention as order totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of sales, oldest first in [`DealerAnalytics::monthly`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    /// Short label such as "Mar" or "Dec".
    pub month: String,
    pub sales: Decimal,
}

/// Per-product sales rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub name: String,
    pub units: u32,
    pub revenue: Decimal,
}

/// The full analytics snapshot for a dealer dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerAnalytics {
    pub ytd_sales: Decimal,
    pub prior_year_sales: Decimal,
    /// Year-over-year growth, whole percent. Negative when sales shrank.
    pub growth_percent: i32,
    /// 1-based rank within the dealer's territory.
    pub territory_rank: u32,
    pub total_dealers: u32,
    pub monthly: Vec<MonthlySales>,
    pub top_products: Vec<ProductSales>,
    pub open_orders: u32,
    pub pending_leads: u32,
    pub avg_order_value: Decimal,
    /// Lead-to-sale conversion, whole percent.
    pub conversion_rate: u32,
}
