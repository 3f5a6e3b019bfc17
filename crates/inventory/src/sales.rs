use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use retail_core::ValueObject;

use crate::inventory::SaleRecorded;

/// One completed sale. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product_name: String,
    pub quantity: i64,
    /// Unit price in effect when the sale was recorded.
    pub unit_price: f64,
    /// `unit_price * quantity`.
    pub total_value: f64,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl ValueObject for SalesRecord {}

impl From<&SaleRecorded> for SalesRecord {
    fn from(e: &SaleRecorded) -> Self {
        Self {
            product_name: e.product_name.clone(),
            quantity: e.quantity,
            unit_price: e.unit_price,
            total_value: e.total_value,
            note: e.note.clone(),
            recorded_at: e.occurred_at,
        }
    }
}
