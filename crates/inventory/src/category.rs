//! Per-category stock aggregates.

use serde::{Deserialize, Serialize};

use retail_core::ValueObject;

/// Cached stock value below this is snapped to zero after a sale.
pub const STOCK_VALUE_EPSILON: f64 = 1e-9;

/// Incrementally maintained totals for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct CategoryTally {
    pub(crate) distinct_products: usize,
    pub(crate) stock_value: f64,
}

impl CategoryTally {
    pub(crate) fn admit(&mut self, contribution: f64) {
        self.distinct_products += 1;
        self.stock_value += contribution;
    }

    /// Swap one product's contribution for a new one (upsert path, no clamp).
    pub(crate) fn revalue(&mut self, old_contribution: f64, new_contribution: f64) {
        self.stock_value -= old_contribution;
        self.stock_value += new_contribution;
    }

    /// Remove sold value, clamping drift below [`STOCK_VALUE_EPSILON`] to zero.
    pub(crate) fn deplete(&mut self, sold_value: f64) {
        self.stock_value -= sold_value;
        if self.stock_value < STOCK_VALUE_EPSILON {
            self.stock_value = 0.0;
        }
    }
}

/// One row of the per-category report, read from the cached aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStatistics {
    pub category: String,
    pub distinct_products: usize,
    pub stock_value: f64,
}

impl ValueObject for CategoryStatistics {}

impl CategoryStatistics {
    pub(crate) fn from_tally(category: &str, tally: &CategoryTally) -> Self {
        Self {
            category: category.to_string(),
            distinct_products: tally.distinct_products,
            stock_value: tally.stock_value,
        }
    }
}
