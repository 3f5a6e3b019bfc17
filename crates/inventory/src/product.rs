use serde::{Deserialize, Serialize};

use retail_core::Entity;

/// A named, priced, stocked catalog item.
///
/// The name is the identity: it is matched exactly (case-sensitive) and at most
/// one product per name lives in an [`Inventory`](crate::Inventory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    category: String,
    unit_price: f64,
    stock_quantity: i64,
}

impl Product {
    /// Build a product. Price and stock are taken as given, sign included.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        stock_quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            stock_quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    /// Value of the on-hand stock (`unit_price * stock_quantity`).
    pub fn stock_value(&self) -> f64 {
        self.unit_price * self.stock_quantity as f64
    }

    /// Accumulated stock saturates at the `i64` bounds.
    pub(crate) fn restock(&mut self, unit_price: f64, added_quantity: i64) {
        self.stock_quantity = self.stock_quantity.saturating_add(added_quantity);
        self.unit_price = unit_price;
    }

    pub(crate) fn take(&mut self, quantity: i64) {
        self.stock_quantity -= quantity;
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_value_is_price_times_quantity() {
        let product = Product::new("Boné", "Acessórios", 39.90, 15);
        assert!((product.stock_value() - 598.5).abs() < 1e-9);
    }

    #[test]
    fn restock_accumulates_quantity_and_replaces_price() {
        let mut product = Product::new("Shirt", "Apparel", 50.0, 20);
        product.restock(55.0, 5);

        assert_eq!(product.stock_quantity(), 25);
        assert_eq!(product.unit_price(), 55.0);
        assert_eq!(product.category(), "Apparel");
    }

    #[test]
    fn restock_saturates_at_max_stock() {
        let mut product = Product::new("Shirt", "Apparel", 1.0, i64::MAX - 1);
        product.restock(2.0, 10);

        assert_eq!(product.stock_quantity(), i64::MAX);
        assert_eq!(product.unit_price(), 2.0);
    }

    #[test]
    fn identity_is_the_name() {
        let a = Product::new("Shirt", "Apparel", 50.0, 20);
        let b = Product::new("Shirt", "Outlet", 10.0, 1);
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }
}
