use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use retail_core::{Aggregate, AggregateId, AggregateRoot};
use retail_events::Event;

use crate::category::{CategoryStatistics, CategoryTally};
use crate::error::InventoryError;
use crate::product::Product;
use crate::sales::SalesRecord;

/// Inventory identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryId(pub AggregateId);

impl InventoryId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InventoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Inventory.
///
/// Owns the products (insertion ordered, indexed by name), the per-category
/// tallies (kept in sync incrementally) and the append-only sales history.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    id: InventoryId,
    products: Vec<Product>,
    by_name: HashMap<String, usize>,
    categories: BTreeMap<String, CategoryTally>,
    sales: Vec<SalesRecord>,
    version: u64,
}

/// Headline numbers for the whole inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub product_count: usize,
    pub category_count: usize,
    pub total_value: f64,
}

/// What `add_product` did with the incoming product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockOutcome {
    /// A new product was inserted.
    Added { name: String },
    /// An existing product was topped up; `stock` is its new quantity,
    /// saturated at `i64::MAX`.
    Restocked { name: String, stock: i64 },
}

impl Inventory {
    pub fn new(id: InventoryId) -> Self {
        Self {
            id,
            products: Vec::new(),
            by_name: HashMap::new(),
            categories: BTreeMap::new(),
            sales: Vec::new(),
            version: 0,
        }
    }

    /// Rebuild an inventory from events previously emitted by `handle`.
    pub fn replay<'a>(
        id: InventoryId,
        events: impl IntoIterator<Item = &'a InventoryEvent>,
    ) -> Self {
        let mut inventory = Self::new(id);
        for event in events {
            inventory.apply(event);
        }
        inventory
    }

    pub fn id_typed(&self) -> InventoryId {
        self.id
    }

    /// Add a product, or top up the existing product with the same name.
    ///
    /// On a name match the stock accumulates and the price is replaced; the
    /// existing category is kept. Accumulated stock saturates at `i64::MAX`.
    pub fn add_product(&mut self, product: Product) -> StockOutcome {
        let name = product.name().to_string();
        let event = self.decide_add(&AddProduct {
            product,
            occurred_at: Utc::now(),
        });
        self.apply(&event);

        match event {
            InventoryEvent::ProductRestocked(_) => {
                let stock = self
                    .find_product(&name)
                    .map(Product::stock_quantity)
                    .unwrap_or_default();
                StockOutcome::Restocked { name, stock }
            }
            _ => StockOutcome::Added { name },
        }
    }

    /// Sell `quantity` units of `product_name` at its current price.
    ///
    /// Fails without touching any state on a non-positive quantity, an unknown
    /// product or insufficient stock (checked in that order).
    pub fn record_sale(
        &mut self,
        product_name: &str,
        quantity: i64,
        note: Option<&str>,
    ) -> Result<SalesRecord, InventoryError> {
        let sale = self.decide_sale(&RecordSale {
            product_name: product_name.to_string(),
            quantity,
            note: note.map(str::to_string),
            occurred_at: Utc::now(),
        })?;
        let record = SalesRecord::from(&sale);
        self.apply(&InventoryEvent::SaleRecorded(sale));
        Ok(record)
    }

    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.by_name.get(name).map(|&idx| &self.products[idx])
    }

    /// All products, in the order they were first added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in `category`, in insertion order.
    pub fn list_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Sum of `unit_price * stock_quantity` over every product, computed fresh.
    pub fn total_inventory_value(&self) -> f64 {
        self.products.iter().map(Product::stock_value).sum()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            product_count: self.products.len(),
            category_count: self.categories.len(),
            total_value: self.total_inventory_value(),
        }
    }

    /// Cached per-category figures, sorted by category name.
    pub fn category_statistics(&self) -> Vec<CategoryStatistics> {
        self.categories
            .iter()
            .map(|(category, tally)| CategoryStatistics::from_tally(category, tally))
            .collect()
    }

    /// Every recorded sale, oldest first.
    pub fn sales_history(&self) -> &[SalesRecord] {
        &self.sales
    }
}

impl AggregateRoot for Inventory {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddProduct {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RecordSale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSale {
    pub product_name: String,
    pub quantity: i64,
    pub note: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddProduct(AddProduct),
    RecordSale(RecordSale),
}

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductRestocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRestocked {
    pub name: String,
    pub unit_price: f64,
    pub added_quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SaleRecorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecorded {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_value: f64,
    pub note: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ProductAdded(ProductAdded),
    ProductRestocked(ProductRestocked),
    SaleRecorded(SaleRecorded),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded(_) => "inventory.product.added",
            InventoryEvent::ProductRestocked(_) => "inventory.product.restocked",
            InventoryEvent::SaleRecorded(_) => "inventory.sale.recorded",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ProductAdded(e) => e.occurred_at,
            InventoryEvent::ProductRestocked(e) => e.occurred_at,
            InventoryEvent::SaleRecorded(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = InventoryError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ProductAdded(e) => match self.by_name.get(e.product.name()) {
                // Names stay unique: a second add for a known name tops it up.
                Some(&idx) => {
                    self.restock_at(idx, e.product.unit_price(), e.product.stock_quantity());
                }
                None => {
                    let product = e.product.clone();
                    self.categories
                        .entry(product.category().to_string())
                        .or_default()
                        .admit(product.stock_value());
                    self.by_name
                        .insert(product.name().to_string(), self.products.len());
                    self.products.push(product);
                }
            },
            InventoryEvent::ProductRestocked(e) => {
                if let Some(&idx) = self.by_name.get(&e.name) {
                    self.restock_at(idx, e.unit_price, e.added_quantity);
                }
            }
            InventoryEvent::SaleRecorded(e) => {
                if let Some(&idx) = self.by_name.get(&e.product_name) {
                    let product = &mut self.products[idx];
                    product.take(e.quantity);

                    if let Some(tally) = self.categories.get_mut(product.category()) {
                        tally.deplete(e.total_value);
                    }
                    self.sales.push(SalesRecord::from(e));
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddProduct(cmd) => Ok(vec![self.decide_add(cmd)]),
            InventoryCommand::RecordSale(cmd) => {
                Ok(vec![InventoryEvent::SaleRecorded(self.decide_sale(cmd)?)])
            }
        }
    }
}

impl Inventory {
    fn restock_at(&mut self, idx: usize, unit_price: f64, added_quantity: i64) {
        let product = &mut self.products[idx];
        let old_contribution = product.stock_value();
        product.restock(unit_price, added_quantity);
        let new_contribution = product.stock_value();

        if let Some(tally) = self.categories.get_mut(product.category()) {
            tally.revalue(old_contribution, new_contribution);
        }
    }

    fn decide_add(&self, cmd: &AddProduct) -> InventoryEvent {
        if self.by_name.contains_key(cmd.product.name()) {
            InventoryEvent::ProductRestocked(ProductRestocked {
                name: cmd.product.name().to_string(),
                unit_price: cmd.product.unit_price(),
                added_quantity: cmd.product.stock_quantity(),
                occurred_at: cmd.occurred_at,
            })
        } else {
            InventoryEvent::ProductAdded(ProductAdded {
                product: cmd.product.clone(),
                occurred_at: cmd.occurred_at,
            })
        }
    }

    fn decide_sale(&self, cmd: &RecordSale) -> Result<SaleRecorded, InventoryError> {
        if cmd.quantity <= 0 {
            return Err(InventoryError::InvalidQuantity {
                quantity: cmd.quantity,
            });
        }

        let product = self.find_product(&cmd.product_name).ok_or_else(|| {
            InventoryError::ProductNotFound {
                name: cmd.product_name.clone(),
            }
        })?;

        if product.stock_quantity() < cmd.quantity {
            return Err(InventoryError::InsufficientStock {
                name: cmd.product_name.clone(),
                available: product.stock_quantity(),
                requested: cmd.quantity,
            });
        }

        Ok(SaleRecorded {
            product_name: product.name().to_string(),
            quantity: cmd.quantity,
            unit_price: product.unit_price(),
            total_value: product.unit_price() * cmd.quantity as f64,
            note: cmd.note.clone(),
            occurred_at: cmd.occurred_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn test_inventory() -> Inventory {
        Inventory::new(InventoryId::new(AggregateId::new()))
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn stocked_inventory() -> Inventory {
        let mut inventory = test_inventory();
        inventory.add_product(Product::new("Camiseta", "Roupas", 49.90, 20));
        inventory.add_product(Product::new("Calça Jeans", "Roupas", 129.90, 10));
        inventory.add_product(Product::new("Tênis Esportivo", "Calçados", 249.90, 5));
        inventory.add_product(Product::new("Meias (par)", "Acessórios", 9.90, 50));
        inventory.add_product(Product::new("Boné", "Acessórios", 39.90, 15));
        inventory
    }

    fn recomputed_value(inventory: &Inventory, category: &str) -> f64 {
        inventory
            .list_by_category(category)
            .into_iter()
            .map(Product::stock_value)
            .sum()
    }

    fn assert_consistent(inventory: &Inventory) {
        for stats in inventory.category_statistics() {
            let expected = recomputed_value(inventory, &stats.category);
            assert!(
                (stats.stock_value - expected).abs() < TOLERANCE,
                "{}: cached {} vs recomputed {}",
                stats.category,
                stats.stock_value,
                expected
            );
            assert_eq!(
                stats.distinct_products,
                inventory.list_by_category(&stats.category).len()
            );
        }
        let cached_total: f64 = inventory
            .category_statistics()
            .iter()
            .map(|s| s.stock_value)
            .sum();
        assert!((inventory.total_inventory_value() - cached_total).abs() < TOLERANCE);
    }

    #[test]
    fn shirt_walkthrough() {
        let mut inventory = test_inventory();

        let outcome = inventory.add_product(Product::new("Shirt", "Apparel", 50.00, 20));
        assert_eq!(
            outcome,
            StockOutcome::Added {
                name: "Shirt".to_string()
            }
        );
        assert_eq!(inventory.summary().category_count, 1);
        assert!((inventory.total_inventory_value() - 1000.0).abs() < TOLERANCE);

        let outcome = inventory.add_product(Product::new("Shirt", "Apparel", 55.00, 5));
        assert_eq!(
            outcome,
            StockOutcome::Restocked {
                name: "Shirt".to_string(),
                stock: 25
            }
        );
        let shirt = inventory.find_product("Shirt").unwrap();
        assert_eq!(shirt.stock_quantity(), 25);
        assert_eq!(shirt.unit_price(), 55.00);
        assert!((inventory.total_inventory_value() - 1375.0).abs() < TOLERANCE);

        let err = inventory.record_sale("Shirt", 30, None).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                name: "Shirt".to_string(),
                available: 25,
                requested: 30
            }
        );
        assert_eq!(inventory.find_product("Shirt").unwrap().stock_quantity(), 25);

        let record = inventory.record_sale("Shirt", 5, Some("bulk")).unwrap();
        assert_eq!(record.quantity, 5);
        assert!((record.total_value - 275.0).abs() < TOLERANCE);
        assert_eq!(record.note.as_deref(), Some("bulk"));
        assert_eq!(inventory.find_product("Shirt").unwrap().stock_quantity(), 20);
        assert_eq!(inventory.sales_history().len(), 1);
        assert_consistent(&inventory);
    }

    #[test]
    fn upsert_never_duplicates_or_changes_counts() {
        let mut inventory = stocked_inventory();
        let before = inventory.summary();

        inventory.add_product(Product::new("Boné", "Acessórios", 45.00, 5));

        let after = inventory.summary();
        assert_eq!(after.product_count, before.product_count);
        assert_eq!(after.category_count, before.category_count);
        assert_eq!(inventory.list_by_category("Acessórios").len(), 2);

        let bone = inventory.find_product("Boné").unwrap();
        assert_eq!(bone.stock_quantity(), 20);
        assert_eq!(bone.unit_price(), 45.00);
        assert_consistent(&inventory);
    }

    #[test]
    fn upsert_keeps_the_original_category() {
        let mut inventory = test_inventory();
        inventory.add_product(Product::new("Shirt", "Apparel", 50.0, 20));
        inventory.add_product(Product::new("Shirt", "Outlet", 40.0, 10));

        assert_eq!(inventory.find_product("Shirt").unwrap().category(), "Apparel");
        assert!(inventory.list_by_category("Outlet").is_empty());

        let stats = inventory.category_statistics();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].category, "Apparel");
        assert!((stats[0].stock_value - 1200.0).abs() < TOLERANCE);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let inventory = stocked_inventory();

        assert!(inventory.find_product("Tênis Esportivo").is_some());
        assert!(inventory.find_product("tênis esportivo").is_none());
        assert!(inventory.find_product("Tênis").is_none());
    }

    #[test]
    fn list_by_category_preserves_insertion_order() {
        let inventory = stocked_inventory();

        let names: Vec<&str> = inventory
            .list_by_category("Roupas")
            .into_iter()
            .map(Product::name)
            .collect();
        assert_eq!(names, vec!["Camiseta", "Calça Jeans"]);
        assert!(inventory.list_by_category("Eletrônicos").is_empty());
    }

    #[test]
    fn category_statistics_are_sorted_by_name() {
        let inventory = stocked_inventory();

        let stats = inventory.category_statistics();
        let names: Vec<&str> = stats.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Acessórios", "Calçados", "Roupas"]);
        assert_eq!(stats[0].distinct_products, 2);
        assert_eq!(stats[1].distinct_products, 1);
        assert_eq!(stats[2].distinct_products, 2);
        assert_consistent(&inventory);
    }

    #[test]
    fn summary_reports_counts_and_total() {
        let inventory = stocked_inventory();

        let summary = inventory.summary();
        assert_eq!(summary.product_count, 5);
        assert_eq!(summary.category_count, 3);
        // 998 + 1299 + 1249.5 + 495 + 598.5
        assert!((summary.total_value - 4640.0).abs() < TOLERANCE);
    }

    #[test]
    fn invalid_quantity_is_checked_first() {
        let mut inventory = stocked_inventory();
        let before = inventory.clone();

        for quantity in [0, -3] {
            let err = inventory.record_sale("Nope", quantity, None).unwrap_err();
            assert_eq!(err, InventoryError::InvalidQuantity { quantity });
        }
        assert_eq!(inventory, before);
    }

    #[test]
    fn unknown_product_is_rejected_without_mutation() {
        let mut inventory = stocked_inventory();
        let before = inventory.clone();

        let err = inventory.record_sale("Chapéu", 1, Some("walk-in")).unwrap_err();
        assert_eq!(
            err,
            InventoryError::ProductNotFound {
                name: "Chapéu".to_string()
            }
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn selling_entire_stock_keeps_the_product() {
        let mut inventory = stocked_inventory();

        inventory.record_sale("Tênis Esportivo", 5, None).unwrap();

        let tenis = inventory.find_product("Tênis Esportivo").unwrap();
        assert_eq!(tenis.stock_quantity(), 0);
        let calcados = &inventory.category_statistics()[1];
        assert_eq!(calcados.category, "Calçados");
        assert_eq!(calcados.distinct_products, 1);
        assert_eq!(calcados.stock_value, 0.0);
    }

    #[test]
    fn sale_uses_the_current_price() {
        let mut inventory = test_inventory();
        inventory.add_product(Product::new("Shirt", "Apparel", 50.0, 10));
        inventory.record_sale("Shirt", 2, None).unwrap();
        inventory.add_product(Product::new("Shirt", "Apparel", 60.0, 0));
        inventory.record_sale("Shirt", 2, None).unwrap();

        let history = inventory.sales_history();
        assert_eq!(history[0].unit_price, 50.0);
        assert_eq!(history[0].total_value, 100.0);
        assert_eq!(history[1].unit_price, 60.0);
        assert_eq!(history[1].total_value, 120.0);
        assert_consistent(&inventory);
    }

    #[test]
    fn history_is_chronological() {
        let mut inventory = stocked_inventory();

        inventory.record_sale("Camiseta", 3, Some("Cliente: João")).unwrap();
        inventory.record_sale("Meias (par)", 10, Some("Promoção")).unwrap();
        inventory.record_sale("Tênis Esportivo", 1, None).unwrap();

        let names: Vec<&str> = inventory
            .sales_history()
            .iter()
            .map(|r| r.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Camiseta", "Meias (par)", "Tênis Esportivo"]);
        assert!(inventory.sales_history()[2].note.is_none());
        assert_consistent(&inventory);
    }

    #[test]
    fn new_products_are_accepted_as_given() {
        let mut inventory = test_inventory();
        inventory.add_product(Product::new("Refund", "Adjustments", -5.0, 2));
        inventory.add_product(Product::new("Backorder", "Adjustments", 10.0, -1));

        assert_eq!(inventory.products().len(), 2);
        assert!((inventory.total_inventory_value() - (-20.0)).abs() < TOLERANCE);
        assert_consistent(&inventory);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let inventory = stocked_inventory();
        let before = inventory.clone();

        let cmd = InventoryCommand::RecordSale(RecordSale {
            product_name: "Boné".to_string(),
            quantity: 2,
            note: None,
            occurred_at: test_time(),
        });
        let events = inventory.handle(&cmd).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "inventory.sale.recorded");
        assert_eq!(inventory, before);
    }

    #[test]
    fn handle_emits_restock_for_known_names() {
        let inventory = stocked_inventory();
        let at = test_time();

        let cmd = InventoryCommand::AddProduct(AddProduct {
            product: Product::new("Boné", "Acessórios", 42.0, 3),
            occurred_at: at,
        });
        let events = inventory.handle(&cmd).unwrap();

        assert_eq!(
            events,
            vec![InventoryEvent::ProductRestocked(ProductRestocked {
                name: "Boné".to_string(),
                unit_price: 42.0,
                added_quantity: 3,
                occurred_at: at,
            })]
        );
    }

    #[test]
    fn version_counts_applied_events_only() {
        let mut inventory = test_inventory();
        assert_eq!(inventory.version(), 0);

        inventory.add_product(Product::new("Shirt", "Apparel", 50.0, 20));
        inventory.add_product(Product::new("Shirt", "Apparel", 50.0, 1));
        let _ = inventory.record_sale("Shirt", 100, None);
        inventory.record_sale("Shirt", 1, None).unwrap();

        assert_eq!(inventory.version(), 3);
    }

    #[test]
    fn replay_rebuilds_identical_state() {
        let id = InventoryId::new(AggregateId::new());
        let mut inventory = Inventory::new(id);
        let mut log = Vec::new();

        let commands = vec![
            InventoryCommand::AddProduct(AddProduct {
                product: Product::new("Shirt", "Apparel", 50.0, 20),
                occurred_at: test_time(),
            }),
            InventoryCommand::AddProduct(AddProduct {
                product: Product::new("Cap", "Accessories", 12.5, 8),
                occurred_at: test_time(),
            }),
            InventoryCommand::RecordSale(RecordSale {
                product_name: "Shirt".to_string(),
                quantity: 4,
                note: Some("bulk".to_string()),
                occurred_at: test_time(),
            }),
            InventoryCommand::AddProduct(AddProduct {
                product: Product::new("Shirt", "Apparel", 55.0, 5),
                occurred_at: test_time(),
            }),
        ];
        for cmd in &commands {
            log.extend(inventory.execute(cmd).unwrap());
        }

        let rebuilt = Inventory::replay(id, &log);
        assert_eq!(rebuilt, inventory);
        assert_eq!(rebuilt.version(), 4);
    }

    #[test]
    fn replayed_duplicate_add_tops_up_instead_of_duplicating() {
        let id = InventoryId::new(AggregateId::new());
        let added = |price: f64, qty: i64| {
            InventoryEvent::ProductAdded(ProductAdded {
                product: Product::new("Shirt", "Apparel", price, qty),
                occurred_at: test_time(),
            })
        };

        let inventory = Inventory::replay(id, &[added(50.0, 20), added(55.0, 5)]);

        assert_eq!(inventory.products().len(), 1);
        assert_eq!(inventory.version(), 2);
        let shirt = inventory.find_product("Shirt").unwrap();
        assert_eq!(shirt.stock_quantity(), 25);
        assert_eq!(shirt.unit_price(), 55.0);

        let stats = inventory.category_statistics();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].distinct_products, 1);
        assert!((stats[0].stock_value - 1375.0).abs() < TOLERANCE);
        assert_consistent(&inventory);
    }

    #[test]
    fn restock_saturates_instead_of_overflowing() {
        let mut inventory = test_inventory();
        inventory.add_product(Product::new("Shirt", "Apparel", 1.0, i64::MAX));

        let outcome = inventory.add_product(Product::new("Shirt", "Apparel", 1.0, 1));

        assert_eq!(
            outcome,
            StockOutcome::Restocked {
                name: "Shirt".to_string(),
                stock: i64::MAX
            }
        );
        assert_eq!(inventory.find_product("Shirt").unwrap().stock_quantity(), i64::MAX);
        assert_eq!(inventory.products().len(), 1);
    }

    #[test]
    fn category_value_is_cached_and_clamped_while_total_is_recomputed() {
        let mut inventory = test_inventory();
        inventory.add_product(Product::new("Pin", "Tiny", 1e-10, 10));

        inventory.record_sale("Pin", 5, None).unwrap();

        let stats = inventory.category_statistics();
        assert_eq!(stats[0].category, "Tiny");
        assert_eq!(stats[0].stock_value, 0.0);
        assert!((inventory.total_inventory_value() - 5e-10).abs() < 1e-15);
        assert!(inventory.total_inventory_value() > 0.0);
        assert_eq!(inventory.find_product("Pin").unwrap().stock_quantity(), 5);
    }

    #[test]
    fn events_serialize_with_their_payload() {
        let event = InventoryEvent::SaleRecorded(SaleRecorded {
            product_name: "Shirt".to_string(),
            quantity: 5,
            unit_price: 55.0,
            total_value: 275.0,
            note: Some("bulk".to_string()),
            occurred_at: test_time(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["SaleRecorded"]["total_value"], 275.0);

        let back: InventoryEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
