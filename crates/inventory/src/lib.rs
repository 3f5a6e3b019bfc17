//! Inventory domain module (event-sourced).
//!
//! Products, per-category stock statistics and the sales history, implemented
//! purely as deterministic domain logic (no IO, no printing, no storage).
//! Rendering and status reporting belong to the caller.

pub mod category;
pub mod error;
pub mod inventory;
pub mod product;
pub mod sales;

pub use category::CategoryStatistics;
pub use error::InventoryError;
pub use inventory::{
    AddProduct, Inventory, InventoryCommand, InventoryEvent, InventoryId, InventorySummary,
    ProductAdded, ProductRestocked, RecordSale, SaleRecorded, StockOutcome,
};
pub use product::Product;
pub use sales::SalesRecord;
