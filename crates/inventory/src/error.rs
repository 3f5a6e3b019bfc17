use thiserror::Error;

/// Reasons a sale can be rejected.
///
/// Every variant is recoverable: the inventory is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("invalid sale quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    #[error("product not found: {name}")]
    ProductNotFound { name: String },

    #[error("insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },
}
