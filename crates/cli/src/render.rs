//! Console rendering: fixed two-decimal money, left-aligned fixed-width columns.

use std::fmt::Write as _;

use retail_inventory::{
    CategoryStatistics, InventoryError, InventoryEvent, InventorySummary, Product, SalesRecord,
};

const CURRENCY: &str = "R$";

pub fn money(value: f64) -> String {
    format!("{CURRENCY} {value:.2}")
}

pub fn product_line(product: &Product) -> String {
    format!(
        "{:<20} | {:<12} | {CURRENCY} {:<8.2} | Stock: {}",
        product.name(),
        product.category(),
        product.unit_price(),
        product.stock_quantity()
    )
}

pub fn product_table<'a>(title: &str, products: impl IntoIterator<Item = &'a Product>) -> String {
    let mut out = format!("\n--- {title} ---\n");
    for product in products {
        let _ = writeln!(out, "{}", product_line(product));
    }
    out
}

pub fn sales_history(records: &[SalesRecord]) -> String {
    let mut out = String::from("\n--- Sales History ---\n");
    if records.is_empty() {
        out.push_str("No sales recorded.\n");
        return out;
    }
    for record in records {
        let _ = write!(
            out,
            "{} x {:<20} | {CURRENCY} {:<8.2}",
            record.quantity, record.product_name, record.total_value
        );
        if let Some(note) = record.note.as_deref().filter(|n| !n.is_empty()) {
            let _ = write!(out, " | {note}");
        }
        out.push('\n');
    }
    out
}

pub fn summary(summary: &InventorySummary) -> String {
    format!(
        "\n=== Inventory Summary ===\n\
         Products: {}\n\
         Categories: {}\n\
         Total stock value: {}\n\
         -------------------------------\n",
        summary.product_count,
        summary.category_count,
        money(summary.total_value)
    )
}

pub fn category_statistics(stats: &[CategoryStatistics]) -> String {
    let mut out = String::from("\n--- Category Statistics ---\n");
    for row in stats {
        let _ = writeln!(
            out,
            "{:<12} | Distinct products: {:<3} | Stock value: {}",
            row.category,
            row.distinct_products,
            money(row.stock_value)
        );
    }
    out
}

/// One-line status for an applied event. `stock` is the product's stock after it.
pub fn status(event: &InventoryEvent, stock: Option<i64>) -> String {
    match event {
        InventoryEvent::ProductAdded(e) => format!("Product added: {}", e.product.name()),
        InventoryEvent::ProductRestocked(e) => match stock {
            Some(stock) => format!("Existing product updated: {} (new stock: {stock})", e.name),
            None => format!("Existing product updated: {}", e.name),
        },
        InventoryEvent::SaleRecorded(e) => format!(
            "Sale recorded: {} x {} | Value {}",
            e.quantity,
            e.product_name,
            money(e.total_value)
        ),
    }
}

pub fn rejection(err: &InventoryError) -> String {
    match err {
        InventoryError::InvalidQuantity { .. } => "Invalid quantity for sale.".to_string(),
        InventoryError::ProductNotFound { name } => format!("Product not found: {name}"),
        InventoryError::InsufficientStock {
            name, available, ..
        } => format!("Insufficient stock for {name}. Available: {available}"),
    }
}
