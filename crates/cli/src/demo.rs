//! The demo session: stock a small store, sell a few items, print reports.

use std::io::Write;

use chrono::Utc;
use retail_core::{AggregateId, AggregateRoot};
use retail_events::Event;
use retail_inventory::{
    AddProduct, Inventory, InventoryCommand, InventoryEvent, InventoryId, Product, RecordSale,
};

use crate::dispatch::Dispatcher;
use crate::render;

/// Opening stock: five products across three categories.
pub fn catalogue() -> Vec<Product> {
    vec![
        Product::new("Camiseta", "Roupas", 49.90, 20),
        Product::new("Calça Jeans", "Roupas", 129.90, 10),
        Product::new("Tênis Esportivo", "Calçados", 249.90, 5),
        Product::new("Meias (par)", "Acessórios", 9.90, 50),
        Product::new("Boné", "Acessórios", 39.90, 15),
    ]
}

/// Sales to record: (product, quantity, note).
pub fn sales() -> Vec<(&'static str, i64, Option<&'static str>)> {
    vec![
        ("Camiseta", 3, Some("Cliente: João")),
        ("Meias (par)", 10, Some("Promoção")),
        ("Tênis Esportivo", 1, None),
    ]
}

pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let id = InventoryId::new(AggregateId::new());
    let mut dispatcher = Dispatcher::new(Inventory::new(id));
    tracing::info!(inventory_id = %id, "inventory opened");

    for product in catalogue() {
        let cmd = InventoryCommand::AddProduct(AddProduct {
            product,
            occurred_at: Utc::now(),
        });
        submit(&mut dispatcher, &cmd, out)?;
    }

    let inventory = dispatcher.inventory();
    write!(out, "{}", render::product_table("Products", inventory.products()))?;

    if let Some(product) = inventory.find_product("Tênis Esportivo") {
        writeln!(out, "\nProduct found:\n{}", render::product_line(product))?;
    }

    write!(
        out,
        "{}",
        render::product_table("Category 'Roupas'", inventory.list_by_category("Roupas"))
    )?;
    writeln!(
        out,
        "\nTotal inventory value: {}",
        render::money(inventory.total_inventory_value())
    )?;

    for (name, quantity, note) in sales() {
        let cmd = InventoryCommand::RecordSale(RecordSale {
            product_name: name.to_string(),
            quantity,
            note: note.map(str::to_string),
            occurred_at: Utc::now(),
        });
        submit(&mut dispatcher, &cmd, out)?;
    }

    let inventory = dispatcher.inventory();
    write!(out, "{}", render::sales_history(inventory.sales_history()))?;
    write!(out, "{}", render::summary(&inventory.summary()))?;
    write!(
        out,
        "{}",
        render::category_statistics(&inventory.category_statistics())
    )?;
    out.flush()?;

    tracing::info!(
        version = inventory.version(),
        journaled = dispatcher.journal().len(),
        "inventory demo finished"
    );
    Ok(())
}

/// Dispatch one command and print its status line. Rejections are reported,
/// not propagated: they are ordinary business outcomes.
fn submit(
    dispatcher: &mut Dispatcher,
    cmd: &InventoryCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match dispatcher.dispatch(cmd) {
        Ok(events) => {
            for event in &events {
                let stock = match event {
                    InventoryEvent::ProductRestocked(e) => dispatcher
                        .inventory()
                        .find_product(&e.name)
                        .map(Product::stock_quantity),
                    _ => None,
                };
                let line = render::status(event, stock);
                tracing::info!(event_type = event.event_type(), "{line}");
                writeln!(out, "{line}")?;
            }
        }
        Err(err) => {
            let line = render::rejection(&err);
            tracing::warn!(error = %err, "{line}");
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
