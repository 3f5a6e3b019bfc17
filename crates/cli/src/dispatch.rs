//! Command dispatch for the in-process inventory.
//!
//! Executes commands against the aggregate, wraps every applied event in an
//! envelope and keeps the envelopes in an append-only journal.

use serde::Serialize;

use retail_core::{Aggregate, AggregateRoot};
use retail_events::{Event, EventEnvelope};
use retail_inventory::{Inventory, InventoryCommand, InventoryError, InventoryEvent};

const AGGREGATE_TYPE: &str = "inventory";

pub struct Dispatcher {
    inventory: Inventory,
    journal: Vec<EventEnvelope<InventoryEvent>>,
}

impl Dispatcher {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            journal: Vec::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn journal(&self) -> &[EventEnvelope<InventoryEvent>] {
        &self.journal
    }

    /// Execute `command`; on success the applied events are journaled and returned.
    pub fn dispatch(
        &mut self,
        command: &InventoryCommand,
    ) -> Result<Vec<InventoryEvent>, InventoryError> {
        let events = self.inventory.execute(command)?;

        let first_seq = self.inventory.version() - events.len() as u64 + 1;
        for (offset, event) in events.iter().enumerate() {
            let envelope = EventEnvelope::new(
                self.inventory.id().0,
                AGGREGATE_TYPE,
                first_seq + offset as u64,
                event.clone(),
            );
            // The event is already applied; a payload that cannot be encoded
            // is only a logging problem.
            let _ = log_applied(&envelope);
            self.journal.push(envelope);
        }

        Ok(events)
    }
}

/// Debug-log an applied event with its JSON payload.
///
/// An encoding failure is logged as a warning and returned.
fn log_applied<E: Event + Serialize>(
    envelope: &EventEnvelope<E>,
) -> Result<(), serde_json::Error> {
    let payload = envelope.payload();
    match serde_json::to_string(payload) {
        Ok(json) => {
            tracing::debug!(
                event_id = %envelope.event_id(),
                schema = %payload.schema(),
                sequence = envelope.sequence_number(),
                payload = %json,
                "event applied"
            );
            Ok(())
        }
        Err(err) => {
            tracing::warn!(
                event_id = %envelope.event_id(),
                schema = %payload.schema(),
                sequence = envelope.sequence_number(),
                error = %err,
                "event applied but its payload could not be encoded"
            );
            Err(err)
        }
    }
}
