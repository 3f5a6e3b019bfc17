use serde::{Deserialize, Serialize};
use uuid::Uuid;

use retail_core::AggregateId;

use crate::Event;

/// Envelope for an event, carrying stream metadata next to the payload.
///
/// `sequence_number` is the aggregate version right after the payload was
/// applied, so the first event of a stream is 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    aggregate_id: AggregateId,
    aggregate_type: String,
    event_type: String,
    sequence_number: u64,
    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    pub fn new(
        aggregate_id: AggregateId,
        aggregate_type: impl Into<String>,
        sequence_number: u64,
        payload: E,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            aggregate_id,
            aggregate_type: aggregate_type.into(),
            event_type: payload.event_type().to_string(),
            sequence_number,
            payload,
        }
    }
}

impl<E> EventEnvelope<E> {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn aggregate_id(&self) -> AggregateId {
        self.aggregate_id
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
