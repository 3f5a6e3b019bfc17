use chrono::{DateTime, Utc};

/// A fact that happened to an aggregate.
///
/// Events are immutable, carry a schema version and are only ever appended.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable dotted name, e.g. `"inventory.sale.recorded"`.
    fn event_type(&self) -> &'static str;

    /// Schema version of this event type's payload.
    fn version(&self) -> u32;

    /// Business time of the event.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// `event_type` and `version` in one label, e.g. `"inventory.sale.recorded/v1"`.
    fn schema(&self) -> String {
        format!("{}/v{}", self.event_type(), self.version())
    }
}
