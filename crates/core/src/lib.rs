//! `retail-core` — domain building blocks shared by the retail crates.
//!
//! Pure domain primitives only: no IO, no logging, no storage.

pub mod aggregate;
pub mod entity;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use id::AggregateId;
pub use value_object::ValueObject;
