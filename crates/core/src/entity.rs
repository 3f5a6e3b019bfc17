//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same entity, whatever their other
/// attributes currently hold (a product keeps its identity while its stock moves).
pub trait Entity {
    /// Identifier type. Need not be a UUID; natural keys are fine.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
