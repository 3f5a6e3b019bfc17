//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A sales
/// record or a category statistics row is a value object: two rows with equal
/// fields are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
