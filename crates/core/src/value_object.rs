//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** - they are defined entirely by their
/// attribute values, and two value objects with the same values are equal.
/// A `Warranty { expiry_date, provider }` is a value object; an item carrying
/// an `ItemId` is an entity.
///
/// Value objects should be immutable: to "modify" one, build a new one with
/// the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
