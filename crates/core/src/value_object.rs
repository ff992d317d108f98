//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain objects defined entirely by their
/// attribute values — two with the same values are equal. An attribute value
/// like `{ label: "Red" }` is a value object; an editing session with its own
/// id is not. To "modify" one, build a new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
