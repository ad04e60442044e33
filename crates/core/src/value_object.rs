//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Money`
/// values with the same amount and currency are the same money, and two
/// product snapshots with the same fields describe the same point-in-time
/// catalog entry.
///
/// - **Value Object**: `Money`, `Tax`, `ProductSnapshot`, `RequestLine`
/// - **Entity**: `Invoice` (see [`crate::Entity`])
///
/// To "modify" a value object, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
