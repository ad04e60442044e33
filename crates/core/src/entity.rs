//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Invoices are entities: lines are appended during issuance, but the invoice
/// stays the same invoice because its identifier never changes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
