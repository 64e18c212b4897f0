//! Entity trait: a record whose identity survives changes to its attributes.

/// Minimal interface shared by identified domain records.
pub trait Entity {
    /// Identifier type (e.g. a sequential [`Code`](crate::Code)).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Two entities are the same record when their identifiers match, whatever
    /// their other attributes hold.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
