//! Value object trait: equality by value, not identity.
//!
//! Stocked items carry no identity of their own. Two items with the same
//! name, sell-in and quality are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values and are cheap to
/// clone. To "modify" one, produce the next value (an aged item is just a new
/// `(sell_in, quality)` pair for the same name).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
