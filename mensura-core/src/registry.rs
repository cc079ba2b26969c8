//! Unit registry lookups.
//!
//! The registry is the compiled-in table declared in [`crate::unit`]; it is
//! immutable, allocated in static storage, and safe for unsynchronized
//! concurrent reads. Lookups compile to a jump table over the closed
//! [`UnitId`] enum, so they are O(1) on the hot path of every conversion
//! and format call.
//!
//! Raw integers coming from another language are screened by
//! [`UnitId::from_u32`] before they reach these functions; an id outside
//! the table surfaces as [`Status::UnknownUnit`](crate::Status::UnknownUnit)
//! at that boundary.

use crate::unit::{entry_of, Dimension, UnitEntry, UnitId};

/// Returns the registry entry for the given unit.
///
/// `None` is reserved for ids outside the compiled table; every value of
/// the closed [`UnitId`] enum resolves.
///
/// ```rust
/// use mensura_core::{registry, UnitId};
///
/// let km = registry::lookup(UnitId::Kilometer).unwrap();
/// assert_eq!(km.factor, 1000.0);
/// assert_eq!(km.symbol, "km");
/// ```
#[inline]
pub fn lookup(id: UnitId) -> Option<UnitEntry> {
    Some(entry_of(id))
}

/// Returns the dimension of the given unit.
#[inline]
pub fn dimension_of(id: UnitId) -> Option<Dimension> {
    lookup(id).map(|entry| entry.dimension)
}

/// Checks whether two units share a dimension (and are thus convertible).
#[inline]
pub fn compatible(a: UnitId, b: UnitId) -> bool {
    match (dimension_of(a), dimension_of(b)) {
        (Some(da), Some(db)) => da == db,
        _ => false,
    }
}
