//! Quantity value types.
//!
//! [`Quantity`] and [`DerivedQuantity`] are transient, `Copy` value types:
//! created per call, converted or serialized, and discarded. No ownership
//! graph, no sharing, no interior mutability.

use core::cmp::Ordering;
use core::fmt;

use crate::convert::{convert, convert_derived};
use crate::status::Status;
use crate::unit::UnitId;

/// A value tagged with the unit it is expressed in.
///
/// Equality and ordering are only meaningful between quantities sharing a
/// unit: `PartialEq` is `false` and `partial_cmp` is `None` across units.
/// Comparing across units without converting first is a caller error the
/// typed front-end wrappers guard against; the core performs no implicit
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    /// Raw numeric value.
    pub value: f64,
    /// Unit the value is expressed in.
    pub unit: UnitId,
}

impl Quantity {
    /// Creates a quantity from a value and a unit.
    #[inline]
    pub const fn new(value: f64, unit: UnitId) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity from a raw unit id crossing an ABI boundary.
    ///
    /// Fails with [`Status::UnknownUnit`] when the id is outside the
    /// registry.
    #[inline]
    pub fn make(value: f64, raw_unit: u32) -> Result<Self, Status> {
        match UnitId::from_u32(raw_unit) {
            Some(unit) => Ok(Self::new(value, unit)),
            None => Err(Status::UnknownUnit),
        }
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// ```rust
    /// use mensura_core::{Quantity, UnitId};
    ///
    /// let m = Quantity::new(1_500.0, UnitId::Meter);
    /// let km = m.convert(UnitId::Kilometer).unwrap();
    /// assert!((km.value - 1.5).abs() < 1e-12);
    /// assert_eq!(km.unit, UnitId::Kilometer);
    /// ```
    #[inline]
    pub fn convert(self, target: UnitId) -> Result<Self, Status> {
        Ok(Self::new(convert(self.value, self.unit, target)?, target))
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit != other.unit {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Quantity {
    /// Renders as `<value> <symbol>`, e.g. `1.5 km`, using shortest-exact
    /// notation for the number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// A value expressed as numerator-per-denominator, e.g. meters per second.
///
/// No explicit dimension is stored; the pair of unit ids stands in for the
/// compound dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantity {
    /// Raw numeric value.
    pub value: f64,
    /// Unit of the numerator.
    pub numerator: UnitId,
    /// Unit of the denominator.
    pub denominator: UnitId,
}

impl DerivedQuantity {
    /// Creates a derived quantity from a value and a unit pair.
    #[inline]
    pub const fn new(value: f64, numerator: UnitId, denominator: UnitId) -> Self {
        Self {
            value,
            numerator,
            denominator,
        }
    }

    /// Creates a derived quantity from raw unit ids crossing an ABI
    /// boundary; [`Status::UnknownUnit`] if either is outside the registry.
    pub fn make(value: f64, raw_numerator: u32, raw_denominator: u32) -> Result<Self, Status> {
        let numerator = UnitId::from_u32(raw_numerator).ok_or(Status::UnknownUnit)?;
        let denominator = UnitId::from_u32(raw_denominator).ok_or(Status::UnknownUnit)?;
        Ok(Self::new(value, numerator, denominator))
    }

    /// Converts to another numerator/denominator pair.
    ///
    /// ```rust
    /// use mensura_core::{DerivedQuantity, UnitId};
    ///
    /// let mps = DerivedQuantity::new(100.0, UnitId::Meter, UnitId::Second);
    /// let kmh = mps.convert(UnitId::Kilometer, UnitId::Hour).unwrap();
    /// assert!((kmh.value - 360.0).abs() < 1e-9);
    /// ```
    pub fn convert(self, numerator: UnitId, denominator: UnitId) -> Result<Self, Status> {
        let value = convert_derived(
            self.value,
            self.numerator,
            self.denominator,
            numerator,
            denominator,
        )?;
        Ok(Self::new(value, numerator, denominator))
    }
}

impl fmt::Display for DerivedQuantity {
    /// Renders as `<value> <num>/<den>`, e.g. `5 m/s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.value,
            self.numerator.symbol(),
            self.denominator.symbol()
        )
    }
}
