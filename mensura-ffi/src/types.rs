//! ABI-stable types and constants.
//!
//! Everything in this module is part of the ABI contract: layouts, status
//! codes, and notation flags never change; new constants may only append.

use mensura_core::{DerivedQuantity, Quantity, Status};

/// Status code for success.
pub const MENSURA_OK: i32 = 0;
/// Status code for a unit id not present in the registry.
pub const MENSURA_ERR_UNKNOWN_UNIT: i32 = -1;
/// Status code for a conversion across dimensions.
pub const MENSURA_ERR_INCOMPATIBLE_DIM: i32 = -2;
/// Status code for a missing required output pointer.
pub const MENSURA_ERR_NULL_OUT: i32 = -3;
/// Status code for a malformed value or JSON document.
pub const MENSURA_ERR_INVALID_VALUE: i32 = -4;
/// Status code for a fixed output buffer too small for the formatted text.
pub const MENSURA_ERR_BUFFER_TOO_SMALL: i32 = -5;

/// Notation flag: plain decimal (`1234.57`).
pub const MENSURA_FMT_DEFAULT: u32 = 0;
/// Notation flag: compact scientific, lower-case `e` (`1.23e3`).
pub const MENSURA_FMT_LOWER_EXP: u32 = 1;
/// Notation flag: compact scientific, upper-case `E` (`1.23E3`).
pub const MENSURA_FMT_UPPER_EXP: u32 = 2;

/// A quantity crossing the ABI: a value plus the raw id of its unit.
///
/// Layout: `f64` + `u32` + 4 bytes padding = 16 bytes, aligned to 8.
/// The unit travels as a raw integer so that an out-of-range value coming
/// from C is screened (`MENSURA_ERR_UNKNOWN_UNIT`) instead of being an
/// invalid enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MensuraQuantity {
    /// Raw numeric value.
    pub value: f64,
    /// Raw unit id (see the registry's stable id table).
    pub unit: u32,
}

impl MensuraQuantity {
    /// Creates a new FFI quantity.
    #[inline]
    pub const fn new(value: f64, unit: u32) -> Self {
        Self { value, unit }
    }
}

impl From<Quantity> for MensuraQuantity {
    #[inline]
    fn from(q: Quantity) -> Self {
        Self::new(q.value, q.unit as u32)
    }
}

impl TryFrom<MensuraQuantity> for Quantity {
    type Error = Status;

    #[inline]
    fn try_from(q: MensuraQuantity) -> Result<Self, Status> {
        Quantity::make(q.value, q.unit)
    }
}

/// A derived (numerator-per-denominator) quantity crossing the ABI.
///
/// Layout: `f64` + `u32` + `u32` = 16 bytes, aligned to 8, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MensuraDerivedQuantity {
    /// Raw numeric value.
    pub value: f64,
    /// Raw unit id of the numerator.
    pub numerator: u32,
    /// Raw unit id of the denominator.
    pub denominator: u32,
}

impl MensuraDerivedQuantity {
    /// Creates a new FFI derived quantity.
    #[inline]
    pub const fn new(value: f64, numerator: u32, denominator: u32) -> Self {
        Self {
            value,
            numerator,
            denominator,
        }
    }
}

impl From<DerivedQuantity> for MensuraDerivedQuantity {
    #[inline]
    fn from(q: DerivedQuantity) -> Self {
        Self::new(q.value, q.numerator as u32, q.denominator as u32)
    }
}

impl TryFrom<MensuraDerivedQuantity> for DerivedQuantity {
    type Error = Status;

    #[inline]
    fn try_from(q: MensuraDerivedQuantity) -> Result<Self, Status> {
        DerivedQuantity::make(q.value, q.numerator, q.denominator)
    }
}
