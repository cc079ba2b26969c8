//! JSON codec for quantities.
//!
//! Two shapes per quantity kind:
//!
//! - **Value-only**: the bare JSON number of the value. The unit travels
//!   out of band; parsing pairs the number with a caller-asserted unit.
//! - **Tagged object**: `{"value":<f64>,"unit_id":<u32>}` (and
//!   `{"value":<f64>,"numerator_unit_id":<u32>,"denominator_unit_id":<u32>}`
//!   for derived quantities). Parsing validates the ids against the
//!   registry and returns the quantity **in the unit the JSON names**; it
//!   never converts. Callers wanting a different unit convert afterward;
//!   that policy belongs to the layer above the codec.
//!
//! Malformed JSON, wrong types, or missing fields fail with
//! [`Status::InvalidValue`]; an id not in the registry fails with
//! [`Status::UnknownUnit`]. Non-finite values are rejected in both
//! directions: JSON numbers cannot express them, and emitting `null`
//! would not round-trip.

use serde::{Deserialize, Serialize};

use crate::quantity::{DerivedQuantity, Quantity};
use crate::status::Status;
use crate::unit::UnitId;

/// Wire form of the tagged object shape.
#[derive(Serialize, Deserialize)]
struct QuantityRepr {
    value: f64,
    unit_id: u32,
}

/// Wire form of the derived object shape.
#[derive(Serialize, Deserialize)]
struct DerivedRepr {
    value: f64,
    numerator_unit_id: u32,
    denominator_unit_id: u32,
}

fn finite(value: f64) -> Result<f64, Status> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Status::InvalidValue)
    }
}

/// Serializes only the numeric value as a bare JSON number.
///
/// ```rust
/// use mensura_core::{json, Quantity, UnitId};
///
/// let q = Quantity::new(42.5, UnitId::Meter);
/// assert_eq!(json::to_json_value(&q).unwrap(), "42.5");
/// ```
pub fn to_json_value(quantity: &Quantity) -> Result<String, Status> {
    let value = finite(quantity.value)?;
    serde_json::to_string(&value).map_err(|_| Status::InvalidValue)
}

/// Parses a bare JSON number and pairs it with the caller-asserted unit.
///
/// The codec does not infer the unit from this form; `unit` is taken on
/// faith from the caller.
pub fn from_json_value(unit: UnitId, json: &str) -> Result<Quantity, Status> {
    let value: f64 = serde_json::from_str(json).map_err(|_| Status::InvalidValue)?;
    Ok(Quantity::new(finite(value)?, unit))
}

/// Serializes a quantity as `{"value":<f64>,"unit_id":<u32>}`.
pub fn to_json(quantity: &Quantity) -> Result<String, Status> {
    let repr = QuantityRepr {
        value: finite(quantity.value)?,
        unit_id: quantity.unit as u32,
    };
    serde_json::to_string(&repr).map_err(|_| Status::InvalidValue)
}

/// Parses `{"value":<f64>,"unit_id":<u32>}`, validating the unit id.
///
/// The returned quantity is in the unit named by the JSON; no conversion
/// happens here.
///
/// ```rust
/// use mensura_core::{json, UnitId};
///
/// let q = json::from_json(r#"{"value":1.5,"unit_id":10014}"#).unwrap();
/// assert_eq!(q.unit, UnitId::Kilometer);
/// assert_eq!(q.value, 1.5);
/// ```
pub fn from_json(json: &str) -> Result<Quantity, Status> {
    let repr: QuantityRepr = serde_json::from_str(json).map_err(|_| Status::InvalidValue)?;
    let unit = UnitId::from_u32(repr.unit_id).ok_or(Status::UnknownUnit)?;
    Ok(Quantity::new(finite(repr.value)?, unit))
}

/// Serializes a derived quantity as
/// `{"value":<f64>,"numerator_unit_id":<u32>,"denominator_unit_id":<u32>}`.
pub fn derived_to_json(quantity: &DerivedQuantity) -> Result<String, Status> {
    let repr = DerivedRepr {
        value: finite(quantity.value)?,
        numerator_unit_id: quantity.numerator as u32,
        denominator_unit_id: quantity.denominator as u32,
    };
    serde_json::to_string(&repr).map_err(|_| Status::InvalidValue)
}

/// Parses the derived object shape, validating both unit ids. Same
/// validate-don't-convert contract as [`from_json`].
pub fn derived_from_json(json: &str) -> Result<DerivedQuantity, Status> {
    let repr: DerivedRepr = serde_json::from_str(json).map_err(|_| Status::InvalidValue)?;
    let numerator = UnitId::from_u32(repr.numerator_unit_id).ok_or(Status::UnknownUnit)?;
    let denominator = UnitId::from_u32(repr.denominator_unit_id).ok_or(Status::UnknownUnit)?;
    Ok(DerivedQuantity::new(
        finite(repr.value)?,
        numerator,
        denominator,
    ))
}
