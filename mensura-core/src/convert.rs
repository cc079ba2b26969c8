//! Conversion engine.
//!
//! Conversions go through the base unit of the dimension:
//!
//! ```text
//! v_base = v_src * factor(src)
//! v_dst  = v_base / factor(dst)
//! ```
//!
//! which collapses to the single-step linear transform
//! `v_dst = v_src * factor(src) / factor(dst)`. This is exact for every
//! unit system in the registry; affine units with a zero offset
//! (temperature scales and the like) are deliberately unsupported.
//!
//! NaN and infinities pass through arithmetic untouched, following
//! IEEE-754; rejecting them is the codec's job, not the converter's.

use crate::registry;
use crate::status::Status;
use crate::unit::UnitId;

/// Converts a value from one unit to another.
///
/// Fails with [`Status::IncompatibleDimensions`] when the units belong to
/// different dimensions. Same-unit conversion returns the input
/// bit-identically.
///
/// ```rust
/// use mensura_core::{convert, UnitId};
///
/// let km = convert(1_000.0, UnitId::Meter, UnitId::Kilometer).unwrap();
/// assert!((km - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn convert(value: f64, from: UnitId, to: UnitId) -> Result<f64, Status> {
    let src = registry::lookup(from).ok_or(Status::UnknownUnit)?;
    let dst = registry::lookup(to).ok_or(Status::UnknownUnit)?;

    if src.dimension != dst.dimension {
        return Err(Status::IncompatibleDimensions);
    }
    // Identity must hand back the input untouched, not multiplied by a
    // ratio that happens to be 1.
    if from == to {
        return Ok(value);
    }

    Ok(value * src.factor / dst.factor)
}

/// Converts a numerator-per-denominator value between unit pairs.
///
/// The numerator pair and the denominator pair are each checked for
/// dimensional compatibility independently; the pairs need not share a
/// dimension with each other. The composed transform is
/// `value * (factor(from_num)/factor(to_num)) * (factor(to_den)/factor(from_den))`.
///
/// ```rust
/// use mensura_core::{convert_derived, UnitId};
///
/// // 100 m/s = 360 km/h
/// let kmh = convert_derived(
///     100.0,
///     UnitId::Meter,
///     UnitId::Second,
///     UnitId::Kilometer,
///     UnitId::Hour,
/// )
/// .unwrap();
/// assert!((kmh - 360.0).abs() < 1e-9);
/// ```
pub fn convert_derived(
    value: f64,
    from_num: UnitId,
    from_den: UnitId,
    to_num: UnitId,
    to_den: UnitId,
) -> Result<f64, Status> {
    let num_ratio = factor_ratio(from_num, to_num)?;
    let den_ratio = factor_ratio(to_den, from_den)?;
    Ok(value * num_ratio * den_ratio)
}

/// `factor(a) / factor(b)` after the dimension check, exactly `1.0` when
/// `a == b` so identity conversions cannot pick up rounding.
#[inline]
fn factor_ratio(a: UnitId, b: UnitId) -> Result<f64, Status> {
    let ea = registry::lookup(a).ok_or(Status::UnknownUnit)?;
    let eb = registry::lookup(b).ok_or(Status::UnknownUnit)?;

    if ea.dimension != eb.dimension {
        return Err(Status::IncompatibleDimensions);
    }
    if a == b {
        return Ok(1.0);
    }

    Ok(ea.factor / eb.factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::compatible;
    use approx::assert_relative_eq;
    use core::f64::consts::PI;
    use proptest::prelude::*;

    #[test]
    fn meters_to_kilometers() {
        let result = convert(1_000.0, UnitId::Meter, UnitId::Kilometer).unwrap();
        assert_relative_eq!(result, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn kilometers_to_meters() {
        let result = convert(1.0, UnitId::Kilometer, UnitId::Meter).unwrap();
        assert_relative_eq!(result, 1_000.0, epsilon = 1e-12);
    }

    #[test]
    fn seconds_to_hours() {
        let result = convert(3_600.0, UnitId::Second, UnitId::Hour).unwrap();
        assert_relative_eq!(result, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn days_to_hours() {
        let result = convert(1.0, UnitId::Day, UnitId::Hour).unwrap();
        assert_relative_eq!(result, 24.0, epsilon = 1e-12);
    }

    #[test]
    fn degrees_to_radians() {
        let result = convert(180.0, UnitId::Degree, UnitId::Radian).unwrap();
        assert_relative_eq!(result, PI, epsilon = 1e-12);
    }

    #[test]
    fn radians_to_degrees() {
        let result = convert(PI, UnitId::Radian, UnitId::Degree).unwrap();
        assert_relative_eq!(result, 180.0, epsilon = 1e-12);
    }

    #[test]
    fn arcseconds_to_degrees() {
        let result = convert(3_600.0, UnitId::Arcsecond, UnitId::Degree).unwrap();
        assert_relative_eq!(result, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn kilograms_to_pounds() {
        let result = convert(1.0, UnitId::Kilogram, UnitId::Pound).unwrap();
        assert_relative_eq!(result, 1.0 / 0.453_592_37, max_relative = 1e-15);
    }

    #[test]
    fn au_to_kilometers() {
        let result = convert(1.0, UnitId::AstronomicalUnit, UnitId::Kilometer).unwrap();
        assert_relative_eq!(result, 149_597_870.7, max_relative = 1e-12);
    }

    #[test]
    fn horsepower_to_watts() {
        let result = convert(1.0, UnitId::HorsepowerMetric, UnitId::Watt).unwrap();
        assert_relative_eq!(result, 735.498_75, epsilon = 1e-12);
    }

    #[test]
    fn identity_is_exact_for_every_unit() {
        // Deliberately awkward value: an exact ratio of 1 must preserve it
        // bit for bit.
        let v = 0.1 + 0.2;
        for &unit in UnitId::ALL {
            let result = convert(v, unit, unit).unwrap();
            assert_eq!(result.to_bits(), v.to_bits(), "identity for {:?}", unit);
        }
    }

    #[test]
    fn cross_dimension_always_fails() {
        let representatives = [
            UnitId::Meter,
            UnitId::Second,
            UnitId::Radian,
            UnitId::Kilogram,
            UnitId::Watt,
        ];
        for &a in &representatives {
            for &b in &representatives {
                if a == b {
                    continue;
                }
                assert_eq!(
                    convert(1.0, a, b),
                    Err(Status::IncompatibleDimensions),
                    "{:?} -> {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn special_values_propagate() {
        let nan = convert(f64::NAN, UnitId::Meter, UnitId::Kilometer).unwrap();
        assert!(nan.is_nan());

        let inf = convert(f64::INFINITY, UnitId::Second, UnitId::Minute).unwrap();
        assert!(inf.is_infinite() && inf.is_sign_positive());

        let neg_inf = convert(f64::NEG_INFINITY, UnitId::Second, UnitId::Minute).unwrap();
        assert!(neg_inf.is_infinite() && neg_inf.is_sign_negative());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derived conversions
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn derived_m_per_s_to_km_per_h() {
        let kmh = convert_derived(
            100.0,
            UnitId::Meter,
            UnitId::Second,
            UnitId::Kilometer,
            UnitId::Hour,
        )
        .unwrap();
        assert_relative_eq!(kmh, 360.0, epsilon = 1e-9);

        let back = convert_derived(
            kmh,
            UnitId::Kilometer,
            UnitId::Hour,
            UnitId::Meter,
            UnitId::Second,
        )
        .unwrap();
        assert_relative_eq!(back, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn derived_km_per_s_to_km_per_h() {
        let kmh = convert_derived(
            1.0,
            UnitId::Kilometer,
            UnitId::Second,
            UnitId::Kilometer,
            UnitId::Hour,
        )
        .unwrap();
        assert_relative_eq!(kmh, 3_600.0, epsilon = 1e-9);
    }

    #[test]
    fn derived_km_per_h_to_m_per_s() {
        let mps = convert_derived(
            3.6,
            UnitId::Kilometer,
            UnitId::Hour,
            UnitId::Meter,
            UnitId::Second,
        )
        .unwrap();
        assert_relative_eq!(mps, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn derived_au_per_day_to_km_per_s() {
        let kps = convert_derived(
            1.0,
            UnitId::AstronomicalUnit,
            UnitId::Day,
            UnitId::Kilometer,
            UnitId::Second,
        )
        .unwrap();
        // 149,597,870.7 km / 86,400 s
        assert_relative_eq!(kps, 1_731.456_836_8, max_relative = 1e-9);
    }

    #[test]
    fn derived_numerator_mismatch_fails() {
        let result = convert_derived(
            1.0,
            UnitId::Meter,
            UnitId::Second,
            UnitId::Kilogram,
            UnitId::Second,
        );
        assert_eq!(result, Err(Status::IncompatibleDimensions));
    }

    #[test]
    fn derived_denominator_mismatch_fails() {
        let result = convert_derived(
            1.0,
            UnitId::Meter,
            UnitId::Second,
            UnitId::Kilometer,
            UnitId::Radian,
        );
        assert_eq!(result, Err(Status::IncompatibleDimensions));
    }

    #[test]
    fn derived_pairs_need_not_share_a_dimension() {
        // Mass flow: kg/s -> g/min.
        let result = convert_derived(
            1.0,
            UnitId::Kilogram,
            UnitId::Second,
            UnitId::Gram,
            UnitId::Minute,
        )
        .unwrap();
        assert_relative_eq!(result, 60_000.0, epsilon = 1e-9);
    }

    #[test]
    fn derived_identity_is_exact() {
        let v = 123.456_789;
        let result = convert_derived(
            v,
            UnitId::Meter,
            UnitId::Second,
            UnitId::Meter,
            UnitId::Second,
        )
        .unwrap();
        assert_eq!(result.to_bits(), v.to_bits());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────

    /// Same-dimension pairs exercised by the round-trip law.
    const ROUNDTRIP_PAIRS: &[(UnitId, UnitId)] = &[
        (UnitId::Meter, UnitId::Kilometer),
        (UnitId::Meter, UnitId::LightYear),
        (UnitId::Inch, UnitId::Mile),
        (UnitId::Second, UnitId::JulianCentury),
        (UnitId::Hour, UnitId::SiderealDay),
        (UnitId::Radian, UnitId::MicroArcsecond),
        (UnitId::Degree, UnitId::Turn),
        (UnitId::Kilogram, UnitId::Grain),
        (UnitId::Gram, UnitId::SolarMass),
        (UnitId::Watt, UnitId::SolarLuminosity),
        (UnitId::ErgPerSecond, UnitId::Kilowatt),
    ];

    proptest! {
        #[test]
        fn prop_roundtrip(v in -1e12..1e12f64, idx in 0..ROUNDTRIP_PAIRS.len()) {
            let (a, b) = ROUNDTRIP_PAIRS[idx];
            let there = convert(v, a, b).unwrap();
            let back = convert(there, b, a).unwrap();
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_identity(v in proptest::num::f64::ANY) {
            let out = convert(v, UnitId::Meter, UnitId::Meter).unwrap();
            prop_assert_eq!(out.to_bits(), v.to_bits());
        }

        #[test]
        fn prop_ratio_is_constant(v in 1e-6..1e6f64) {
            let m = convert(v, UnitId::Kilometer, UnitId::Meter).unwrap();
            prop_assert!((m / v - 1_000.0).abs() < 1e-9);
        }

        #[test]
        fn prop_derived_roundtrip(v in 1e-6..1e6f64) {
            let kmh = convert_derived(
                v,
                UnitId::Meter,
                UnitId::Second,
                UnitId::Kilometer,
                UnitId::Hour,
            ).unwrap();
            let back = convert_derived(
                kmh,
                UnitId::Kilometer,
                UnitId::Hour,
                UnitId::Meter,
                UnitId::Second,
            ).unwrap();
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }

    #[test]
    fn roundtrip_pairs_share_dimensions() {
        for &(a, b) in ROUNDTRIP_PAIRS {
            assert!(compatible(a, b), "{:?} / {:?}", a, b);
        }
    }
}
