//! Extern "C" API.
//!
//! This module is the stable C ABI of the core. Every function here:
//!
//! - never panics across the boundary (panics become error codes),
//! - validates all pointers before use,
//! - returns exactly one status code, and on failure leaves every output
//!   location untouched,
//! - takes unit ids as raw `u32` values screened through the registry, so
//!   an out-of-range id from any language is a clean
//!   [`MENSURA_ERR_UNKNOWN_UNIT`], never undefined behavior.
//!
//! Heap strings returned through `out_json` pointers are owned by the
//! caller and must be released exactly once via [`mensura_string_free`].

use std::ffi::{c_char, CStr};

use mensura_core::{json, registry, DerivedQuantity, FormatSpec, Quantity, Status, UnitId};

use crate::strings;
use crate::types::{
    MensuraDerivedQuantity, MensuraQuantity, MENSURA_ERR_INVALID_VALUE, MENSURA_ERR_NULL_OUT,
    MENSURA_ERR_UNKNOWN_UNIT, MENSURA_OK,
};

/// ABI version reported by [`mensura_abi_version`]. Bumped only on
/// breaking changes to layouts, ids, codes, or signatures.
pub const ABI_VERSION: u32 = 1;

// =============================================================================
// Panic containment
// =============================================================================

/// Catches any panic and returns a fallback code instead of unwinding
/// across the FFI boundary.
macro_rules! catch_panic {
    ($default:expr, $body:expr) => {{
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(result) => result,
            Err(_) => $default,
        }
    }};
}

// =============================================================================
// Small helpers
// =============================================================================

/// Reads a caller-supplied NUL-terminated string. Null or non-UTF-8 input
/// maps to `InvalidValue`.
///
/// # Safety
///
/// `ptr` must either be null or point to a NUL-terminated string valid for
/// the duration of the call.
unsafe fn read_cstr<'a>(ptr: *const c_char) -> Result<&'a str, Status> {
    if ptr.is_null() {
        return Err(Status::InvalidValue);
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    let text = unsafe { CStr::from_ptr(ptr) };
    text.to_str().map_err(|_| Status::InvalidValue)
}

/// Hands a freshly serialized JSON string to the caller.
///
/// # Safety
///
/// `out_json` must be non-null and writable.
unsafe fn hand_out(json_text: String, out_json: *mut *mut c_char) -> i32 {
    match strings::into_raw(json_text) {
        Some(raw) => {
            // SAFETY: `out_json` checked non-null by every caller.
            unsafe { *out_json = raw };
            MENSURA_OK
        }
        None => MENSURA_ERR_INVALID_VALUE,
    }
}

// =============================================================================
// Version
// =============================================================================

/// Returns the ABI version of this library.
///
/// Front-ends assert compatibility at startup; the version is incremented
/// only when breaking changes are made to the ABI.
#[no_mangle]
pub extern "C" fn mensura_abi_version() -> u32 {
    ABI_VERSION
}

// =============================================================================
// Unit queries
// =============================================================================

/// Checks whether a raw unit id is present in the registry.
#[no_mangle]
pub extern "C" fn mensura_unit_is_valid(unit: u32) -> bool {
    catch_panic!(false, UnitId::from_u32(unit).is_some())
}

/// Writes the dimension code of a unit to `out_dimension`.
///
/// # Returns
///
/// * [`MENSURA_OK`] on success
/// * [`MENSURA_ERR_NULL_OUT`] if `out_dimension` is null
/// * [`MENSURA_ERR_UNKNOWN_UNIT`] if the unit id is not recognized
///
/// # Safety
///
/// `out_dimension` must be null or point to writable memory for a `u32`.
#[no_mangle]
pub unsafe extern "C" fn mensura_unit_dimension(unit: u32, out_dimension: *mut u32) -> i32 {
    catch_panic!(MENSURA_ERR_UNKNOWN_UNIT, {
        if out_dimension.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        match UnitId::from_u32(unit).and_then(registry::dimension_of) {
            Some(dim) => {
                // SAFETY: checked non-null above.
                unsafe { *out_dimension = dim as u32 };
                MENSURA_OK
            }
            None => MENSURA_ERR_UNKNOWN_UNIT,
        }
    })
}

/// Writes whether two units share a dimension to `out_compatible`.
///
/// # Returns
///
/// * [`MENSURA_OK`] on success
/// * [`MENSURA_ERR_NULL_OUT`] if `out_compatible` is null
/// * [`MENSURA_ERR_UNKNOWN_UNIT`] if either unit id is not recognized
///
/// # Safety
///
/// `out_compatible` must be null or point to writable memory for a `bool`.
#[no_mangle]
pub unsafe extern "C" fn mensura_units_compatible(a: u32, b: u32, out_compatible: *mut bool) -> i32 {
    catch_panic!(MENSURA_ERR_UNKNOWN_UNIT, {
        if out_compatible.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        let (Some(ua), Some(ub)) = (UnitId::from_u32(a), UnitId::from_u32(b)) else {
            return MENSURA_ERR_UNKNOWN_UNIT;
        };
        // SAFETY: checked non-null above.
        unsafe { *out_compatible = registry::compatible(ua, ub) };
        MENSURA_OK
    })
}

/// Returns the PascalCase name of a unit as a static NUL-terminated
/// string, or null for an unknown id.
///
/// The pointer refers to static storage; the caller must not free or
/// modify it.
#[no_mangle]
pub extern "C" fn mensura_unit_name(unit: u32) -> *const c_char {
    catch_panic!(core::ptr::null(), {
        match UnitId::from_u32(unit) {
            Some(u) => u.name_cstr().as_ptr() as *const c_char,
            None => core::ptr::null(),
        }
    })
}

/// Returns the display symbol of a unit as a static NUL-terminated
/// string, or null for an unknown id.
///
/// Callers appending a symbol to formatted text use this together with
/// [`mensura_format`].
#[no_mangle]
pub extern "C" fn mensura_unit_symbol(unit: u32) -> *const c_char {
    catch_panic!(core::ptr::null(), {
        match UnitId::from_u32(unit) {
            Some(u) => u.symbol_cstr().as_ptr() as *const c_char,
            None => core::ptr::null(),
        }
    })
}

// =============================================================================
// Construction and conversion
// =============================================================================

/// Constructs a quantity after validating the unit id.
///
/// # Returns
///
/// * [`MENSURA_OK`] on success
/// * [`MENSURA_ERR_NULL_OUT`] if `out` is null
/// * [`MENSURA_ERR_UNKNOWN_UNIT`] if the unit id is not recognized
///
/// # Safety
///
/// `out` must be null or point to writable memory for a
/// [`MensuraQuantity`].
#[no_mangle]
pub unsafe extern "C" fn mensura_quantity_make(
    value: f64,
    unit: u32,
    out: *mut MensuraQuantity,
) -> i32 {
    catch_panic!(MENSURA_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        match Quantity::make(value, unit) {
            Ok(q) => {
                // SAFETY: checked non-null above.
                unsafe { *out = q.into() };
                MENSURA_OK
            }
            Err(status) => status.code(),
        }
    })
}

/// Converts a quantity to a different unit of the same dimension.
///
/// # Returns
///
/// * [`MENSURA_OK`] on success
/// * [`MENSURA_ERR_NULL_OUT`] if `out` is null
/// * [`MENSURA_ERR_UNKNOWN_UNIT`] if either unit id is not recognized
/// * [`MENSURA_ERR_INCOMPATIBLE_DIM`](crate::MENSURA_ERR_INCOMPATIBLE_DIM)
///   if the units belong to different dimensions
///
/// # Safety
///
/// `out` must be null or point to writable memory for a
/// [`MensuraQuantity`].
#[no_mangle]
pub unsafe extern "C" fn mensura_quantity_convert(
    src: MensuraQuantity,
    dst_unit: u32,
    out: *mut MensuraQuantity,
) -> i32 {
    catch_panic!(MENSURA_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        let converted = Quantity::try_from(src)
            .and_then(|q| UnitId::from_u32(dst_unit).ok_or(Status::UnknownUnit).map(|u| (q, u)))
            .and_then(|(q, u)| q.convert(u));
        match converted {
            Ok(q) => {
                // SAFETY: checked non-null above.
                unsafe { *out = q.into() };
                MENSURA_OK
            }
            Err(status) => status.code(),
        }
    })
}

/// Converts a raw value between units, without the struct wrapper.
///
/// # Safety
///
/// `out_value` must be null or point to writable memory for an `f64`.
#[no_mangle]
pub unsafe extern "C" fn mensura_convert_value(
    value: f64,
    src_unit: u32,
    dst_unit: u32,
    out_value: *mut f64,
) -> i32 {
    catch_panic!(MENSURA_ERR_UNKNOWN_UNIT, {
        if out_value.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        let result = Quantity::make(value, src_unit)
            .and_then(|q| UnitId::from_u32(dst_unit).ok_or(Status::UnknownUnit).map(|u| (q, u)))
            .and_then(|(q, u)| q.convert(u));
        match result {
            Ok(q) => {
                // SAFETY: checked non-null above.
                unsafe { *out_value = q.value };
                MENSURA_OK
            }
            Err(status) => status.code(),
        }
    })
}

/// Constructs a derived (numerator-per-denominator) quantity after
/// validating both unit ids.
///
/// # Safety
///
/// `out` must be null or point to writable memory for a
/// [`MensuraDerivedQuantity`].
#[no_mangle]
pub unsafe extern "C" fn mensura_derived_make(
    value: f64,
    numerator_unit: u32,
    denominator_unit: u32,
    out: *mut MensuraDerivedQuantity,
) -> i32 {
    catch_panic!(MENSURA_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        match DerivedQuantity::make(value, numerator_unit, denominator_unit) {
            Ok(q) => {
                // SAFETY: checked non-null above.
                unsafe { *out = q.into() };
                MENSURA_OK
            }
            Err(status) => status.code(),
        }
    })
}

/// Converts a derived quantity to a different numerator/denominator pair.
///
/// The numerator pair and denominator pair are dimension-checked
/// independently; the pairs need not share a dimension with each other.
///
/// # Safety
///
/// `out` must be null or point to writable memory for a
/// [`MensuraDerivedQuantity`].
#[no_mangle]
pub unsafe extern "C" fn mensura_derived_convert(
    src: MensuraDerivedQuantity,
    dst_numerator_unit: u32,
    dst_denominator_unit: u32,
    out: *mut MensuraDerivedQuantity,
) -> i32 {
    catch_panic!(MENSURA_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        let converted = DerivedQuantity::try_from(src).and_then(|q| {
            let num = UnitId::from_u32(dst_numerator_unit).ok_or(Status::UnknownUnit)?;
            let den = UnitId::from_u32(dst_denominator_unit).ok_or(Status::UnknownUnit)?;
            q.convert(num, den)
        });
        match converted {
            Ok(q) => {
                // SAFETY: checked non-null above.
                unsafe { *out = q.into() };
                MENSURA_OK
            }
            Err(status) => status.code(),
        }
    })
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats the numeric part of a quantity into a caller-owned buffer.
///
/// `precision < 0` selects shortest-exact; `notation` is one of the
/// `MENSURA_FMT_*` flags. The output is NUL-terminated numeric text only;
/// append `" "` plus [`mensura_unit_symbol`] for a display string.
///
/// If the buffer cannot hold the text plus its NUL terminator, the call
/// returns [`MENSURA_ERR_BUFFER_TOO_SMALL`](crate::MENSURA_ERR_BUFFER_TOO_SMALL)
/// and writes nothing, so the retry path is simply: grow the buffer, call
/// again.
///
/// # Safety
///
/// `buf` must be null or point to at least `buf_len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn mensura_format(
    src: MensuraQuantity,
    precision: i32,
    notation: u32,
    buf: *mut c_char,
    buf_len: usize,
) -> i32 {
    catch_panic!(MENSURA_ERR_INVALID_VALUE, {
        if buf.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        if UnitId::from_u32(src.unit).is_none() {
            return MENSURA_ERR_UNKNOWN_UNIT;
        }
        let spec = match FormatSpec::from_ffi(precision, notation) {
            Ok(spec) => spec,
            Err(status) => return status.code(),
        };
        let text = match mensura_core::format_value(src.value, spec) {
            Ok(text) => text,
            Err(status) => return status.code(),
        };
        if text.len() + 1 > buf_len {
            return Status::BufferTooSmall.code();
        }
        // SAFETY: `buf` is non-null and holds at least `buf_len` bytes,
        // which covers text.len() + 1.
        unsafe {
            core::ptr::copy_nonoverlapping(text.as_ptr(), buf as *mut u8, text.len());
            *buf.add(text.len()) = 0;
        }
        MENSURA_OK
    })
}

// =============================================================================
// JSON codec
// =============================================================================

/// Serializes only the numeric value as a bare JSON number.
///
/// On success `*out_json` receives a heap string owned by the caller;
/// release it exactly once with [`mensura_string_free`].
///
/// # Safety
///
/// `out_json` must be null or point to writable memory for a pointer.
#[no_mangle]
pub unsafe extern "C" fn mensura_quantity_to_json_value(
    src: MensuraQuantity,
    out_json: *mut *mut c_char,
) -> i32 {
    catch_panic!(MENSURA_ERR_INVALID_VALUE, {
        if out_json.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        let serialized = Quantity::try_from(src).and_then(|q| json::to_json_value(&q));
        match serialized {
            // SAFETY: checked non-null above.
            Ok(text) => unsafe { hand_out(text, out_json) },
            Err(status) => status.code(),
        }
    })
}

/// Parses a bare JSON number and pairs it with the caller-asserted unit.
///
/// # Safety
///
/// `json_text` must be null or a NUL-terminated string; `out` must be null or
/// point to writable memory for a [`MensuraQuantity`].
#[no_mangle]
pub unsafe extern "C" fn mensura_quantity_from_json_value(
    unit: u32,
    json_text: *const c_char,
    out: *mut MensuraQuantity,
) -> i32 {
    catch_panic!(MENSURA_ERR_INVALID_VALUE, {
        if out.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        let Some(unit) = UnitId::from_u32(unit) else {
            return MENSURA_ERR_UNKNOWN_UNIT;
        };
        // SAFETY: forwarded caller contract.
        let parsed = unsafe { read_cstr(json_text) }.and_then(|t| json::from_json_value(unit, t));
        match parsed {
            Ok(q) => {
                // SAFETY: checked non-null above.
                unsafe { *out = q.into() };
                MENSURA_OK
            }
            Err(status) => status.code(),
        }
    })
}

/// Serializes a quantity as `{"value":<f64>,"unit_id":<u32>}`.
///
/// On success `*out_json` receives a heap string owned by the caller;
/// release it exactly once with [`mensura_string_free`].
///
/// # Safety
///
/// `out_json` must be null or point to writable memory for a pointer.
#[no_mangle]
pub unsafe extern "C" fn mensura_quantity_to_json(
    src: MensuraQuantity,
    out_json: *mut *mut c_char,
) -> i32 {
    catch_panic!(MENSURA_ERR_INVALID_VALUE, {
        if out_json.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        let serialized = Quantity::try_from(src).and_then(|q| json::to_json(&q));
        match serialized {
            // SAFETY: checked non-null above.
            Ok(text) => unsafe { hand_out(text, out_json) },
            Err(status) => status.code(),
        }
    })
}

/// Parses `{"value":<f64>,"unit_id":<u32>}` and validates the unit id.
///
/// The result stays in the unit named by the JSON; converting to some
/// other unit afterward is the caller's decision, not the codec's.
///
/// # Safety
///
/// `json_text` must be null or a NUL-terminated string; `out` must be null or
/// point to writable memory for a [`MensuraQuantity`].
#[no_mangle]
pub unsafe extern "C" fn mensura_quantity_from_json(
    json_text: *const c_char,
    out: *mut MensuraQuantity,
) -> i32 {
    catch_panic!(MENSURA_ERR_INVALID_VALUE, {
        if out.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        // SAFETY: forwarded caller contract.
        let parsed = unsafe { read_cstr(json_text) }.and_then(json::from_json);
        match parsed {
            Ok(q) => {
                // SAFETY: checked non-null above.
                unsafe { *out = q.into() };
                MENSURA_OK
            }
            Err(status) => status.code(),
        }
    })
}

/// Serializes a derived quantity as
/// `{"value":<f64>,"numerator_unit_id":<u32>,"denominator_unit_id":<u32>}`.
///
/// # Safety
///
/// `out_json` must be null or point to writable memory for a pointer.
#[no_mangle]
pub unsafe extern "C" fn mensura_derived_to_json(
    src: MensuraDerivedQuantity,
    out_json: *mut *mut c_char,
) -> i32 {
    catch_panic!(MENSURA_ERR_INVALID_VALUE, {
        if out_json.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        let serialized = DerivedQuantity::try_from(src).and_then(|q| json::derived_to_json(&q));
        match serialized {
            // SAFETY: checked non-null above.
            Ok(text) => unsafe { hand_out(text, out_json) },
            Err(status) => status.code(),
        }
    })
}

/// Parses the derived JSON shape, validating both unit ids. Same
/// validate-don't-convert contract as [`mensura_quantity_from_json`].
///
/// # Safety
///
/// `json_text` must be null or a NUL-terminated string; `out` must be null or
/// point to writable memory for a [`MensuraDerivedQuantity`].
#[no_mangle]
pub unsafe extern "C" fn mensura_derived_from_json(
    json_text: *const c_char,
    out: *mut MensuraDerivedQuantity,
) -> i32 {
    catch_panic!(MENSURA_ERR_INVALID_VALUE, {
        if out.is_null() {
            return MENSURA_ERR_NULL_OUT;
        }
        // SAFETY: forwarded caller contract.
        let parsed = unsafe { read_cstr(json_text) }.and_then(json::derived_from_json);
        match parsed {
            Ok(q) => {
                // SAFETY: checked non-null above.
                unsafe { *out = q.into() };
                MENSURA_OK
            }
            Err(status) => status.code(),
        }
    })
}

/// Releases a string returned by any `mensura_*_to_json*` function.
///
/// Passing null is a no-op. Passing the same pointer twice, or a pointer
/// from any other allocator, is undefined behavior: one string, one free.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this library that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn mensura_string_free(s: *mut c_char) {
    // SAFETY: forwarded caller contract.
    unsafe { strings::free(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MENSURA_ERR_BUFFER_TOO_SMALL, MENSURA_ERR_INCOMPATIBLE_DIM};
    use approx::assert_relative_eq;
    use core::f64::consts::PI;

    const METER: u32 = UnitId::Meter as u32;
    const KILOMETER: u32 = UnitId::Kilometer as u32;
    const SECOND: u32 = UnitId::Second as u32;
    const HOUR: u32 = UnitId::Hour as u32;
    const DEGREE: u32 = UnitId::Degree as u32;
    const RADIAN: u32 = UnitId::Radian as u32;

    #[test]
    fn unit_is_valid() {
        assert!(mensura_unit_is_valid(METER));
        assert!(mensura_unit_is_valid(RADIAN));
        assert!(!mensura_unit_is_valid(0));
        assert!(!mensura_unit_is_valid(123_456));
    }

    #[test]
    fn unit_dimension() {
        let mut dim = 0u32;
        let status = unsafe { mensura_unit_dimension(METER, &mut dim) };
        assert_eq!(status, MENSURA_OK);
        assert_eq!(dim, 1);

        let status = unsafe { mensura_unit_dimension(SECOND, &mut dim) };
        assert_eq!(status, MENSURA_OK);
        assert_eq!(dim, 2);

        let status = unsafe { mensura_unit_dimension(9, &mut dim) };
        assert_eq!(status, MENSURA_ERR_UNKNOWN_UNIT);
        assert_eq!(dim, 2, "output must stay untouched on failure");
    }

    #[test]
    fn unit_dimension_null_out() {
        let status = unsafe { mensura_unit_dimension(METER, core::ptr::null_mut()) };
        assert_eq!(status, MENSURA_ERR_NULL_OUT);
    }

    #[test]
    fn units_compatible() {
        let mut compatible = false;
        let status = unsafe { mensura_units_compatible(METER, KILOMETER, &mut compatible) };
        assert_eq!(status, MENSURA_OK);
        assert!(compatible);

        let status = unsafe { mensura_units_compatible(METER, SECOND, &mut compatible) };
        assert_eq!(status, MENSURA_OK);
        assert!(!compatible);

        let status = unsafe { mensura_units_compatible(METER, 7, &mut compatible) };
        assert_eq!(status, MENSURA_ERR_UNKNOWN_UNIT);
    }

    #[test]
    fn quantity_make_and_convert() {
        let mut q = MensuraQuantity::default();
        let status = unsafe { mensura_quantity_make(1_000.0, METER, &mut q) };
        assert_eq!(status, MENSURA_OK);
        assert_eq!(q.unit, METER);

        let mut km = MensuraQuantity::default();
        let status = unsafe { mensura_quantity_convert(q, KILOMETER, &mut km) };
        assert_eq!(status, MENSURA_OK);
        assert_relative_eq!(km.value, 1.0, epsilon = 1e-12);
        assert_eq!(km.unit, KILOMETER);
    }

    #[test]
    fn quantity_make_unknown_unit() {
        let mut q = MensuraQuantity::new(-1.0, 0);
        let status = unsafe { mensura_quantity_make(1.0, 424_242, &mut q) };
        assert_eq!(status, MENSURA_ERR_UNKNOWN_UNIT);
        assert_relative_eq!(q.value, -1.0, epsilon = 0.0);
    }

    #[test]
    fn convert_value_degrees_to_radians() {
        let mut out = 0.0;
        let status = unsafe { mensura_convert_value(180.0, DEGREE, RADIAN, &mut out) };
        assert_eq!(status, MENSURA_OK);
        assert_relative_eq!(out, PI, epsilon = 1e-12);
    }

    #[test]
    fn convert_incompatible() {
        let src = MensuraQuantity::new(100.0, METER);
        let mut out = MensuraQuantity::default();
        let status = unsafe { mensura_quantity_convert(src, SECOND, &mut out) };
        assert_eq!(status, MENSURA_ERR_INCOMPATIBLE_DIM);
    }

    #[test]
    fn derived_make_and_convert() {
        let mut v = MensuraDerivedQuantity::default();
        let status = unsafe { mensura_derived_make(100.0, METER, SECOND, &mut v) };
        assert_eq!(status, MENSURA_OK);

        let mut kmh = MensuraDerivedQuantity::default();
        let status = unsafe { mensura_derived_convert(v, KILOMETER, HOUR, &mut kmh) };
        assert_eq!(status, MENSURA_OK);
        assert_relative_eq!(kmh.value, 360.0, epsilon = 1e-9);
        assert_eq!(kmh.numerator, KILOMETER);
        assert_eq!(kmh.denominator, HOUR);
    }

    #[test]
    fn format_writes_numeric_text() {
        let q = MensuraQuantity::new(1234.56789, SECOND);
        let mut buf = [0u8; 64];
        let status = unsafe {
            mensura_format(
                q,
                2,
                crate::types::MENSURA_FMT_DEFAULT,
                buf.as_mut_ptr() as *mut c_char,
                buf.len(),
            )
        };
        assert_eq!(status, MENSURA_OK);
        let text = std::ffi::CStr::from_bytes_until_nul(&buf).unwrap();
        assert_eq!(text.to_str().unwrap(), "1234.57");
    }

    #[test]
    fn format_buffer_too_small_then_retry() {
        let q = MensuraQuantity::new(1234.56789, SECOND);
        let mut small = [0xAAu8; 4];
        let status = unsafe {
            mensura_format(
                q,
                -1,
                crate::types::MENSURA_FMT_LOWER_EXP,
                small.as_mut_ptr() as *mut c_char,
                small.len(),
            )
        };
        assert_eq!(status, MENSURA_ERR_BUFFER_TOO_SMALL);
        assert_eq!(small, [0xAAu8; 4], "no truncated write");

        let mut big = [0u8; 64];
        let status = unsafe {
            mensura_format(
                q,
                -1,
                crate::types::MENSURA_FMT_LOWER_EXP,
                big.as_mut_ptr() as *mut c_char,
                big.len(),
            )
        };
        assert_eq!(status, MENSURA_OK);
        let text = std::ffi::CStr::from_bytes_until_nul(&big).unwrap();
        assert_eq!(text.to_str().unwrap(), "1.23456789e3");
    }

    #[test]
    fn format_rejects_unknown_notation() {
        let q = MensuraQuantity::new(1.0, METER);
        let mut buf = [0u8; 8];
        let status =
            unsafe { mensura_format(q, -1, 9, buf.as_mut_ptr() as *mut c_char, buf.len()) };
        assert_eq!(status, MENSURA_ERR_INVALID_VALUE);
    }

    #[test]
    fn json_object_roundtrip() {
        let q = MensuraQuantity::new(1.5, KILOMETER);
        let mut raw: *mut c_char = core::ptr::null_mut();
        let status = unsafe { mensura_quantity_to_json(q, &mut raw) };
        assert_eq!(status, MENSURA_OK);
        assert!(!raw.is_null());

        let text = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_owned();
        assert_eq!(text, r#"{"value":1.5,"unit_id":10014}"#);

        let mut parsed = MensuraQuantity::default();
        let status = unsafe { mensura_quantity_from_json(raw, &mut parsed) };
        assert_eq!(status, MENSURA_OK);
        assert_eq!(parsed, q);

        unsafe { mensura_string_free(raw) };
    }

    #[test]
    fn json_value_roundtrip() {
        let q = MensuraQuantity::new(42.5, METER);
        let mut raw: *mut c_char = core::ptr::null_mut();
        let status = unsafe { mensura_quantity_to_json_value(q, &mut raw) };
        assert_eq!(status, MENSURA_OK);
        assert_eq!(unsafe { CStr::from_ptr(raw) }.to_str().unwrap(), "42.5");

        let mut parsed = MensuraQuantity::default();
        let status = unsafe { mensura_quantity_from_json_value(METER, raw, &mut parsed) };
        assert_eq!(status, MENSURA_OK);
        assert_eq!(parsed, q);

        unsafe { mensura_string_free(raw) };
    }

    #[test]
    fn json_parse_errors() {
        let mut parsed = MensuraQuantity::default();

        let bad = std::ffi::CString::new("{").unwrap();
        let status = unsafe { mensura_quantity_from_json(bad.as_ptr(), &mut parsed) };
        assert_eq!(status, MENSURA_ERR_INVALID_VALUE);

        let unknown = std::ffi::CString::new(r#"{"value":1.0,"unit_id":9}"#).unwrap();
        let status = unsafe { mensura_quantity_from_json(unknown.as_ptr(), &mut parsed) };
        assert_eq!(status, MENSURA_ERR_UNKNOWN_UNIT);

        let status = unsafe { mensura_quantity_from_json(core::ptr::null(), &mut parsed) };
        assert_eq!(status, MENSURA_ERR_INVALID_VALUE);
    }

    #[test]
    fn derived_json_roundtrip() {
        let v = MensuraDerivedQuantity::new(5.0, METER, SECOND);
        let mut raw: *mut c_char = core::ptr::null_mut();
        let status = unsafe { mensura_derived_to_json(v, &mut raw) };
        assert_eq!(status, MENSURA_OK);
        assert_eq!(
            unsafe { CStr::from_ptr(raw) }.to_str().unwrap(),
            r#"{"value":5.0,"numerator_unit_id":10011,"denominator_unit_id":20008}"#
        );

        let mut parsed = MensuraDerivedQuantity::default();
        let status = unsafe { mensura_derived_from_json(raw, &mut parsed) };
        assert_eq!(status, MENSURA_OK);
        assert_eq!(parsed, v);

        unsafe { mensura_string_free(raw) };
    }

    #[test]
    fn json_rejects_non_finite() {
        let q = MensuraQuantity::new(f64::NAN, METER);
        let mut raw: *mut c_char = core::ptr::null_mut();
        let status = unsafe { mensura_quantity_to_json(q, &mut raw) };
        assert_eq!(status, MENSURA_ERR_INVALID_VALUE);
        assert!(raw.is_null(), "output must stay untouched on failure");
    }

    #[test]
    fn abi_version() {
        assert_eq!(mensura_abi_version(), 1);
    }

    #[test]
    fn unit_name_and_symbol() {
        let name = mensura_unit_name(METER);
        assert!(!name.is_null());
        assert_eq!(unsafe { CStr::from_ptr(name) }.to_str().unwrap(), "Meter");

        let symbol = mensura_unit_symbol(KILOMETER);
        assert!(!symbol.is_null());
        assert_eq!(unsafe { CStr::from_ptr(symbol) }.to_str().unwrap(), "km");

        assert!(mensura_unit_name(31).is_null());
        assert!(mensura_unit_symbol(31).is_null());
    }
}
