//! C-compatible FFI bindings for the `mensura` conversion core.
//!
//! `mensura-ffi` exposes the unit registry, conversion engine, numeric
//! formatter, and JSON codec of [`mensura_core`] through a stable C ABI,
//! so typed wrappers in any language call into one shared implementation
//! and get bit-identical results.
//!
//! # Quick start (C/C++)
//!
//! Include the generated header and link against the library:
//!
//! ```c
//! #include "mensura_ffi.h"
//!
//! MensuraQuantity meters;
//! mensura_quantity_make(1000.0, 10011 /* Meter */, &meters);
//!
//! MensuraQuantity km;
//! int32_t status = mensura_quantity_convert(meters, 10014 /* Kilometer */, &km);
//! if (status == MENSURA_OK) {
//!     // km.value == 1.0
//! }
//! ```
//!
//! # ABI stability
//!
//! The following are part of the ABI contract and never change:
//!
//! - unit id values and dimension codes (append-only),
//! - status code values (`MENSURA_OK`, `MENSURA_ERR_*`),
//! - notation flag values (`MENSURA_FMT_*`),
//! - [`MensuraQuantity`] / [`MensuraDerivedQuantity`] memory layouts,
//! - signatures of exported `extern "C"` functions.
//!
//! [`mensura_abi_version`] reports the current ABI version; wrappers
//! assert compatibility at startup.
//!
//! # String ownership
//!
//! Every `mensura_*_to_json*` call hands the caller exactly one heap
//! string; the caller releases it exactly once with
//! [`mensura_string_free`]. There is no other allocator or free path.
//!
//! # Thread safety
//!
//! All functions are thread-safe: the library holds no mutable state, and
//! the registry is immutable for the lifetime of the process.

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

mod ffi;
mod strings;
mod types;

pub use ffi::{
    mensura_abi_version, mensura_convert_value, mensura_derived_convert,
    mensura_derived_from_json, mensura_derived_make, mensura_derived_to_json, mensura_format,
    mensura_quantity_convert, mensura_quantity_from_json, mensura_quantity_from_json_value,
    mensura_quantity_make, mensura_quantity_to_json, mensura_quantity_to_json_value,
    mensura_string_free, mensura_unit_dimension, mensura_unit_is_valid, mensura_unit_name,
    mensura_unit_symbol, mensura_units_compatible, ABI_VERSION,
};

pub use types::{
    MensuraDerivedQuantity, MensuraQuantity, MENSURA_ERR_BUFFER_TOO_SMALL,
    MENSURA_ERR_INCOMPATIBLE_DIM, MENSURA_ERR_INVALID_VALUE, MENSURA_ERR_NULL_OUT,
    MENSURA_ERR_UNKNOWN_UNIT, MENSURA_FMT_DEFAULT, MENSURA_FMT_LOWER_EXP, MENSURA_FMT_UPPER_EXP,
    MENSURA_OK,
};
