//! Conversion-and-formatting core for strongly typed physical quantities.
//!
//! `mensura-core` is the canonical numeric core behind per-language typed
//! wrappers: one authoritative unit table, one conversion algorithm, one
//! text rendering, shared by every front-end so results and strings are
//! identical everywhere. The compile-time unit-tag systems (phantom types,
//! operator overloading, literal suffixes) live in the wrappers, not here;
//! this crate's contract is plain values, stable integer identifiers, and
//! a closed set of status codes.
//!
//! # Components
//!
//! - [`registry`]: the immutable compiled-in table mapping each [`UnitId`]
//!   to its [`Dimension`], conversion factor, and display symbol.
//! - [`convert()`] / [`convert_derived`]: dimension-checked linear
//!   conversion, including compound (numerator-per-denominator) units.
//! - [`format_value`]: numeric rendering under [`FormatSpec`], plain
//!   decimal or compact scientific, fixed precision or shortest-exact.
//! - [`json`]: the JSON codec (bare-number and tagged-object shapes).
//! - [`Status`]: the closed status enumeration surfaced by everything
//!   above.
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::{Quantity, UnitId};
//!
//! let d = Quantity::new(1_500.0, UnitId::Meter);
//! let km = d.convert(UnitId::Kilometer).unwrap();
//! assert!((km.value - 1.5).abs() < 1e-12);
//! assert_eq!(km.to_string(), "1.5 km");
//! ```
//!
//! Derived quantities are a unit pair, converted numerator and denominator
//! independently:
//!
//! ```rust
//! use mensura_core::{DerivedQuantity, UnitId};
//!
//! let v = DerivedQuantity::new(100.0, UnitId::Meter, UnitId::Second);
//! let kmh = v.convert(UnitId::Kilometer, UnitId::Hour).unwrap();
//! assert!((kmh.value - 360.0).abs() < 1e-9);
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns `Result<T, Status>`; no partial
//! results accompany a failure. The core never logs, retries, or
//! recovers; recovery policy belongs to the caller.
//!
//! # Thread safety
//!
//! Every operation is a pure function over immutable input and the
//! read-only registry. There is no global mutable state; calls are safe
//! from any number of threads without coordination.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod convert;
mod format;
pub mod json;
mod macros;
mod quantity;
pub mod registry;
mod status;
mod unit;

pub use convert::{convert, convert_derived};
pub use format::{format_value, FormatSpec, Notation};
pub use quantity::{DerivedQuantity, Quantity};
pub use status::Status;
pub use unit::{Dimension, UnitEntry, UnitId};
