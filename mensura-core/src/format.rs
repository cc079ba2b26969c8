//! Numeric formatter.
//!
//! Renders an `f64` under two orthogonal axes:
//!
//! - **Notation**: plain decimal, or compact scientific with a lower- or
//!   upper-case `e`. The exponent is a plain decimal integer: no leading
//!   zeros, no `+` on positive exponents, `-` preserved (`1.5e3`, `2e-7`;
//!   never `1.5e+03`).
//! - **Precision**: `Some(n)` rounds to exactly `n` digits after the
//!   decimal point; `None` produces the shortest string that parses back
//!   to the identical bit pattern, with integral values rendered without a
//!   decimal point (`42`, not `42.0`).
//!
//! Rust's standard float formatting is the reference implementation for
//! both axes: it already is a shortest-round-trip (Grisu-class)
//! algorithm, renders exponents in exactly the compact form above, and
//! breaks fixed-precision ties by rounding half to even based on the exact
//! binary value. Every front-end formats through this module so the text
//! is bit-identical everywhere; the golden vectors in the tests are the
//! cross-language contract.
//!
//! The formatter emits the numeric text only. Callers wanting `1.5 km`
//! append a single space and the registry symbol themselves (or use
//! [`Quantity`](crate::Quantity)'s `Display`).

use crate::status::Status;

/// How the number is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Plain decimal, e.g. `1234.57`.
    Decimal,
    /// Compact scientific with a lower-case `e`, e.g. `1.23e3`.
    LowerExp,
    /// Compact scientific with an upper-case `E`, e.g. `1.23E3`.
    UpperExp,
}

impl Notation {
    /// The stable flag value crossing the ABI boundary.
    #[inline]
    pub const fn flag(self) -> u32 {
        match self {
            Notation::Decimal => 0,
            Notation::LowerExp => 1,
            Notation::UpperExp => 2,
        }
    }

    /// Resolves a raw notation flag; `None` for unassigned values.
    pub const fn from_flag(flag: u32) -> Option<Notation> {
        match flag {
            0 => Some(Notation::Decimal),
            1 => Some(Notation::LowerExp),
            2 => Some(Notation::UpperExp),
            _ => None,
        }
    }
}

/// Complete description of one formatting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Digits after the decimal point; `None` selects shortest-exact.
    pub precision: Option<u32>,
    /// Rendering notation.
    pub notation: Notation,
}

impl FormatSpec {
    /// Shortest-exact rendering in the given notation.
    #[inline]
    pub const fn shortest(notation: Notation) -> Self {
        Self {
            precision: None,
            notation,
        }
    }

    /// Fixed-precision rendering in the given notation.
    #[inline]
    pub const fn with_precision(precision: u32, notation: Notation) -> Self {
        Self {
            precision: Some(precision),
            notation,
        }
    }

    /// Builds a spec from the ABI encoding: a negative precision selects
    /// shortest-exact, and the notation is a raw flag.
    ///
    /// Fails with [`Status::InvalidValue`] for unassigned notation flags.
    pub fn from_ffi(precision: i32, notation_flag: u32) -> Result<Self, Status> {
        let notation = Notation::from_flag(notation_flag).ok_or(Status::InvalidValue)?;
        let precision = if precision < 0 {
            None
        } else {
            Some(precision as u32)
        };
        Ok(Self {
            precision,
            notation,
        })
    }
}

/// Formats a value according to the spec.
///
/// Non-finite values fail with [`Status::InvalidValue`]: NaN and infinity
/// have no portable textual form, and the output of this function is a
/// cross-language contract.
///
/// ```rust
/// use mensura_core::{format_value, FormatSpec, Notation};
///
/// let spec = FormatSpec::shortest(Notation::LowerExp);
/// assert_eq!(format_value(1234.56789, spec).unwrap(), "1.23456789e3");
/// ```
pub fn format_value(value: f64, spec: FormatSpec) -> Result<String, Status> {
    if !value.is_finite() {
        return Err(Status::InvalidValue);
    }

    let text = match (spec.notation, spec.precision) {
        (Notation::Decimal, None) => format!("{}", value),
        (Notation::Decimal, Some(p)) => format!("{:.*}", p as usize, value),
        (Notation::LowerExp, None) => format!("{:e}", value),
        (Notation::LowerExp, Some(p)) => format!("{:.*e}", p as usize, value),
        (Notation::UpperExp, None) => format!("{:E}", value),
        (Notation::UpperExp, Some(p)) => format!("{:.*E}", p as usize, value),
    };
    Ok(text)
}
