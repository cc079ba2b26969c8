//! Status codes shared by every fallible operation.
//!
//! The enumeration is closed and its discriminants are part of the ABI
//! contract: front-ends receive them verbatim as `i32` and map them onto
//! their own error vocabulary (exceptions, `Result`, …). Codes carry no
//! payload; textual context is the calling layer's job.

use core::fmt;

/// Outcome of a core operation.
///
/// `Ok` is `0`; every failure is a distinct negative value. Existing
/// discriminants are never renumbered; new codes may only append.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed.
    Ok = 0,
    /// A unit id not present in the compiled registry.
    UnknownUnit = -1,
    /// A conversion was requested between different dimensions.
    IncompatibleDimensions = -2,
    /// A required output location was absent.
    NullOutput = -3,
    /// Malformed input value or JSON, including NaN/infinity where disallowed.
    InvalidValue = -4,
    /// A caller-provided fixed buffer is too small for the formatted text.
    BufferTooSmall = -5,
}

impl Status {
    /// The stable integer code crossing the ABI boundary.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Resolves a raw code coming back across the boundary.
    ///
    /// Returns `None` for integers outside the closed set.
    pub const fn from_code(code: i32) -> Option<Status> {
        match code {
            0 => Some(Status::Ok),
            -1 => Some(Status::UnknownUnit),
            -2 => Some(Status::IncompatibleDimensions),
            -3 => Some(Status::NullOutput),
            -4 => Some(Status::InvalidValue),
            -5 => Some(Status::BufferTooSmall),
            _ => None,
        }
    }

    /// `true` for [`Status::Ok`].
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Status::Ok => "ok",
            Status::UnknownUnit => "unknown unit",
            Status::IncompatibleDimensions => "incompatible dimensions",
            Status::NullOutput => "null output pointer",
            Status::InvalidValue => "invalid value",
            Status::BufferTooSmall => "buffer too small",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Status {}
