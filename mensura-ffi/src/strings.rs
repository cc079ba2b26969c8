//! Ownership handoff for heap-returned strings.
//!
//! Every `mensura_*_to_json*` call allocates exactly one C string through
//! [`into_raw`] and hands it to the caller; the caller releases it exactly
//! once through `mensura_string_free`. One alloc entry point, one free
//! entry point, 1:1; the pairing is the whole contract.

use std::ffi::{c_char, CString};

/// Moves a Rust string onto the heap as a NUL-terminated C string.
///
/// Returns `None` if the string contains an interior NUL (JSON output
/// never does).
pub(crate) fn into_raw(s: String) -> Option<*mut c_char> {
    CString::new(s).ok().map(CString::into_raw)
}

/// Reclaims a string previously handed out by [`into_raw`].
///
/// # Safety
///
/// `ptr` must be a pointer obtained from [`into_raw`] that has not been
/// freed yet, or null (a no-op).
pub(crate) unsafe fn free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: per contract, `ptr` came from CString::into_raw exactly once.
    drop(unsafe { CString::from_raw(ptr) });
}
