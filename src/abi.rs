//! C-compatible `memcpy` symbol (feature `override`).
//!
//! Exports a symbol link-compatible with the C library `memcpy`, so existing
//! callers pick up the checked copy with no source changes. Feature-gated:
//! with it off, this crate's own tests and benches still link the system
//! memcpy for comparison.

#![allow(unsafe_code)]

use core::ffi::c_void;

use crate::memcpy::guarded_memcpy;

/// Drop-in replacement for the C library `memcpy`.
///
/// # Safety
///
/// Same contract as C `memcpy`: `dst` and `src` valid for `n` bytes,
/// non-overlapping. `n == 0` never dereferences either pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcpy(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
    guarded_memcpy(dst as *mut u8, src as *const u8, n) as *mut c_void
}
