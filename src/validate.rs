//! Pre-copy validation of a pointer range against allocator metadata.
//!
//! Returning from [`check_bounds`] means the subsequent copy of that side is
//! safe with respect to the allocator's live metadata; a detected violation
//! never returns.

use crate::config;
use crate::oracle::{self, AllocationExtent};
use crate::report::{self, Side};

/// True iff `[addr, addr + len)` escapes `extent`.
///
/// A wrapping `addr + len` counts as escaping: the original range cannot be
/// inside any allocation.
#[inline]
pub(crate) fn overruns_extent(addr: usize, len: usize, extent: AllocationExtent) -> bool {
    match addr.checked_add(len) {
        Some(end) => end > extent.one_past_end,
        None => true,
    }
}

/// Validate one side of a copy request. Terminates the process on violation.
///
/// Skips all work for empty ranges, for load-side ranges when load checking
/// is disabled, before the allocator has published any metadata, and for
/// addresses the oracle has no metadata for (untracked memory is trusted).
#[inline]
pub(crate) fn check_bounds(ptr: *const u8, len: usize, side: Side) {
    if len == 0 {
        return;
    }
    if side == Side::Source && !config::current().check_reads {
        return;
    }
    let Some(oracle) = oracle::installed_oracle() else {
        return;
    };
    if !oracle.is_arena_initialized() {
        return;
    }
    let addr = ptr as usize;
    let Some(extent) = oracle.query_extent(addr) else {
        return;
    };
    if overruns_extent(addr, len, extent) {
        report::bounds_violation(side, addr, extent, len);
    }
}
