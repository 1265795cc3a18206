//! Checked memcpy: validate against allocator bounds, classify, copy.
//!
//! The entry point is [`guarded_memcpy`]. Control flow per request:
//! bounds validation (may terminate the process) → strategy classification →
//! copy engine → return. Each call is a pure function of its arguments and
//! the one-time-resolved [`crate::config::BuildConfig`]; nothing persists
//! between calls.

#![allow(unsafe_code)]

use crate::align;
use crate::config;
use crate::engine;
use crate::report::Side;
use crate::validate;

/// Transfer strategy for one request. Chosen from length and alignment;
/// never observable in the output, only in timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyStrategy {
    /// Single unaligned scalar move of 1, 2, 4 or 8 bytes.
    FixedScalar(usize),
    /// Single aligned vector move of 16, 32 or 64 bytes.
    FixedVector(usize),
    /// Byte-by-byte loop for short irregular lengths.
    ByteLoop,
    /// 8-byte word loop plus the end-aligned overlap window.
    WordLoop,
}

/// Map a request to its transfer strategy.
///
/// Scalar widths are always eligible: register-width unaligned accesses are
/// fine on supported hardware. Vector widths require both the capability
/// (`max_vector_width`) and natural alignment of both buffers; anything else
/// falls through to the general path.
#[inline]
pub fn classify(len: usize, dst: *const u8, src: *const u8, max_vector_width: usize) -> CopyStrategy {
    match len {
        1 | 2 | 4 | 8 => return CopyStrategy::FixedScalar(len),
        16 | 32 | 64 => {
            if max_vector_width >= len && align::is_aligned_pair(len, dst, src) {
                return CopyStrategy::FixedVector(len);
            }
        }
        _ => {}
    }
    if len < 8 {
        CopyStrategy::ByteLoop
    } else {
        CopyStrategy::WordLoop
    }
}

/// Bounds-checked `memcpy`. Returns `dst`.
///
/// For every request that passes validation, the first `n` bytes of `dst`
/// equal the first `n` bytes of `src` at the time of the call. Behaviour for
/// overlapping ranges is unspecified (forward-copy semantics, not memmove).
/// A request that overruns its tracked allocation does not return: the
/// process terminates per the configured failure policy, so no caller ever
/// observes a partial copy.
///
/// # Safety
///
/// - `dst` and `src` must be valid for writes/reads of `n` bytes (`n == 0`
///   never dereferences either pointer)
/// - The ranges must not overlap
pub unsafe fn guarded_memcpy(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    // Zero is a very common memcpy size; take it before any oracle work.
    if n == 0 {
        return dst;
    }

    // Stores are always checked; loads only when configured. Returning from
    // here means the copy below is safe against the allocator's metadata.
    validate::check_bounds(dst as *const u8, n, Side::Destination);
    validate::check_bounds(src, n, Side::Source);

    let cfg = config::current();
    match classify(n, dst as *const u8, src, cfg.max_vector_width) {
        CopyStrategy::FixedScalar(1) => engine::copy_one::<u8>(dst, src),
        CopyStrategy::FixedScalar(2) => engine::copy_one::<u16>(dst, src),
        CopyStrategy::FixedScalar(4) => engine::copy_one::<u32>(dst, src),
        CopyStrategy::FixedScalar(_) => engine::copy_one::<u64>(dst, src),
        #[cfg(target_arch = "x86_64")]
        CopyStrategy::FixedVector(16) => engine::copy_vector16(dst, src),
        #[cfg(target_arch = "x86_64")]
        CopyStrategy::FixedVector(32) => engine::copy_vector32(dst, src),
        #[cfg(target_arch = "x86_64")]
        CopyStrategy::FixedVector(_) => engine::copy_vector64(dst, src),
        // Unreachable off x86_64: the probe caps the width at 8 there.
        #[cfg(not(target_arch = "x86_64"))]
        CopyStrategy::FixedVector(_) => engine::word_loop_with_tail(dst, src, n),
        CopyStrategy::ByteLoop => engine::byte_copy(dst, src, n),
        CopyStrategy::WordLoop => {
            #[cfg(all(feature = "wide-block-copy", target_arch = "x86_64"))]
            if cfg.max_vector_width >= 32 && align::is_aligned_pair(32, dst as *const u8, src) {
                engine::wide_block_copy(dst, src, n);
                return dst;
            }
            engine::word_loop_with_tail(dst, src, n)
        }
    }
    dst
}
