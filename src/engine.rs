//! Raw copy primitives behind the size dispatcher.
//!
//! Everything here assumes validation already happened: pointers are valid
//! for the stated lengths. Forward-copy semantics only; overlapping
//! source/destination ranges are the caller's problem. Stateless, no
//! allocation.

#![allow(unsafe_code)]

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Copy one `T`-sized scalar. Unaligned loads/stores, so there is no
/// alignment precondition.
///
/// # Safety
///
/// `dst` and `src` must be valid for a `size_of::<T>()`-byte write/read.
#[inline(always)]
pub unsafe fn copy_one<T: Copy>(dst: *mut u8, src: *const u8) {
    // SAFETY: caller guarantees both pointers cover size_of::<T>() bytes;
    // read_unaligned/write_unaligned allow any alignment.
    let v = core::ptr::read_unaligned(src as *const T);
    core::ptr::write_unaligned(dst as *mut T, v);
}

/// Copy 16 bytes with a single aligned SSE2 move.
///
/// # Safety
///
/// `dst` and `src` must be valid for 16 bytes and 16-byte aligned.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub unsafe fn copy_vector16(dst: *mut u8, src: *const u8) {
    // SAFETY: aligned loads/stores require 16-byte alignment, guaranteed by
    // the caller; SSE2 is part of the x86_64 baseline.
    let v = _mm_load_si128(src as *const __m128i);
    _mm_store_si128(dst as *mut __m128i, v);
}

/// Copy 32 bytes with a single aligned AVX2 move.
///
/// # Safety
///
/// `dst` and `src` must be valid for 32 bytes and 32-byte aligned; AVX2 must
/// be supported.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn copy_vector32(dst: *mut u8, src: *const u8) {
    // SAFETY: aligned loads/stores require 32-byte alignment, guaranteed by
    // the caller.
    let v = _mm256_load_si256(src as *const __m256i);
    _mm256_store_si256(dst as *mut __m256i, v);
}

/// Copy 64 bytes as a pair of aligned AVX2 moves.
///
/// The width probe only reports 64 on avx512f-class machines, but two
/// 32-byte moves express the same load/store pair without AVX-512 codegen.
///
/// # Safety
///
/// `dst` and `src` must be valid for 64 bytes and 64-byte aligned; AVX2 must
/// be supported.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn copy_vector64(dst: *mut u8, src: *const u8) {
    // SAFETY: 64-byte alignment implies 32-byte alignment for both halves.
    let lo = _mm256_load_si256(src as *const __m256i);
    let hi = _mm256_load_si256(src.add(32) as *const __m256i);
    _mm256_store_si256(dst as *mut __m256i, lo);
    _mm256_store_si256(dst.add(32) as *mut __m256i, hi);
}

/// Byte-by-byte copy: exactly `n` single-byte transfers.
///
/// # Safety
///
/// `dst` and `src` must be valid for `n` bytes.
#[inline(always)]
pub unsafe fn byte_copy(dst: *mut u8, src: *const u8, n: usize) {
    for i in 0..n {
        // SAFETY: i < n and the caller guarantees n bytes on both sides.
        *dst.add(i) = *src.add(i);
    }
}

/// Copy `n / 8` complete 8-byte words from the front. Rounds down; the
/// final `n % 8` bytes are left to [`copy_end_word`].
///
/// # Safety
///
/// `dst` and `src` must be valid for `n` bytes.
#[inline(always)]
pub unsafe fn word_copy(dst: *mut u8, src: *const u8, n: usize) {
    let words = n / 8;
    for i in 0..words {
        // SAFETY: (i + 1) * 8 <= n; unaligned word accesses are allowed.
        copy_one::<u64>(dst.add(i * 8), src.add(i * 8));
    }
}

/// Copy one 8-byte window aligned to the *end* of both buffers.
///
/// Whenever `n` is not a multiple of 8 this window overlaps the tail of the
/// preceding bulk transfer; the overlapping bytes already hold the correct
/// source values, so the re-write is redundant but harmless. Net effect of
/// `word_copy` + `copy_end_word`: exactly `n` bytes transferred.
///
/// # Safety
///
/// `dst` and `src` must be valid for `n` bytes, with `n >= 8`.
#[inline(always)]
pub unsafe fn copy_end_word(dst: *mut u8, src: *const u8, n: usize) {
    debug_assert!(n >= 8);
    copy_one::<u64>(dst.add(n - 8), src.add(n - 8));
}

/// General-path copy for `n >= 8`: front word loop plus the end-aligned
/// overlap window.
///
/// # Safety
///
/// `dst` and `src` must be valid for `n` bytes, with `n >= 8`.
#[inline(always)]
pub unsafe fn word_loop_with_tail(dst: *mut u8, src: *const u8, n: usize) {
    word_copy(dst, src, n);
    copy_end_word(dst, src, n);
}

/// Bulk copy at 32-byte stride with word-level cleanup, for buffers that are
/// 32-byte aligned on both sides. Same end-aligned overlap technique as the
/// word path, one level up; identical correctness guarantee.
///
/// # Safety
///
/// `dst` and `src` must be valid for `n` bytes, 32-byte aligned, with
/// `n >= 8`; AVX2 must be supported.
#[cfg(all(feature = "wide-block-copy", target_arch = "x86_64"))]
#[target_feature(enable = "avx2")]
pub unsafe fn wide_block_copy(dst: *mut u8, src: *const u8, n: usize) {
    debug_assert!(n >= 8);
    let mut off = 0;
    while off + 32 <= n {
        // SAFETY: both pointers are 32-byte aligned and advance in 32-byte
        // steps; off + 32 <= n.
        let v = _mm256_load_si256(src.add(off) as *const __m256i);
        _mm256_store_si256(dst.add(off) as *mut __m256i, v);
        off += 32;
    }
    // Word stride over the 0-31 byte remainder, then the end window over the
    // whole buffer picks up the last partial word.
    word_copy(dst.add(off), src.add(off), n - off);
    copy_end_word(dst, src, n);
}
