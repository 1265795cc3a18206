//! Process-wide configuration for the checked copy core.
//!
//! Resolved exactly once, the first time any checked copy consults it, and
//! immutable afterwards. The hardware capability probe runs as part of that
//! one-time resolution; it is never repeated per call.

use once_cell::sync::Lazy;

/// Immutable per-process configuration.
#[derive(Clone, Copy, Debug)]
pub struct BuildConfig {
    /// Whether source (load-side) ranges are validated. Destination (store
    /// side) ranges are always validated.
    pub check_reads: bool,
    /// Whether a detected violation traps immediately instead of printing a
    /// diagnostic first. Trapping minimizes the work done while heap state
    /// may be inconsistent.
    pub fail_fast: bool,
    /// Widest single load/store the engine may issue, in bytes. One of
    /// 8, 16, 32 or 64.
    pub max_vector_width: usize,
}

static CONFIG: Lazy<BuildConfig> = Lazy::new(|| BuildConfig {
    // Debug profile: check loads, print diagnostics. Release profile: skip
    // load checks, trap on violation. Either can be forced on by feature.
    check_reads: cfg!(any(feature = "check-reads", debug_assertions)),
    fail_fast: cfg!(any(feature = "fail-fast", not(debug_assertions))),
    max_vector_width: probe_vector_width(),
});

/// The resolved process-wide configuration.
#[inline]
pub fn current() -> &'static BuildConfig {
    &CONFIG
}

#[cfg(target_arch = "x86_64")]
fn probe_vector_width() -> usize {
    use std::is_x86_feature_detected;

    if is_x86_feature_detected!("avx512f") {
        64
    } else if is_x86_feature_detected!("avx2") {
        32
    } else {
        // SSE2 is part of the x86_64 baseline.
        16
    }
}

#[cfg(not(target_arch = "x86_64"))]
fn probe_vector_width() -> usize {
    core::mem::size_of::<u64>()
}
