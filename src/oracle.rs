//! Allocator-side bounds metadata, consumed through a narrow query interface.
//!
//! The allocator registers an oracle once at startup; the copy core only ever
//! reads from it. The oracle is responsible for keeping its own metadata
//! consistent under concurrent allocation and deallocation (atomically
//! published or append-only); the copy core performs no synchronization of
//! its own and treats each answer as a consistent snapshot.

use once_cell::sync::OnceCell;

/// Bounds of the live allocation containing a queried address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationExtent {
    /// First byte of the allocation.
    pub start: usize,
    /// One past the last byte of the allocation.
    pub one_past_end: usize,
}

impl AllocationExtent {
    /// Size of the allocation in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.one_past_end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.one_past_end == self.start
    }
}

/// Read-only bounds query answered by the allocator.
///
/// `query_extent` must not allocate: it runs on the copy hot path and may run
/// while allocator-internal locks are held.
pub trait BoundsOracle: Sync {
    /// Extent of the live allocation containing `addr`, or `None` when the
    /// allocator has no metadata for that address (stack or static memory,
    /// or an address outside every tracked arena). Absence is not an error.
    fn query_extent(&self, addr: usize) -> Option<AllocationExtent>;

    /// False until the allocator has published any arena metadata at all;
    /// checking is skipped entirely while this is false.
    fn is_arena_initialized(&self) -> bool;
}

static ORACLE: OnceCell<&'static dyn BoundsOracle> = OnceCell::new();

/// Install the process-wide oracle. The first registration wins; returns
/// whether this call installed `oracle`. Performs no allocation.
pub fn register_oracle(oracle: &'static dyn BoundsOracle) -> bool {
    ORACLE.set(oracle).is_ok()
}

/// The registered oracle, if any. A plain atomic read.
#[inline]
pub(crate) fn installed_oracle() -> Option<&'static dyn BoundsOracle> {
    ORACLE.get().copied()
}

#[cfg(test)]
mod tests {
    use super::AllocationExtent;

    #[test]
    fn test_extent_len() {
        let extent = AllocationExtent {
            start: 0x1000,
            one_past_end: 0x1040,
        };
        assert_eq!(extent.len(), 64);
        assert!(!extent.is_empty());
    }

    #[test]
    fn test_empty_extent() {
        let extent = AllocationExtent {
            start: 0x2000,
            one_past_end: 0x2000,
        };
        assert_eq!(extent.len(), 0);
        assert!(extent.is_empty());
    }
}
