//! Alignment predicate for width-classified copies.

/// True iff both addresses are exact multiples of `width`.
///
/// `width` must be a power of two. Pure: no dereference, no validation.
#[inline(always)]
pub fn is_aligned_pair(width: usize, dst: *const u8, src: *const u8) -> bool {
    debug_assert!(width.is_power_of_two());
    let mask = width - 1;
    (dst as usize) & mask == 0 && (src as usize) & mask == 0
}

#[cfg(test)]
mod tests {
    use super::is_aligned_pair;

    #[test]
    fn test_both_aligned() {
        assert!(is_aligned_pair(16, 64 as *const u8, 128 as *const u8));
        assert!(is_aligned_pair(32, 96 as *const u8, 192 as *const u8));
        assert!(is_aligned_pair(64, 128 as *const u8, 256 as *const u8));
    }

    #[test]
    fn test_either_side_misaligned_fails() {
        assert!(!is_aligned_pair(16, 65 as *const u8, 128 as *const u8));
        assert!(!is_aligned_pair(16, 64 as *const u8, 129 as *const u8));
        assert!(!is_aligned_pair(32, 16 as *const u8, 16 as *const u8));
    }

    #[test]
    fn test_width_one_accepts_anything() {
        assert!(is_aligned_pair(1, 12345 as *const u8, 54321 as *const u8));
    }
}
