//! Prefix length to bitmask conversion.
//!
//! Masks are plain host integers with the top `prefix_len` bits set. Callers
//! decode addresses from network byte order before applying them.

/// Bit width of an IPv4 address.
pub const IPV4_BITS: u8 = 32;

/// Bit width of one half of an IPv6 address.
pub const IPV6_WORD_BITS: u8 = 64;

/// Bit width of an IPv6 address.
pub const IPV6_BITS: u8 = 128;

/// Derive a 32-bit mask from a prefix length.
///
/// A zero prefix yields an empty mask. Prefixes of 32 or more yield the
/// full mask.
pub const fn ipv4_mask(prefix_len: u8) -> u32 {
    match prefix_len {
        0 => 0,
        p if p >= IPV4_BITS => u32::MAX,
        p => u32::MAX << (IPV4_BITS - p) as u32,
    }
}

/// Derive a 64-bit mask from a prefix length, for one IPv6 half-word.
///
/// A zero prefix yields an empty mask. Prefixes of 64 or more yield the
/// full mask.
pub const fn ipv6_word_mask(prefix_len: u8) -> u64 {
    match prefix_len {
        0 => 0,
        p if p >= IPV6_WORD_BITS => u64::MAX,
        p => u64::MAX << (IPV6_WORD_BITS - p) as u32,
    }
}

/// Derive the `(upper, lower)` word masks for an IPv6 prefix.
///
/// The lower word only sees the part of the prefix beyond the first 64
/// bits, so any prefix up to 64 leaves it unconstrained.
pub const fn ipv6_masks(prefix_len: u8) -> (u64, u64) {
    (
        ipv6_word_mask(prefix_len),
        ipv6_word_mask(prefix_len.saturating_sub(IPV6_WORD_BITS)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_mask_zero_is_empty() {
        assert_eq!(ipv4_mask(0), 0);
    }

    #[test]
    fn test_ipv4_mask_common_prefixes() {
        assert_eq!(ipv4_mask(8), 0xff00_0000);
        assert_eq!(ipv4_mask(16), 0xffff_0000);
        assert_eq!(ipv4_mask(24), 0xffff_ff00);
        assert_eq!(ipv4_mask(1), 0x8000_0000);
        assert_eq!(ipv4_mask(31), 0xffff_fffe);
        assert_eq!(ipv4_mask(32), u32::MAX);
    }

    #[test]
    fn test_ipv4_mask_oversized_prefix_is_full() {
        assert_eq!(ipv4_mask(33), u32::MAX);
        assert_eq!(ipv4_mask(u8::MAX), u32::MAX);
    }

    #[test]
    fn test_ipv4_mask_bit_count() {
        for p in 0..=IPV4_BITS {
            assert_eq!(ipv4_mask(p).count_ones(), p as u32, "prefix {}", p);
            assert_eq!(ipv4_mask(p).leading_ones(), p as u32, "prefix {}", p);
        }
    }

    #[test]
    fn test_ipv6_word_mask() {
        assert_eq!(ipv6_word_mask(0), 0);
        assert_eq!(ipv6_word_mask(1), 0x8000_0000_0000_0000);
        assert_eq!(ipv6_word_mask(32), 0xffff_ffff_0000_0000);
        assert_eq!(ipv6_word_mask(63), 0xffff_ffff_ffff_fffe);
        assert_eq!(ipv6_word_mask(64), u64::MAX);
        assert_eq!(ipv6_word_mask(100), u64::MAX);
    }

    #[test]
    fn test_ipv6_masks_split() {
        assert_eq!(ipv6_masks(0), (0, 0));
        assert_eq!(ipv6_masks(32), (0xffff_ffff_0000_0000, 0));
        assert_eq!(ipv6_masks(64), (u64::MAX, 0));
        assert_eq!(ipv6_masks(65), (u64::MAX, 0x8000_0000_0000_0000));
        assert_eq!(ipv6_masks(127), (u64::MAX, 0xffff_ffff_ffff_fffe));
        assert_eq!(ipv6_masks(128), (u64::MAX, u64::MAX));
    }

    #[test]
    fn test_ipv6_lower_mask_empty_up_to_64() {
        // The lower word must never be constrained while the prefix fits in
        // the upper word.
        for p in 0..=IPV6_WORD_BITS {
            assert_eq!(ipv6_masks(p).1, 0, "prefix {}", p);
        }
    }

    #[test]
    fn test_ipv6_masks_bit_count() {
        for p in 0..=IPV6_BITS {
            let (upper, lower) = ipv6_masks(p);
            assert_eq!(upper.count_ones() + lower.count_ones(), p as u32);
        }
    }
}
