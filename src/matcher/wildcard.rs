//! Prefix-masked address comparison.
//!
//! Both functions take raw addresses in network byte order and are total:
//! a prefix longer than the address width is treated as the full width.

use crate::mask::{ipv4_mask, ipv6_masks};

/// Check whether `candidate` and `pattern` agree on the first `prefix_len` bits.
pub fn match_ipv4(candidate: &[u8; 4], pattern: &[u8; 4], prefix_len: u8) -> bool {
    let mask = ipv4_mask(prefix_len);
    (u32::from_be_bytes(*candidate) & mask) == (u32::from_be_bytes(*pattern) & mask)
}

/// Check whether `candidate` and `pattern` agree on the first `prefix_len` bits.
pub fn match_ipv6(candidate: &[u8; 16], pattern: &[u8; 16], prefix_len: u8) -> bool {
    let (upper_mask, lower_mask) = ipv6_masks(prefix_len);
    let (candidate_upper, candidate_lower) = split_words(candidate);
    let (pattern_upper, pattern_lower) = split_words(pattern);

    (candidate_upper & upper_mask) == (pattern_upper & upper_mask)
        && (candidate_lower & lower_mask) == (pattern_lower & lower_mask)
}

/// Decode an IPv6 address into its upper and lower 64-bit words.
pub(crate) fn split_words(addr: &[u8; 16]) -> (u64, u64) {
    let mut upper = [0u8; 8];
    let mut lower = [0u8; 8];
    upper.copy_from_slice(&addr[..8]);
    lower.copy_from_slice(&addr[8..]);
    (u64::from_be_bytes(upper), u64::from_be_bytes(lower))
}
