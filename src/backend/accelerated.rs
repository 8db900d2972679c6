//! Accelerated implementation.
//!
//! Keys are hashed with `FxHash` instead of randomly seeded SipHash, and byte
//! scans test eight bytes per step using the classic "has zero byte" word
//! trick: for `x = word ^ splat(needle)`, the expression
//! `(x - 0x01..01) & !x & 0x80..80` is non-zero iff some byte of `x` is zero,
//! and its lowest set bit marks the first such byte.

use super::{KeyState, Kernels};
use crate::resolver::Resolution;

const WORD: usize = std::mem::size_of::<u64>();
const LO_BITS: u64 = 0x0101_0101_0101_0101;
const HI_BITS: u64 = 0x8080_8080_8080_8080;

/// Kernels using `FxHash` and word-at-a-time byte scanning.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceleratedKernels;

#[inline]
fn load_word(chunk: &[u8]) -> u64 {
    let mut bytes = [0u8; WORD];
    bytes.copy_from_slice(chunk);
    u64::from_le_bytes(bytes)
}

#[inline]
const fn zero_byte_mask(word: u64) -> u64 {
    word.wrapping_sub(LO_BITS) & !word & HI_BITS
}

fn find_byte_swar(haystack: &[u8], needle: u8) -> Option<usize> {
    let splat = LO_BITS * u64::from(needle);
    let mut chunks = haystack.chunks_exact(WORD);
    let mut offset = 0;

    for chunk in &mut chunks {
        let mask = zero_byte_mask(load_word(chunk) ^ splat);
        if mask != 0 {
            // Lowest flagged lane; false positives only occur above a true hit.
            return Some(offset + (mask.trailing_zeros() / 8) as usize);
        }
        offset += WORD;
    }

    chunks
        .remainder()
        .iter()
        .position(|&byte| byte == needle)
        .map(|position| offset + position)
}

fn find_bytes_prefiltered(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let Some((&first, rest)) = needle.split_first() else {
        return Some(0);
    };
    let last_start = haystack.len().checked_sub(needle.len())?;
    let mut cursor = 0;

    while cursor <= last_start {
        let candidate = cursor + find_byte_swar(&haystack[cursor..=last_start], first)?;
        if haystack[candidate + 1..].starts_with(rest) {
            return Some(candidate);
        }
        cursor = candidate + 1;
    }
    None
}

impl Kernels for AcceleratedKernels {
    fn resolution(&self) -> Resolution {
        Resolution::Native
    }

    fn name(&self) -> &'static str {
        "accelerated"
    }

    fn key_state(&self) -> KeyState {
        KeyState::fx()
    }

    fn find_byte(&self, haystack: &[u8], needle: u8) -> Option<usize> {
        find_byte_swar(haystack, needle)
    }

    fn find_bytes(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        find_bytes_prefiltered(haystack, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PortableKernels;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"", b'a', None)]
    #[case(b"a", b'a', Some(0))]
    #[case(b"abcdefgh", b'h', Some(7))]
    #[case(b"abcdefghi", b'i', Some(8))]
    #[case(b"\x00\x01\x02\x03\x04\x05\x06\x07\x08\x09", 0, Some(0))]
    #[case(b"\x80\x80\x80\x80\x80\x80\x80\x80\x01", 1, Some(8))]
    #[case(b"\xff\xfe\xff\xfe\xff\xfe\xff\xfe", 0xfe, Some(1))]
    #[case(b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", b'b', None)]
    fn test_find_byte_swar(
        #[case] haystack: &[u8],
        #[case] needle: u8,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(find_byte_swar(haystack, needle), expected);
    }

    #[rstest]
    fn test_false_positive_lane_does_not_shadow_later_match() {
        // 0x01 next to a matching 0x00 lane is the case where the borrow
        // propagates into the neighbouring lane.
        let haystack = [0x02, 0x01, 0x00, 0x05, 0x06, 0x07, 0x08, 0x09];
        assert_eq!(find_byte_swar(&haystack, 0x01), Some(1));
        assert_eq!(find_byte_swar(&haystack, 0x00), Some(2));
    }

    #[rstest]
    #[case(b"abcde", b"cd", Some(2))]
    #[case(b"abcde", b"", Some(0))]
    #[case(b"ab", b"abc", None)]
    #[case(b"aaaaaaaaaaab", b"ab", Some(10))]
    #[case(b"abcabcabd", b"abd", Some(6))]
    fn test_find_bytes_prefiltered(
        #[case] haystack: &[u8],
        #[case] needle: &[u8],
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(find_bytes_prefiltered(haystack, needle), expected);
    }

    proptest! {
        #[test]
        fn prop_find_byte_agrees_with_portable(
            haystack in prop::collection::vec(any::<u8>(), 0..100),
            needle: u8
        ) {
            prop_assert_eq!(
                AcceleratedKernels.find_byte(&haystack, needle),
                PortableKernels.find_byte(&haystack, needle)
            );
        }

        #[test]
        fn prop_find_bytes_agrees_with_portable(
            haystack in prop::collection::vec(0u8..4, 0..64),
            needle in prop::collection::vec(0u8..4, 0..4)
        ) {
            prop_assert_eq!(
                AcceleratedKernels.find_bytes(&haystack, &needle),
                PortableKernels.find_bytes(&haystack, &needle)
            );
        }
    }
}
