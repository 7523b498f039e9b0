// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Rotate a 64-bit word left by `k` bits.
///
/// Equivalent to `(x << k) | (x >> (64 - k))` for `k` in `1..=63`, computed
/// modulo 2^64.
///
/// ```
/// use rand_shaxoshiro::rotl64;
///
/// assert_eq!(rotl64(0x8000_0000_0000_0001, 1), 0x3);
/// assert_eq!(rotl64(rotl64(0xdead_beef, 23), 64 - 23), 0xdead_beef);
/// ```
#[inline]
pub fn rotl64(x: u64, k: u32) -> u64 {
    debug_assert!((1..=63).contains(&k), "rotation out of range: {}", k);
    x.rotate_left(k)
}

/// Apply the ++ scrambler used by some RNGs from the xoshiro family.
macro_rules! plusplus_u64 {
    ($x:expr, $y:expr, $rot:expr) => {
        $crate::common::rotl64($x.wrapping_add($y), $rot).wrapping_add($x)
    }
}

/// Implement the xoshiro iteration for `u64` output.
macro_rules! impl_xoshiro_u64 {
    ($self:expr) => {
        let t = $self.s[1] << 17;

        $self.s[2] ^= $self.s[0];
        $self.s[3] ^= $self.s[1];
        $self.s[1] ^= $self.s[2];
        $self.s[0] ^= $self.s[3];

        $self.s[2] ^= t;

        $self.s[3] = $crate::common::rotl64($self.s[3], 45);
    }
}

/// Write words into `dst` as big-endian bytes, in order.
#[inline]
pub(crate) fn write_u64_be_into(src: &[u64], dst: &mut [u8]) {
    assert!(dst.len() >= 8 * src.len());
    for (word, chunk) in src.iter().zip(dst.chunks_exact_mut(8)) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Fill `dst` with big-endian words read from `src`.
///
/// # Panics
///
/// If `src` has insufficient length (if `src.len() < 8*dst.len()`).
#[inline]
pub(crate) fn read_u64_be_into(src: &[u8], dst: &mut [u64]) {
    assert!(src.len() >= 8 * dst.len());
    for (out, chunk) in dst.iter_mut().zip(src.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *out = u64::from_be_bytes(word);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rotl64_matches_shift_formula() {
        let x = 0x0123_4567_89ab_cdefu64;
        for k in 1..64 {
            assert_eq!(rotl64(x, k), (x << k) | (x >> (64 - k)));
        }
    }

    #[test]
    fn test_rotl64_inverts() {
        let words = [0u64, 1, u64::MAX, 0x8000_0000_0000_0000, 4446667683794061079];
        for &x in &words {
            for k in 1..64 {
                assert_eq!(rotl64(rotl64(x, k), 64 - k), x);
            }
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "rotation out of range: 0")]
    fn test_rotl64_rejects_zero() {
        rotl64(1, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "rotation out of range: 64")]
    fn test_rotl64_rejects_full_width() {
        rotl64(1, 64);
    }

    #[test]
    fn test_be_round_trip() {
        let words = [1u64, 2, 0x0102_0304_0506_0708, u64::MAX];
        let mut bytes = [0u8; 32];
        write_u64_be_into(&words, &mut bytes);
        assert_eq!(&bytes[..8], &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&bytes[16..24], &[1, 2, 3, 4, 5, 6, 7, 8]);

        let mut back = [0u64; 4];
        read_u64_be_into(&bytes, &mut back);
        assert_eq!(back, words);
    }
}
