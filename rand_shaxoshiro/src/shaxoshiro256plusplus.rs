// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature="serde1")] use serde::{Serialize, Deserialize};
use rand_core::impls::fill_bytes_via_next;
use rand_core::{SeedableRng, RngCore, Error};
use sha2::{Digest, Sha256};

use crate::common::{read_u64_be_into, write_u64_be_into};
use crate::SeedError;

/// Number of draws between two SHA-256 jumps.
///
/// The countdown is reset to this value after each jump and a jump happens
/// once it drops below zero, so consecutive jumps are `JUMP_INTERVAL + 1`
/// draws apart.
pub const JUMP_INTERVAL: i32 = 1000;

/// A xoshiro256++ random number generator with a periodic SHA-256 reseed.
///
/// Every output is produced by the plain xoshiro256++ step. In addition, the
/// whole 256-bit state is replaced by the SHA-256 digest of its big-endian
/// serialization on the first draw and then once every
/// [`JUMP_INTERVAL`]` + 1` draws. The hash is only a mixing function: this
/// generator is not suitable for cryptographic purposes.
///
/// The countdown starts at zero, so a freshly constructed generator jumps
/// before producing its first value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature="serde1", derive(Serialize, Deserialize))]
pub struct ShaXoshiro256PlusPlus {
    s: [u64; 4],
    countdown: i32,
}

impl ShaXoshiro256PlusPlus {
    /// Create a generator from four state words.
    ///
    /// ```
    /// use rand_shaxoshiro::rand_core::RngCore;
    /// use rand_shaxoshiro::ShaXoshiro256PlusPlus;
    ///
    /// let mut rng = ShaXoshiro256PlusPlus::new([1, 2, 3, 4]);
    /// assert_eq!(rng.next_u64(), 4446667683794061079);
    /// ```
    #[inline]
    pub fn new(seed: [u64; 4]) -> ShaXoshiro256PlusPlus {
        ShaXoshiro256PlusPlus { s: seed, countdown: 0 }
    }

    /// Create a generator from a word slice, which must hold exactly four
    /// words.
    pub fn from_words(words: &[u64]) -> Result<ShaXoshiro256PlusPlus, SeedError> {
        if words.len() != 4 {
            return Err(SeedError::InvalidLength(words.len()));
        }
        let mut state = [0; 4];
        state.copy_from_slice(words);
        Ok(ShaXoshiro256PlusPlus::new(state))
    }

    /// Replace the state by the SHA-256 digest of its big-endian bytes.
    ///
    /// This is the reseed `next_u64` performs on its own; calling it directly
    /// does not reset the countdown.
    pub fn jump(&mut self) {
        let mut buf = [0u8; 32];
        write_u64_be_into(&self.s, &mut buf);
        let digest = Sha256::digest(buf);
        read_u64_be_into(&digest, &mut self.s);
    }

    /// Current state words.
    #[inline]
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Draws left before the next jump is triggered.
    #[inline]
    pub fn countdown(&self) -> i32 {
        self.countdown
    }
}

impl SeedableRng for ShaXoshiro256PlusPlus {
    type Seed = [u8; 32];

    /// Create a new `ShaXoshiro256PlusPlus` from four big-endian words.
    ///
    /// Unlike the plain xoshiro generators an all-zero seed is accepted: the
    /// jump on the first draw maps it to a non-zero state.
    #[inline]
    fn from_seed(seed: [u8; 32]) -> ShaXoshiro256PlusPlus {
        let mut state = [0; 4];
        read_u64_be_into(&seed, &mut state);
        ShaXoshiro256PlusPlus::new(state)
    }
}

impl RngCore for ShaXoshiro256PlusPlus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.countdown -= 1;
        if self.countdown < 0 {
            self.jump();
            self.countdown = JUMP_INTERVAL;
        }

        let result_plusplus = plusplus_u64!(self.s[0], self.s[3], 23);
        impl_xoshiro_u64!(self);
        result_plusplus
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotl64;

    #[test]
    fn reference() {
        let mut rng = ShaXoshiro256PlusPlus::new([1, 2, 3, 4]);
        // These values were produced with the node.js fixture script the
        // generated files were originally compared against.
        let expected = [
            4446667683794061079, 4301956714247772115, 10530647255116498685,
            102336891434205621, 8808870431428974530,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
        assert_eq!(rng.state(), [
            8853412410892772574, 7965436778154786249,
            4933141462976781903, 12181687945199339463,
        ]);
    }

    #[test]
    fn from_seed_reads_big_endian() {
        let mut rng = ShaXoshiro256PlusPlus::from_seed(
            [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2,
             0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 4]);
        assert_eq!(rng.state(), [1, 2, 3, 4]);
        assert_eq!(rng.next_u64(), 4446667683794061079);
    }

    #[test]
    fn from_words_checks_length() {
        assert_eq!(ShaXoshiro256PlusPlus::from_words(&[1, 2, 3]),
                   Err(SeedError::InvalidLength(3)));
        assert_eq!(ShaXoshiro256PlusPlus::from_words(&[1, 2, 3, 4, 5]),
                   Err(SeedError::InvalidLength(5)));
        assert_eq!(ShaXoshiro256PlusPlus::from_words(&[]),
                   Err(SeedError::InvalidLength(0)));
        assert_eq!(ShaXoshiro256PlusPlus::from_words(&[1, 2, 3, 4]),
                   Ok(ShaXoshiro256PlusPlus::new([1, 2, 3, 4])));
    }

    #[test]
    fn jump_hashes_big_endian_state() {
        let mut rng = ShaXoshiro256PlusPlus::new([1, 2, 3, 4]);
        rng.jump();
        assert_eq!(rng.state(), [
            8229976527224190662, 16002198254654643669,
            9612838971278729463, 1110668968843613929,
        ]);
        // an explicit jump leaves the countdown alone
        assert_eq!(rng.countdown(), 0);
    }

    #[test]
    fn first_draw_jumps() {
        let mut rng = ShaXoshiro256PlusPlus::new([1, 2, 3, 4]);
        let mut jumped = rng.clone();
        jumped.jump();
        let s = jumped.state();

        let first = rng.next_u64();
        assert_eq!(first, rotl64(s[0].wrapping_add(s[3]), 23).wrapping_add(s[0]));
        assert_eq!(rng.countdown(), JUMP_INTERVAL);
    }

    #[test]
    fn state_after_1000_draws() {
        let mut rng = ShaXoshiro256PlusPlus::new([1, 2, 3, 4]);
        let mut reseeded = rng.clone();
        reseeded.jump();

        for _ in 0..1000 {
            rng.next_u64();
        }
        assert_ne!(rng.state(), reseeded.state());
        assert_eq!(rng.state(), [
            10471217196416179874, 8057764108503054264,
            1749462385442322735, 13182263109879766280,
        ]);
        assert_eq!(rng.countdown(), 1);
    }

    #[test]
    fn jumps_every_1001_draws() {
        let mut rng = ShaXoshiro256PlusPlus::new([1, 2, 3, 4]);
        for _ in 0..1001 {
            rng.next_u64();
        }
        assert_eq!(rng.countdown(), 0);

        let mut jumped = rng.clone();
        jumped.jump();
        let s = jumped.state();
        let next = rng.next_u64();
        assert_eq!(next, rotl64(s[0].wrapping_add(s[3]), 23).wrapping_add(s[0]));
        assert_eq!(rng.countdown(), JUMP_INTERVAL);
        assert_eq!(rng.state(), [
            14960802712859964973, 11977540016374996738,
            4525736670861296244, 5488860744940242014,
        ]);
    }

    #[test]
    fn deterministic() {
        let mut a = ShaXoshiro256PlusPlus::new([5, 6, 7, 8]);
        let mut b = ShaXoshiro256PlusPlus::new([5, 6, 7, 8]);
        for _ in 0..5000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn next_u32_is_low_half() {
        let mut a = ShaXoshiro256PlusPlus::new([1, 2, 3, 4]);
        let mut b = a.clone();
        assert_eq!(u64::from(a.next_u32()), b.next_u64() & 0xffff_ffff);
    }
}
