// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mock random number generator

use rand_core::{impls, Error, RngCore};

/// A mock generator replaying a fixed list of words
///
/// `next_u64` yields the words in order and starts over once the list is
/// exhausted. This makes it easy to feed chosen bit patterns, NaNs and
/// infinities included, into the finite filter and the pipeline.
///
/// # Example
///
/// ```
/// use rand_core::RngCore;
/// use ijson_fixtures::mock::SequenceRng;
///
/// let mut rng = SequenceRng::new(vec![2, 3]);
/// assert_eq!([rng.next_u64(), rng.next_u64(), rng.next_u64()], [2, 3, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRng {
    words: Vec<u64>,
    pos: usize,
}

impl SequenceRng {
    /// Create a `SequenceRng` replaying `words`.
    ///
    /// # Panics
    ///
    /// If `words` is empty.
    pub fn new(words: Vec<u64>) -> Self {
        assert!(!words.is_empty(), "SequenceRng needs at least one word");
        SequenceRng { words, pos: 0 }
    }
}

impl RngCore for SequenceRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.pos];
        self.pos = (self.pos + 1) % self.words.len();
        word
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
