// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drawing finite `f64` values from raw 64-bit output.
//!
//! A drawn word is *reinterpreted* as a double (`f64::from_bits`), not
//! converted: its bits become sign, exponent and mantissa directly. About one
//! pattern in 2048 has an all-ones exponent and is NaN or infinite; such
//! draws are discarded and replaced by the next one.

use rand_core::RngCore;

/// Draw words from `rng` until one reinterprets as a finite `f64`.
///
/// There is no retry cap: the loop only spins for as long as `rng` keeps
/// yielding all-ones exponents.
///
/// ```
/// use ijson_fixtures::finite::next_finite_f64;
/// use ijson_fixtures::mock::SequenceRng;
///
/// let mut rng = SequenceRng::new(vec![f64::NAN.to_bits(), 1.5f64.to_bits()]);
/// assert_eq!(next_finite_f64(&mut rng), 1.5);
/// ```
#[inline]
pub fn next_finite_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let value = f64::from_bits(rng.next_u64());
        if value.is_finite() {
            return value;
        }
    }
}

/// An infinite iterator of finite `f64` values drawn from an RNG.
///
/// Besides yielding values it keeps count of how many raw words were drawn
/// and how many of those were rejected.
#[derive(Debug, Clone)]
pub struct FiniteF64s<R> {
    rng: R,
    draws: u64,
    rejected: u64,
}

impl<R: RngCore> FiniteF64s<R> {
    /// Wrap `rng`. Takes `&mut R` as well as an owned generator.
    pub fn new(rng: R) -> Self {
        FiniteF64s { rng, draws: 0, rejected: 0 }
    }

    /// Total number of words drawn so far, rejected ones included.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Number of drawn words that were NaN or infinite.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Give back the underlying generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> Iterator for FiniteF64s<R> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        loop {
            let value = f64::from_bits(self.rng.next_u64());
            self.draws += 1;
            if value.is_finite() {
                return Some(value);
            }
            self.rejected += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
