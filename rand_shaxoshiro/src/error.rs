// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Seed errors

use core::fmt;

/// The ways a seed can be rejected at construction.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum SeedError {
    /// No seed was supplied at all.
    Missing,
    /// The seed did not hold exactly four words; carries the length seen.
    InvalidLength(usize),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SeedError::Missing => write!(f, "seed is missing"),
            SeedError::InvalidLength(n) => {
                write!(f, "seed must have exactly 4 words, got {}", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeedError {}
