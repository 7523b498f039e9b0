// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This crate implements `ShaXoshiro256PlusPlus`, a [xoshiro256++]
//! generator whose 256-bit state is periodically replaced by the SHA-256
//! digest of itself.
//!
//! The generator exists to produce long, reproducible fixture streams. The
//! periodic reseed (called a *jump* here) breaks up residual structure of the
//! linear engine over runs of hundreds of millions of draws, at the cost of
//! one hash per thousand outputs. It is not cryptographically secure and its
//! output can be predicted by observing a few samples.
//!
//! # Example
//!
//! ```
//! use rand_shaxoshiro::rand_core::RngCore;
//! use rand_shaxoshiro::ShaXoshiro256PlusPlus;
//!
//! let mut rng = ShaXoshiro256PlusPlus::from_words(&[1, 2, 3, 4]).unwrap();
//! let word = rng.next_u64();
//! let value = f64::from_bits(word);
//! # let _ = value;
//! ```
//!
//! [xoshiro256++]: http://xoshiro.di.unimi.it/xoshiro256plusplus.c

#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
       html_favicon_url = "https://www.rust-lang.org/favicon.ico")]

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod common;
mod error;
mod shaxoshiro256plusplus;

pub use rand_core;
pub use common::rotl64;
pub use error::SeedError;
pub use shaxoshiro256plusplus::{ShaXoshiro256PlusPlus, JUMP_INTERVAL};
