// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deterministic floating-point fixtures.
//!
//! This crate produces the large fixture files used to test decimal
//! serializers of IEEE-754 doubles: a stream of pseudorandom *finite* doubles,
//! one per line in a canonical decimal form, gzip-compressed on disk.
//!
//! The pieces, from the bottom up:
//!
//! - [`ShaXoshiro256PlusPlus`] (re-exported from `rand_shaxoshiro`) draws
//!   64-bit words, reseeding itself through SHA-256 every thousand draws.
//! - [`finite`] reinterprets each word as an `f64` and redraws NaNs and
//!   infinities.
//! - [`number`] renders a double as its shortest round-trip decimal text.
//! - [`pipeline`] runs generation on a producer thread and streams the lines
//!   through a bounded queue into a gzip sink.
//! - [`boundary`] writes the small table of bit patterns around the smallest
//!   normal double.
//!
//! Every output is fully determined by the seed: the same seed and line count
//! always yield byte-identical decompressed content.
//!
//! # Example
//!
//! ```
//! use ijson_fixtures::config::Config;
//! use ijson_fixtures::pipeline::Pipeline;
//!
//! let config = Config::builder().seed([1u64, 2, 3, 4]).lines(3).build()?;
//! let (text, _) = Pipeline::new(config).run_into(Vec::new())?;
//! assert_eq!(text.split(|&b| b == b'\n').count(), 4);
//! # Ok::<(), ijson_fixtures::Error>(())
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]

#[macro_use]
mod log_macros;

pub mod boundary;
pub mod config;
mod error;
pub mod finite;
pub mod mock;
pub mod number;
pub mod pipeline;

pub use error::{Error, ErrorKind};
pub use rand_shaxoshiro::{ShaXoshiro256PlusPlus, SeedError};
