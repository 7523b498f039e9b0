// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pipeline configuration.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind};
use rand_shaxoshiro::SeedError;

/// Seed the published fixture files were generated with.
pub const DEFAULT_SEED: [u64; 4] = [1, 2, 3, 4];
/// Number of lines in the published random-number fixture.
pub const DEFAULT_LINES: u64 = 100_000_000;
/// File name used under the temporary directory when no output is given.
pub const DEFAULT_OUTPUT_NAME: &str = "ijson_random_numbers.txt.gz";
/// A progress record is logged every this many lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;
/// Lines serialized into one batch before it is handed to the sink.
pub const DEFAULT_BATCH_LINES: usize = 4096;
/// Batches that may wait between producer and sink.
pub const DEFAULT_QUEUE_DEPTH: usize = 8;

/// Compression effort of the gzip stage, from 0 (store) to 9 (smallest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effort(u32);

impl Effort {
    /// The slowest, smallest setting. Fixture files are written with this.
    pub const BEST: Effort = Effort(9);
    /// The fastest setting that still compresses.
    pub const FAST: Effort = Effort(1);

    /// Create an effort level, which must be in `0..=9`.
    pub fn new(level: u32) -> Result<Effort, Error> {
        if level > 9 {
            return Err(Error::new(ErrorKind::InvalidConfig,
                "compression effort must be between 0 and 9"));
        }
        Ok(Effort(level))
    }

    /// The numeric level.
    pub fn level(self) -> u32 {
        self.0
    }
}

impl Default for Effort {
    fn default() -> Effort {
        Effort::BEST
    }
}

impl From<Effort> for flate2::Compression {
    fn from(effort: Effort) -> flate2::Compression {
        flate2::Compression::new(effort.0)
    }
}

/// Everything a pipeline run needs.
///
/// Built through [`Config::builder`], which validates the values.
#[derive(Debug, Clone)]
pub struct Config {
    seed: [u64; 4],
    lines: u64,
    output: PathBuf,
    reference: Option<PathBuf>,
    effort: Effort,
    progress_interval: u64,
    batch_lines: usize,
    queue_depth: usize,
}

impl Config {
    /// Start building a configuration. The seed must be supplied.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Generator seed.
    pub fn seed(&self) -> [u64; 4] {
        self.seed
    }

    /// Number of lines to produce.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Path of the compressed output file.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Path receiving the absolute output path once the run succeeds.
    pub fn reference(&self) -> Option<&Path> {
        self.reference.as_deref()
    }

    /// Compression effort.
    pub fn effort(&self) -> Effort {
        self.effort
    }

    /// Lines between two progress records.
    pub fn progress_interval(&self) -> u64 {
        self.progress_interval
    }

    /// Lines per batch sent to the sink.
    pub fn batch_lines(&self) -> usize {
        self.batch_lines
    }

    /// Capacity of the producer-to-sink queue, in batches.
    pub fn queue_depth(&self) -> usize {
        self.queue_depth
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    seed: Option<Vec<u64>>,
    lines: Option<u64>,
    output: Option<PathBuf>,
    reference: Option<PathBuf>,
    effort: Option<Effort>,
    progress_interval: Option<u64>,
    batch_lines: Option<usize>,
    queue_depth: Option<usize>,
}

impl ConfigBuilder {
    /// Seed words; exactly four are required.
    pub fn seed<S: Into<Vec<u64>>>(mut self, seed: S) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Number of lines to produce.
    pub fn lines(mut self, lines: u64) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Compressed output file.
    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }

    /// File that receives the output path after a successful run.
    pub fn reference<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.reference = Some(path.into());
        self
    }

    /// Compression effort.
    pub fn effort(mut self, effort: Effort) -> Self {
        self.effort = Some(effort);
        self
    }

    /// Lines between two progress records.
    pub fn progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    /// Lines per batch.
    pub fn batch_lines(mut self, lines: usize) -> Self {
        self.batch_lines = Some(lines);
        self
    }

    /// Queue capacity in batches.
    pub fn queue_depth(mut self, depth: usize) -> Self {
        self.queue_depth = Some(depth);
        self
    }

    /// Validate and build.
    ///
    /// A missing seed, or one that is not four words long, is
    /// [`ErrorKind::InvalidSeed`]; zero sizes are
    /// [`ErrorKind::InvalidConfig`].
    pub fn build(self) -> Result<Config, Error> {
        let words = self.seed.ok_or(SeedError::Missing)?;
        if words.len() != 4 {
            return Err(SeedError::InvalidLength(words.len()).into());
        }
        let mut seed = [0; 4];
        seed.copy_from_slice(&words);

        let progress_interval = self.progress_interval.unwrap_or(DEFAULT_PROGRESS_INTERVAL);
        if progress_interval == 0 {
            return Err(Error::new(ErrorKind::InvalidConfig,
                "progress interval must be positive"));
        }
        let batch_lines = self.batch_lines.unwrap_or(DEFAULT_BATCH_LINES);
        if batch_lines == 0 {
            return Err(Error::new(ErrorKind::InvalidConfig,
                "batch size must be positive"));
        }
        let queue_depth = self.queue_depth.unwrap_or(DEFAULT_QUEUE_DEPTH);
        if queue_depth == 0 {
            return Err(Error::new(ErrorKind::InvalidConfig,
                "queue depth must be positive"));
        }

        Ok(Config {
            seed,
            lines: self.lines.unwrap_or(DEFAULT_LINES),
            output: self.output
                .unwrap_or_else(|| env::temp_dir().join(DEFAULT_OUTPUT_NAME)),
            reference: self.reference,
            effort: self.effort.unwrap_or_default(),
            progress_interval,
            batch_lines,
            queue_depth,
        })
    }
}
