// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The streaming pipeline: generate → filter → serialize → compress → write.
//!
//! A producer thread owns the generator. It serializes finite values into
//! batches of lines and hands them over a bounded channel to the sink, which
//! runs on the calling thread. A full channel blocks the producer, so memory
//! stays bounded by `queue_depth × batch_lines` lines however many lines are
//! requested.
//!
//! Any failure ends the whole run. When the sink fails it drops its end of
//! the channel, the producer's next send fails and it stops; the sink's
//! error is the one reported.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::mem;
use std::path::{Path, PathBuf};
use std::thread;

use flate2::write::GzEncoder;
use rand_core::RngCore;
use rand_shaxoshiro::ShaXoshiro256PlusPlus;

use crate::config::Config;
use crate::error::{Error, ErrorKind};
use crate::finite::FiniteF64s;
use crate::number::LineEncoder;

/// Room reserved per line when allocating a batch. Most lines are 22-24
/// bytes long.
const LINE_CAPACITY_HINT: usize = 24;

/// Counters describing a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines written.
    pub lines: u64,
    /// Raw words drawn from the generator.
    pub draws: u64,
    /// Raw words discarded as NaN or infinite.
    pub rejected: u64,
}

/// Result of [`Pipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Counters of the run.
    pub summary: Summary,
    /// Absolute path of the compressed file.
    pub path: PathBuf,
}

/// What travels from the producer to the sink.
///
/// The stream ends with an explicit `End`; a producer that goes away without
/// sending it has failed.
#[derive(Debug)]
enum Batch {
    Lines(Vec<u8>),
    End,
}

/// The generating side of the pipeline.
struct Producer<R> {
    values: FiniteF64s<R>,
    encoder: LineEncoder,
    lines: u64,
    progress_interval: u64,
    batch_lines: usize,
}

impl<R: RngCore> Producer<R> {
    fn new(rng: R, config: &Config) -> Self {
        Producer {
            values: FiniteF64s::new(rng),
            encoder: LineEncoder::new(),
            lines: config.lines(),
            progress_interval: config.progress_interval(),
            batch_lines: config.batch_lines(),
        }
    }

    fn run(mut self, tx: kanal::Sender<Batch>) -> Result<Summary, Error> {
        let capacity = self.batch_lines * LINE_CAPACITY_HINT;
        let mut batch = Vec::with_capacity(capacity);
        let mut in_batch = 0;

        for i in 0..self.lines {
            if i % self.progress_interval == 0 {
                info!("Wrote {} lines - {}%", i, percent(i, self.lines));
            }
            // `FiniteF64s` never ends
            let value = match self.values.next() {
                Some(value) => value,
                None => break,
            };
            self.encoder.encode(value, &mut batch)?;
            in_batch += 1;
            if in_batch == self.batch_lines {
                let full = mem::replace(&mut batch, Vec::with_capacity(capacity));
                send(&tx, Batch::Lines(full))?;
                in_batch = 0;
            }
        }
        if !batch.is_empty() {
            send(&tx, Batch::Lines(batch))?;
        }
        send(&tx, Batch::End)?;

        Ok(Summary {
            lines: self.lines,
            draws: self.values.draws(),
            rejected: self.values.rejected(),
        })
    }
}

fn send(tx: &kanal::Sender<Batch>, batch: Batch) -> Result<(), Error> {
    tx.send(batch)
        .map_err(|_| Error::new(ErrorKind::Generation, "sink stopped accepting lines"))
}

fn percent(done: u64, total: u64) -> u64 {
    if total == 0 {
        return 100;
    }
    (100.0 * done as f64 / total as f64).round() as u64
}

/// Produces one fixture file as configured.
///
/// # Example
///
/// ```no_run
/// use ijson_fixtures::config::{Config, DEFAULT_SEED};
/// use ijson_fixtures::pipeline::Pipeline;
///
/// let config = Config::builder()
///     .seed(DEFAULT_SEED)
///     .lines(1_000)
///     .output("/tmp/numbers.txt.gz")
///     .build()?;
/// let report = Pipeline::new(config).run()?;
/// println!("{} lines in {}", report.summary.lines, report.path.display());
/// # Ok::<(), ijson_fixtures::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a pipeline for `config`.
    pub fn new(config: Config) -> Self {
        Pipeline { config }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the producer into an arbitrary byte sink and give the sink back.
    ///
    /// The sink receives the uncompressed lines; wrap it in a compressor to
    /// get the file format. Nothing is flushed or finished here.
    pub fn run_into<W: Write>(&self, sink: W) -> Result<(W, Summary), Error> {
        let rng = ShaXoshiro256PlusPlus::new(self.config.seed());
        debug!("Producing {} lines from seed {:?}", self.config.lines(), self.config.seed());
        self.drive(rng, sink)
    }

    /// Run with any generator in place of the seeded one.
    pub fn run_with_rng<R, W>(&self, rng: R, sink: W) -> Result<(W, Summary), Error>
        where R: RngCore + Send + 'static, W: Write
    {
        self.drive(rng, sink)
    }

    fn drive<R, W>(&self, rng: R, mut sink: W) -> Result<(W, Summary), Error>
        where R: RngCore + Send + 'static, W: Write
    {
        let (tx, rx) = kanal::bounded::<Batch>(self.config.queue_depth());
        let producer = Producer::new(rng, &self.config);
        let handle = thread::Builder::new()
            .name("fixture-producer".into())
            .spawn(move || producer.run(tx))
            .map_err(|e| Error::with_cause(ErrorKind::Generation,
                "cannot start producer thread", e))?;

        let drained = loop {
            match rx.recv() {
                Ok(Batch::Lines(bytes)) => {
                    if let Err(e) = sink.write_all(&bytes) {
                        break Err(Error::with_cause(ErrorKind::Write,
                            "cannot write lines", e));
                    }
                }
                Ok(Batch::End) => break Ok(()),
                // the producer's own result says why
                Err(_) => break Ok(()),
            }
        };
        // unblocks a producer waiting on a full queue
        drop(rx);

        let produced = match handle.join() {
            Ok(result) => result,
            Err(_) => Err(Error::new(ErrorKind::Generation, "producer thread panicked")),
        };
        match (drained, produced) {
            (Err(e), _) => {
                warn!("Pipeline aborted: {}", e);
                Err(e)
            }
            (Ok(()), Err(e)) => {
                warn!("Pipeline aborted: {}", e);
                Err(e)
            }
            (Ok(()), Ok(summary)) => Ok((sink, summary)),
        }
    }

    /// Run the full pipeline: gzip the lines into the output file, then
    /// record the file's absolute path in the reference file, if any.
    ///
    /// On failure the partial output file is removed.
    pub fn run(&self) -> Result<Report, Error> {
        let path = self.config.output();
        let file = File::create(path)
            .map_err(|e| Error::with_cause(ErrorKind::Write, "cannot create output file", e))?;
        let encoder = GzEncoder::new(BufWriter::new(file), self.config.effort().into());

        let written = self.run_into(encoder).and_then(|(encoder, summary)| {
            let writer = encoder.finish()
                .map_err(|e| Error::with_cause(ErrorKind::Compression,
                    "cannot finish compressed stream", e))?;
            let file = writer.into_inner()
                .map_err(|e| Error::with_cause(ErrorKind::Write,
                    "cannot flush output file", e.into_error()))?;
            file.sync_all()
                .map_err(|e| Error::with_cause(ErrorKind::Write, "cannot sync output file", e))?;
            Ok(summary)
        });
        let summary = match written {
            Ok(summary) => summary,
            Err(e) => {
                if fs::remove_file(path).is_err() {
                    warn!("Could not remove partial output {}", path.display());
                }
                return Err(e);
            }
        };

        let absolute = fs::canonicalize(path)
            .map_err(|e| Error::with_cause(ErrorKind::Write, "cannot resolve output path", e))?;
        if let Some(reference) = self.config.reference() {
            fs::write(reference, path_bytes(&absolute)?)
                .map_err(|e| Error::with_cause(ErrorKind::Write,
                    "cannot write reference file", e))?;
            debug!("Recorded output path in {}", reference.display());
        }
        info!("Wrote {} lines ({} draws, {} rejected) to {}",
            summary.lines, summary.draws, summary.rejected, absolute.display());

        Ok(Report { summary, path: absolute })
    }
}

/// The bytes of `path` as the file system knows it.
#[cfg(unix)]
fn path_bytes(path: &Path) -> Result<Cow<'_, [u8]>, Error> {
    use std::os::unix::ffi::OsStrExt;
    Ok(Cow::Borrowed(path.as_os_str().as_bytes()))
}

/// The bytes of `path`; paths that are not valid Unicode cannot be recorded.
#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Result<Cow<'_, [u8]>, Error> {
    path.to_str()
        .map(|text| Cow::Borrowed(text.as_bytes()))
        .ok_or_else(|| Error::new(ErrorKind::Write,
            "output path is not valid Unicode and cannot be recorded"))
}
