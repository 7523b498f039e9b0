// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use std::error::Error as stdError;
use std::fmt;

/// Error kind which can be matched over.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ErrorKind {
    /// The seed is missing or is not exactly four 64-bit words.
    InvalidSeed,
    /// A configuration value is out of range.
    InvalidConfig,
    /// A non-finite value was handed to the line encoder.
    NonFinite,
    /// The generating stage failed.
    Generation,
    /// The serializing stage failed.
    Serialization,
    /// The compressing stage failed.
    Compression,
    /// Writing the output or the reference file failed.
    Write,
}

impl ErrorKind {
    /// True if this error aborted a running pipeline, as opposed to being
    /// rejected before anything was produced.
    pub fn is_pipeline_failure(self) -> bool {
        matches!(self,
            ErrorKind::Generation | ErrorKind::Serialization |
            ErrorKind::Compression | ErrorKind::Write)
    }

    /// A description of this error kind
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidSeed => "invalid seed",
            ErrorKind::InvalidConfig => "invalid configuration",
            ErrorKind::NonFinite => "non-finite value",
            ErrorKind::Generation => "generation failed",
            ErrorKind::Serialization => "serialization failed",
            ErrorKind::Compression => "compression failed",
            ErrorKind::Write => "write failed",
        }
    }
}

/// Error type of the fixture generator.
///
/// It embeds a "kind" code, a message (static string only), and an optional
/// chained cause.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    msg: &'static str,
    cause: Option<Box<dyn stdError + Send + Sync>>,
}

impl Error {
    /// Create a new instance, with specified kind and a message.
    pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
        Error { kind, msg, cause: None }
    }

    /// Create a new instance, with specified kind, message, and a
    /// chained cause.
    pub fn with_cause<E>(kind: ErrorKind, msg: &'static str, cause: E) -> Self
        where E: Into<Box<dyn stdError + Send + Sync>>
    {
        Error { kind, msg, cause: Some(cause.into()) }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn msg(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fixture error [{}]: {}", self.kind.description(), self.msg)?;
        if let Some(ref cause) = self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl stdError for Error {
    fn source(&self) -> Option<&(dyn stdError + 'static)> {
        self.cause.as_ref().map(|e| e.as_ref() as &(dyn stdError + 'static))
    }
}

impl From<rand_shaxoshiro::SeedError> for Error {
    fn from(err: rand_shaxoshiro::SeedError) -> Self {
        Error::with_cause(ErrorKind::InvalidSeed, "cannot construct generator", err)
    }
}
