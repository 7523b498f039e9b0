// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The boundary-value fixture.
//!
//! A small fixed table: the 2000 bit patterns starting at the smallest
//! positive normal double, `0x0010_0000_0000_0000`, each written next to
//! its decimal text as `bits,text`. The bits are printed as a signed 64-bit
//! integer, the way Java's `Double.longBitsToDouble` consumers read them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, ErrorKind};
use crate::number::format_f64;

/// First bit pattern of the table.
pub const FIRST_BITS: u64 = 0x0010_0000_0000_0000;
/// Number of entries in the table.
pub const ENTRIES: usize = 2000;
/// Default file name of the table.
pub const DEFAULT_OUTPUT_NAME: &str = "ijson_serial_numbers.txt";

/// The table's bit patterns, in file order.
pub fn bit_patterns() -> impl Iterator<Item = u64> {
    (0..ENTRIES as u64).map(|i| FIRST_BITS + i)
}

/// Write the table to `out`, one `bits,text` line per entry.
pub fn write_table<W: Write>(mut out: W) -> Result<W, Error> {
    for bits in bit_patterns() {
        writeln!(out, "{},{}", bits as i64, format_f64(f64::from_bits(bits)))
            .map_err(|e| Error::with_cause(ErrorKind::Write, "cannot write table", e))?;
    }
    Ok(out)
}

/// Write the table to the file at `path`, replacing it.
pub fn write_table_file<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::with_cause(ErrorKind::Write, "cannot create table file", e))?;
    let mut out = write_table(BufWriter::new(file))?;
    out.flush()
        .map_err(|e| Error::with_cause(ErrorKind::Write, "cannot flush table file", e))?;
    info!("Wrote {} boundary values to {}", ENTRIES, path.display());
    Ok(())
}
