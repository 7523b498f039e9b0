// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decimal rendering of `f64` values, one per line.
//!
//! The text form is the one ECMAScript's `Number.prototype.toString`
//! produces: the shortest digit string that reads back to the same double,
//! exact ties between two shortest candidates going to the even digit, laid
//! out positionally for decimal exponents in `-6..21` and in `e±X` notation
//! outside that range. Fixture consumers compare their own serializer
//! against these lines byte for byte.

use std::fmt::{self, Write};

use crate::error::{Error, ErrorKind};

/// Render `value` in the canonical text form.
///
/// ```
/// use ijson_fixtures::number::format_f64;
///
/// assert_eq!(format_f64(0.000001), "0.000001");
/// assert_eq!(format_f64(1e21), "1e+21");
/// assert_eq!(format_f64(-1.5e-7), "-1.5e-7");
/// assert_eq!(format_f64(295147905179352830000.0), "295147905179352830000");
/// ```
pub fn format_f64(value: f64) -> String {
    let mut buffer = ryu_js::Buffer::new();
    canonical(&mut buffer, value).to_owned()
}

/// Write `value` in the canonical text form into `out`.
///
/// Both zeros render as `0`. Non-finite values render as `NaN`, `Infinity`
/// and `-Infinity`, although the fixture files never contain them.
pub fn write_f64<W: Write + ?Sized>(out: &mut W, value: f64) -> fmt::Result {
    let mut buffer = ryu_js::Buffer::new();
    out.write_str(canonical(&mut buffer, value))
}

fn canonical(buffer: &mut ryu_js::Buffer, value: f64) -> &str {
    if value == 0.0 {
        // `-0` included
        return "0";
    }
    buffer.format(value)
}

/// Serializes finite doubles into newline-terminated lines.
///
/// The encoder keeps its formatting buffer so that encoding a long stream
/// does not allocate per value.
pub struct LineEncoder {
    buffer: ryu_js::Buffer,
}

impl Default for LineEncoder {
    fn default() -> Self {
        LineEncoder::new()
    }
}

impl fmt::Debug for LineEncoder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LineEncoder").finish()
    }
}

impl LineEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        LineEncoder { buffer: ryu_js::Buffer::new() }
    }

    /// Append the text of `value` and a `\n` to `out`.
    ///
    /// Fails with [`ErrorKind::NonFinite`] for NaN and infinities.
    pub fn encode(&mut self, value: f64, out: &mut Vec<u8>) -> Result<(), Error> {
        if !value.is_finite() {
            return Err(Error::new(ErrorKind::NonFinite,
                "only finite values can be serialized"));
        }
        out.extend_from_slice(canonical(&mut self.buffer, value).as_bytes());
        out.push(b'\n');
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::finite::FiniteF64s;
    use rand_shaxoshiro::ShaXoshiro256PlusPlus;

    fn from_bits(s: &str) -> f64 {
        f64::from_bits(u64::from_str_radix(s, 16).unwrap())
    }

    #[test]
    fn test_bit_patterns() {
        let cases = [
            ("0000000000000000", "0"),
            ("8000000000000000", "0"),
            ("0000000000000001", "5e-324"),
            ("8000000000000001", "-5e-324"),
            ("7fefffffffffffff", "1.7976931348623157e+308"),
            ("ffefffffffffffff", "-1.7976931348623157e+308"),
            ("4340000000000000", "9007199254740992"),
            ("c340000000000000", "-9007199254740992"),
            ("4430000000000000", "295147905179352830000"),
            ("44b52d02c7e14af5", "9.999999999999997e+22"),
            ("44b52d02c7e14af6", "1e+23"),
            ("44b52d02c7e14af7", "1.0000000000000001e+23"),
            ("444b1ae4d6e2ef4e", "999999999999999700000"),
            ("444b1ae4d6e2ef4f", "999999999999999900000"),
            ("444b1ae4d6e2ef50", "1e+21"),
            ("3eb0c6f7a0b5ed8c", "9.999999999999997e-7"),
            ("3eb0c6f7a0b5ed8d", "0.000001"),
            ("41b3de4355555553", "333333333.3333332"),
            ("41b3de4355555554", "333333333.33333325"),
            ("41b3de4355555555", "333333333.3333333"),
            ("41b3de4355555556", "333333333.3333334"),
            ("41b3de4355555557", "333333333.33333343"),
            ("becbf647612f3696", "-0.0000033333333333333333"),
            ("43143ff3c1cb0959", "1424953923781206.2"),
            ("0000000100000000", "2.121995791e-314"),
            ("1000000100000000", "1.2882309824710566e-231"),
            ("1000000100000001", "1.288230982471057e-231"),
            ("1000000100000002", "1.2882309824710572e-231"),
            ("1000000100000003", "1.2882309824710575e-231"),
            ("1000000100000004", "1.2882309824710577e-231"),
            ("1000000100000005", "1.288230982471058e-231"),
        ];
        for &(bits, text) in &cases {
            assert_eq!(format_f64(from_bits(bits)), text, "bits {}", bits);
        }
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        // doubles exactly halfway between two 17-digit candidates
        let cases = [
            ("43143ff3c1cb0959", "1424953923781206.2"),
            ("43197b753ceb3ffd", "1793154470301695.2"),
            ("431795b99a9a80fd", "1659637214912575.2"),
            ("4319b08910c67fd9", "1807744289054710.2"),
            ("431e8a85035efa25", "2149138298289801.2"),
            ("431781f9d6645fa9", "1654208627021802.2"),
            ("431311623bfd1d33", "1341784542103372.8"),
            ("4318cb4ad6225675", "1744730430412189.2"),
            ("4313b5f3268ecc45", "1387020121518865.2"),
            ("43126d0ba2863a7f", "1296611579891359.8"),
            ("43103e0abdc2ae99", "1142953870404518.2"),
            ("43128ce610645d51", "1305367331542868.2"),
            ("431c7b314d1fe09f", "2004187756361767.8"),
        ];
        let mut encoder = LineEncoder::new();
        for &(bits, text) in &cases {
            let value = from_bits(bits);
            assert_eq!(format_f64(value), text, "bits {}", bits);

            let mut out = Vec::new();
            encoder.encode(value, &mut out).unwrap();
            assert_eq!(out, format!("{}\n", text).into_bytes(), "bits {}", bits);
        }
    }

    #[test]
    fn test_decimal_inputs() {
        let cases = [
            ("0.125", "0.125"),
            ("34", "34"),
            ("18446744073709553000", "18446744073709552000"),
            ("18446744073709558000", "18446744073709560000"),
            ("4.8", "4.8"),
            ("0.001", "0.001"),
            ("-123e-35", "-1.23e-33"),
            ("-123e+35", "-1.23e+37"),
            ("1234567890.1234567890", "1234567890.1234567"),
            ("9.9999999999999999", "10"),
            ("8.8888888888888888", "8.88888888888889"),
            ("58032273484243780", "58032273484243780"),
            ("5.51443399744797e-309", "5.51443399744797e-309"),
            ("-996501487687274400", "-996501487687274400"),
            ("1e-7", "1e-7"),
            ("1.5", "1.5"),
        ];
        for &(input, text) in &cases {
            let value: f64 = input.parse().unwrap();
            assert_eq!(format_f64(value), text, "input {}", input);
        }
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_f64(f64::NAN), "NaN");
        assert_eq!(format_f64(f64::INFINITY), "Infinity");
        assert_eq!(format_f64(f64::NEG_INFINITY), "-Infinity");

        let mut encoder = LineEncoder::new();
        let mut out = Vec::new();
        let err = encoder.encode(f64::NAN, &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonFinite);
        assert!(out.is_empty());
    }

    #[test]
    fn test_round_trip_powers_of_ten() {
        for i in -300..300 {
            let value: f64 = format!("1e{}", i).parse().unwrap();
            let back: f64 = format_f64(value).parse().unwrap();
            assert_eq!(back.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_round_trip_generated() {
        let values = FiniteF64s::new(ShaXoshiro256PlusPlus::new([1, 2, 3, 4]));
        for value in values.take(50_000) {
            let back: f64 = format_f64(value).parse().unwrap();
            if value == 0.0 {
                assert_eq!(back, 0.0);
            } else {
                assert_eq!(back.to_bits(), value.to_bits());
            }
        }
    }

    #[test]
    fn test_encoder_lines() {
        let mut encoder = LineEncoder::new();
        let mut out = Vec::new();
        let values = FiniteF64s::new(ShaXoshiro256PlusPlus::new([1, 2, 3, 4]));
        for value in values.take(3) {
            encoder.encode(value, &mut out).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(),
            "1.9769782097956835e-11\n4.154794928960074e-21\n-2.818261050201268e-221\n");
    }
}
