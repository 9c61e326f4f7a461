// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use serde::Serialize;
use std::{error, fmt, result};


/// Result type of a whole parse. Fatal problems are reported as `ParseError`,
/// which carries the offending line.
pub type Result<T> = result::Result<T, ParseError>;

/// Result type of the record and field decoders. These don't know which line
/// they are looking at, the assembler attaches that information.
pub type DecodeResult<T> = result::Result<T, ErrorKind>;


/// Everything that can go wrong while decoding a single record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ErrorKind {
  /// The record is shorter than the fixed width of its record type.
  RecordTooShort {
    record_type: char,
    expected:    usize,
    actual:      usize,
  },
  /// The header date is not six digits `DDMMYY` or no calendar date.
  InvalidDateFormat { value: String },
  /// A position record showed up before the `HFDTE` header.
  DateNotYetKnown,
  /// The leading character matches no known record type.
  UnrecognizedRecordType { record_type: char },
  /// A fixed-column field could not be decoded.
  MalformedNumericField { field: &'static str, value: String },
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::RecordTooShort { record_type,
                             expected,
                             actual, } => {
        write!(f,
               "{} record too short: expected at least {} characters, got {}",
               record_type, expected, actual)
      }
      Self::InvalidDateFormat { value } => {
        write!(f, "invalid flight date '{}', expected DDMMYY", value)
      }
      Self::DateNotYetKnown => {
        write!(f, "position record before flight date header")
      }
      Self::UnrecognizedRecordType { record_type } => {
        write!(f, "unrecognized record type '{}'", record_type)
      }
      Self::MalformedNumericField { field, value } => {
        write!(f, "malformed {} field '{}'", field, value)
      }
    }
  }
}

impl error::Error for ErrorKind {}


/// A decoding failure pinned to the line it happened on. Line numbers start
/// at 1, `raw` is the line as it was read (without the line terminator).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParseError {
  pub line: usize,
  pub raw:  String,
  pub kind: ErrorKind,
}

impl ParseError {
  pub fn new(line: usize, raw: &str, kind: ErrorKind) -> Self {
    Self { line,
           raw: raw.to_string(),
           kind }
  }
}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "line {}: {} ({:?})", self.line, self.kind, self.raw)
  }
}

impl error::Error for ParseError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    Some(&self.kind)
  }
}


/// Non-fatal findings collected during a parse. They are handed back with the
/// `Flight` so callers can judge how complete the data is.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Warning {
  /// A record that was not understood, e.g. an unknown record type.
  Record(ParseError),
  /// A malformed record dropped in lenient mode.
  Skipped(ParseError),
  /// A header field which was already set; the first value is kept.
  DuplicateRecord { line: usize, field: &'static str },
  /// A metadata field never set by any record.
  MissingMetadata(&'static str),
}

impl fmt::Display for Warning {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Record(err) => write!(f, "{}", err),
      Self::Skipped(err) => write!(f, "skipped {}", err),
      Self::DuplicateRecord { line, field } => {
        write!(f, "line {}: duplicate {} ignored", line, field)
      }
      Self::MissingMetadata(field) => write!(f, "no {} in file", field),
    }
  }
}


/// The `ensure!` macro provides an easy way to make sure a condition is true,
/// and if not, return the given error. Use it in decoders as follows:
///
/// ```ignore
/// fn decode(line: &str) -> DecodeResult<()> {
///   ensure!(line.len() >= 7, ErrorKind::DateNotYetKnown);
///   Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
  ($cond:expr, $err:expr) => {
    if !($cond) {
      return Err($err.into());
    }
  };
}
