// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{channel::{Channel, CHANNELS},
            config::ParserConfig,
            error::{DecodeResult, ErrorKind, ParseError, Result, Warning},
            fix::Fix,
            header::Header,
            manufacturer::Manufacturer,
            metadata::FlightMetadata,
            record::RecordType};
use chrono::NaiveDateTime;
use getset::Getters;
use serde::Serialize;
use std::{ops::Index, slice, vec};
use tracing::{debug, info, trace, warn};


/// The position fixes of a flight in file order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlightTrack(Vec<Fix>);

impl FlightTrack {
  pub fn fixes(&self) -> &[Fix] {
    &self.0
  }

  pub fn iter(&self) -> slice::Iter<'_, Fix> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn first(&self) -> Option<&Fix> {
    self.0.first()
  }

  pub fn last(&self) -> Option<&Fix> {
    self.0.last()
  }

  /// The absolute timestamp of every fix, i.e. the time column of the track.
  pub fn timestamps(&self) -> Vec<NaiveDateTime> {
    self.0.iter().map(Fix::timestamp).collect()
  }
}

impl Index<usize> for FlightTrack {
  type Output = Fix;

  fn index(&self, idx: usize) -> &Fix {
    &self.0[idx]
  }
}

impl IntoIterator for FlightTrack {
  type IntoIter = vec::IntoIter<Fix>;
  type Item = Fix;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a FlightTrack {
  type IntoIter = slice::Iter<'a, Fix>;
  type Item = &'a Fix;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}


/// A completely parsed IGC file: metadata, the track and whatever was noticed
/// along the way without failing the parse.
#[derive(Clone, Debug, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct Flight {
  metadata: FlightMetadata,
  track:    FlightTrack,
  warnings: Vec<Warning>,
}

impl Flight {
  /// Parses IGC lines with the default, strict settings.
  ///
  /// ```
  /// let flight = igctrack::Flight::parse(&["AXBM001 BURNAIR",
  ///                                        "HFDTEDATE100525",
  ///                                        "B0955324650345N00824866EA0000001909"])
  ///   .unwrap();
  /// assert_eq!(1, flight.track().len());
  /// ```
  pub fn parse<I, S>(lines: I) -> Result<Self>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
  {
    FlightParser::default().parse(lines)
  }

  /// Hands metadata and track over, dropping the warnings.
  pub fn into_parts(self) -> (FlightMetadata, FlightTrack) {
    (self.metadata, self.track)
  }

  pub fn channel_names(&self) -> Vec<String> {
    CHANNELS.iter().map(|(name, _)| name.to_string()).collect()
  }

  /// The track column `name` as a `Channel`; see `CHANNELS` for the names.
  pub fn channel(&self, name: &str) -> Option<Channel> {
    Channel::from_fixes(name, self.track.fixes())
  }

  /// All track columns in the order of `CHANNELS`.
  pub fn channels(&self) -> Vec<Channel> {
    CHANNELS.iter()
            .filter_map(|(name, _)| self.channel(name))
            .collect()
  }

  /// Duration from the first to the last fix in seconds.
  pub fn duration(&self) -> f64 {
    match (self.track.first(), self.track.last()) {
      (Some(first), Some(last)) => {
        (last.timestamp() - first.timestamp()).num_seconds() as f64
      }
      _ => 0.0,
    }
  }
}


/// Turns IGC lines into a `Flight`. Every parse starts from scratch, so one
/// parser can be used for any number of files.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlightParser {
  config: ParserConfig,
}

impl FlightParser {
  pub fn new(config: ParserConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &ParserConfig {
    &self.config
  }

  /// Parses all `lines` in order. Fails on the first malformed record unless
  /// the parser is lenient.
  pub fn parse<I, S>(&self, lines: I) -> Result<Flight>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
  {
    let mut assembler = Assembler::new(self.config);
    for (idx, line) in lines.into_iter().enumerate() {
      assembler.feed(idx + 1, line.as_ref())?;
    }
    Ok(assembler.finish())
  }
}


/// Parse state threaded through a single scan.
struct Assembler {
  config:   ParserConfig,
  metadata: FlightMetadata,
  fixes:    Vec<Fix>,
  warnings: Vec<Warning>,
}

impl Assembler {
  fn new(config: ParserConfig) -> Self {
    Self { config,
           metadata: FlightMetadata::new(),
           fixes: Vec::new(),
           warnings: Vec::new() }
  }

  fn feed(&mut self, line_no: usize, raw: &str) -> Result<()> {
    let line = raw.trim();
    let record_type = match RecordType::classify(line) {
      Some(record_type) => record_type,
      None => return Ok(()),
    };

    match self.decode(record_type, line_no, line, raw) {
      Ok(()) => Ok(()),
      Err(kind) => {
        let err = ParseError::new(line_no, raw, kind);
        if self.config.is_lenient() {
          warn!(line = line_no, "skipping malformed record: {}", err.kind);
          self.warnings.push(Warning::Skipped(err));
          Ok(())
        } else {
          Err(err)
        }
      }
    }
  }

  fn decode(&mut self,
            record_type: RecordType,
            line_no: usize,
            line: &str,
            raw: &str)
            -> DecodeResult<()> {
    match record_type {
      RecordType::Manufacturer => {
        let record = Manufacturer::decode(line)?;
        if !self.metadata.set_manufacturer(record) {
          self.duplicate(line_no, "manufacturer record");
        }
      }
      RecordType::Header => {
        if let Some(header) = Header::decode(line, self.config.base_year())? {
          let field = header.field();
          if !self.metadata.set_header(header) {
            self.duplicate(line_no, field.name());
          }
        }
      }
      RecordType::Fix => {
        let fix = Fix::decode(line, self.metadata.flight_date())?;
        trace!(line = line_no, ?fix, "fix");
        self.fixes.push(fix);
      }
      RecordType::Comment | RecordType::Security => {}
      RecordType::Unknown(record_type) => {
        debug!(line = line_no, "unrecognized record type '{}'", record_type);
        let kind = ErrorKind::UnrecognizedRecordType { record_type };
        self.warnings
            .push(Warning::Record(ParseError::new(line_no, raw, kind)));
      }
    }
    Ok(())
  }

  fn duplicate(&mut self, line: usize, field: &'static str) {
    debug!(line, "duplicate {} ignored", field);
    self.warnings.push(Warning::DuplicateRecord { line, field });
  }

  fn finish(mut self) -> Flight {
    for field in self.metadata.missing_fields() {
      self.warnings.push(Warning::MissingMetadata(field));
    }
    info!(fixes = self.fixes.len(),
          warnings = self.warnings.len(),
          "parsed flight");

    Flight { metadata: self.metadata,
             track:    FlightTrack(self.fixes),
             warnings: self.warnings, }
  }
}
