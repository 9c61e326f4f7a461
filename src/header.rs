// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{error::DecodeResult, field};
use chrono::NaiveDate;


/// The `H` record fields we keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderField {
  FlightDate,
  PilotName,
  CoPilot,
  GpsDatum,
  GliderType,
  GliderId,
  CompetitionId,
  RecorderType,
}

impl HeaderField {
  pub fn name(&self) -> &'static str {
    match self {
      Self::FlightDate => "flight date",
      Self::PilotName => "pilot name",
      Self::CoPilot => "co-pilot",
      Self::GpsDatum => "GPS datum",
      Self::GliderType => "glider type",
      Self::GliderId => "glider id",
      Self::CompetitionId => "competition id",
      Self::RecorderType => "recorder type",
    }
  }
}


// Three-letter codes with their long names, following the data source letter
// at index 1 (`F`light recorder, `O`fficial observer, `P`ilot). Where one
// entry is a prefix of another the longer one comes first.
const CODES: [(&str, HeaderField); 11] =
  [("PLTPILOTINCHARGE", HeaderField::PilotName),
   ("PLTPILOT", HeaderField::PilotName),
   ("DTM100GPSDATUM", HeaderField::GpsDatum),
   ("DTMGPSDATUM", HeaderField::GpsDatum),
   ("DTEDATE", HeaderField::FlightDate),
   ("DTE", HeaderField::FlightDate),
   ("CM2CREW2", HeaderField::CoPilot),
   ("GTYGLIDERTYPE", HeaderField::GliderType),
   ("GIDGLIDERID", HeaderField::GliderId),
   ("CIDCOMPETITIONID", HeaderField::CompetitionId),
   ("FTYFRTYPE", HeaderField::RecorderType)];


/// A decoded `H` record.
#[derive(Clone, Debug, PartialEq)]
pub enum Header {
  FlightDate(NaiveDate),
  Text(HeaderField, String),
}

impl Header {
  /// Decodes an `H` record. Returns `Ok(None)` for header types we don't
  /// keep.
  ///
  /// The value is whatever follows the long name, with an optional `:`
  /// separator removed, so both `HFPLTPILOTJane Doe` and
  /// `HFPLTPILOTINCHARGE: Jane Doe` give `Jane Doe`.
  pub fn decode(line: &str, base_year: i32) -> DecodeResult<Option<Self>> {
    if !matches!(line.get(1..2), Some("F") | Some("O") | Some("P")) {
      return Ok(None);
    }
    let rest = &line[2..];

    let (code, header_field) =
      match CODES.iter().find(|(code, _)| rest.starts_with(code)) {
        Some(entry) => *entry,
        None => return Ok(None),
      };

    let value = &rest[code.len()..];
    let value = value.strip_prefix(':').unwrap_or(value).trim();

    let header = match header_field {
      HeaderField::FlightDate => {
        // IGC 2008 appends the flight number of the day, `DDMMYY,NN`
        let date = value.split(',').next().unwrap_or_default().trim();
        Self::FlightDate(field::date(date, base_year)?)
      }
      _ => Self::Text(header_field, value.to_string()),
    };
    Ok(Some(header))
  }

  pub fn field(&self) -> HeaderField {
    match self {
      Self::FlightDate(_) => HeaderField::FlightDate,
      Self::Text(field, _) => *field,
    }
  }
}
