// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{header::{Header, HeaderField},
            manufacturer::Manufacturer};
use chrono::NaiveDate;
use getset::{CopyGetters, Getters};
use serde::Serialize;


/// Flight information from the `A` and `H` records. Text fields are empty and
/// `flight_date` is `None` until the corresponding record was read.
#[derive(Clone, Debug, Default, PartialEq, CopyGetters, Getters, Serialize)]
pub struct FlightMetadata {
  #[getset(get_copy = "pub")]
  flight_date:     Option<NaiveDate>,
  #[getset(get = "pub")]
  gps_datum:       String,
  #[getset(get = "pub")]
  pilot_name:      String,
  #[getset(get = "pub")]
  co_pilot:        String,
  #[getset(get = "pub")]
  manufacturer_id: String,
  #[getset(get = "pub")]
  logger_id:       String,
  #[getset(get = "pub")]
  additional_info: String,
  #[getset(get = "pub")]
  glider_type:     String,
  #[getset(get = "pub")]
  glider_id:       String,
  #[getset(get = "pub")]
  competition_id:  String,
  #[getset(get = "pub")]
  recorder_type:   String,
  // each field is written at most once, these remember which ones were
  #[serde(skip)]
  has_manufacturer: bool,
  #[serde(skip)]
  has_header:       Vec<HeaderField>,
}

impl FlightMetadata {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stores the contents of the `A` record. Returns `false` and keeps the
  /// current values if an `A` record was stored before.
  pub fn set_manufacturer(&mut self, record: Manufacturer) -> bool {
    if self.has_manufacturer {
      return false;
    }
    self.has_manufacturer = true;
    self.manufacturer_id = record.manufacturer_id().clone();
    self.logger_id = record.logger_id().clone();
    self.additional_info = record.additional_info().clone();
    true
  }

  /// Stores a header value. Returns `false` and keeps the current value if
  /// the same field was stored before.
  pub fn set_header(&mut self, header: Header) -> bool {
    let field = header.field();
    if self.has_header.contains(&field) {
      return false;
    }
    self.has_header.push(field);

    match header {
      Header::FlightDate(date) => self.flight_date = Some(date),
      Header::Text(field, value) => {
        if let Some(text) = self.text_mut(field) {
          *text = value;
        }
      }
    }
    true
  }

  fn text_mut(&mut self, field: HeaderField) -> Option<&mut String> {
    let text = match field {
      HeaderField::PilotName => &mut self.pilot_name,
      HeaderField::CoPilot => &mut self.co_pilot,
      HeaderField::GpsDatum => &mut self.gps_datum,
      HeaderField::GliderType => &mut self.glider_type,
      HeaderField::GliderId => &mut self.glider_id,
      HeaderField::CompetitionId => &mut self.competition_id,
      HeaderField::RecorderType => &mut self.recorder_type,
      HeaderField::FlightDate => return None,
    };
    Some(text)
  }

  /// Names of the fields every complete file should provide but this one
  /// didn't.
  pub fn missing_fields(&self) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if self.flight_date.is_none() {
      missing.push(HeaderField::FlightDate.name());
    }
    if self.pilot_name.is_empty() {
      missing.push(HeaderField::PilotName.name());
    }
    if self.gps_datum.is_empty() {
      missing.push(HeaderField::GpsDatum.name());
    }
    if self.manufacturer_id.is_empty() {
      missing.push("manufacturer id");
    }
    if self.logger_id.is_empty() {
      missing.push("logger id");
    }
    missing
  }
}
