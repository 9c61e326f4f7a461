// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use getset::CopyGetters;
use serde::{Deserialize, Serialize};


/// Two-digit years in `HFDTE` records are added to this year.
pub const DEFAULT_BASE_YEAR: i32 = 2000;


/// What happens to a record which fails to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
  /// The first malformed record fails the whole parse.
  Strict,
  /// Malformed records are dropped and reported as warnings.
  Lenient,
}

impl Default for ParseMode {
  fn default() -> Self {
    Self::Strict
  }
}


/// Settings of a `FlightParser`.
///
/// Deserializable so it can live in a host application's config file; missing
/// keys fall back to the defaults.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters, Deserialize, Serialize)]
#[getset(get_copy = "pub")]
#[serde(default)]
pub struct ParserConfig {
  mode:      ParseMode,
  base_year: i32,
}

impl Default for ParserConfig {
  fn default() -> Self {
    Self { mode:      ParseMode::default(),
           base_year: DEFAULT_BASE_YEAR, }
  }
}

impl ParserConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Shorthand for a config in `ParseMode::Lenient`.
  pub fn lenient() -> Self {
    Self::default().with_mode(ParseMode::Lenient)
  }

  pub fn with_mode(mut self, mode: ParseMode) -> Self {
    self.mode = mode;
    self
  }

  /// Sets the century two-digit years are placed in, e.g. 1900 to read
  /// `HFDTE010195` as 1995-01-01.
  pub fn with_base_year(mut self, base_year: i32) -> Self {
    self.base_year = base_year;
    self
  }

  pub fn is_lenient(&self) -> bool {
    self.mode == ParseMode::Lenient
  }
}
