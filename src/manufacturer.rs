// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{ensure,
            error::{DecodeResult, ErrorKind}};
use getset::Getters;


/// Minimum length of an `A` record: letter, manufacturer code, logger id.
pub const MIN_LEN: usize = 7;


/// Contents of the `A` record, e.g. `AXBM001 BURNAIR V1.0.0`.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Manufacturer {
  manufacturer_id: String,
  logger_id:       String,
  additional_info: String,
}

impl Manufacturer {
  /// Decodes an `A` record. Columns are counted in characters, not bytes.
  pub fn decode(line: &str) -> DecodeResult<Self> {
    let len = line.chars().count();
    ensure!(len >= MIN_LEN,
            ErrorKind::RecordTooShort { record_type: 'A',
                                        expected:    MIN_LEN,
                                        actual:      len, });

    let mut chars = line.chars().skip(1);
    let manufacturer_id: String = chars.by_ref().take(3).collect();
    let logger_id: String = chars.by_ref().take(3).collect();
    let additional_info: String = chars.collect();

    Ok(Self { manufacturer_id: manufacturer_id.trim().to_string(),
              logger_id:       logger_id.trim().to_string(),
              additional_info: additional_info.trim().to_string(), })
  }
}
