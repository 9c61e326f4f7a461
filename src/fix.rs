// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{ensure,
            error::{DecodeResult, ErrorKind},
            field};
use chrono::{NaiveDate, NaiveDateTime};
use getset::CopyGetters;
use serde::Serialize;
use std::{borrow::Cow, ops::Range};


/// Minimum length of a `B` record. Anything after that is a logger specific
/// extension, declared in the `I` record, which we don't decode.
pub const MIN_LEN: usize = 35;

const TIME: Range<usize> = 1..7;
const LATITUDE: Range<usize> = 7..15;
const LONGITUDE: Range<usize> = 15..24;
const VALIDITY: Range<usize> = 24..25;
const PRESSURE_ALTITUDE: Range<usize> = 25..30;
const GPS_ALTITUDE: Range<usize> = 30..35;

/// Byte offsets of the field separators in the spaced out notation
/// `B095532 4650345N 00824866E A 00000 01909`.
const SEPARATORS: [usize; 5] = [7, 16, 26, 28, 34];


/// Packs a spaced out record into the fixed-column layout. Lines with spaces
/// anywhere else are returned as they are.
fn packed(line: &str) -> Cow<str> {
  let bytes = line.as_bytes();
  if !SEPARATORS.iter().all(|&idx| bytes.get(idx) == Some(&b' ')) {
    return Cow::Borrowed(line);
  }

  let mut packed = String::with_capacity(line.len());
  let mut start = 0;
  for &separator in SEPARATORS.iter() {
    packed.push_str(&line[start..separator]);
    start = separator + 1;
  }
  packed.push_str(&line[start..]);
  Cow::Owned(packed)
}


/// One position fix, decoded from a `B` record.
///
/// Latitude and longitude are in decimal degrees (North and East positive),
/// altitudes in meters. `av_flag` is true for a valid 3D fix.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters, Serialize)]
#[getset(get_copy = "pub")]
pub struct Fix {
  timestamp:         NaiveDateTime,
  latitude:          f64,
  longitude:         f64,
  av_flag:           bool,
  pressure_altitude: f64,
  gps_altitude:      f64,
}

impl Fix {
  pub fn new(timestamp: NaiveDateTime,
             latitude: f64,
             longitude: f64,
             av_flag: bool,
             pressure_altitude: f64,
             gps_altitude: f64)
             -> Self {
    Self { timestamp,
           latitude,
           longitude,
           av_flag,
           pressure_altitude,
           gps_altitude }
  }

  /// Decodes a `B` record, e.g. `B0955324650345N00824866EA0000001909`.
  ///
  /// The time of day in the record is combined with `flight_date`, which
  /// comes from the `HFDTE` header; without it the record can't be decoded.
  /// Also accepts the spaced out notation
  /// `B095532 4650345N 00824866E A 00000 01909`, as long as every space sits
  /// between two fields. A space inside a field makes it malformed.
  pub fn decode(line: &str,
                flight_date: Option<NaiveDate>)
                -> DecodeResult<Self> {
    let line = packed(line);

    let len = line.chars().count();
    ensure!(len >= MIN_LEN,
            ErrorKind::RecordTooShort { record_type: 'B',
                                        expected:    MIN_LEN,
                                        actual:      len, });
    let flight_date = flight_date.ok_or(ErrorKind::DateNotYetKnown)?;

    // multi-byte characters shift the byte columns, `get` catches that
    let column = |field: &'static str, range: Range<usize>| {
      line.get(range.clone()).ok_or_else(|| {
        let value = line.chars().skip(range.start).take(range.len()).collect();
        ErrorKind::MalformedNumericField { field, value }
      })
    };

    let time = field::time_of_day(column("time", TIME)?)?;
    let latitude = field::latitude(column("latitude", LATITUDE)?)?;
    let longitude = field::longitude(column("longitude", LONGITUDE)?)?;
    let av_flag = column("validity", VALIDITY)? == "A";
    let pressure_altitude =
      field::altitude("pressure altitude",
                      column("pressure altitude", PRESSURE_ALTITUDE)?)?;
    let gps_altitude =
      field::altitude("gps altitude", column("gps altitude", GPS_ALTITUDE)?)?;

    Ok(Self::new(flight_date.and_time(time),
                 latitude,
                 longitude,
                 av_flag,
                 pressure_altitude,
                 gps_altitude))
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;


  const EPSILON: f64 = 1e-5;

  fn flight_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 5, 10)
  }

  #[test]
  fn decode_test() {
    let fix =
      Fix::decode("B0955324650345N00824866EA0000001909", flight_date()).unwrap();

    assert_eq!(NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
                                                   .and_hms_opt(9, 55, 32)
                                                   .unwrap(),
               fix.timestamp());
    assert!((fix.latitude() - 46.83908).abs() < EPSILON);
    assert!((fix.longitude() - 8.41443).abs() < EPSILON);
    assert_eq!(true, fix.av_flag());
    assert_eq!(0.0, fix.pressure_altitude());
    assert_eq!(1909.0, fix.gps_altitude());
  }

  #[test]
  fn decode_spaced_test() {
    assert_eq!(Fix::decode("B0955324650345N00824866EA0000001909",
                           flight_date()),
               Fix::decode("B095532 4650345N 00824866E A 00000 01909",
                           flight_date()));
    assert_eq!(Fix::decode("B0955324650345N00824866EA0000001909",
                           flight_date()),
               Fix::decode("B095532 4650345N 00824866E A 00000 01909 012",
                           flight_date()));
  }

  #[test]
  fn decode_stray_space_test() {
    // a space inside a field doesn't shift the following columns
    let cases = [("B0955324650345N00824866EA0 012019095", "pressure altitude"),
                 ("B095532 650345N00824866EA0000001909", "latitude"),
                 ("B0955324650345N00824866EA00000 1909", "gps altitude"),
                 ("B095532 4650345N 00824866E A 0 000 01909",
                  "pressure altitude")];

    for (line, field) in cases.iter() {
      match Fix::decode(line, flight_date()) {
        Err(ErrorKind::MalformedNumericField { field: actual, .. }) => {
          assert_eq!(*field, actual, "{}", line)
        }
        other => panic!("unexpected result {:?} for {}", other, line),
      }
    }

    assert_eq!(Err(ErrorKind::MalformedNumericField { field: "pressure altitude",
                                                      value: "0 012".to_string(), }),
               Fix::decode("B0955324650345N00824866EA0 012019095",
                           flight_date()));
  }

  #[test]
  fn decode_south_west_test() {
    let fix = Fix::decode("B160240 5407121S 00249342W A 00280 00421",
                          flight_date()).unwrap();
    assert!(fix.latitude() < 0.0);
    assert!(fix.longitude() < 0.0);
    assert!((fix.latitude() + 54.118683).abs() < EPSILON);
    assert!((fix.longitude() + 2.822367).abs() < EPSILON);
    assert_eq!(280.0, fix.pressure_altitude());
    assert_eq!(421.0, fix.gps_altitude());
  }

  #[test]
  fn decode_invalid_fix_and_negative_altitude_test() {
    let fix =
      Fix::decode("B1602405407121N00249342EV-0012-0003", flight_date()).unwrap();
    assert_eq!(false, fix.av_flag());
    assert_eq!(-12.0, fix.pressure_altitude());
    assert_eq!(-3.0, fix.gps_altitude());
  }

  #[test]
  fn decode_ignores_extensions_test() {
    let plain =
      Fix::decode("B0955324650345N00824866EA0000001909", flight_date()).unwrap();
    let extended =
      Fix::decode("B0955324650345N00824866EA0000001909035123 4567",
                  flight_date()).unwrap();
    assert_eq!(plain, extended);
  }

  #[test]
  fn decode_too_short_test() {
    // every prefix of a valid record is too short, with or without a date
    let line = "B0955324650345N00824866EA0000001909";
    for len in 1..MIN_LEN {
      let expected = Err(ErrorKind::RecordTooShort { record_type: 'B',
                                                     expected:    35,
                                                     actual:      len, });
      assert_eq!(expected, Fix::decode(&line[..len], flight_date()));
      assert_eq!(expected, Fix::decode(&line[..len], None));
    }
  }

  #[test]
  fn decode_without_date_test() {
    assert_eq!(Err(ErrorKind::DateNotYetKnown),
               Fix::decode("B0955324650345N00824866EA0000001909", None));
  }

  #[test]
  fn decode_malformed_test() {
    let cases = [("B0955324650345N00824866EA00a0001909", "pressure altitude"),
                 ("B0955324650345N00824866EA00000019-9", "gps altitude"),
                 ("B0965324650345N00824866EA0000001909", "time"),
                 ("B0955324650345X00824866EA0000001909", "latitude"),
                 ("B0955324650345N0082486.EA0000001909", "longitude"),
                 ("B095532465034ÄN00824866EA0000001909", "latitude")];

    for (line, field) in cases.iter() {
      match Fix::decode(line, flight_date()) {
        Err(ErrorKind::MalformedNumericField { field: actual, .. }) => {
          assert_eq!(*field, actual, "{}", line)
        }
        other => panic!("unexpected result {:?} for {}", other, line),
      }
    }
  }
}
