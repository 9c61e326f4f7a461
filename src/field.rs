// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

//! Decoders for the fixed-column fields shared by several record types.

use super::{ensure,
            error::{DecodeResult, ErrorKind}};
use chrono::{NaiveDate, NaiveTime};


fn malformed(field: &'static str, value: &str) -> ErrorKind {
  ErrorKind::MalformedNumericField { field,
                                     value: value.to_string() }
}

/// Parses a field consisting of ASCII digits only. `str::parse` alone would
/// also let a leading `+` through.
fn digits(field: &'static str, value: &str) -> DecodeResult<u32> {
  ensure!(!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()),
          malformed(field, value));
  value.parse().map_err(|_| malformed(field, value))
}

fn coordinate(field: &'static str,
              value: &str,
              degree_width: usize,
              hemispheres: (char, char),
              max: f64)
              -> DecodeResult<f64> {
  ensure!(value.len() == degree_width + 6, malformed(field, value));

  let degrees = value.get(..degree_width)
                     .ok_or_else(|| malformed(field, value))?;
  let minutes = value.get(degree_width..degree_width + 5)
                     .ok_or_else(|| malformed(field, value))?;
  let hemisphere = value.chars().last();

  let degrees =
    digits(field, degrees).map_err(|_| malformed(field, value))? as f64;
  // minutes are stored as thousandths of a minute, MMmmm
  let minutes = digits(field, minutes).map_err(|_| malformed(field, value))?;
  ensure!(minutes < 60_000, malformed(field, value));

  let magnitude = degrees + (minutes as f64 / 1_000.0) / 60.0;
  ensure!(magnitude <= max, malformed(field, value));

  match hemisphere {
    Some(h) if h == hemispheres.0 => Ok(magnitude),
    Some(h) if h == hemispheres.1 => Ok(-magnitude),
    _ => Err(malformed(field, value)),
  }
}

/// Decodes `DDMMmmmH` into signed decimal degrees, South being negative.
pub fn latitude(value: &str) -> DecodeResult<f64> {
  coordinate("latitude", value, 2, ('N', 'S'), 90.0)
}

/// Decodes `DDDMMmmmH` into signed decimal degrees, West being negative.
pub fn longitude(value: &str) -> DecodeResult<f64> {
  coordinate("longitude", value, 3, ('E', 'W'), 180.0)
}

/// Decodes `HHMMSS`.
pub fn time_of_day(value: &str) -> DecodeResult<NaiveTime> {
  ensure!(value.len() == 6, malformed("time", value));
  let hms = digits("time", value)?;
  NaiveTime::from_hms_opt(hms / 10_000, hms / 100 % 100, hms % 100)
    .ok_or_else(|| malformed("time", value))
}

/// Decodes `DDMMYY`, placing the two-digit year after `base_year`.
pub fn date(value: &str, base_year: i32) -> DecodeResult<NaiveDate> {
  let invalid = || ErrorKind::InvalidDateFormat { value: value.to_string() };

  ensure!(value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit()),
          invalid());
  let dmy: u32 = value.parse().map_err(|_| invalid())?;

  NaiveDate::from_ymd_opt(base_year + (dmy % 100) as i32,
                          dmy / 100 % 100,
                          dmy / 10_000).ok_or_else(invalid)
}

/// Decodes a zero-padded altitude in meters, which may carry a leading minus
/// sign (e.g. `-0012`).
pub fn altitude(field: &'static str, value: &str) -> DecodeResult<f64> {
  let (sign, magnitude) = match value.strip_prefix('-') {
    Some(rest) => (-1.0, rest),
    None => (1.0, value),
  };
  let magnitude =
    digits(field, magnitude).map_err(|_| malformed(field, value))?;
  Ok(sign * magnitude as f64)
}


#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;


  const EPSILON: f64 = 1e-6;

  /// Writes decimal degrees the way a logger does, used to check that decoding
  /// recovers the value.
  fn encode(degrees: f64, width: usize, hemispheres: (char, char)) -> String {
    let hemisphere = if degrees < 0.0 {
      hemispheres.1
    } else {
      hemispheres.0
    };
    let degrees = degrees.abs();
    let whole = degrees.trunc();
    let milli_minutes = ((degrees - whole) * 60_000.0).round() as u32;
    format!("{:0width$}{:05}{}",
            whole as u32,
            milli_minutes,
            hemisphere,
            width = width)
  }

  #[test]
  fn latitude_test() {
    assert!((latitude("4650345N").unwrap() - 46.839083).abs() < EPSILON);
    assert!((latitude("5407121S").unwrap() + 54.118683).abs() < EPSILON);
    assert_eq!(0.0, latitude("0000000N").unwrap());
    assert_eq!(90.0, latitude("9000000S").unwrap().abs());
  }

  #[test]
  fn longitude_test() {
    assert!((longitude("00824866E").unwrap() - 8.414433).abs() < EPSILON);
    assert!((longitude("00249342W").unwrap() + 2.8223667).abs() < EPSILON);
    assert_eq!(-180.0, longitude("18000000W").unwrap());
  }

  #[test]
  fn coordinate_sign_test() {
    for value in &["1234567N", "0000001N", "8959999N"] {
      assert!(latitude(value).unwrap() >= 0.0);
    }
    for value in &["1234567S", "0000001S", "8959999S"] {
      assert!(latitude(value).unwrap() < 0.0);
    }
    for value in &["12345678E", "00000001E", "17959999E"] {
      assert!(longitude(value).unwrap() >= 0.0);
    }
    for value in &["12345678W", "00000001W", "17959999W"] {
      assert!(longitude(value).unwrap() < 0.0);
    }
  }

  #[test]
  fn coordinate_recovers_degrees_test() {
    for &degrees in &[46.839083, -54.118683, 0.5, -0.001, 89.99] {
      let encoded = encode(degrees, 2, ('N', 'S'));
      let decoded = latitude(&encoded).unwrap();
      // a thousandth of a minute is ~1.7e-5 degrees
      assert!((decoded - degrees).abs() < 1e-5, "{} vs {}", decoded, degrees);
    }

    // exactly representable values come back exactly
    for &(degrees, minutes) in &[(8u32, 24_866u32), (179, 59_999), (2, 0)] {
      let encoded = format!("{:03}{:05}W", degrees, minutes);
      let expected = -(degrees as f64 + minutes as f64 / 60_000.0);
      assert!((longitude(&encoded).unwrap() - expected).abs() < EPSILON);
    }
  }

  #[test]
  fn coordinate_malformed_test() {
    let cases = ["4650345X", "46503.5N", "4660000N", "9100000N", "465034N",
                 "+650345N"];
    for value in &cases {
      assert_eq!(Err(ErrorKind::MalformedNumericField { field: "latitude",
                                                        value: value.to_string(), }),
                 latitude(value));
    }
    assert!(longitude("18100000E").is_err());
    assert!(longitude("00824866N").is_err());
  }

  #[test]
  fn time_of_day_test() {
    assert_eq!(NaiveTime::from_hms_opt(9, 55, 32).unwrap(),
               time_of_day("095532").unwrap());
    assert_eq!(NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
               time_of_day("000000").unwrap());
    assert!(time_of_day("245532").is_err());
    assert!(time_of_day("096032").is_err());
    assert!(time_of_day("09553").is_err());
    assert!(time_of_day("0955a2").is_err());
  }

  #[test]
  fn date_test() {
    assert_eq!(NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
               date("100525", 2000).unwrap());
    assert_eq!(NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
               date("010195", 1900).unwrap());

    for value in &["10052", "1005250", "320525", "101325", "290223", "1o0525",
                   ""]
    {
      assert_eq!(Err(ErrorKind::InvalidDateFormat { value: value.to_string() }),
                 date(value, 2000));
    }
  }

  #[test]
  fn altitude_test() {
    assert_eq!(0.0, altitude("gps altitude", "00000").unwrap());
    assert_eq!(1909.0, altitude("gps altitude", "01909").unwrap());
    assert_eq!(-12.0, altitude("gps altitude", "-0012").unwrap());
    assert_eq!(Err(ErrorKind::MalformedNumericField { field: "gps altitude",
                                                      value: "01a09".to_string(), }),
               altitude("gps altitude", "01a09"));
    assert!(altitude("pressure altitude", "-").is_err());
    assert!(altitude("pressure altitude", "--012").is_err());
  }
}
