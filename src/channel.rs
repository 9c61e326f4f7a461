// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::fix::Fix;
use getset::{Getters, MutGetters};
use serde::Serialize;
use std::{iter, vec};


/// Recording intervals loggers commonly use, in seconds.
const INTERVALS: [i64; 9] = [1, 2, 3, 4, 5, 10, 15, 20, 60];

/// Names and units of the channels a track is split into, in column order.
pub const CHANNELS: [(&str, &str); 5] = [("latitude", "deg"),
                                         ("longitude", "deg"),
                                         ("av_flag", "bool"),
                                         ("pressure_altitude", "m"),
                                         ("gps_altitude", "m")];


/// One column of a flight track, e.g. all GPS altitudes, with metadata.
#[derive(Clone, Debug, Default, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct Channel {
  name: String,
  unit: String,
  data: ChannelData,
}

impl Channel {
  pub fn new(name: String, unit: String, data: ChannelData) -> Self {
    Self { name, unit, data }
  }

  /// Builds the channel `name` from a sequence of fixes. Returns `None` for
  /// names not listed in `CHANNELS`.
  pub fn from_fixes(name: &str, fixes: &[Fix]) -> Option<Self> {
    let (name, unit) = CHANNELS.iter().find(|(n, _)| *n == name)?;
    let sample: fn(&Fix) -> f64 = match *name {
      "latitude" => |fix: &Fix| fix.latitude(),
      "longitude" => |fix: &Fix| fix.longitude(),
      "av_flag" => |fix: &Fix| if fix.av_flag() { 1.0 } else { 0.0 },
      "pressure_altitude" => |fix: &Fix| fix.pressure_altitude(),
      _ => |fix: &Fix| fix.gps_altitude(),
    };

    let start = fixes.first().map(Fix::timestamp);
    let (timestamps, samples): (Vec<f64>, Vec<f64>) =
      fixes.iter()
           .filter_map(|fix| {
             let offset = fix.timestamp() - start?;
             Some((offset.num_seconds() as f64, sample(fix)))
           })
           .unzip();

    Some(Self::new(name.to_string(),
                   unit.to_string(),
                   ChannelData::new(timestamps, samples)))
  }

  /// Estimates the recording interval in seconds from the first three
  /// samples, snapped to the closest common logger interval.
  pub fn interval(&self) -> f64 {
    if self.len() < 3 {
      return 0.0;
    }

    let timestamps = self.data.timestamps();
    let raw_interval = ((timestamps[2] - timestamps[0]) / 2.0).round() as i64;
    if raw_interval < 1 {
      return 0.0;
    }

    INTERVALS.iter()
             .min_by_key(|&&interval| (raw_interval - interval).abs())
             .copied()
             .unwrap_or(0) as f64
  }

  /// Recording frequency in Hz, 0 if it can't be estimated.
  pub fn frequency(&self) -> f64 {
    let interval = self.interval();
    if interval > 0.0 {
      1.0 / interval
    } else {
      0.0
    }
  }

  pub fn len(&self) -> usize {
    self.data().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}


/// Samples of a channel with their timestamps in seconds since the first fix.
#[derive(Clone, Debug, Default, PartialEq, Getters, MutGetters, Serialize)]
#[getset(get = "pub", get_mut = "pub")]
pub struct ChannelData {
  timestamps: Vec<f64>,
  samples:    Vec<f64>,
}

impl ChannelData {
  pub fn new(timestamps: Vec<f64>, samples: Vec<f64>) -> Self {
    assert_eq!(timestamps.len(),
               samples.len(),
               "number of timestamps not equivalent to number of samples");
    Self { timestamps,
           samples }
  }

  pub fn len(&self) -> usize {
    assert!(self.timestamps.len() == self.samples.len(),
            "number of timestamps not equivalent to number of samples");
    self.timestamps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0usize
  }
}

impl IntoIterator for ChannelData {
  type IntoIter = iter::Zip<vec::IntoIter<f64>, vec::IntoIter<f64>>;
  type Item = (f64, f64);

  fn into_iter(self) -> Self::IntoIter {
    self.timestamps.into_iter().zip(self.samples.into_iter())
  }
}
