// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use serde::Serialize;


/// The kind of an IGC record, identified by the first character of its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RecordType {
  /// `A`: manufacturer code and logger id, always the first record.
  Manufacturer,
  /// `H`: file header, e.g. flight date and pilot.
  Header,
  /// `B`: a position fix.
  Fix,
  /// `L`: free-text comment.
  Comment,
  /// `G`: security signature, which we don't verify.
  Security,
  /// Anything else. IGC knows more record types (`C`, `E`, `F`, `I`, ...)
  /// which we don't model.
  Unknown(char),
}

impl RecordType {
  /// Classifies a line. Returns `None` for an empty line.
  pub fn classify(line: &str) -> Option<Self> {
    let record_type = match line.chars().next()? {
      'A' => Self::Manufacturer,
      'H' => Self::Header,
      'B' => Self::Fix,
      'L' => Self::Comment,
      'G' => Self::Security,
      other => Self::Unknown(other),
    };
    Some(record_type)
  }

  /// The leading character of records of this type.
  pub fn letter(&self) -> char {
    match self {
      Self::Manufacturer => 'A',
      Self::Header => 'H',
      Self::Fix => 'B',
      Self::Comment => 'L',
      Self::Security => 'G',
      Self::Unknown(letter) => *letter,
    }
  }

  /// Whether lines of this type are skipped without looking at them.
  pub fn is_ignored(&self) -> bool {
    matches!(self, Self::Comment | Self::Security)
  }
}
