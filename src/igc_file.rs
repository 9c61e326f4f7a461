// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{config::ParserConfig,
            flight::{Flight, FlightParser}};
use eyre::{ensure, eyre, Result, WrapErr};
use getset::Getters;
use std::{fs,
          path::{Path, PathBuf}};
use tracing::debug;


/// An IGC file on disk together with its parsed contents.
#[derive(Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct IgcFile {
  path:   PathBuf,
  flight: Flight,
}

impl IgcFile {
  /// Loads and parses an igc file with the default, strict settings.
  pub fn load(path: &Path) -> Result<Self> {
    Self::load_with(path, ParserConfig::default())
  }

  /// Loads and parses an igc file.
  ///
  /// Fails if the path is no file, doesn't have the `.igc` extension, can't
  /// be read or doesn't parse. Many loggers write Latin-1 text, so invalid
  /// UTF-8 is replaced rather than rejected.
  pub fn load_with(path: &Path, config: ParserConfig) -> Result<Self> {
    let extension =
      path.extension()
          .unwrap_or_default()
          .to_str()
          .ok_or(eyre!("file extension is not valid unicode ({})",
                       path.display()))?;

    ensure!(path.exists() && path.is_file(),
            "path does not exist or is not a valid file ({})",
            path.display());
    ensure!(extension.eq_ignore_ascii_case("igc"),
            "only files with extension .igc accepted ({})",
            path.display());

    let bytes = fs::read(path).wrap_err_with(|| {
                                 format!("could not read file ({})",
                                         path.display())
                               })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read igc file");

    let text = String::from_utf8_lossy(&bytes);
    let flight = FlightParser::new(config).parse(text.lines())
                                          .wrap_err_with(|| {
                                            format!("could not parse file \
                                                     ({})",
                                                    path.display())
                                          })?;

    Ok(Self { path: path.to_owned(),
              flight })
  }

  /// Hands the parsed flight over.
  pub fn into_flight(self) -> Flight {
    self.flight
  }
}
