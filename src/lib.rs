// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

//! Parser for IGC flight recorder logs.
//!
//! Lines are classified by their leading record letter and decoded into
//! `FlightMetadata` (from the `A` and `H` records) and a `FlightTrack` of
//! position fixes (from the `B` records). Fixes are timestamped with the date
//! from the `HFDTE` header, which therefore has to come first.

mod error;

pub mod channel;
pub mod config;
pub mod field;
pub mod fix;
pub mod flight;
pub mod header;
pub mod igc_file;
pub mod manufacturer;
pub mod metadata;
pub mod record;

pub use channel::{Channel, ChannelData};
pub use config::{ParseMode, ParserConfig};
pub use error::{DecodeResult, ErrorKind, ParseError, Result, Warning};
pub use fix::Fix;
pub use flight::{Flight, FlightParser, FlightTrack};
pub use header::{Header, HeaderField};
pub use igc_file::IgcFile;
pub use manufacturer::Manufacturer;
pub use metadata::FlightMetadata;
pub use record::RecordType;
