#![doc(html_logo_url = "https://raw.githubusercontent.com/georust/meta/master/logo/logo.png")]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * RINEX-2 observation decoder, built on the Geo-Rust GNSS stack.
 * This library is shipped under both Apache-2.0 and MIT License.
 */

extern crate gnss_rs as gnss;

pub mod columns;
pub mod epoch;
pub mod header;
pub mod observable;
pub mod observation;
pub mod version;

mod decoder;
mod error;
mod reader;
mod table;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod cache;

#[cfg(test)]
mod tests;

use std::path::Path;

use prelude::{DecodingOptions, Error, ObservationTable};
use reader::BufferedReader;

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        decoder::{decode, Decoder, DecodingOptions},
        epoch::EpochFlag,
        error::{CorruptField, Error, HeaderField},
        header::Header,
        observable::Observable,
        observation::{EpochRecord, LliFlags, ObservationField, Ssi},
        reader::{BufferedReader, LineCursor},
        table::ObservationTable,
        version::Version,
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}

impl ObservationTable {
    /// Decodes [ObservationTable] from local readable file.
    /// The file is released on every exit path.
    /// See [Self::from_gzip_file] for seamless Gzip support.
    pub fn from_file<P: AsRef<Path>>(path: P, opts: &DecodingOptions) -> Result<Self, Error> {
        let reader = BufferedReader::plain(path)?;
        prelude::decode(reader, opts)
    }

    /// Decodes [ObservationTable] from local gzip compressed file.
    #[cfg(feature = "flate2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "flate2")))]
    pub fn from_gzip_file<P: AsRef<Path>>(path: P, opts: &DecodingOptions) -> Result<Self, Error> {
        let reader = BufferedReader::gzip(path)?;
        prelude::decode(reader, opts)
    }
}
