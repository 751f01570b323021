//! Decoding errors and recoverable diagnostics
use thiserror::Error;

use crate::{
    observable::Observable,
    prelude::{Epoch, SV},
    table::ObservationTable,
    version::Version,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Header field that could not be located or interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeaderField {
    /// "END OF HEADER" never encountered
    EndOfHeader,
    /// "RINEX VERSION / TYPE"
    Version,
    /// File type letter of "RINEX VERSION / TYPE"
    FileType,
    /// Counter of "# / TYPES OF OBSERV"
    ObservationTypeCount,
    /// Codes of "# / TYPES OF OBSERV"
    ObservationTypes,
    /// "# OF SATELLITES"
    SatelliteCount,
    /// "PRN / # OF OBS" directory
    SatelliteIds,
    /// "TIME OF FIRST OBS"
    FirstObsTime,
    /// "TIME OF LAST OBS"
    LastObsTime,
    /// "INTERVAL"
    Interval,
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EndOfHeader => f.write_str("end_of_header"),
            Self::Version => f.write_str("version"),
            Self::FileType => f.write_str("file_type"),
            Self::ObservationTypeCount => f.write_str("observation_type_count"),
            Self::ObservationTypes => f.write_str("observation_types"),
            Self::SatelliteCount => f.write_str("satellite_count"),
            Self::SatelliteIds => f.write_str("satellite_ids"),
            Self::FirstObsTime => f.write_str("first_obs_time"),
            Self::LastObsTime => f.write_str("last_obs_time"),
            Self::Interval => f.write_str("interval_seconds"),
        }
    }
}

/// Errors that may rise while decoding an observation file.
#[derive(Error, Debug)]
pub enum Error {
    /// Header is unusable: nothing was decoded.
    #[error("malformed header: {0}")]
    MalformedHeader(HeaderField),
    /// Only RINEX V1 and V2 observation files are decoded.
    #[error("non supported revision {0}")]
    UnsupportedVersion(Version),
    /// Body ended in the middle of epoch #`epoch`.
    /// Epochs decoded prior to this one are available in `partial`.
    #[error("truncated epoch #{epoch}")]
    TruncatedEpoch {
        epoch: usize,
        partial: Box<ObservationTable>,
    },
    /// Epoch header does not match the time axis
    /// deduced from the file header.
    #[error("epoch #{epoch} ({time}) does not fit the time axis")]
    UnexpectedEpochTime { epoch: usize, time: Epoch },
    /// Epoch header is not readable, `line` (1-indexed) being
    /// the last line consumed.
    #[error("epoch #{epoch}: malformed epoch header (line {line})")]
    MalformedEpoch { epoch: usize, line: usize },
    /// Requested epoch cap exceeds the file time span.
    #[error("cannot decode {cap} epochs, file spans {natural} epochs")]
    InvalidCap { cap: u32, natural: usize },
    /// Header time frame and interval describe an unreasonably long time axis.
    #[error("time axis of {0} epochs exceeds the decodable limit")]
    OversizedTimeAxis(usize),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the partially assembled [ObservationTable], when this
    /// error interrupted an otherwise sane decoding process.
    pub fn partial_table(self) -> Option<ObservationTable> {
        match self {
            Self::TruncatedEpoch { partial, .. } => Some(*partial),
            _ => None,
        }
    }
}

/// [CorruptField] describes a present but non readable observation.
/// Corresponding cell is left missing and decoding carries on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorruptField {
    /// Epoch index (in file order)
    pub epoch: usize,
    /// Satellite this field was attached to
    pub sv: SV,
    /// Observable this field was attached to
    pub observable: Observable,
    /// Raw content, as found
    pub content: String,
}

impl std::fmt::Display for CorruptField {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "epoch #{} {} {}: \"{}\"",
            self.epoch, self.sv, self.observable, self.content
        )
    }
}
