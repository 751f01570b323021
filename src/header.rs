//! Observation file header: metadata every decoding stage depends on.
use crate::{
    observable::Observable,
    prelude::{Constellation, Duration, Epoch, TimeScale, SV},
    version::Version,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod parsing;
mod satellites;

pub use parsing::read_header_lines;
pub(crate) use satellites::parse_sv;

/// Label closing the header section
pub const HEADER_END_MARKER: &str = "END OF HEADER";

/// Describes a RINEX-2 observation [Header].
/// Built once per file, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Header {
    /// Revision, when "RINEX VERSION / TYPE" is present
    pub version: Option<Version>,
    /// Satellite system declared by this file.
    /// Satellites described without system letter belong to it
    /// (to GPS for mixed files).
    pub constellation: Constellation,
    /// Station name
    pub marker: Option<String>,
    /// Header comments, stored as is
    pub comments: Vec<String>,
    /// Observables, in file order
    pub observables: Vec<Observable>,
    /// Satellite directory ("PRN / # OF OBS"), in file order
    pub satellites: Vec<SV>,
    /// Time of first observation
    pub first_obs_time: Epoch,
    /// Time of last observation
    pub last_obs_time: Epoch,
    /// Sampling interval
    pub interval: Duration,
    /// [TimeScale] all epochs are expressed in
    pub timescale: TimeScale,
}

impl Header {
    /// Number of observables per satellite
    pub fn observation_type_count(&self) -> u32 {
        self.observables.len() as u32
    }

    /// Number of satellites in the directory
    pub fn satellite_count(&self) -> u32 {
        self.satellites.len() as u32
    }

    /// Sampling interval, in seconds
    pub fn interval_seconds(&self) -> f64 {
        self.interval.to_seconds()
    }

    /// Returns position of given [Observable] in the observation rows
    pub fn observable_index(&self, observable: &Observable) -> Option<usize> {
        self.observables.iter().position(|o| o == observable)
    }
}
