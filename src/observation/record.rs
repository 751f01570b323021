use crate::{
    epoch::EpochFlag,
    error::CorruptField,
    observation::{LliFlags, Ssi},
    prelude::{Epoch, SV},
};

use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ObservationField] is one 16 character data field:
/// the measurement and both indicator columns that follow it.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationField {
    /// Measurement, `None` when blank or not readable
    pub value: Option<f64>,
    /// Loss of lock indicator
    pub lli: Option<LliFlags>,
    /// Signal strength indicator
    pub ssi: Option<Ssi>,
}

/// [EpochRecord] is one decoded epoch, in file order.
/// It is consumed by the table assembly step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpochRecord {
    /// Index of this epoch in the body (events excluded)
    pub index: usize,
    /// Sampling instant
    pub time: Epoch,
    /// [EpochFlag], either [EpochFlag::Ok] or [EpochFlag::PowerFailure]
    pub flag: EpochFlag,
    /// Satellites present in this epoch, in file order
    pub satellites: Vec<SV>,
    /// One row per satellite, one field per observable (header order)
    pub rows: Vec<Vec<ObservationField>>,
    /// Receiver clock offset (s)
    pub clock_offset: Option<f64>,
    /// Fields present but not readable
    pub corrupt_fields: Vec<CorruptField>,
}

impl EpochRecord {
    /// Returns measurement for given satellite and observable position
    pub fn value(&self, sv: SV, observable: usize) -> Option<f64> {
        let row = self.satellites.iter().position(|s| *s == sv)?;
        self.rows.get(row)?.get(observable)?.value
    }

    /// Iterates (satellite, row) pairs, in file order
    pub fn iter(&self) -> impl Iterator<Item = (SV, &[ObservationField])> + '_ {
        self.satellites
            .iter()
            .copied()
            .zip(self.rows.iter().map(|row| row.as_slice()))
    }
}

impl std::fmt::Display for EpochRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {}",
            self.time,
            self.flag,
            self.satellites.iter().join(" ")
        )
    }
}
