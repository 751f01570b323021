//! Time indexed observation table
use crate::{
    error::{CorruptField, Error},
    header::Header,
    observable::Observable,
    observation::EpochRecord,
    prelude::{Epoch, SV},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "log")]
use log::warn;

/// [ObservationTable] is the decoded content of an observation file:
/// one cell per (time, satellite, observable) coordinate,
/// `None` marking a missing observation.
///
/// The time axis is computed from the [Header] before decoding, and
/// epochs are written by time (never by position), so epochs absent
/// from the body simply remain missing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationTable {
    /// [Header] this table was built from
    header: Header,
    /// Time axis, strictly increasing
    epochs: Vec<Epoch>,
    /// Satellite axis: header directory, then unlisted satellites
    satellites: Vec<SV>,
    /// Observable axis, header order
    observables: Vec<Observable>,
    /// Cells, per satellite: `[time * observables + observable]`
    cells: Vec<Vec<Option<f64>>>,
    /// Epochs written so far
    written: Vec<bool>,
    /// Receiver clock offset, per epoch
    clock_offsets: Vec<Option<f64>>,
    /// Diagnostics gathered while decoding
    corrupt_fields: Vec<CorruptField>,
}

impl ObservationTable {
    /// Allocates a table where every cell is missing.
    pub fn new(header: Header, epochs: Vec<Epoch>) -> Self {
        let n = epochs.len() * header.observables.len();
        let satellites = header.satellites.clone();
        let observables = header.observables.clone();
        Self {
            cells: vec![vec![None; n]; satellites.len()],
            written: vec![false; epochs.len()],
            clock_offsets: vec![None; epochs.len()],
            corrupt_fields: Vec::new(),
            header,
            epochs,
            satellites,
            observables,
        }
    }

    /// Writes given [EpochRecord] at its time coordinate.
    /// Fails if that time is not on the time axis, or was written already.
    pub fn write(&mut self, record: EpochRecord) -> Result<(), Error> {
        let t = self
            .time_index(&record.time)
            .filter(|t| !self.written[*t])
            .ok_or(Error::UnexpectedEpochTime {
                epoch: record.index,
                time: record.time,
            })?;

        let n_obs = self.observables.len();

        for (sv, row) in record.satellites.iter().zip(record.rows.iter()) {
            let s = match self.satellite_index(sv) {
                Some(s) => s,
                None => {
                    #[cfg(feature = "log")]
                    warn!("{}: {} not listed in header", record.time, sv);
                    self.satellites.push(*sv);
                    self.cells.push(vec![None; self.epochs.len() * n_obs]);
                    self.satellites.len() - 1
                },
            };

            let cells = &mut self.cells[s][t * n_obs..(t + 1) * n_obs];
            for (cell, field) in cells.iter_mut().zip(row.iter()) {
                *cell = field.value;
            }
        }

        self.written[t] = true;
        self.clock_offsets[t] = record.clock_offset;
        self.corrupt_fields.extend(record.corrupt_fields);
        Ok(())
    }

    /// Returns true if given time lies beyond the end of the time axis
    pub fn is_past_end(&self, time: &Epoch) -> bool {
        match self.epochs.last() {
            Some(last) => time > last,
            None => true,
        }
    }

    fn time_index(&self, time: &Epoch) -> Option<usize> {
        self.epochs.binary_search(time).ok()
    }

    fn satellite_index(&self, sv: &SV) -> Option<usize> {
        self.satellites.iter().position(|s| s == sv)
    }

    fn observable_index(&self, observable: &Observable) -> Option<usize> {
        self.observables.iter().position(|o| o == observable)
    }

    /// Returns observation at given coordinate, `None` if missing
    /// or if the coordinate does not exist.
    pub fn get(&self, epoch: &Epoch, sv: &SV, observable: &Observable) -> Option<f64> {
        let t = self.time_index(epoch)?;
        let s = self.satellite_index(sv)?;
        let o = self.observable_index(observable)?;
        self.cells[s][t * self.observables.len() + o]
    }

    /// Time axis
    pub fn epochs(&self) -> &[Epoch] {
        &self.epochs
    }

    /// Satellite axis
    pub fn satellites(&self) -> &[SV] {
        &self.satellites
    }

    /// Observable axis
    pub fn observables(&self) -> &[Observable] {
        &self.observables
    }

    /// [Header] this table was decoded from
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns one (satellite, observable) slice across the whole time axis.
    /// ```
    /// use rinex2_obs::prelude::*;
    /// use std::str::FromStr;
    ///
    /// let table = ObservationTable::from_file(
    ///     "test_resources/OBS/V2/mini.15o",
    ///     &DecodingOptions::default(),
    /// ).unwrap();
    ///
    /// let g01 = SV::from_str("G01").unwrap();
    /// let p1 = Observable::from_str("P1").unwrap();
    ///
    /// for (t, value) in table.series(&g01, &p1) {
    ///     assert!(value.is_some(), "{} missing", t);
    /// }
    /// ```
    pub fn series(
        &self,
        sv: &SV,
        observable: &Observable,
    ) -> Box<dyn Iterator<Item = (Epoch, Option<f64>)> + '_> {
        let n_obs = self.observables.len();
        match (self.satellite_index(sv), self.observable_index(observable)) {
            (Some(s), Some(o)) => Box::new(
                self.epochs
                    .iter()
                    .enumerate()
                    .map(move |(t, epoch)| (*epoch, self.cells[s][t * n_obs + o])),
            ),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Returns all rows at given time: (satellite, one cell per observable)
    pub fn epoch_slice(&self, epoch: &Epoch) -> Option<Vec<(SV, &[Option<f64>])>> {
        let t = self.time_index(epoch)?;
        let n_obs = self.observables.len();
        Some(
            self.satellites
                .iter()
                .zip(self.cells.iter())
                .map(|(sv, cells)| (*sv, &cells[t * n_obs..(t + 1) * n_obs]))
                .collect(),
        )
    }

    /// Receiver clock offset (s) at given time, when provided
    pub fn clock_offset(&self, epoch: &Epoch) -> Option<f64> {
        let t = self.time_index(epoch)?;
        self.clock_offsets[t]
    }

    /// Returns true if given time was found in the body
    pub fn is_decoded(&self, epoch: &Epoch) -> bool {
        self.time_index(epoch)
            .map(|t| self.written[t])
            .unwrap_or(false)
    }

    /// Number of epochs actually decoded
    pub fn decoded_epochs(&self) -> usize {
        self.written.iter().filter(|w| **w).count()
    }

    /// Present but unreadable fields, left missing
    pub fn corrupt_fields(&self) -> &[CorruptField] {
        &self.corrupt_fields
    }

    /// Returns true if this table holds no observation at all
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_none())
    }
}
