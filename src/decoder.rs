//! Decoding pipeline: header, time axis, epochs, table assembly
use crate::{
    epoch::time_axis,
    error::Error,
    header::Header,
    observation::{decode_epoch, EpochRecord, RecordError},
    prelude::Epoch,
    reader::LineCursor,
    table::ObservationTable,
};

use std::io::BufRead;

#[cfg(feature = "log")]
use log::{debug, error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [DecodingOptions] accepted by the decoding entry points
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodingOptions {
    /// Decode only the first N epochs of the time axis.
    /// Unbounded by default: the header time frame is used.
    pub max_epochs: Option<u32>,
}

impl DecodingOptions {
    /// Copies and caps decoding to the first `n` epochs
    pub fn with_max_epochs(&self, n: u32) -> Self {
        let mut s = *self;
        s.max_epochs = Some(n);
        s
    }
}

/// [Decoder] walks an observation file once, in order.
/// [Decoder::new] consumes and interprets the header, each
/// [Decoder::next_record] call consumes exactly one epoch.
/// ```
/// use rinex2_obs::prelude::*;
/// use std::{fs::File, io::BufReader};
///
/// let fd = File::open("test_resources/OBS/V2/mini.15o").unwrap();
/// let mut decoder = Decoder::new(BufReader::new(fd), &DecodingOptions::default())
///     .unwrap();
///
/// assert_eq!(decoder.header().observation_type_count(), 2);
/// assert_eq!(decoder.time_axis().len(), 2);
///
/// while let Some(record) = decoder.next_record().unwrap() {
///     decoder.assemble(record).unwrap();
/// }
///
/// let table = decoder.into_table();
/// assert_eq!(table.decoded_epochs(), 2);
/// ```
#[derive(Debug)]
pub struct Decoder<R: BufRead> {
    cursor: LineCursor<R>,
    table: ObservationTable,
    /// Index of next epoch to be decoded
    index: usize,
    /// Time axis was shortened by [DecodingOptions::max_epochs]
    capped: bool,
}

impl<R: BufRead> Decoder<R> {
    /// Parses the header section and prepares the (all missing) table.
    pub fn new(reader: R, opts: &DecodingOptions) -> Result<Self, Error> {
        let mut cursor = LineCursor::new(reader);
        let header = Header::parse(&mut cursor)?;

        let axis = time_axis(
            header.first_obs_time,
            header.last_obs_time,
            header.interval,
            opts.max_epochs,
        )?;

        #[cfg(feature = "log")]
        debug!("time axis: {} epochs", axis.len());

        Ok(Self {
            cursor,
            table: ObservationTable::new(header, axis),
            index: 0,
            capped: opts.max_epochs.is_some(),
        })
    }

    /// [Header] of the file being decoded
    pub fn header(&self) -> &Header {
        self.table.header()
    }

    /// Expected sampling instants
    pub fn time_axis(&self) -> &[Epoch] {
        self.table.epochs()
    }

    /// Decodes next epoch. Returns `None` once the body is exhausted.
    /// A truncated epoch returns the table assembled so far,
    /// through [Error::TruncatedEpoch].
    pub fn next_record(&mut self) -> Result<Option<EpochRecord>, Error> {
        let index = self.index;
        match decode_epoch(&mut self.cursor, self.table.header(), index) {
            Ok(Some(record)) => {
                self.index += 1;
                Ok(Some(record))
            },
            Ok(None) => Ok(None),
            Err(RecordError::Truncated) => {
                #[cfg(feature = "log")]
                error!("epoch #{}: truncated", index);
                Err(Error::TruncatedEpoch {
                    epoch: index,
                    partial: Box::new(self.table.clone()),
                })
            },
            Err(RecordError::Io(e)) => Err(Error::Io(e)),
            Err(_e) => {
                #[cfg(feature = "log")]
                error!("epoch #{}: {}", index, _e);
                Err(Error::MalformedEpoch {
                    epoch: index,
                    line: self.cursor.consumed(),
                })
            },
        }
    }

    /// Writes given [EpochRecord] into the table, by time.
    pub fn assemble(&mut self, record: EpochRecord) -> Result<(), Error> {
        match self.table.write(record) {
            Ok(()) => Ok(()),
            Err(e) => {
                #[cfg(feature = "log")]
                error!("time axis desynchronization: {}", e);
                Err(e)
            },
        }
    }

    /// Decodes all remaining epochs and returns the complete table.
    /// When decoding is capped, it stops at the first epoch past the end
    /// of the time axis. Otherwise such an epoch is a desynchronization.
    pub fn decode(mut self) -> Result<ObservationTable, Error> {
        while let Some(record) = self.next_record()? {
            if self.capped && self.table.is_past_end(&record.time) {
                #[cfg(feature = "log")]
                debug!("{}: past end of time axis", record.time);
                break;
            }
            self.assemble(record)?;
        }
        Ok(self.table)
    }

    /// Returns the table assembled so far
    pub fn into_table(self) -> ObservationTable {
        self.table
    }
}

/// Decodes an observation file from any buffered reader.
pub fn decode<R: BufRead>(reader: R, opts: &DecodingOptions) -> Result<ObservationTable, Error> {
    Decoder::new(reader, opts)?.decode()
}
