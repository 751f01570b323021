//! Fixed column layouts of RINEX-2 observation files.
//!
//! RINEX-2 has no delimiters: every record type places its fields at
//! fixed byte offsets. All offsets are 0-indexed, `end` is exclusive.
//! Decoders and tests both refer to these tables.

/// A fixed width text field, `[start, end[`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Column {
    pub start: usize,
    pub end: usize,
}

impl Column {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Field width
    pub const fn width(&self) -> usize {
        self.end - self.start
    }

    /// Same field, moved `offset` bytes to the right
    pub const fn shifted(&self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Extracts this field from given line.
    /// Short lines (trailing blanks stripped by producers) are tolerated:
    /// the missing part reads as blank.
    pub fn extract<'a>(&self, line: &'a str) -> &'a str {
        let end = self.end.min(line.len());
        if self.start >= end {
            return "";
        }
        line.get(self.start..end).unwrap_or("")
    }

    /// Extracts this field from given line, trimmed
    pub fn trimmed<'a>(&self, line: &'a str) -> &'a str {
        self.extract(line).trim()
    }
}

/// Header records: data in columns 1-60, record label from column 61.
pub mod header {
    use super::Column;

    /// Data section of any header line
    pub const CONTENT: Column = Column::new(0, 60);

    /// Record label start
    pub const LABEL_START: usize = 60;

    /// "RINEX VERSION / TYPE": format version
    pub const VERSION: Column = Column::new(0, 9);

    /// "RINEX VERSION / TYPE": file type letter
    pub const FILE_TYPE: Column = Column::new(20, 21);

    /// "RINEX VERSION / TYPE": satellite system letter
    pub const SATELLITE_SYSTEM: Column = Column::new(40, 41);

    /// "# / TYPES OF OBSERV": counter (first line only)
    pub const OBS_TYPE_COUNT: Column = Column::new(0, 6);

    /// "# / TYPES OF OBSERV": whitespace separated codes
    pub const OBS_TYPE_CODES: Column = Column::new(6, 60);

    /// "# OF SATELLITES"
    pub const SATELLITE_COUNT: Column = Column::new(0, 6);

    /// "TIME OF FIRST OBS" / "TIME OF LAST OBS": 6 whitespace separated fields
    pub const TIME_OF_OBS: Column = Column::new(0, 43);

    /// "TIME OF FIRST OBS": time system
    pub const TIME_SYSTEM: Column = Column::new(48, 51);

    /// "INTERVAL"
    pub const INTERVAL: Column = Column::new(0, 10);

    /// "PRN / # OF OBS": satellite identifier, first line of each entry
    pub const PRN: Column = Column::new(3, 6);

    /// "PRN / # OF OBS": maximal number of per-type counters on one line
    pub const OBS_COUNTS_PER_LINE: usize = 9;
}

/// Epoch header line (and its continuation lines).
pub mod epoch {
    use super::Column;

    /// yy mm dd hh mm ss.sssssss
    pub const TIME: Column = Column::new(0, 26);

    /// Epoch flag
    pub const FLAG: Column = Column::new(26, 29);

    /// Number of satellites in this epoch (or special records for events)
    pub const NUM_SAT: Column = Column::new(29, 32);

    /// Satellite list, on every epoch header line
    pub const SATELLITES: Column = Column::new(32, 68);

    /// Receiver clock offset, first line only
    pub const CLOCK_OFFSET: Column = Column::new(68, 80);

    /// Satellite identifier width
    pub const SV_WIDTH: usize = 3;

    /// Maximal number of satellites on one epoch header line
    pub const SATELLITES_PER_LINE: usize = 12;
}

/// Observation data lines.
pub mod data {
    use super::Column;

    /// F14.3 observation value
    pub const VALUE: Column = Column::new(0, 14);

    /// Loss of lock indicator
    pub const LLI: Column = Column::new(14, 15);

    /// Signal strength indicator
    pub const SSI: Column = Column::new(15, 16);

    /// Complete field: value and both flags
    pub const FIELD_WIDTH: usize = 16;

    /// Maximal number of observations on one data line
    pub const VALUES_PER_LINE: usize = 5;

    /// Column layout of `nth` observation on its line
    pub const fn value(nth: usize) -> Column {
        VALUE.shifted(nth * FIELD_WIDTH)
    }

    /// LLI column of `nth` observation on its line
    pub const fn lli(nth: usize) -> Column {
        LLI.shifted(nth * FIELD_WIDTH)
    }

    /// SSI column of `nth` observation on its line
    pub const fn ssi(nth: usize) -> Column {
        SSI.shifted(nth * FIELD_WIDTH)
    }
}
