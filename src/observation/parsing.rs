//! Epoch record decoding
use crate::{
    columns::{
        data,
        epoch::{CLOCK_OFFSET, FLAG, NUM_SAT, SATELLITES, SATELLITES_PER_LINE, SV_WIDTH, TIME},
    },
    epoch::{parse_epoch, EpochFlag, FlagError, ParsingError as EpochParsingError},
    error::CorruptField,
    header::{parse_sv, Header},
    observation::{EpochRecord, LliFlags, ObservationField, Ssi},
    prelude::SV,
    reader::LineCursor,
};

use num_integer::div_ceil;
use thiserror::Error;

use std::{io::BufRead, str::FromStr};

#[cfg(feature = "log")]
use log::{debug, error, warn};

/// Failure to decode one epoch
#[derive(Error, Debug)]
pub(crate) enum RecordError {
    #[error("input ended within epoch")]
    Truncated,
    #[error("failed to parse epoch flag")]
    EpochFlag(#[from] FlagError),
    #[error("failed to parse epoch")]
    EpochTime(#[from] EpochParsingError),
    #[error("failed to parse numsat")]
    NumSatParsing,
    #[error("bad satellite identifier \"{0}\"")]
    SvParsing(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pulls next line, input exhaustion here means the epoch is incomplete
fn required_line<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<String, RecordError> {
    cursor.next_line()?.ok_or(RecordError::Truncated)
}

/// Splits a satellite list into 3 character identifiers
fn parse_satellites(
    content: &str,
    svnum: usize,
    header: &Header,
) -> Result<Vec<SV>, RecordError> {
    let mut satellites = Vec::with_capacity(svnum);
    for nth in 0..svnum {
        let start = nth * SV_WIDTH;
        let desc = content.get(start..start + SV_WIDTH).unwrap_or("");
        let sv = parse_sv(desc, header.constellation)
            .ok_or_else(|| RecordError::SvParsing(desc.to_string()))?;
        satellites.push(sv);
    }
    Ok(satellites)
}

/// Decodes one 16 character field
fn parse_field(line: &str, nth: usize) -> (ObservationField, Option<String>) {
    let content = data::value(nth).trimmed(line);

    let (value, corrupt) = if content.is_empty() {
        (None, None)
    } else {
        match content.parse::<f64>() {
            Ok(value) if value.is_finite() => (Some(value), None),
            _ => (None, Some(content.to_string())),
        }
    };

    let field = ObservationField {
        value,
        lli: LliFlags::from_column(data::lli(nth).extract(line)),
        ssi: Ssi::from_str(data::ssi(nth).extract(line)).ok(),
    };

    (field, corrupt)
}

/// Decodes next epoch carrying observations. Event records and
/// cycle slip records encountered on the way are consumed and skipped.
/// Returns `None` when input ends on an epoch boundary.
///
/// ## Input
///   - cursor: body [LineCursor], left past the last consumed line
///   - header: previously parsed [Header]
///   - index: index of the epoch about to be decoded
pub(crate) fn decode_epoch<R: BufRead>(
    cursor: &mut LineCursor<R>,
    header: &Header,
    index: usize,
) -> Result<Option<EpochRecord>, RecordError> {
    let types = header.observables.len();
    let lines_per_sat = div_ceil(types, data::VALUES_PER_LINE);

    loop {
        let line = match cursor.next_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        if line.trim().is_empty() {
            continue;
        }

        let flag = EpochFlag::from_str(FLAG.trimmed(&line))?;

        let svnum = match NUM_SAT.trimmed(&line) {
            "" => 0,
            numsat => numsat
                .parse::<usize>()
                .map_err(|_| RecordError::NumSatParsing)?,
        };

        if flag.is_event() {
            // special records follow, header style
            for _ in 0..svnum {
                let _ = required_line(cursor)?;
            }
            #[cfg(feature = "log")]
            debug!("event \"{}\": skipped {} records", flag, svnum);
            continue;
        }

        let time = parse_epoch(TIME.extract(&line), header.timescale)?;

        let clock_offset = CLOCK_OFFSET.trimmed(&line).parse::<f64>().ok();

        // identifiers are column aligned: pad every segment
        let mut sv_list = String::with_capacity(svnum * SV_WIDTH);
        sv_list.push_str(&format!(
            "{:<width$}",
            SATELLITES.extract(&line),
            width = SATELLITES.width()
        ));
        for _ in 1..div_ceil(svnum, SATELLITES_PER_LINE) {
            let line = required_line(cursor)?;
            sv_list.push_str(&format!(
                "{:<width$}",
                SATELLITES.extract(&line),
                width = SATELLITES.width()
            ));
        }

        let satellites = parse_satellites(&sv_list, svnum, header)?;

        let mut block = Vec::with_capacity(svnum * lines_per_sat);
        for _ in 0..svnum * lines_per_sat {
            match cursor.next_line()? {
                Some(line) => block.push(line),
                None => {
                    #[cfg(feature = "log")]
                    error!(
                        "{}: input ended after {}/{} data lines",
                        time,
                        block.len(),
                        svnum * lines_per_sat
                    );
                    return Err(RecordError::Truncated);
                },
            }
        }

        if !flag.has_observations() {
            #[cfg(feature = "log")]
            debug!("{}: discarded cycle slip records", time);
            continue;
        }

        let mut corrupt_fields = Vec::new();
        let mut rows = Vec::with_capacity(svnum);

        for (sv, lines) in satellites.iter().zip(block.chunks(lines_per_sat)) {
            let mut row = Vec::with_capacity(types);
            for (nth, observable) in header.observables.iter().enumerate() {
                let line = &lines[nth / data::VALUES_PER_LINE];
                let (field, corrupt) = parse_field(line, nth % data::VALUES_PER_LINE);

                if let Some(content) = corrupt {
                    let corrupt = CorruptField {
                        epoch: index,
                        sv: *sv,
                        observable: observable.clone(),
                        content,
                    };
                    #[cfg(feature = "log")]
                    warn!("corrupt field: {}", corrupt);
                    corrupt_fields.push(corrupt);
                }

                row.push(field);
            }
            rows.push(row);
        }

        let record = EpochRecord {
            index,
            time,
            flag,
            satellites,
            rows,
            clock_offset,
            corrupt_fields,
        };

        #[cfg(feature = "log")]
        debug!("epoch #{}: {}", index, record);

        return Ok(Some(record));
    }
}
