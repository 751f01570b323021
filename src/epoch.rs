//! Timestamps: epoch descriptors and the expected time axis
use crate::{
    error::Error,
    prelude::{Duration, Epoch, TimeScale},
};

use num_integer::div_ceil;
use thiserror::Error;

mod flag;
pub use flag::{EpochFlag, Error as FlagError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    #[error("expecting \"yy mm dd hh mm ss.sssssss\" format")]
    FormatError,
    #[error("failed to parse years from \"{0}\"")]
    YearField(String),
    #[error("failed to parse months from \"{0}\"")]
    MonthField(String),
    #[error("failed to parse days from \"{0}\"")]
    DayField(String),
    #[error("failed to parse hours from \"{0}\"")]
    HoursField(String),
    #[error("failed to parse minutes from \"{0}\"")]
    MinutesField(String),
    #[error("failed to parse seconds from \"{0}\"")]
    SecondsField(String),
    #[error("invalid calendar date")]
    InvalidDate,
}

/// Resolves a possibly two-digit year.
/// 80..=99 belongs to the 20th century, 0..80 to the 21st,
/// anything else is considered a complete year already.
pub fn resolve_year(y: i32) -> i32 {
    if (80..=99).contains(&y) {
        1900 + y
    } else if (0..80).contains(&y) {
        2000 + y
    } else {
        y
    }
}

/// Splits "ss.sssssss" into whole seconds and nanoseconds.
/// The fraction is truncated at the microsecond.
fn parse_seconds(item: &str) -> Result<(u8, u32), ParsingError> {
    let err = || ParsingError::SecondsField(item.to_string());
    let (whole, fraction) = match item.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (item, ""),
    };

    let whole = if whole.is_empty() {
        0
    } else {
        whole.parse::<u8>().map_err(|_| err())?
    };

    if whole > 60 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(err());
    }

    let mut micros = 0_u32;
    for (nth, digit) in fraction.chars().take(6).enumerate() {
        let digit = digit.to_digit(10).ok_or_else(err)?;
        micros += digit * 10_u32.pow(5 - nth as u32);
    }

    Ok((whole, micros * 1_000))
}

/// Parses an [Epoch] from "yy mm dd hh mm ss.sssssss" content
/// (whitespace separated, year on two or four digits),
/// interpreted in given [TimeScale].
pub fn parse_epoch(content: &str, ts: TimeScale) -> Result<Epoch, ParsingError> {
    let items = content.split_ascii_whitespace().collect::<Vec<_>>();
    if items.len() != 6 {
        return Err(ParsingError::FormatError);
    }

    let y = items[0]
        .parse::<i32>()
        .map_err(|_| ParsingError::YearField(items[0].to_string()))?;

    let m = items[1]
        .parse::<u8>()
        .map_err(|_| ParsingError::MonthField(items[1].to_string()))?;

    let d = items[2]
        .parse::<u8>()
        .map_err(|_| ParsingError::DayField(items[2].to_string()))?;

    let hh = items[3]
        .parse::<u8>()
        .map_err(|_| ParsingError::HoursField(items[3].to_string()))?;

    let mm = items[4]
        .parse::<u8>()
        .map_err(|_| ParsingError::MinutesField(items[4].to_string()))?;

    let (ss, ns) = parse_seconds(items[5])?;

    Epoch::maybe_from_gregorian(resolve_year(y), m, d, hh, mm, ss, ns, ts)
        .map_err(|_| ParsingError::InvalidDate)
}

/// Longest time axis we accept to allocate, 50 Hz sampling over 2 days
pub const MAX_TIME_AXIS_LEN: usize = 8_640_000;

/// Number of epochs spanned by [first, last] at given sampling interval:
/// ceil((last - first) / interval) + 1, saturating at [usize::MAX].
pub fn natural_epoch_count(first: Epoch, last: Epoch, interval: Duration) -> usize {
    let span = (last - first).total_nanoseconds();
    let step = interval.total_nanoseconds();
    if span <= 0 || step <= 0 {
        return 1;
    }
    usize::try_from(div_ceil(span, step))
        .ok()
        .and_then(|n| n.checked_add(1))
        .unwrap_or(usize::MAX)
}

/// Builds the expected time axis `first + k * interval`.
/// An epoch cap may only shorten the natural axis, never extend it.
pub fn time_axis(
    first: Epoch,
    last: Epoch,
    interval: Duration,
    cap: Option<u32>,
) -> Result<Vec<Epoch>, Error> {
    let natural = natural_epoch_count(first, last, interval);

    if natural > MAX_TIME_AXIS_LEN {
        return Err(Error::OversizedTimeAxis(natural));
    }

    let count = match cap {
        Some(cap) => {
            if cap as usize > natural {
                return Err(Error::InvalidCap { cap, natural });
            }
            cap as usize
        },
        None => natural,
    };

    let mut axis = Vec::new();
    axis.try_reserve_exact(count).map_err(|_| Error::OversizedTimeAxis(count))?;

    let mut t = first;

    for _ in 0..count {
        axis.push(t);
        t += interval;
    }

    Ok(axis)
}
