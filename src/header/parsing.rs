//! Header section parsing
use crate::{
    columns::header::{
        CONTENT, FILE_TYPE, INTERVAL, LABEL_START, OBS_TYPE_CODES, OBS_TYPE_COUNT,
        SATELLITE_COUNT, SATELLITE_SYSTEM, TIME_OF_OBS, TIME_SYSTEM, VERSION,
    },
    epoch::parse_epoch,
    error::{Error, HeaderField},
    header::{satellites::satellite_directory, Header, HEADER_END_MARKER},
    observable::Observable,
    prelude::{Constellation, Duration, TimeScale},
    reader::LineCursor,
    version::Version,
};

use std::{io::BufRead, str::FromStr};

#[cfg(feature = "log")]
use log::debug;

/// Consumes lines up to and including the "END OF HEADER" marker.
/// Returns all consumed lines, in order.
pub fn read_header_lines<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Vec<String>, Error> {
    let mut lines = Vec::with_capacity(32);
    while let Some(line) = cursor.next_line()? {
        let done = line.contains(HEADER_END_MARKER);
        lines.push(line);
        if done {
            return Ok(lines);
        }
    }
    Err(Error::MalformedHeader(HeaderField::EndOfHeader))
}

/// Splits a header line into (data, label)
fn split_label(line: &str) -> (&str, &str) {
    let label = line.get(LABEL_START..).unwrap_or("").trim();
    (CONTENT.extract(line), label)
}

/// Locates all lines carrying given label, in file order
fn labeled<'a>(lines: &'a [String], label: &str) -> Vec<&'a str> {
    lines
        .iter()
        .filter_map(|line| {
            let (content, marker) = split_label(line);
            if marker.contains(label) {
                Some(content)
            } else {
                None
            }
        })
        .collect()
}

/// Locates the first line carrying given label
fn first_labeled<'a>(lines: &'a [String], label: &str) -> Option<&'a str> {
    lines.iter().find_map(|line| {
        let (content, marker) = split_label(line);
        if marker.contains(label) {
            Some(content)
        } else {
            None
        }
    })
}

/// Timescale selected by "TIME OF FIRST OBS", or deduced from the constellation
fn timescale(time_system: &str, constellation: Constellation) -> TimeScale {
    match time_system.trim() {
        "GPS" => TimeScale::GPST,
        "GLO" => TimeScale::UTC,
        "GAL" => TimeScale::GST,
        _ => constellation.timescale().unwrap_or(TimeScale::GPST),
    }
}

impl Header {
    /// Parses [Header] by consuming given [LineCursor] until end of this section.
    pub fn parse<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Self, Error> {
        let lines = read_header_lines(cursor)?;
        Self::from_lines(&lines)
    }

    /// Interprets all header lines. Any missing or unreadable
    /// mandatory field aborts the process.
    pub fn from_lines(lines: &[String]) -> Result<Self, Error> {
        // revision and satellite system
        let mut version = Option::<Version>::None;
        let mut constellation = Constellation::GPS;

        if let Some(content) = first_labeled(lines, "RINEX VERSION / TYPE") {
            let v = Version::from_str(VERSION.extract(content))
                .map_err(|_| Error::MalformedHeader(HeaderField::Version))?;

            if !v.is_supported() {
                return Err(Error::UnsupportedVersion(v));
            }

            let file_type = FILE_TYPE.trimmed(content);
            if !file_type.is_empty() && file_type != "O" {
                return Err(Error::MalformedHeader(HeaderField::FileType));
            }

            let system = SATELLITE_SYSTEM.trimmed(content);
            if !system.is_empty() {
                constellation = Constellation::from_str(system)
                    .map_err(|_| Error::MalformedHeader(HeaderField::Version))?;
            }

            version = Some(v);
        }

        let marker = first_labeled(lines, "MARKER NAME").map(|content| content.trim().to_string());

        let comments = labeled(lines, "COMMENT")
            .iter()
            .map(|content| content.trim_end().to_string())
            .collect::<Vec<_>>();

        // observables: counter on first line, codes possibly wrapped
        let obs_lines = labeled(lines, "# / TYPES OF OBSERV");

        let type_count = obs_lines
            .first()
            .and_then(|content| OBS_TYPE_COUNT.trimmed(content).parse::<u32>().ok())
            .ok_or(Error::MalformedHeader(HeaderField::ObservationTypeCount))?;

        if type_count == 0 {
            return Err(Error::MalformedHeader(HeaderField::ObservationTypeCount));
        }

        let mut observables = Vec::with_capacity(type_count as usize);
        for content in obs_lines.iter() {
            for code in OBS_TYPE_CODES.extract(content).split_ascii_whitespace() {
                let observable = Observable::from_str(code)
                    .map_err(|_| Error::MalformedHeader(HeaderField::ObservationTypes))?;
                observables.push(observable);
            }
        }

        if observables.len() != type_count as usize {
            return Err(Error::MalformedHeader(HeaderField::ObservationTypes));
        }

        let satellite_count = first_labeled(lines, "# OF SATELLITES")
            .and_then(|content| SATELLITE_COUNT.trimmed(content).parse::<u32>().ok())
            .ok_or(Error::MalformedHeader(HeaderField::SatelliteCount))?;

        // time frame
        let first = first_labeled(lines, "TIME OF FIRST OBS")
            .ok_or(Error::MalformedHeader(HeaderField::FirstObsTime))?;

        let timescale = timescale(TIME_SYSTEM.extract(first), constellation);

        let first_obs_time = parse_epoch(TIME_OF_OBS.extract(first), timescale)
            .map_err(|_| Error::MalformedHeader(HeaderField::FirstObsTime))?;

        let last_obs_time = first_labeled(lines, "TIME OF LAST OBS")
            .and_then(|content| parse_epoch(TIME_OF_OBS.extract(content), timescale).ok())
            .ok_or(Error::MalformedHeader(HeaderField::LastObsTime))?;

        if last_obs_time < first_obs_time {
            return Err(Error::MalformedHeader(HeaderField::LastObsTime));
        }

        let interval = first_labeled(lines, "INTERVAL")
            .and_then(|content| INTERVAL.trimmed(content).parse::<f64>().ok())
            .ok_or(Error::MalformedHeader(HeaderField::Interval))?;

        // nanosecond resolution
        let interval = (interval * 1.0E9).round();
        if !interval.is_finite() || interval < 1.0 {
            return Err(Error::MalformedHeader(HeaderField::Interval));
        }

        let prn_lines = labeled(lines, "PRN / # OF OBS");

        let satellites =
            satellite_directory(&prn_lines, satellite_count, type_count, constellation)?;

        #[cfg(feature = "log")]
        debug!(
            "header: {} observables, {} satellites, {} - {}",
            observables.len(),
            satellites.len(),
            first_obs_time,
            last_obs_time,
        );

        Ok(Self {
            version,
            constellation,
            marker,
            comments,
            observables,
            satellites,
            first_obs_time,
            last_obs_time,
            interval: Duration::from_total_nanoseconds(interval as i128),
            timescale,
        })
    }
}
