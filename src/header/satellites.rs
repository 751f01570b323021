//! Satellite directory ("PRN / # OF OBS") and satellite identification
use crate::{
    columns::header::{OBS_COUNTS_PER_LINE, PRN},
    error::{Error, HeaderField},
    prelude::{Constellation, SV},
};

use num_integer::div_ceil;
use std::str::FromStr;

/// Identifies a satellite from its 3 character descriptor ("G 1", "G01", " 1").
/// A blank system letter designates `default` (GPS when `default` is mixed).
pub(crate) fn parse_sv(desc: &str, default: Constellation) -> Option<SV> {
    if desc.trim().is_empty() {
        return None;
    }
    if desc.starts_with(' ') {
        let prn = desc.trim().parse::<u8>().ok()?;
        let constellation = match default {
            Constellation::Mixed => Constellation::GPS,
            c => c,
        };
        Some(SV::new(constellation, prn))
    } else {
        let desc = desc.trim_end();
        if !desc.is_ascii() || desc.len() < 2 {
            return None;
        }
        SV::from_str(desc).ok()
    }
}

/// Builds the satellite directory from all "PRN / # OF OBS" lines.
/// Each directory entry spans ceil(type_count / 9) lines, the satellite
/// being identified on the first line of each entry.
pub(crate) fn satellite_directory(
    prn_lines: &[&str],
    satellite_count: u32,
    type_count: u32,
    default: Constellation,
) -> Result<Vec<SV>, Error> {
    if satellite_count == 0 || type_count == 0 {
        return Err(Error::MalformedHeader(HeaderField::SatelliteCount));
    }

    let lines_per_sat = div_ceil(type_count as usize, OBS_COUNTS_PER_LINE);

    let mut satellites = Vec::with_capacity(satellite_count as usize);

    for nth in 0..satellite_count as usize {
        let line = prn_lines
            .get(nth * lines_per_sat)
            .ok_or(Error::MalformedHeader(HeaderField::SatelliteIds))?;

        let sv = parse_sv(PRN.extract(line), default)
            .ok_or(Error::MalformedHeader(HeaderField::SatelliteIds))?;

        satellites.push(sv);
    }

    Ok(satellites)
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn sv_descriptors() {
        for (desc, default, expected) in [
            ("G 1", Constellation::GPS, Some(SV::new(Constellation::GPS, 1))),
            ("G01", Constellation::Mixed, Some(SV::new(Constellation::GPS, 1))),
            ("R24", Constellation::Mixed, Some(SV::new(Constellation::Glonass, 24))),
            ("E 5", Constellation::Mixed, Some(SV::new(Constellation::Galileo, 5))),
            (" 12", Constellation::GPS, Some(SV::new(Constellation::GPS, 12))),
            (" 12", Constellation::Mixed, Some(SV::new(Constellation::GPS, 12))),
            ("  3", Constellation::Glonass, Some(SV::new(Constellation::Glonass, 3))),
            ("   ", Constellation::GPS, None),
            ("", Constellation::GPS, None),
            ("X01", Constellation::GPS, None),
            ("Gxx", Constellation::GPS, None),
        ] {
            assert_eq!(parse_sv(desc, default), expected, "failed for \"{}\"", desc);
        }
    }

    #[test]
    fn single_line_entries() {
        // 5 observables: one line per satellite
        let lines = [
            "   G 1  1234  1234  1234  1234  1234",
            "   G 2  1234  1234  1234  1234  1234",
            "   G 3  1234  1234  1234  1234  1234",
        ];
        let directory = satellite_directory(&lines, 3, 5, Constellation::GPS).unwrap();
        assert_eq!(
            directory,
            vec![
                SV::new(Constellation::GPS, 1),
                SV::new(Constellation::GPS, 2),
                SV::new(Constellation::GPS, 3),
            ]
        );
    }

    #[test]
    fn multi_line_entries() {
        // 11 observables: two lines per satellite
        let lines = [
            "   G 7  2877  2877  2877  2877  2877  2877  2877  2877  2877",
            "        2877  2877",
            "   R 9  1211  1211  1211  1211  1211  1211  1211  1211  1211",
            "        1211  1211",
        ];
        let directory = satellite_directory(&lines, 2, 11, Constellation::Mixed).unwrap();
        assert_eq!(
            directory,
            vec![
                SV::new(Constellation::GPS, 7),
                SV::new(Constellation::Glonass, 9)
            ]
        );

        // exactly 9 observables still fit on one line
        let lines = [
            "   G 7  2877  2877  2877  2877  2877  2877  2877  2877  2877",
            "   G 8  2877  2877  2877  2877  2877  2877  2877  2877  2877",
        ];
        let directory = satellite_directory(&lines, 2, 9, Constellation::GPS).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory[1], SV::new(Constellation::GPS, 8));
    }

    #[test]
    fn directory_errors() {
        let lines = ["   G 1  1234  1234"];
        match satellite_directory(&lines, 2, 2, Constellation::GPS) {
            Err(Error::MalformedHeader(HeaderField::SatelliteIds)) => {},
            other => panic!("expecting missing entry, got {:?}", other),
        }
        match satellite_directory(&lines, 0, 2, Constellation::GPS) {
            Err(Error::MalformedHeader(HeaderField::SatelliteCount)) => {},
            other => panic!("expecting bad count, got {:?}", other),
        }
        let lines = ["        1234  1234"];
        match satellite_directory(&lines, 1, 2, Constellation::GPS) {
            Err(Error::MalformedHeader(HeaderField::SatelliteIds)) => {},
            other => panic!("expecting bad identifier, got {:?}", other),
        }
    }
}
