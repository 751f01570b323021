use crate::{
    prelude::*,
    tests::toolkit::{check_absent, check_cell, v2_resource},
};

use std::{io::Cursor, str::FromStr};

fn mini() -> String {
    std::fs::read_to_string(v2_resource("mini.15o")).unwrap()
}

#[test]
fn missing_satellite_count() {
    let err = ObservationTable::from_file(v2_resource("nosat.15o"), &DecodingOptions::default())
        .unwrap_err();
    match err {
        Error::MalformedHeader(field) => {
            assert_eq!(field, HeaderField::SatelliteCount);
            assert_eq!(field.to_string(), "satellite_count");
        },
        ref other => panic!("expecting malformed header, got {:?}", other),
    }
    assert!(err.partial_table().is_none());
}

#[test]
fn missing_header_fields() {
    for (label, field) in [
        ("# / TYPES OF OBSERV", HeaderField::ObservationTypeCount),
        ("TIME OF FIRST OBS", HeaderField::FirstObsTime),
        ("TIME OF LAST OBS", HeaderField::LastObsTime),
        ("INTERVAL", HeaderField::Interval),
        ("PRN / # OF OBS", HeaderField::SatelliteIds),
        ("END OF HEADER", HeaderField::EndOfHeader),
    ] {
        let content = mini()
            .lines()
            .filter(|line| !line.contains(label))
            .map(|line| format!("{}\n", line))
            .collect::<String>();

        match decode(Cursor::new(content.as_bytes()), &DecodingOptions::default()) {
            Err(Error::MalformedHeader(f)) => assert_eq!(f, field, "removed \"{}\"", label),
            other => panic!("removed \"{}\": got {:?}", label, other),
        }
    }
}

#[test]
fn invalid_header_values() {
    for (from, to, field) in [
        ("    30.000", "     0.000", HeaderField::Interval),
        ("    30.000", "    -1.000", HeaderField::Interval),
        ("    30.000", "   1.0e-10", HeaderField::Interval),
        ("     2    P1    P2", "     3    P1    P2", HeaderField::ObservationTypes),
        ("     2    P1    P2", "     0    P1    P2", HeaderField::ObservationTypeCount),
        ("     2    P1    P2", "     2    P1    ?2", HeaderField::ObservationTypes),
        ("   G02   100", "   ?02   100", HeaderField::SatelliteIds),
        ("     2          ", "     0          ", HeaderField::SatelliteCount),
        (
            "  2015     2    10     0     0   30",
            "  2015     2    10     0     0   xx",
            HeaderField::LastObsTime,
        ),
        (
            "  2015     2    10     0     0    0",
            "  2015    13    10     0     0    0",
            HeaderField::FirstObsTime,
        ),
    ] {
        let content = mini().replacen(from, to, 1);
        assert_ne!(content, mini(), "\"{}\" not found", from);
        match decode(Cursor::new(content.as_bytes()), &DecodingOptions::default()) {
            Err(Error::MalformedHeader(f)) => assert_eq!(f, field, "\"{}\"", to),
            other => panic!("\"{}\": got {:?}", to, other),
        }
    }
}

#[test]
fn truncated_epoch() {
    let err = ObservationTable::from_file(v2_resource("trunc.15o"), &DecodingOptions::default())
        .unwrap_err();

    let epoch = match err {
        Error::TruncatedEpoch { epoch, .. } => epoch,
        ref other => panic!("expecting truncated epoch, got {:?}", other),
    };
    assert_eq!(epoch, 2);

    let partial = err.partial_table().unwrap();
    assert_eq!(partial.epochs().len(), 3);
    assert_eq!(partial.decoded_epochs(), 2);

    check_cell(&partial, "2015-02-10T00:00:00 GPST", "G01", "P1", Some(20000000.0));
    check_cell(&partial, "2015-02-10T00:00:30 GPST", "G02", "P2", Some(21000002.0));
    for sv in ["G01", "G02"] {
        check_absent(&partial, "2015-02-10T00:01:00 GPST", sv);
    }
}

#[test]
fn body_ending_early() {
    // keep first epoch only
    let content = mini().lines().take(15).map(|l| format!("{}\n", l)).collect::<String>();
    let table = decode(Cursor::new(content.as_bytes()), &DecodingOptions::default()).unwrap();
    assert_eq!(table.epochs().len(), 2);
    assert_eq!(table.decoded_epochs(), 1);
    check_absent(&table, "2015-02-10T00:00:30 GPST", "G01");
}

#[test]
fn unexpected_epoch_time() {
    let err = ObservationTable::from_file(v2_resource("desync.15o"), &DecodingOptions::default())
        .unwrap_err();
    match err {
        Error::UnexpectedEpochTime { epoch, time } => {
            assert_eq!(epoch, 1);
            assert_eq!(time, Epoch::from_str("2015-02-10T00:00:45 GPST").unwrap());
        },
        other => panic!("expecting desynchronization, got {:?}", other),
    }
}

#[test]
fn epoch_past_time_frame() {
    // header time frame ends at 00:00:30
    let content = format!(
        "{}{}\n{}\n",
        mini(),
        " 15  2 10  0  1  0.0000000  0  1G01",
        "  20000060.125 6  20000061.250 6"
    );

    match decode(Cursor::new(content.as_bytes()), &DecodingOptions::default()) {
        Err(Error::UnexpectedEpochTime { epoch, time }) => {
            assert_eq!(epoch, 2);
            assert_eq!(time, Epoch::from_str("2015-02-10T00:01:00 GPST").unwrap());
        },
        other => panic!("expecting desynchronization, got {:?}", other),
    }

    // capped decoding stops there
    let opts = DecodingOptions::default().with_max_epochs(2);
    let table = decode(Cursor::new(content.as_bytes()), &opts).unwrap();
    assert_eq!(table.epochs().len(), 2);
    assert_eq!(table.decoded_epochs(), 2);
}

#[test]
fn oversized_time_axis() {
    let content = mini().replacen("    30.000", "0.00000001", 1);
    match decode(Cursor::new(content.as_bytes()), &DecodingOptions::default()) {
        Err(Error::OversizedTimeAxis(natural)) => assert_eq!(natural, 3_000_000_001),
        other => panic!("expecting oversized time axis, got {:?}", other),
    }
}

#[test]
fn duplicated_epoch() {
    let content = mini().replace(
        " 15  2 10  0  0 30.0000000  0  2G02G01",
        " 15  2 10  0  0  0.0000000  0  2G02G01",
    );
    match decode(Cursor::new(content.as_bytes()), &DecodingOptions::default()) {
        Err(Error::UnexpectedEpochTime { epoch: 1, .. }) => {},
        other => panic!("expecting desynchronization, got {:?}", other),
    }
}

#[test]
fn malformed_epoch() {
    let content = mini().replace(
        " 15  2 10  0  0 30.0000000  0  2G02G01",
        " 15  2 10  0  0 30.0000000  0  xG02G01",
    );
    match decode(Cursor::new(content.as_bytes()), &DecodingOptions::default()) {
        Err(Error::MalformedEpoch { epoch, line }) => {
            assert_eq!(epoch, 1);
            assert_eq!(line, 16);
        },
        other => panic!("expecting malformed epoch, got {:?}", other),
    }
}

#[test]
fn invalid_cap() {
    let path = v2_resource("mini.15o");
    let opts = DecodingOptions::default().with_max_epochs(3);
    match ObservationTable::from_file(&path, &opts) {
        Err(Error::InvalidCap { cap, natural }) => {
            assert_eq!(cap, 3);
            assert_eq!(natural, 2);
        },
        other => panic!("expecting invalid cap, got {:?}", other),
    }

    let opts = DecodingOptions::default().with_max_epochs(2);
    let table = ObservationTable::from_file(&path, &opts).unwrap();
    assert_eq!(table.decoded_epochs(), 2);
}

#[test]
fn unsupported_revision() {
    let content = mini().replacen("     2.11", "     3.04", 1);
    match decode(Cursor::new(content.as_bytes()), &DecodingOptions::default()) {
        Err(Error::UnsupportedVersion(version)) => assert_eq!(version, Version::new(3, 4)),
        other => panic!("expecting unsupported revision, got {:?}", other),
    }
}

#[test]
fn missing_file() {
    match ObservationTable::from_file(v2_resource("nonexisting.15o"), &DecodingOptions::default())
    {
        Err(Error::Io(_)) => {},
        other => panic!("expecting i/o error, got {:?}", other),
    }
}
