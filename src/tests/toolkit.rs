use crate::prelude::{Epoch, Observable, ObservationTable, SV};
use rand::{distributions::Alphanumeric, Rng};

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Tool to generate random names when we need to produce a file
pub fn random_name(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/// Returns path to given V2 observation test resource
pub fn v2_resource(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("OBS")
        .join("V2")
        .join(name)
}

/// Verifies one cell: `expected` is `None` for a missing observation
pub fn check_cell(
    table: &ObservationTable,
    epoch: &str,
    sv: &str,
    observable: &str,
    expected: Option<f64>,
) {
    let t = Epoch::from_str(epoch).unwrap();
    let sv = SV::from_str(sv).unwrap();
    let observable = Observable::from_str(observable).unwrap();
    assert_eq!(
        table.get(&t, &sv, &observable),
        expected,
        "{} {} {}",
        t,
        sv,
        observable
    );
}

/// Verifies that every observation of `sv` at `epoch` is missing
pub fn check_absent(table: &ObservationTable, epoch: &str, sv: &str) {
    let t = Epoch::from_str(epoch).unwrap();
    let sv = SV::from_str(sv).unwrap();
    for observable in table.observables() {
        assert_eq!(
            table.get(&t, &sv, observable),
            None,
            "{} {} {} should be missing",
            t,
            sv,
            observable
        );
    }
}
