//! Logging must not change what the program computes

use dave_logs::capture::capture;
use dave_logs::{Console, Facility, FacilityExt, Silent, Verbosity};

/// A small workload that logs at every step
fn checksum<F: Facility>(facility: &F, values: &[i64]) -> (i64, Vec<i64>) {
    let mut total = 0;
    let mut kept = Vec::new();

    facility.trace(format_args!("checksum over {} values", values.len()));
    for &value in values {
        if value < 0 {
            facility.warning(format_args!("skipping negative value {value}"));
            continue;
        }
        total += value;
        kept.push(value);
        facility.debug(format_args!("running total {total}"));
    }
    facility.info(format_args!("checksum = {total}"));

    (total, kept)
}

#[test]
fn enabled_and_silent_compute_the_same() {
    let values = [3, -1, 4, 1, -5, 9, 2, 6];

    let guard = capture();
    let loud = checksum(&Console::new(Verbosity::Verbose), &values);
    let loud_output = guard.contents();

    guard.clear();
    let quiet = checksum(&Silent, &values);
    let quiet_output = guard.contents();

    assert_eq!(loud, quiet);
    assert_eq!(loud, (25, vec![3, 4, 1, 9, 2, 6]));
    assert!(loud_output.contains("checksum = 25"));
    assert!(quiet_output.is_empty());
}

#[test]
fn silent_writes_nothing_at_any_level() {
    let guard = capture();

    Silent.trace("t");
    Silent.debug("d");
    Silent.info("i");
    Silent.warning("w");
    Silent.error("e");
    Silent.critical("c");

    assert!(guard.contents().is_empty());
}
