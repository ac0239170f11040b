//! Tests for builds with every logging call stripped
#![cfg(feature = "strip")]

use std::cell::Cell;

use dave_logs::capture::capture;
use dave_logs::{
    ACTIVE, Facility, log_critical, log_debug, log_error, log_info, log_trace, log_warning,
};

#[test]
fn test_stripped_macros_write_nothing() {
    let guard = capture();

    for round in 0..10 {
        log_trace!("trace {round}");
        log_debug!("debug {}", round);
        log_info!("Attempting to connect to the database...");
        log_warning!(round);
        log_error!("error");
        log_critical!("Unable to start server. Exiting application.");
    }

    assert!(guard.contents().is_empty());
}

#[test]
fn test_stripped_arguments_are_not_evaluated() {
    let calls = Cell::new(0);
    let count = || {
        calls.set(calls.get() + 1);
        calls.get()
    };

    log_info!("value {}", count());
    log_critical!(count());

    assert_eq!(calls.get(), 0);
}

#[test]
fn test_active_facility_is_silent() {
    assert!(!ACTIVE.is_enabled());
}
