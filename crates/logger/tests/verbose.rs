//! Tests for the verbose context block

use dave_logs::capture::capture;
use dave_logs::{CallSite, Console, Facility, FacilityExt, Level, Record, Verbosity, thread_id};

fn context_line(file: &str, line: u32, function: &str) -> String {
    format!(
        "[Thread-{}][ file: {file}:{line} | function: {function} ]",
        thread_id()
    )
}

#[test]
fn critical_emission_carries_context() {
    let guard = capture();
    let console = Console::new(Verbosity::Verbose);

    let line = line!() + 1;
    let site = CallSite::new(file!(), line, dave_logs::function_name!());
    console.emit(&Record::new(
        Level::Critical,
        format_args!("Unable to start server. Exiting application."),
        site,
    ));

    let lines = guard.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "\x1b[31m🚨 [CRITICAL]: Unable to start server. Exiting application.\x1b[0m"
    );
    assert_eq!(
        lines[1],
        context_line(file!(), line, "verbose::critical_emission_carries_context")
    );
    assert!(lines[2].is_empty());
    assert!(guard.contents().ends_with(" ]\n\n"));
}

#[test]
fn every_level_carries_context() {
    let guard = capture();
    let console = Console::new(Verbosity::Verbose);

    for level in Level::ALL {
        console.emit(&Record::new(
            level,
            format_args!("{level} with context"),
            CallSite::new("src/board.rs", 7, "demo::board"),
        ));
    }

    let blocks: Vec<String> = guard
        .contents()
        .split_terminator("\n\n")
        .map(str::to_owned)
        .collect();
    assert_eq!(blocks.len(), Level::ALL.len());

    for (block, level) in blocks.iter().zip(Level::ALL) {
        let (line, context) = block.split_once('\n').unwrap();
        assert!(line.starts_with(level.escape()));
        assert!(line.contains(level.label()));
        assert!(line.contains(&format!("{level} with context")));
        assert_eq!(context, context_line("src/board.rs", 7, "demo::board"));
    }
}

#[test]
fn ext_methods_report_caller_location() {
    let guard = capture();

    let line = line!() + 1;
    Console::new(Verbosity::Verbose).info("from a method");

    let lines = guard.lines();
    assert_eq!(
        lines[1],
        context_line(file!(), line, dave_logs::UNKNOWN_FUNCTION)
    );
}

#[test]
fn terse_console_omits_context() {
    let guard = capture();

    Console::new(Verbosity::Terse).error("no context here");

    assert_eq!(guard.lines().len(), 1);
    assert!(!guard.contains("[Thread-"));
}

#[test]
fn context_reports_emitting_thread() {
    let guard = capture();

    let worker = std::thread::spawn(|| {
        Console::new(Verbosity::Verbose).debug("from worker");
        thread_id()
    })
    .join()
    .unwrap();

    assert_ne!(worker, thread_id());
    assert!(guard.contains(&format!("[Thread-{worker}]")));
}

#[cfg(all(feature = "verbose", not(feature = "strip")))]
mod compiled {
    use super::*;
    use dave_logs::log_critical;

    #[test]
    fn macro_emission_carries_call_site() {
        let guard = capture();

        let line = line!() + 1;
        log_critical!("Unable to start server. Exiting application.");

        assert_eq!(
            guard.lines()[1],
            context_line(file!(), line, "verbose::compiled::macro_emission_carries_call_site")
        );
    }

    #[test]
    fn macro_inside_closure_names_outer_function() {
        let guard = capture();

        let run = || log_critical!("from a closure");
        run();

        assert!(guard.contains("| function: verbose::compiled::macro_inside_closure_names_outer_function ]"));
    }
}
