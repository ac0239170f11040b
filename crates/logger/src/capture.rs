//! Test support utilities
//!
//! This module redirects console output into memory so tests can assert on
//! exactly what would have been printed. It's only available when the
//! `test-support` feature is enabled.

use parking_lot::{Mutex, MutexGuard, const_mutex};

use crate::console::{self, Target};

/// Held for the lifetime of a [`CaptureGuard`] so captures never overlap
static CAPTURE_LOCK: Mutex<()> = const_mutex(());

/// Start capturing console output.
///
/// Blocks until any other capture in the process has finished, then routes
/// every emission into an in-memory buffer until the guard is dropped.
#[must_use = "output is only captured while the guard is alive"]
pub fn capture() -> CaptureGuard {
    let serial = CAPTURE_LOCK.lock();
    console::replace_target(Target::Capture(Vec::new()));
    CaptureGuard { _serial: serial }
}

/// Guard that captures console output and prints it on test failure
pub struct CaptureGuard {
    _serial: MutexGuard<'static, ()>,
}

impl CaptureGuard {
    /// Everything captured so far
    #[must_use]
    pub fn contents(&self) -> String {
        console::with_captured(|buf| String::from_utf8_lossy(buf).into_owned()).unwrap_or_default()
    }

    /// Captured output split into lines, without terminators
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Check if the captured output contains `text`
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.contents().contains(text)
    }

    /// Discard everything captured so far
    pub fn clear(&self) {
        console::with_captured(Vec::clear);
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        let captured = match console::replace_target(Target::Stdout) {
            Target::Capture(buf) => buf,
            Target::Stdout => Vec::new(),
        };

        if std::thread::panicking() && !captured.is_empty() {
            eprintln!("\n===== Captured console output =====");
            eprint!("{}", String::from_utf8_lossy(&captured));
            eprintln!("===== End of captured output =====\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallSite, Console, Facility, FacilityExt, Level, Record, Verbosity};

    #[test]
    fn captures_and_restores() {
        let guard = capture();
        Console::new(Verbosity::Terse).warning("retrying");
        assert_eq!(guard.lines(), vec!["\x1b[33m⚠️ [WARNING]: retrying\x1b[0m"]);

        guard.clear();
        assert!(guard.contents().is_empty());
        drop(guard);

        assert!(console::with_captured(|_| ()).is_none());
    }

    #[test]
    fn verbose_console_appends_context() {
        let guard = capture();
        let site = CallSite::new("src/board.rs", 31, "demo::ControlBoard::start_server");
        Console::new(Verbosity::Verbose).emit(&Record::new(
            Level::Critical,
            format_args!("Unable to start server. Exiting application."),
            site,
        ));

        let expected = format!(
            "\x1b[31m🚨 [CRITICAL]: Unable to start server. Exiting application.\x1b[0m\n\
             [Thread-{}][ file: src/board.rs:31 | function: demo::ControlBoard::start_server ]\n\n",
            crate::thread_id()
        );
        assert_eq!(guard.contents(), expected);
    }
}
