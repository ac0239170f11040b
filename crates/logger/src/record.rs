//! Ephemeral log record built at the call site

use std::fmt;
use std::panic::Location;

use crate::Level;

/// Function name reported when the call site cannot name its function.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// Source location of a log call.
///
/// The logging macros fill this in from `file!()`, `line!()` and the
/// enclosing function's type name; callers never build one by hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Source file as seen by the compiler
    pub file: &'a str,
    /// Line number of the call
    pub line: u32,
    /// Fully qualified name of the enclosing function
    pub function: &'a str,
}

impl<'a> CallSite<'a> {
    /// Create a call site from its parts
    #[inline]
    #[must_use]
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

impl CallSite<'static> {
    /// Call site of the caller, for APIs that cannot expand a macro.
    ///
    /// The function name is unknown at this point and reported as
    /// [`UNKNOWN_FUNCTION`].
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), UNKNOWN_FUNCTION)
    }
}

/// A single log call: level, message and where it came from.
///
/// Records are never stored. They are formatted and written as soon as they
/// are built, so the message stays as borrowed [`fmt::Arguments`].
#[derive(Copy, Clone, Debug)]
pub struct Record<'a> {
    level: Level,
    message: fmt::Arguments<'a>,
    call_site: CallSite<'a>,
}

impl<'a> Record<'a> {
    /// Create a new record
    #[inline]
    #[must_use]
    pub const fn new(level: Level, message: fmt::Arguments<'a>, call_site: CallSite<'a>) -> Self {
        Self {
            level,
            message,
            call_site,
        }
    }

    /// Severity of the record
    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The message, still unformatted
    #[inline]
    #[must_use]
    pub const fn message(&self) -> fmt::Arguments<'a> {
        self.message
    }

    /// Where the record was created
    #[inline]
    #[must_use]
    pub const fn call_site(&self) -> &CallSite<'a> {
        &self.call_site
    }
}
