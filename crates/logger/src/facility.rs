//! Facility trait and the build-selected implementation

use std::fmt::Display;

use crate::{CallSite, Level, Record};

/// Whether emissions carry the verbose context block
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    /// One colored line per call
    #[default]
    Terse,
    /// Colored line followed by thread, file, line and function
    Verbose,
}

impl Verbosity {
    /// Verbosity selected by the `verbose` feature
    pub const COMPILED: Self = if cfg!(feature = "verbose") {
        Self::Verbose
    } else {
        Self::Terse
    };

    /// Reports whether context is appended to each emission
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose { Self::Verbose } else { Self::Terse }
    }
}

impl From<Verbosity> for bool {
    fn from(verbosity: Verbosity) -> Self {
        verbosity.is_verbose()
    }
}

/// Destination for log records
pub trait Facility: Send + Sync + 'static {
    /// Emit a record
    fn emit(&self, record: &Record<'_>);

    /// Whether [`emit`](Self::emit) produces any output
    #[inline(always)]
    fn is_enabled(&self) -> bool {
        true
    }
}

/// One method per severity level, for callers holding a facility value.
///
/// The caller's file and line are recorded; the function name is not
/// available here and is reported as [`UNKNOWN_FUNCTION`](crate::UNKNOWN_FUNCTION).
/// Prefer the `log_*!` macros, which capture it.
pub trait FacilityExt: Facility {
    /// Log at [`Level::Trace`]
    #[inline(always)]
    #[track_caller]
    fn trace(&self, message: impl Display) {
        emit_at(self, Level::Trace, &message, CallSite::caller());
    }

    /// Log at [`Level::Debug`]
    #[inline(always)]
    #[track_caller]
    fn debug(&self, message: impl Display) {
        emit_at(self, Level::Debug, &message, CallSite::caller());
    }

    /// Log at [`Level::Info`]
    #[inline(always)]
    #[track_caller]
    fn info(&self, message: impl Display) {
        emit_at(self, Level::Info, &message, CallSite::caller());
    }

    /// Log at [`Level::Warning`]
    #[inline(always)]
    #[track_caller]
    fn warning(&self, message: impl Display) {
        emit_at(self, Level::Warning, &message, CallSite::caller());
    }

    /// Log at [`Level::Error`]
    #[inline(always)]
    #[track_caller]
    fn error(&self, message: impl Display) {
        emit_at(self, Level::Error, &message, CallSite::caller());
    }

    /// Log at [`Level::Critical`]
    #[inline(always)]
    #[track_caller]
    fn critical(&self, message: impl Display) {
        emit_at(self, Level::Critical, &message, CallSite::caller());
    }
}

impl<T: Facility + ?Sized> FacilityExt for T {}

#[inline(always)]
fn emit_at<F: Facility + ?Sized>(
    facility: &F,
    level: Level,
    message: &dyn Display,
    call_site: CallSite<'_>,
) {
    if facility.is_enabled() {
        facility.emit(&Record::new(level, format_args!("{message}"), call_site));
    }
}

/// Facility that discards everything
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;

impl Facility for Silent {
    #[inline(always)]
    fn emit(&self, _record: &Record<'_>) {}

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

/// Facility the logging macros dispatch to: [`Silent`] under `strip`.
#[cfg(feature = "strip")]
pub type ActiveFacility = Silent;

/// Facility the logging macros dispatch to: [`Console`](crate::Console)
/// unless `strip` is enabled.
#[cfg(not(feature = "strip"))]
pub type ActiveFacility = crate::Console;

/// The process-wide facility instance.
#[cfg(feature = "strip")]
pub const ACTIVE: ActiveFacility = Silent;

/// The process-wide facility instance.
#[cfg(not(feature = "strip"))]
pub const ACTIVE: ActiveFacility = crate::Console::new(Verbosity::COMPILED);
