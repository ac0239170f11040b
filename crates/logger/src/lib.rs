//! Leveled, colorized, thread-safe console logging configured at compile time.
//!
//! Six macros, [`log_trace!`], [`log_debug!`], [`log_info!`],
//! [`log_warning!`], [`log_error!`] and [`log_critical!`], write one colored
//! line per call to standard output. Every emission holds a single
//! process-wide lock, so lines from concurrent threads never interleave.
//!
//! Behavior is chosen when the crate is built:
//! - `verbose` appends the calling thread, file, line and function to each
//!   emission.
//! - `strip` turns every macro into dead code with no runtime cost. It wins
//!   over `verbose`.
//!
//! ```
//! use dave_logs::{log_info, log_warning};
//!
//! log_info!("Attempting to connect to the database...");
//! log_warning!("Connection took longer than expected, retrying...");
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod console;
mod context;
mod facility;
pub mod format;
mod level;
mod macros;
mod record;

#[cfg(any(test, feature = "test-support"))]
pub mod capture;

#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
pub mod compat;
#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
mod error;

pub use console::Console;
pub use context::{Context, thread_id};
pub use facility::{ACTIVE, ActiveFacility, Facility, FacilityExt, Silent, Verbosity};
pub use level::Level;
pub use record::{CallSite, Record, UNKNOWN_FUNCTION};

#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
pub use error::{Error, Result};

#[doc(hidden)]
pub mod __private {
    use std::fmt;

    use crate::{ACTIVE, CallSite, Facility, Level, Record};

    pub use crate::context::enclosing_function;

    #[inline]
    pub fn dispatch(level: Level, message: fmt::Arguments<'_>, call_site: CallSite<'_>) {
        ACTIVE.emit(&Record::new(level, message, call_site));
    }

    #[inline(always)]
    pub fn discard(_level: Level, _message: fmt::Arguments<'_>) {}
}
