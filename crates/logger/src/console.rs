//! Console facility and the shared output lock

use std::cell::RefCell;
use std::io::{self, Write};

use parking_lot::{Mutex, const_mutex};
use termcolor::Ansi;

use crate::{Context, Facility, Record, Verbosity, format};

/// Capacity a render buffer may keep between emissions
const SCRATCH_RETAIN: usize = 4096;

/// Where rendered emissions go
#[derive(Debug)]
pub(crate) enum Target {
    Stdout,
    #[cfg(any(test, feature = "test-support"))]
    Capture(Vec<u8>),
}

/// Serializes every emission in the process.
///
/// Held only while already-rendered bytes are written, never while user
/// `Display` impls run.
static OUTPUT: Mutex<Target> = const_mutex(Target::Stdout);

thread_local! {
    /// Render buffer reused by emissions on this thread
    static SCRATCH: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// Facility that writes colored lines to standard output.
///
/// Every instance shares one process-wide lock, so a whole emission
/// (line plus optional context block) reaches the console in one piece.
#[derive(Copy, Clone, Debug, Default)]
pub struct Console {
    verbosity: Verbosity,
}

impl Console {
    /// Create a console facility with the given verbosity
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Verbosity of this facility
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

impl Facility for Console {
    fn emit(&self, record: &Record<'_>) {
        let context = self
            .verbosity
            .is_verbose()
            .then(|| Context::capture(*record.call_site()));

        SCRATCH.with(|scratch| match scratch.try_borrow_mut() {
            Ok(mut buf) => {
                emit_with(&mut buf, record, context.as_ref());
                if buf.capacity() > SCRATCH_RETAIN {
                    buf.shrink_to(SCRATCH_RETAIN);
                }
            }
            // A message's own Display impl is logging from inside render.
            Err(_) => emit_with(&mut Vec::new(), record, context.as_ref()),
        });
    }
}

fn emit_with(buf: &mut Vec<u8>, record: &Record<'_>, context: Option<&Context<'_>>) {
    buf.clear();
    // The line is closed even when a message impl fails, so it is still written.
    let _ = render(buf, record, context);
    let _ = OUTPUT.lock().write(buf);
    buf.clear();
}

fn render(buf: &mut Vec<u8>, record: &Record<'_>, context: Option<&Context<'_>>) -> io::Result<()> {
    let line = format::write_line(&mut Ansi::new(&mut *buf), record.level(), record.message());
    if let Some(context) = context {
        format::write_context(buf, context)?;
    }
    line
}

impl Target {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(bytes)?;
                stdout.flush()
            }
            #[cfg(any(test, feature = "test-support"))]
            Self::Capture(buf) => {
                buf.extend_from_slice(bytes);
                Ok(())
            }
        }
    }
}

/// Swap the output target, returning the previous one
#[cfg(any(test, feature = "test-support"))]
pub(crate) fn replace_target(target: Target) -> Target {
    std::mem::replace(&mut *OUTPUT.lock(), target)
}

/// Run `f` on the capture buffer, if output is currently captured
#[cfg(any(test, feature = "test-support"))]
pub(crate) fn with_captured<R>(f: impl FnOnce(&mut Vec<u8>) -> R) -> Option<R> {
    match &mut *OUTPUT.lock() {
        Target::Capture(buf) => Some(f(buf)),
        Target::Stdout => None,
    }
}
