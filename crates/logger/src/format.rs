//! Rendering of log lines and verbose context blocks
//!
//! Output layout:
//!
//! ```text
//! <color><icon> <label>: <message><reset>\n
//! [Thread-<id>][ file: <file>:<line> | function: <function> ]\n\n   (verbose only)
//! ```

use std::fmt;
use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use crate::{Context, Level};

/// Write the colored line for `level` and `message`, newline included.
///
/// Colors are applied through `termcolor` without a leading reset, so an
/// ANSI writer produces exactly the level's escape, then the text, then a
/// single reset.
///
/// If a `Display` or `Debug` impl inside `message` fails, the text written
/// so far is still closed with the reset and newline, and an error of kind
/// [`io::ErrorKind::Other`] is returned.
pub fn write_line<W: WriteColor + ?Sized>(
    w: &mut W,
    level: Level,
    message: fmt::Arguments<'_>,
) -> io::Result<()> {
    w.set_color(ColorSpec::new().set_reset(false).set_fg(Some(level.color())))?;
    write!(w, "{} {}: ", level.icon(), level.label())?;

    let mut adapter = Adapter {
        inner: &mut *w,
        error: Ok(()),
    };
    let formatted = fmt::write(&mut adapter, message);
    adapter.error?;

    w.reset()?;
    w.write_all(b"\n")?;

    formatted.map_err(|_| io::Error::other("formatter error"))
}

/// Bridges `fmt::Write` onto an io writer, keeping the first io error
struct Adapter<'w, W: ?Sized> {
    inner: &'w mut W,
    error: io::Result<()>,
}

impl<W: Write + ?Sized> fmt::Write for Adapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Err(e);
            fmt::Error
        })
    }
}

/// Write the verbose context block, including the blank separator line.
pub fn write_context<W: Write + ?Sized>(w: &mut W, context: &Context<'_>) -> io::Result<()> {
    let site = &context.call_site;
    write!(
        w,
        "[Thread-{}][ file: {}:{} | function: {} ]\n\n",
        context.thread, site.file, site.line, site.function
    )
}
