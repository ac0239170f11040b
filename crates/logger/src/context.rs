//! Diagnostic context for verbose output

use std::sync::atomic::{AtomicU64, Ordering};

use crate::CallSite;

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Identifier of the calling thread as printed in verbose output.
///
/// Assigned on first use, starting at 1. The value stays the same for the
/// life of the thread and is never reused by another thread.
#[must_use]
pub fn thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}

/// Context bundle appended to verbose emissions
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Context<'a> {
    /// Identifier of the emitting thread, see [`thread_id`]
    pub thread: u64,
    /// Where the log call was made
    pub call_site: CallSite<'a>,
}

impl<'a> Context<'a> {
    /// Capture the context for `call_site` on the current thread
    #[must_use]
    pub fn capture(call_site: CallSite<'a>) -> Self {
        Self {
            thread: thread_id(),
            call_site,
        }
    }
}

/// Strip the marker item and closure frames from a type name produced by
/// [`function_name!`](crate::function_name).
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(marker: &'static str) -> &'static str {
    let mut name = marker.strip_suffix("::__here").unwrap_or(marker);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Expands to the fully qualified name of the enclosing function.
///
/// ```
/// fn connect() -> &'static str {
///     dave_logs::function_name!()
/// }
///
/// assert!(connect().ends_with("connect"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        $crate::__private::enclosing_function(::core::any::type_name_of_val(&__here))
    }};
}
