//! Compatibility bridges for other logging crates

#[cfg(feature = "log-compat")]
pub mod log_bridge;

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;

/// Install every bridge enabled at compile time.
///
/// Stops at the first bridge that fails to install.
pub fn init_with_bridges() -> crate::Result<()> {
    #[cfg(feature = "log-compat")]
    log_bridge::init_log_bridge()?;

    #[cfg(feature = "tracing-compat")]
    tracing_bridge::init_tracing_bridge()?;

    Ok(())
}
