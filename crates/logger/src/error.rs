//! Error types for bridge installation

/// Result type for fallible setup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while installing a compatibility bridge
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Another `log` logger was already installed
    #[cfg(feature = "log-compat")]
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] log::SetLoggerError),

    /// Another global `tracing` subscriber was already installed
    #[cfg(feature = "tracing-compat")]
    #[error("failed to install tracing bridge: {0}")]
    TracingBridge(#[from] tracing_subscriber::util::TryInitError),
}
