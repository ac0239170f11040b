use std::time::Duration;

use dave_logs::{log_critical, log_debug, log_error, log_info, log_trace, log_warning};

/// Startup budget for [`ControlBoard::start_server`]
pub const START_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while building a control board
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    /// The board id was negative
    #[error("Negative value not allowed")]
    NegativeValue,
}

/// A pretend piece of hardware that logs its whole lifecycle.
#[derive(Debug)]
pub struct ControlBoard {
    id: i32,
}

impl ControlBoard {
    /// Bring up a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NegativeValue`] when `id` is negative.
    pub fn new(id: i32) -> Result<Self, BoardError> {
        log_trace!("Constructor called with b = {id}");
        if id < 0 {
            return Err(BoardError::NegativeValue);
        }

        Ok(Self { id })
    }

    pub fn setup_config(&self) {
        log_debug!("Loading configuration files...");
    }

    pub fn connect_to_database(&self) {
        log_info!("Attempting to connect to the database...");
        log_warning!("Connection took longer than expected, retrying...");
    }

    /// Try to start the server, giving up when `elapsed` has run past
    /// [`START_TIMEOUT`]. Returns whether the server came up.
    pub fn start_server(&self, elapsed: Duration) -> bool {
        log_error!("Failed to bind to port 8080. Is it already in use?");

        if elapsed > START_TIMEOUT {
            log_critical!("Unable to start server. Exiting application.");
            return false;
        }

        true
    }
}

impl Drop for ControlBoard {
    fn drop(&mut self) {
        log_trace!("Destructor called for board {} at {:p}", self.id, self);
    }
}
