//! Walks a control board through its lifecycle, logging every step.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod control_board;

use std::time::Duration;

use control_board::ControlBoard;
use dave_logs::log_critical;

fn main() {
    // Failures are logged rather than propagated.
    if let Err(e) = ControlBoard::new(-1) {
        log_critical!(e);
    }

    let board = match ControlBoard::new(5) {
        Ok(board) => board,
        Err(e) => {
            log_critical!(e);
            return;
        }
    };

    board.setup_config();
    board.connect_to_database();
    board.start_server(Duration::from_secs(45));
}
