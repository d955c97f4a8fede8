//! Unattended play: sweep the grid cell by cell until every startup sinks.

use crate::common::GameError;
use crate::config::GRID_SIZE;
use crate::coord::Label;
use crate::game::{GamePhase, GameSession, Summary};

/// Every label on the grid in flat-index order.
pub fn sweep_guesses() -> impl Iterator<Item = Label> {
    (0..GRID_SIZE).map(Label::from_index)
}

/// Drive a set-up session to the end by guessing each cell in turn.
pub fn play_sweep(session: &mut GameSession) -> Result<Summary, GameError> {
    for label in sweep_guesses() {
        if session.phase() == GamePhase::Finished {
            break;
        }
        session.check_guess(label.as_str())?;
    }
    session.summary()
}
