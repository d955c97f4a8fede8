//! Common types: guess outcomes and game errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Outcome of resolving one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum GuessResult {
    /// Guess struck a startup that still has cells left.
    Hit,
    /// Guess struck the last remaining cell of a startup.
    Kill,
    /// Guess matched no live startup cell.
    Miss,
}

impl GuessResult {
    /// Token printed to the player.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuessResult::Hit => "hit",
            GuessResult::Kill => "kill",
            GuessResult::Miss => "miss",
        }
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by placement and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (index off the grid).
    BitBoardError(BitBoardError),
    /// Requested startup length cannot exist on any grid.
    InvalidLength(usize),
    /// No free, in-bounds position was found within the attempt budget.
    PlacementFailed { length: usize, attempts: usize },
    /// A startup's cells were assigned more than once.
    CellsAlreadyAssigned,
    /// Setup requested on a session that already left the setup phase.
    AlreadySetUp,
    /// Guess submitted while the session is not in play.
    NotPlaying,
    /// Summary requested before every startup was sunk.
    NotFinished,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoardError(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            GameError::InvalidLength(len) => write!(f, "Invalid startup length {}", len),
            GameError::PlacementFailed { length, attempts } => write!(
                f,
                "Unable to place startup of length {} after {} attempts",
                length, attempts
            ),
            GameError::CellsAlreadyAssigned => write!(f, "Startup cells were already assigned"),
            GameError::AlreadySetUp => write!(f, "Session is already set up"),
            GameError::NotPlaying => write!(f, "Session is not accepting guesses"),
            GameError::NotFinished => write!(f, "Session has not finished"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
