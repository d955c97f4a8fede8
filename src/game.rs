//! Game session: setup, guess resolution and end-of-game scoring.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::common::{GameError, GuessResult};
use crate::config::{EFFICIENT_GUESSES, STARTUP_LENGTH, STARTUP_NAMES};
use crate::placement::{OccupancyGrid, PlacementEngine};
use crate::startup::Startup;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    /// Setup failed part-way; the session is unusable.
    Aborted,
    Playing,
    Finished,
}

/// How well the player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Score {
    Efficient,
    Inefficient,
}

impl Score {
    /// Efficient up to and including [`EFFICIENT_GUESSES`].
    pub fn from_guesses(guesses: usize) -> Self {
        if guesses <= EFFICIENT_GUESSES {
            Score::Efficient
        } else {
            Score::Inefficient
        }
    }
}

/// Final result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub guesses: usize,
    pub score: Score,
}

impl Summary {
    pub fn new(guesses: usize) -> Self {
        Self {
            guesses,
            score: Score::from_guesses(guesses),
        }
    }

    /// Closing lines shown to the player.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        lines.push(String::from("All Startups are dead! Your stock is now worthless"));
        match self.score {
            Score::Efficient => {
                lines.push(format!("It only took you {} guesses.", self.guesses));
                lines.push(String::from("You got out before your options sank."));
            }
            Score::Inefficient => {
                lines.push(format!("Took you long enough. {} guesses.", self.guesses));
                lines.push(String::from("Fish are dancing with your options"));
            }
        }
        lines
    }
}

/// One game: the placement engine, the live roster and the guess counter.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: PlacementEngine,
    startups: Vec<Startup>,
    guesses: usize,
    phase: GamePhase,
}

impl GameSession {
    /// Session in the setup phase with the standard roster, nothing placed.
    pub fn new() -> Self {
        Self::with_engine(PlacementEngine::new())
    }

    /// Like [`GameSession::new`] but placing through `engine`.
    pub fn with_engine(engine: PlacementEngine) -> Self {
        let startups = STARTUP_NAMES.iter().map(|&name| Startup::new(name)).collect();
        Self {
            engine,
            startups,
            guesses: 0,
            phase: GamePhase::Setup,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Startups still afloat, in roster order.
    pub fn startups(&self) -> &[Startup] {
        &self.startups
    }

    pub fn guess_count(&self) -> usize {
        self.guesses
    }

    /// Occupied cells as recorded by the placement engine.
    pub fn occupancy(&self) -> OccupancyGrid {
        self.engine.occupancy()
    }

    /// Place every startup and start play.
    ///
    /// A failed placement moves the session to [`GamePhase::Aborted`] and
    /// returns the error; later calls fail with [`GameError::AlreadySetUp`]
    /// without touching the grid.
    pub fn set_up<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::AlreadySetUp);
        }
        for startup in self.startups.iter_mut() {
            let placed = self
                .engine
                .place(rng, STARTUP_LENGTH)
                .and_then(|cells| startup.set_cells(cells));
            if let Err(e) = placed {
                self.phase = GamePhase::Aborted;
                info!("setup aborted: {}", e);
                return Err(e);
            }
        }
        self.phase = GamePhase::Playing;
        info!("{} startups placed, game on", self.startups.len());
        Ok(())
    }

    /// Opening lines shown to the player.
    pub fn banner(&self) -> Vec<String> {
        let names: Vec<&str> = self.startups.iter().map(Startup::name).collect();
        let mut lines = Vec::with_capacity(3);
        lines.push(String::from("Your goal is to sink three Startups."));
        lines.push(names.join(", "));
        lines.push(String::from(
            "Try to sink them all in the fewest number of guesses",
        ));
        lines
    }

    /// Resolve one already-normalised guess against the live roster.
    ///
    /// Startups are asked in roster order and the first hit or kill stops
    /// the search. A killed startup leaves the roster; an empty roster
    /// finishes the session.
    pub fn check_guess(&mut self, guess: &str) -> Result<GuessResult, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::NotPlaying);
        }
        self.guesses += 1;

        let mut result = GuessResult::Miss;
        let mut sunk = None;
        for (idx, startup) in self.startups.iter_mut().enumerate() {
            result = startup.check(guess);
            match result {
                GuessResult::Hit => break,
                GuessResult::Kill => {
                    sunk = Some(idx);
                    break;
                }
                GuessResult::Miss => {}
            }
        }
        debug!("guess #{} {:?}: {}", self.guesses, guess, result);

        if let Some(idx) = sunk {
            let startup = self.startups.remove(idx);
            info!("{} sunk after {} guesses", startup.name(), self.guesses);
        }
        if self.startups.is_empty() {
            self.phase = GamePhase::Finished;
            info!("all startups sunk in {} guesses", self.guesses);
        }
        Ok(result)
    }

    /// Final score, available once the session has finished.
    pub fn summary(&self) -> Result<Summary, GameError> {
        match self.phase {
            GamePhase::Finished => Ok(Summary::new(self.guesses)),
            _ => Err(GameError::NotFinished),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
