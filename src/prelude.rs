//! Commonly used types and utilities for ease of import.

pub use crate::{GameSession, GamePhase, GuessResult, Label, PlacementEngine, Startup, Summary};

#[cfg(feature = "std")]
pub use crate::{make_rng, run_cli, Console, IoConsole, StdConsole};
