//! Fixed game configuration: grid geometry, roster and scoring.

/// Side length of the square grid.
pub const GRID_LENGTH: usize = 7;
/// Number of cells on the grid.
pub const GRID_SIZE: usize = GRID_LENGTH * GRID_LENGTH;
/// Column letters, one per column.
pub const ALPHABET: &str = "abcdefg";
/// Random placement attempts allowed per startup.
pub const MAX_ATTEMPTS: usize = 200;

/// Cells occupied by each startup.
pub const STARTUP_LENGTH: usize = 3;
pub const NUM_STARTUPS: usize = 3;
pub const STARTUP_NAMES: [&str; NUM_STARTUPS] = ["poniez", "hacqi", "cabista"];

/// Total number of startup cells on a fully set up grid.
pub const TOTAL_STARTUP_CELLS: usize = STARTUP_LENGTH * NUM_STARTUPS;

/// Highest guess count still scored as efficient.
pub const EFFICIENT_GUESSES: usize = 18;
