//! Random, non-overlapping placement of startups on the grid.
//!
//! The engine owns the occupancy grid for the whole session. Each call to
//! [`PlacementEngine::place`] picks an alignment from the placement count,
//! then draws random start cells until a candidate both fits the grid and
//! avoids every occupied cell. Accepted candidates are marked occupied and
//! never freed.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{ALPHABET, GRID_LENGTH, GRID_SIZE, MAX_ATTEMPTS};
use crate::coord::{index_to_label, row_of, Label};

/// One bit per grid cell; set bits are occupied.
pub type OccupancyGrid = BitBoard<u64, GRID_LENGTH>;

/// Direction a startup extends from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Flat-index step between consecutive cells.
    pub fn increment(self) -> usize {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => GRID_LENGTH,
        }
    }

    /// Alignment of the `nth` placement (1-indexed): even placements run
    /// horizontally, odd ones vertically.
    pub fn for_placement(nth: usize) -> Self {
        if nth % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Cells a startup of `length` would cover starting at `start`.
pub fn candidate(start: usize, length: usize, orientation: Orientation) -> Vec<usize> {
    let step = orientation.increment();
    (0..length).map(|i| start + i * step).collect()
}

/// Whether a candidate stays on the grid along its alignment.
///
/// Horizontal candidates must end on the row they start on; vertical ones
/// must not run off the bottom.
pub fn fits(coords: &[usize], orientation: Orientation) -> bool {
    let (Some(&first), Some(&last)) = (coords.first(), coords.last()) else {
        return false;
    };
    match orientation {
        Orientation::Horizontal => {
            last < GRID_SIZE && row_of(first, GRID_LENGTH) == row_of(last, GRID_LENGTH)
        }
        Orientation::Vertical => last < GRID_SIZE,
    }
}

/// Owner of the session's occupancy grid.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    grid: OccupancyGrid,
    placed: usize,
    max_attempts: usize,
}

impl PlacementEngine {
    /// Empty grid with the standard attempt budget.
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_ATTEMPTS)
    }

    /// Empty grid with a custom attempt budget per placement.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            grid: OccupancyGrid::new(),
            placed: 0,
            max_attempts,
        }
    }

    /// Read-only view of the occupied cells.
    pub fn occupancy(&self) -> OccupancyGrid {
        self.grid
    }

    /// Place a startup of `length` cells and return its labels in order.
    ///
    /// On [`GameError::PlacementFailed`] the grid is left untouched; the
    /// request still counts towards the alignment alternation.
    pub fn place<R: Rng>(&mut self, rng: &mut R, length: usize) -> Result<Vec<Label>, GameError> {
        if length == 0 || length > GRID_LENGTH {
            return Err(GameError::InvalidLength(length));
        }
        self.placed += 1;
        let orientation = Orientation::for_placement(self.placed);

        for attempt in 1..=self.max_attempts {
            let start = rng.random_range(0..GRID_SIZE);
            let coords = candidate(start, length, orientation);
            if !fits(&coords, orientation) {
                trace!("trying {:?}: off the grid", coords);
                continue;
            }
            let mask = OccupancyGrid::from_indices(coords.iter().copied())?;
            if let Some(taken) = (self.grid & mask).iter_set().next() {
                debug!("position {} already taken", taken);
                continue;
            }

            self.grid |= mask;
            let labels: Vec<Label> = coords
                .iter()
                .map(|&idx| index_to_label(idx, GRID_LENGTH, ALPHABET))
                .collect();
            debug!(
                "placement #{} ({:?}) at {:?} after {} attempt(s)",
                self.placed, orientation, labels, attempt
            );
            return Ok(labels);
        }

        Err(GameError::PlacementFailed {
            length,
            attempts: self.max_attempts,
        })
    }
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new()
    }
}
