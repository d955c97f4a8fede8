//! A startup: a named target occupying a few grid cells.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{GameError, GuessResult};
use crate::coord::Label;

/// Named target whose remaining cells shrink with every hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    name: String,
    cells: Vec<Label>,
    assigned: bool,
}

impl Startup {
    /// A startup with no cells yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: Vec::new(),
            assigned: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cells not yet hit.
    pub fn cells(&self) -> &[Label] {
        &self.cells
    }

    /// Set the startup's cells from a placement. Allowed once.
    pub fn set_cells(&mut self, cells: Vec<Label>) -> Result<(), GameError> {
        if self.assigned {
            return Err(GameError::CellsAlreadyAssigned);
        }
        self.cells = cells;
        self.assigned = true;
        Ok(())
    }

    /// True once every assigned cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.assigned && self.cells.is_empty()
    }

    /// Resolve `guess` against the remaining cells, removing it on a match.
    ///
    /// Matching is exact; callers normalise case beforehand.
    pub fn check(&mut self, guess: &str) -> GuessResult {
        match self.cells.iter().position(|cell| cell == guess) {
            Some(idx) => {
                self.cells.remove(idx);
                if self.cells.is_empty() {
                    GuessResult::Kill
                } else {
                    GuessResult::Hit
                }
            }
            None => GuessResult::Miss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn unassigned_startup_is_not_sunk() {
        let startup = Startup::new("poniez");
        assert!(!startup.is_sunk());
    }

    #[test]
    fn second_assignment_is_rejected() {
        let mut startup = Startup::new("hacqi");
        startup.set_cells(vec![Label::from("a0")]).unwrap();
        assert_eq!(
            startup.set_cells(vec![Label::from("b0")]),
            Err(GameError::CellsAlreadyAssigned)
        );
        assert_eq!(startup.cells(), [Label::from("a0")]);
    }
}
