use super::error::GameError;
use super::types::{CELL_COUNT, CellMark, Mark};

pub fn check_index(index: usize) -> Result<(), GameError> {
    if index >= CELL_COUNT {
        return Err(GameError::OutOfRange(index));
    }
    Ok(())
}

/// The 3x3 grid, row-major: row = index / 3, column = index % 3.
///
/// `apply_move` does not reject overwrites; occupancy is checked by the
/// caller before a move reaches the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    /// Snapshot of every cell. The returned array is detached from the board.
    pub fn get(&self) -> [Mark; CELL_COUNT] {
        self.cells
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<Mark, GameError> {
        check_index(index)?;
        Ok(self.cells[index])
    }

    pub fn is_occupied(&self, index: usize) -> Result<bool, GameError> {
        Ok(!self.cell(index)?.is_empty())
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        check_index(index)?;
        self.cells[index] = mark;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empty cells in ascending index order.
    pub fn available_moves(&self) -> Vec<CellMark> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, &mark)| CellMark::new(index, mark))
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub(crate) fn with_move(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }
}
