//! Grid module - the 10x40 playfield
//!
//! Cells are stored in a flat array, row-major, with row 0 at the bottom.
//! Rows 0..20 are the visible Matrix and rows 20..40 the buffer zone that
//! pieces spawn into.
//!
//! The only mutating operations are [`Grid::set_cell`], [`Grid::remove_line`]
//! and [`Grid::clear`].

use crate::error::GridError;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

const WIDTH: usize = GRID_WIDTH as usize;

/// The playfield - 10 columns x 40 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= GRID_WIDTH as i8 || row < 0 || row >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get the cell at (col, row)
    pub fn get_cell(&self, col: i8, row: i8) -> Result<Cell, GridError> {
        Self::index(col, row)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds { col, row })
    }

    /// Set the cell at (col, row)
    pub fn set_cell(&mut self, col: i8, row: i8, cell: Cell) -> Result<(), GridError> {
        let idx = Self::index(col, row).ok_or(GridError::OutOfBounds { col, row })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// True if (x, y) is inside the grid and empty.
    ///
    /// This is the collision test for pieces, so it takes any signed
    /// coordinate and answers `false` instead of failing.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(Self::index(x, y), Some(idx) if self.cells[idx].is_empty())
    }

    /// Read-only view of one row, left to right
    pub fn row(&self, row: i8) -> Result<&[Cell], GridError> {
        if row < 0 || row >= GRID_HEIGHT as i8 {
            return Err(GridError::RowOutOfBounds { row });
        }
        let start = row as usize * WIDTH;
        Ok(&self.cells[start..start + WIDTH])
    }

    /// Check if every cell of a row is non-empty.
    /// Rows outside the grid are never full.
    pub fn is_row_full(&self, row: i8) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(Cell::is_filled))
            .unwrap_or(false)
    }

    /// Check if every cell of a row is empty
    pub fn is_row_empty(&self, row: i8) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(Cell::is_empty))
            .unwrap_or(false)
    }

    /// Remove one row: every row above it moves down by one and the top
    /// row (39) becomes empty. Rows below are untouched.
    pub fn remove_line(&mut self, row: i8) -> Result<(), GridError> {
        if row < 0 || row >= GRID_HEIGHT as i8 {
            return Err(GridError::RowOutOfBounds { row });
        }

        let start = row as usize * WIDTH;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(start + WIDTH.., start);
        self.cells[GRID_SIZE - WIDTH..].fill(Cell::Empty);
        Ok(())
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
