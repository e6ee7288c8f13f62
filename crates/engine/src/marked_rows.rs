//! One flag per grid row, set for rows found full during the pattern phase.

use arrayvec::ArrayVec;

use crate::core::Grid;
use crate::types::GRID_HEIGHT;

const ROWS: usize = GRID_HEIGHT as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkedRows {
    rows: [bool; ROWS],
}

impl MarkedRows {
    pub fn new() -> Self {
        Self { rows: [false; ROWS] }
    }

    /// Mark every row of `grid` whose ten cells are all non-empty
    pub fn scan(grid: &Grid) -> Self {
        let mut marked = Self::new();
        for (row, flag) in marked.rows.iter_mut().enumerate() {
            *flag = grid.is_row_full(row as i8);
        }
        marked
    }

    pub fn is_marked(&self, row: usize) -> bool {
        self.rows.get(row).copied().unwrap_or(false)
    }

    pub fn mark(&mut self, row: usize) {
        if let Some(flag) = self.rows.get_mut(row) {
            *flag = true;
        }
    }

    pub fn count(&self) -> usize {
        self.rows.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn clear(&mut self) {
        self.rows = [false; ROWS];
    }

    /// Marked row indices, highest first.
    ///
    /// Removing lines in this order keeps the remaining indices valid, since
    /// removing a row only shifts the rows above it.
    pub fn top_down(&self) -> ArrayVec<i8, ROWS> {
        self.rows
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &m)| m)
            .map(|(row, _)| row as i8)
            .collect()
    }
}

impl Default for MarkedRows {
    fn default() -> Self {
        Self::new()
    }
}
