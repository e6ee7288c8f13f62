//! Error types for contract violations in the core model.

use thiserror::Error;

/// Raised when a caller addresses a cell or row outside the grid.
///
/// The engine only ever touches coordinates it has already validated, so
/// seeing one of these means an invariant is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the 10x40 grid")]
    OutOfBounds { col: i8, row: i8 },
    #[error("row {row} is outside the 10x40 grid")]
    RowOutOfBounds { row: i8 },
}
