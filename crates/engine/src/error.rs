use thiserror::Error;

use crate::core::GridError;

/// Fatal engine failures. Each one means a broken invariant; callers are
/// expected to stop the game and report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("grid contract violated: {0}")]
    Grid(#[from] GridError),
}
