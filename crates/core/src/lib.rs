//! Core model - grid, pieces, event queue and piece supply
//!
//! This crate holds the pieces the phase engine is built from. It has no
//! dependencies on UI, timing or I/O:
//!
//! - [`grid`]: 10x40 bottom-up playfield with line removal
//! - [`pieces`]: the seven tetromino templates and the pure rotation model
//! - [`event_queue`]: time-ordered queue of scheduled events
//! - [`rng`]: the [`Randomizer`] contract, a seeded 7-bag and a fixed sequence
//! - [`error`]: contract violations ([`GridError`])
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Grid, Piece};
//! use blockfall_core::types::PieceKind;
//!
//! let grid = Grid::new();
//! let piece = Piece::spawn(PieceKind::T);
//! assert!(piece.fits(&grid));
//!
//! // Rotation is pure: a new candidate is produced and checked before use.
//! let turned = piece.rotate_cw();
//! assert!(turned.fits(&grid));
//! assert_eq!(turned.rotate_ccw(), piece);
//! ```

pub mod error;
pub mod event_queue;
pub mod grid;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use event_queue::EventQueue;
pub use grid::Grid;
pub use pieces::{get_shape, north_shape, Piece, PieceShape, SPAWN_POSITION};
pub use rng::{FixedSequence, PieceBag, Randomizer, SimpleRng};
