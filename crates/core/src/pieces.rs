//! Pieces module - tetromino templates and the rotation model
//!
//! Each of the seven kinds is stored once, as its four mino offsets in the
//! north rotation plus a spawn position. Every other rotation is derived by
//! applying the 90° transform to those offsets:
//!
//! - clockwise: `(x, y) -> (-y, x)`
//! - counter-clockwise: `(x, y) -> (y, -x)`
//!
//! Rotation happens around the piece origin with no wall kicks. A rotated
//! piece that collides is simply rejected by the caller.

use crate::grid::Grid;
use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Spawn position shared by every kind: centred, in the first buffer row
/// above the visible Matrix.
pub const SPAWN_POSITION: (i8, i8) = (4, 20);

/// North-rotation offsets, indexed by [`PieceKind::index`].
const NORTH_SHAPES: [PieceShape; 7] = [
    // I
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    // O
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    // J
    [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    // L
    [(1, 1), (-1, 0), (0, 0), (1, 0)],
    // S
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    // Z
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
    // T
    [(0, 1), (-1, 0), (0, 0), (1, 0)],
];

/// Offsets of `kind` in the north rotation
pub fn north_shape(kind: PieceKind) -> PieceShape {
    NORTH_SHAPES[kind.index()]
}

#[inline]
fn turn_cw(shape: PieceShape) -> PieceShape {
    shape.map(|(x, y)| (-y, x))
}

#[inline]
fn turn_ccw(shape: PieceShape) -> PieceShape {
    shape.map(|(x, y)| (y, -x))
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let north = north_shape(kind);
    match rotation {
        Rotation::North => north,
        Rotation::East => turn_cw(north),
        Rotation::South => turn_cw(turn_cw(north)),
        Rotation::West => turn_ccw(north),
    }
}

/// A placed tetromino: kind, rotation, origin and its current minos.
///
/// All transforms return a new value. The live piece is only replaced once
/// the candidate has been checked against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub minos: PieceShape,
}

impl Piece {
    /// Create a new piece in its spawn pose
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
            minos: north_shape(kind),
        }
    }

    /// Same piece at another origin
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Same piece moved by (dx, dy); positive dy is up
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Rotate clockwise around the origin
    pub fn rotate_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            minos: turn_cw(self.minos),
            ..*self
        }
    }

    /// Rotate counter-clockwise around the origin
    pub fn rotate_ccw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_ccw(),
            minos: turn_ccw(self.minos),
            ..*self
        }
    }

    /// Absolute grid coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.minos
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    /// Check if all minos are in bounds and on empty cells
    pub fn fits(&self, grid: &Grid) -> bool {
        self.cells().iter().all(|&(x, y)| grid.is_free(x, y))
    }

    /// Lowest valid pose straight below this one.
    ///
    /// Returns `self` unchanged if it cannot move down at all.
    pub fn dropped(&self, grid: &Grid) -> Self {
        let mut landed = *self;
        loop {
            let below = landed.shifted(0, -1);
            if below == landed || !below.fits(grid) {
                return landed;
            }
            landed = below;
        }
    }
}
