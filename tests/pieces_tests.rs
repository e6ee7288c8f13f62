//! Piece tests - shapes, rotation model and collision

use blockfall::core::{get_shape, north_shape, Grid, Piece, SPAWN_POSITION};
use blockfall::types::{Cell, PieceKind, Rotation};

#[test]
fn test_every_kind_spawns_on_empty_grid() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!((piece.x, piece.y), SPAWN_POSITION);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!(piece.minos, north_shape(kind));
        assert!(piece.fits(&grid), "{:?} should fit at spawn", kind);
    }
}

#[test]
fn test_clockwise_rotation_of_t() {
    let piece = Piece::spawn(PieceKind::T).rotate_cw();
    assert_eq!(piece.rotation, Rotation::East);
    assert_eq!(piece.minos, [(-1, 0), (0, -1), (0, 0), (0, 1)]);
    assert_eq!(piece.minos, get_shape(PieceKind::T, Rotation::East));
}

#[test]
fn test_counter_clockwise_rotation_of_i() {
    let piece = Piece::spawn(PieceKind::I).rotate_ccw();
    assert_eq!(piece.rotation, Rotation::West);
    assert_eq!(piece.minos, [(0, 1), (0, 0), (0, -1), (0, -2)]);
}

#[test]
fn test_four_turns_restore_north() {
    for kind in PieceKind::ALL {
        let start = Piece::spawn(kind);
        let cw = start.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        let ccw = start.rotate_ccw().rotate_ccw().rotate_ccw().rotate_ccw();
        assert_eq!(cw, start);
        assert_eq!(ccw, start);
    }
}

#[test]
fn test_cw_then_ccw_is_identity() {
    for kind in PieceKind::ALL {
        let start = Piece::spawn(kind).at(5, 10);
        assert_eq!(start.rotate_cw().rotate_ccw(), start);
    }
}

#[test]
fn test_derived_shapes_match_incremental_rotation() {
    for kind in PieceKind::ALL {
        let south = Piece::spawn(kind).rotate_cw().rotate_cw();
        assert_eq!(south.minos, get_shape(kind, Rotation::South));
        let west = Piece::spawn(kind).rotate_ccw();
        assert_eq!(west.minos, get_shape(kind, Rotation::West));
    }
}

#[test]
fn test_shift_is_pure() {
    let piece = Piece::spawn(PieceKind::L);
    let moved = piece.shifted(-2, -3);
    assert_eq!((moved.x, moved.y), (2, 17));
    assert_eq!(moved.minos, piece.minos);
    assert_eq!((piece.x, piece.y), SPAWN_POSITION);
}

#[test]
fn test_cells_are_origin_plus_offsets() {
    let piece = Piece::spawn(PieceKind::O).at(0, 0);
    assert_eq!(piece.cells(), [(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_collision_with_walls_and_floor() {
    let grid = Grid::new();
    let i = Piece::spawn(PieceKind::I);
    assert!(!i.at(0, 10).fits(&grid));
    assert!(i.at(1, 10).fits(&grid));
    assert!(!i.at(8, 10).fits(&grid));
    assert!(!i.at(4, -1).fits(&grid));
    // vertical I cannot rotate into the floor
    assert!(!i.at(4, 0).rotate_cw().fits(&grid));
}

#[test]
fn test_collision_with_filled_cell() {
    let mut grid = Grid::new();
    grid.set_cell(4, 5, Cell::Fill1).unwrap();
    let t = Piece::spawn(PieceKind::T);
    assert!(!t.at(4, 5).fits(&grid));
    assert!(!t.at(4, 4).fits(&grid));
    assert!(t.at(4, 6).fits(&grid));
}

#[test]
fn test_dropped_lands_on_stack() {
    let mut grid = Grid::new();
    for col in 0..10 {
        grid.set_cell(col, 0, Cell::Fill2).unwrap();
    }
    let landed = Piece::spawn(PieceKind::O).dropped(&grid);
    assert_eq!((landed.x, landed.y), (4, 1));
    assert!(landed.fits(&grid));
    assert!(!landed.shifted(0, -1).fits(&grid));
}
