//! Property tests for the grid, the rotation model, the queue and the engine.
//!
//! Invariants covered:
//! - `set_cell` touches exactly one cell.
//! - `remove_line` shifts rows above down by one and empties row 39.
//! - Draining the queue yields ascending times, FIFO among equal times.
//! - Rotation round-trips for every kind and pose.
//! - Random input rollouts keep the live piece valid, the clock monotonic
//!   and the level in step with lines cleared.

use proptest::prelude::*;

use blockfall::core::{EventQueue, Grid, PieceBag, Piece};
use blockfall::engine::{EngineConfig, GameState};
use blockfall::types::{
    Cell, Event, EventKind, PieceKind, GRID_HEIGHT, GRID_WIDTH, LINES_PER_LEVEL,
};

const INPUTS: [EventKind; 7] = [
    EventKind::ShiftLeft,
    EventKind::ShiftRight,
    EventKind::HardDrop,
    EventKind::SoftDrop,
    EventKind::RotateCw,
    EventKind::RotateCcw,
    EventKind::Pause,
];

fn any_kind() -> impl Strategy<Value = PieceKind> {
    (0..7usize).prop_map(|i| PieceKind::ALL[i])
}

fn any_fill() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Fill1), Just(Cell::Fill2)]
}

fn any_grid() -> impl Strategy<Value = Grid> {
    grid_below(GRID_HEIGHT as i8)
}

/// A grid with random filled cells, all below `top`.
fn grid_below(top: i8) -> impl Strategy<Value = Grid> {
    prop::collection::vec((0..GRID_WIDTH as i8, 0..top, any_fill()), 0..120)
    .prop_map(|cells| {
        let mut grid = Grid::new();
        for (col, row, fill) in cells {
            grid.set_cell(col, row, fill).unwrap();
        }
        grid
    })
}

proptest! {
    #[test]
    fn set_cell_changes_only_that_cell(
        grid in any_grid(),
        col in 0..GRID_WIDTH as i8,
        row in 0..GRID_HEIGHT as i8,
        fill in any_fill(),
    ) {
        let mut after = grid.clone();
        after.set_cell(col, row, fill).unwrap();
        prop_assert_eq!(after.get_cell(col, row), Ok(fill));

        for r in 0..GRID_HEIGHT as i8 {
            for c in 0..GRID_WIDTH as i8 {
                if (c, r) != (col, row) {
                    prop_assert_eq!(after.get_cell(c, r), grid.get_cell(c, r));
                }
            }
        }
    }

    #[test]
    fn remove_line_shifts_rows_above(grid in any_grid(), removed in 0..GRID_HEIGHT as i8) {
        let mut after = grid.clone();
        after.remove_line(removed).unwrap();

        prop_assert!(after.is_row_empty(GRID_HEIGHT as i8 - 1));
        for c in 0..GRID_WIDTH as i8 {
            for r in 0..removed {
                prop_assert_eq!(after.get_cell(c, r), grid.get_cell(c, r));
            }
            for r in removed..GRID_HEIGHT as i8 - 1 {
                prop_assert_eq!(after.get_cell(c, r), grid.get_cell(c, r + 1));
            }
        }
    }

    #[test]
    fn queue_drains_in_stable_time_order(times in prop::collection::vec(0u64..50, 0..40)) {
        let mut queue = EventQueue::new();
        for &t in &times {
            queue.push(Event::new(EventKind::Enter, t));
        }

        let mut expected = times.clone();
        expected.sort_unstable();

        let drained: Vec<u64> = std::iter::from_fn(|| queue.pop()).map(|e| e.time).collect();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn equal_times_are_fifo(kinds in prop::collection::vec(0..7usize, 1..20), t in 0u64..1000) {
        let mut queue = EventQueue::new();
        queue.push(Event::new(EventKind::Enter, t));
        for &k in &kinds {
            queue.push(Event::new(INPUTS[k], t));
        }

        prop_assert_eq!(queue.pop().map(|e| e.kind), Some(EventKind::Enter));
        for &k in &kinds {
            prop_assert_eq!(queue.pop().map(|e| e.kind), Some(INPUTS[k]));
        }
    }

    #[test]
    fn rotation_round_trips(kind in any_kind(), x in 2i8..8, y in 2i8..30, turns in 0usize..4) {
        let mut piece = Piece::spawn(kind).at(x, y);
        for _ in 0..turns {
            piece = piece.rotate_cw();
        }
        prop_assert_eq!(piece.rotate_cw().rotate_ccw(), piece);
        prop_assert_eq!(piece.rotate_ccw().rotate_cw(), piece);
        let full = piece.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        prop_assert_eq!(full, piece);
    }

    #[test]
    fn hard_drop_lands_at_lowest_fit(grid in grid_below(20), kind in any_kind(), x in 2i8..8) {
        let piece = Piece::spawn(kind).at(x, 36);
        prop_assert!(piece.fits(&grid));
        let landed = piece.dropped(&grid);
        prop_assert!(landed.fits(&grid));
        prop_assert_eq!(landed.x, piece.x);
        prop_assert!(!landed.shifted(0, -1).fits(&grid));
    }

    #[test]
    fn random_rollout_keeps_engine_consistent(
        seed in any::<u32>(),
        inputs in prop::collection::vec((0..INPUTS.len(), 0u64..400), 1..200),
    ) {
        let mut game = GameState::with_randomizer(EngineConfig::default(), PieceBag::new(seed));
        game.push_event(Event::new(EventKind::NewGame, 0));
        game.run_until(0).unwrap();

        let mut t = 0;
        let mut last_now = game.now();
        let mut last_lines = 0;
        for (idx, dt) in inputs {
            t += dt;
            game.push_event(Event::new(INPUTS[idx], t));
            game.run_until(t).unwrap();

            prop_assert!(game.now() >= last_now);
            prop_assert!(game.lines_cleared() >= last_lines);
            prop_assert_eq!(game.level(), game.lines_cleared() / LINES_PER_LEVEL);
            if let Some(piece) = game.piece() {
                prop_assert!(piece.fits(game.grid()));
            }
            // nothing left that was already due
            if let Some(next) = game.next_event_time() {
                prop_assert!(next > t);
            }
            last_now = game.now();
            last_lines = game.lines_cleared();

            if game.game_over() {
                break;
            }
        }
    }
}
