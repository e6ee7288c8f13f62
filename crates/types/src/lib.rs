//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the input mapper and the renderer alike.
//!
//! # Grid Dimensions
//!
//! The playfield is indexed bottom-up (row 0 is the floor):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 40 rows (indexed 0-39)
//! - **Matrix**: rows 0-19 are the visible play area
//! - **Buffer zone**: rows 20-39 are invisible; pieces spawn at row 20
//!
//! # Timing
//!
//! Virtual time is measured in whole milliseconds ([`Millis`]):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame budget of the driving loop (~60 FPS) |
//! | `GRAVITY_MS` | 1000 | Fall period at level 0 |
//! | `LOCK_DELAY_MS` | 500 | Wait between landing and merging into the grid |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Event, EventKind, PieceKind, Rotation, GRID_HEIGHT, GRID_WIDTH};
//!
//! let rotated = Rotation::North.rotate_cw();
//! assert_eq!(rotated, Rotation::East);
//!
//! assert_eq!(PieceKind::T.as_str(), "t");
//!
//! let evt = Event::new(EventKind::HardDrop, 120);
//! assert!(evt.kind.is_input());
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 40);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Total grid height in cells, Matrix plus buffer zone (40 rows)
pub const GRID_HEIGHT: u8 = 40;

/// Height of the visible Matrix (rows 0-19)
pub const VISIBLE_HEIGHT: u8 = 20;

/// Virtual clock unit: milliseconds since the engine started.
pub type Millis = u64;

/// Frame budget of the driving loop in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: Millis = 16;

/// Fall period at level 0 (one row per second)
pub const GRAVITY_MS: Millis = 1000;

/// Fixed lock delay. It does not reset when the piece moves.
pub const LOCK_DELAY_MS: Millis = 500;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Fall periods by level (milliseconds per row)
///
/// Index 0 = Level 0, Index 8 = Level 8+
pub const DROP_INTERVALS: [Millis; 9] = [GRAVITY_MS, 800, 650, 500, 400, 320, 250, 200, 160];

/// Absolute minimum fall period (100ms)
pub const DROP_INTERVAL_MIN_MS: Millis = 100;

/// Content of one grid cell.
///
/// Locked cells keep no piece identity, only one of two fill variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Fill1,
    Fill2,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    J,
    L,
    S,
    Z,
    T,
}

impl PieceKind {
    /// Every kind, in template order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Rotation states
///
/// - **North**: Spawn orientation
/// - **East**: One clockwise step
/// - **South**: Two steps
/// - **West**: One counter-clockwise step
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Everything the engine can be asked to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    // Player input
    Pause,
    ShiftLeft,
    ShiftRight,
    HardDrop,
    SoftDrop,
    RotateCw,
    RotateCcw,
    Quit,
    // Simulation
    Contact,
    Lockdown,
    GameOver,
    // Control
    NewGame,
    /// The current phase just became active and must run its entry logic.
    Enter,
}

impl EventKind {
    /// True for kinds that originate from the player.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            EventKind::Pause
                | EventKind::ShiftLeft
                | EventKind::ShiftRight
                | EventKind::HardDrop
                | EventKind::SoftDrop
                | EventKind::RotateCw
                | EventKind::RotateCcw
                | EventKind::Quit
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Pause => "pause",
            EventKind::ShiftLeft => "shiftLeft",
            EventKind::ShiftRight => "shiftRight",
            EventKind::HardDrop => "hardDrop",
            EventKind::SoftDrop => "softDrop",
            EventKind::RotateCw => "rotateCw",
            EventKind::RotateCcw => "rotateCcw",
            EventKind::Quit => "quit",
            EventKind::Contact => "contact",
            EventKind::Lockdown => "lockdown",
            EventKind::GameOver => "gameOver",
            EventKind::NewGame => "newGame",
            EventKind::Enter => "enter",
        }
    }
}

/// A scheduled (or already occurred) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    pub kind: EventKind,
    pub time: Millis,
}

impl Event {
    pub const fn new(kind: EventKind, time: Millis) -> Self {
        Self { kind, time }
    }
}

/// Engine phases.
///
/// The first eight form the simulation cycle. `NewGame`, `GameOver` and
/// `Quitting` are pseudo-phases with no handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    Generation,
    Falling,
    Lock,
    Pattern,
    Iterate,
    Animate,
    Eliminate,
    Completion,
    #[default]
    NewGame,
    GameOver,
    Quitting,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Generation => "generation",
            Phase::Falling => "falling",
            Phase::Lock => "lock",
            Phase::Pattern => "pattern",
            Phase::Iterate => "iterate",
            Phase::Animate => "animate",
            Phase::Eliminate => "eliminate",
            Phase::Completion => "completion",
            Phase::NewGame => "newgame",
            Phase::GameOver => "gameover",
            Phase::Quitting => "quitting",
        }
    }
}
