//! Terminal front end for the blockfall engine.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! [`GameView`] paints a [`GameState`](engine::GameState) into a
//! [`FrameBuffer`] (pure, testable) and [`TerminalRenderer`] flushes it to
//! the terminal with `crossterm`.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{FrameStats, GameView, Viewport, MAX_CELL_W};
pub use renderer::{encode_full_into, TerminalRenderer};
