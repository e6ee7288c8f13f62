//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::EventKind`]. Turning the
//! kind into a timestamped event is left to the driving loop, which owns the
//! clock.

pub mod map;

pub use blockfall_types as types;

pub use map::event_for_key;
