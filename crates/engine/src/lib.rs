//! Phase engine - the event-driven simulation on top of `blockfall-core`
//!
//! The engine is deterministic and single-threaded: the only inputs are the
//! events pushed into its queue and the kinds handed out by its
//! [`Randomizer`](core::Randomizer). A driver owns the wall clock, converts
//! it to virtual milliseconds and calls [`GameState::run_until`] once per
//! frame.
//!
//! # Module Structure
//!
//! - [`game_state`]: [`GameState`] and the per-phase handlers
//! - [`marked_rows`]: per-row flags produced by the pattern phase
//! - [`config`]: gravity and lock-delay settings
//! - [`error`]: [`EngineError`]
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{EngineConfig, GameState};
//! use blockfall_engine::types::{Event, EventKind, Phase};
//!
//! let mut game = GameState::new(EngineConfig::default());
//! game.push_event(Event::new(EventKind::NewGame, 0));
//! game.run_until(0).unwrap();
//! assert_eq!(game.phase(), Phase::Falling);
//!
//! game.push_event(Event::new(EventKind::HardDrop, 10));
//! game.run_until(10).unwrap();
//! assert_eq!(game.grid().filled_count(), 4);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod marked_rows;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::{EngineConfig, Gravity};
pub use error::EngineError;
pub use game_state::GameState;
pub use marked_rows::MarkedRows;
