//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,engine,input,term,types}`
//! and hosts the small pieces of the driving loop that are worth testing on
//! their own.

pub mod driver;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
