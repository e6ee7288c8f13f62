//! Engine configuration.
//!
//! Defaults come from the constants in `blockfall-types`; the binary
//! overrides them from command-line flags.

use crate::types::{Millis, DROP_INTERVALS, DROP_INTERVAL_MIN_MS, LOCK_DELAY_MS};

/// How long a piece waits between one-row falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gravity {
    /// Same period at every level
    Constant(Millis),
    /// Period taken from `DROP_INTERVALS`, faster with each level
    #[default]
    ByLevel,
}

impl Gravity {
    /// Fall period at `level`
    pub fn interval_ms(&self, level: u32) -> Millis {
        match *self {
            Gravity::Constant(ms) => ms,
            Gravity::ByLevel => {
                let idx = (level as usize).min(DROP_INTERVALS.len() - 1);
                DROP_INTERVALS[idx].max(DROP_INTERVAL_MIN_MS)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the default piece bag
    pub seed: u32,
    pub gravity: Gravity,
    /// Fixed wait between landing and locking
    pub lock_delay_ms: Millis,
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_lock_delay_ms(mut self, lock_delay_ms: Millis) -> Self {
        self.lock_delay_ms = lock_delay_ms;
        self
    }

    /// Fall period at `level`
    pub fn gravity_interval(&self, level: u32) -> Millis {
        self.gravity.interval_ms(level)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity: Gravity::default(),
            lock_delay_ms: LOCK_DELAY_MS,
        }
    }
}
