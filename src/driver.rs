//! Driving-loop helpers: the virtual clock and per-frame wait computation.

use std::time::{Duration, Instant};

use crate::types::{EventKind, Millis, FRAME_MS};

/// Wall clock converted to engine milliseconds, with pause support.
///
/// While frozen, [`VirtualClock::now_ms_at`] keeps returning the instant of
/// freezing, and the frozen span is excluded once the clock resumes.
#[derive(Debug, Clone, Copy)]
pub struct VirtualClock {
    origin: Instant,
    frozen_at: Option<Instant>,
    frozen_total: Duration,
}

impl VirtualClock {
    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(origin: Instant) -> Self {
        Self {
            origin,
            frozen_at: None,
            frozen_total: Duration::ZERO,
        }
    }

    pub fn now_ms(&self) -> Millis {
        self.now_ms_at(Instant::now())
    }

    pub fn now_ms_at(&self, at: Instant) -> Millis {
        let end = self.frozen_at.unwrap_or(at);
        let running = end
            .saturating_duration_since(self.origin)
            .saturating_sub(self.frozen_total);
        running.as_millis() as Millis
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_at.is_some()
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.set_frozen_at(frozen, Instant::now());
    }

    pub fn set_frozen_at(&mut self, frozen: bool, at: Instant) {
        match (frozen, self.frozen_at) {
            (true, None) => self.frozen_at = Some(at),
            (false, Some(since)) => {
                self.frozen_total += at.saturating_duration_since(since);
                self.frozen_at = None;
            }
            _ => {}
        }
    }
}

/// Virtual time the loop should wake up at: the next frame or the next
/// scheduled event, whichever comes first.
pub fn frame_deadline(last_frame: Millis, next_event: Option<Millis>) -> Millis {
    let frame = last_frame.saturating_add(FRAME_MS);
    match next_event {
        Some(t) => frame.min(t),
        None => frame,
    }
}

/// How long to block on input before `deadline`, never negative.
pub fn poll_timeout(now: Millis, deadline: Millis) -> Duration {
    Duration::from_millis(deadline.saturating_sub(now))
}

/// Input that still reaches the engine while the game is paused.
pub fn accepts_while_paused(kind: EventKind) -> bool {
    matches!(
        kind,
        EventKind::Pause | EventKind::Quit | EventKind::NewGame
    )
}
