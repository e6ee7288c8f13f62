//! Event queue - scheduled events ordered by timestamp
//!
//! Events are kept sorted ascending by time. A pushed event lands after
//! every queued event with the same or an earlier timestamp, so events
//! sharing a timestamp come out in arrival order.
//!
//! Expected depth is a handful of entries, so a sorted `VecDeque` with a
//! binary-searched insertion point is plenty.

use std::collections::VecDeque;

use crate::types::{Event, Millis};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Insert keeping ascending time order (FIFO among equal times)
    pub fn push(&mut self, event: Event) {
        let at = self.events.partition_point(|queued| queued.time <= event.time);
        self.events.insert(at, event);
    }

    /// Earliest event without removing it, `None` when empty
    pub fn peek(&self) -> Option<Event> {
        self.events.front().copied()
    }

    /// Remove and return the earliest event, `None` when empty
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Pop the earliest event only if it is due at `now`
    pub fn pop_due(&mut self, now: Millis) -> Option<Event> {
        match self.events.front() {
            Some(event) if event.time <= now => self.events.pop_front(),
            _ => None,
        }
    }

    /// Timestamp of the earliest event
    pub fn next_time(&self) -> Option<Millis> {
        self.events.front().map(|e| e.time)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Queued events, earliest first
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}
