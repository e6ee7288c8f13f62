//! Game state module - the event-driven phase state machine
//!
//! [`GameState`] owns the grid, the current piece and the event queue, and
//! moves through the phase cycle
//!
//! ```text
//! Generation → Falling → Lock → Pattern → Iterate → Animate → Eliminate → Completion
//!     ↑                                                                      │
//!     └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition clears the queue and pushes a single `Enter` event at the
//! current virtual time, so each phase sees its entry event exactly once and
//! nothing scheduled by the previous phase survives.
//!
//! Player input is applied straight to the live piece, independently of the
//! phase. Hard and soft drops that hit the stack go to `Pattern` directly,
//! skipping the lock delay.

use crate::config::EngineConfig;
use crate::core::{EventQueue, Grid, Piece, PieceBag, Randomizer};
use crate::error::EngineError;
use crate::marked_rows::MarkedRows;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = PieceBag> {
    grid: Grid,
    piece: Piece,
    /// True while `piece` is falling or waiting to lock
    piece_live: bool,
    phase: Phase,
    paused: bool,
    exiting: bool,
    level: u32,
    marked: MarkedRows,
    lines_cleared: u32,
    events: EventQueue,
    /// Virtual time the engine was created at
    start_time: Millis,
    /// Time of the most recent processed event; never goes backwards
    now: Millis,
    randomizer: R,
    config: EngineConfig,
}

impl GameState<PieceBag> {
    /// Create an engine fed by a 7-bag seeded from `config.seed`
    pub fn new(config: EngineConfig) -> Self {
        Self::with_randomizer(config, PieceBag::new(config.seed))
    }
}

impl Default for GameState<PieceBag> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: Randomizer> GameState<R> {
    /// Create an engine in the `NewGame` phase with an empty queue
    pub fn with_randomizer(config: EngineConfig, randomizer: R) -> Self {
        Self::starting_at(config, randomizer, 0)
    }

    /// Like [`GameState::with_randomizer`], with the virtual clock starting at `start_time`
    pub fn starting_at(config: EngineConfig, randomizer: R, start_time: Millis) -> Self {
        Self {
            grid: Grid::new(),
            piece: Piece::spawn(PieceKind::I),
            piece_live: false,
            phase: Phase::NewGame,
            paused: false,
            exiting: false,
            level: 0,
            marked: MarkedRows::new(),
            lines_cleared: 0,
            events: EventQueue::new(),
            start_time,
            now: start_time,
            randomizer,
            config,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn exiting(&self) -> bool {
        self.exiting
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The live piece, or `None` between lock and the next fall
    pub fn piece(&self) -> Option<&Piece> {
        self.piece_live.then_some(&self.piece)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn marked_rows(&self) -> &MarkedRows {
        &self.marked
    }

    pub fn queue(&self) -> &EventQueue {
        &self.events
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn start_time(&self) -> Millis {
        self.start_time
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Timestamp of the earliest scheduled event
    pub fn next_event_time(&self) -> Option<Millis> {
        self.events.next_time()
    }

    /// Schedule an event, typically mapped player input or `NewGame`
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Feed every queued event due at `now` into [`GameState::advance`],
    /// in timestamp order. Returns how many events were processed.
    pub fn run_until(&mut self, now: Millis) -> Result<usize, EngineError> {
        let mut processed = 0;
        while let Some(event) = self.events.pop_due(now) {
            self.advance(event)?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Process one event.
    ///
    /// The clock moves up to `event.time` first, so any transition stamps
    /// its `Enter` with the time of the event that caused it. The current
    /// phase's handler runs next. `NewGame` then forces a fresh game and
    /// `Quit` raises the exit flag whatever the phase. While a piece is
    /// live, input events act on it directly.
    pub fn advance(&mut self, event: Event) -> Result<(), EngineError> {
        if event.time > self.now {
            self.now = event.time;
        }

        match self.phase {
            Phase::Generation => self.step_generation(event),
            Phase::Falling => self.step_falling(event),
            Phase::Lock => self.step_lock(event),
            Phase::Pattern => self.step_pattern(event)?,
            Phase::Iterate => self.step_iterate(event),
            Phase::Animate => self.step_animate(event),
            Phase::Eliminate => self.step_eliminate(event)?,
            Phase::Completion => self.step_completion(event),
            Phase::NewGame | Phase::GameOver | Phase::Quitting => {}
        }

        match event.kind {
            EventKind::NewGame => self.reset(),
            EventKind::Quit => {
                self.exiting = true;
                self.piece_live = false;
                self.transition(Phase::Quitting);
            }
            _ => {}
        }

        if self.piece_live {
            self.apply_input(event.kind);
        }
        Ok(())
    }

    /// Enter `phase`: drop everything queued and schedule its `Enter` event
    fn transition(&mut self, phase: Phase) {
        self.phase = phase;
        self.events.clear();
        self.events.push(Event::new(EventKind::Enter, self.now));
    }

    /// Hard reset for `NewGame`, valid from any phase
    fn reset(&mut self) {
        self.grid.clear();
        self.piece_live = false;
        self.paused = false;
        self.marked.clear();
        self.level = 0;
        self.lines_cleared = 0;
        self.transition(Phase::Generation);
    }

    fn step_generation(&mut self, event: Event) {
        if event.kind != EventKind::Enter {
            return;
        }
        self.piece = Piece::spawn(self.randomizer.next_piece());
        if self.piece.fits(&self.grid) {
            self.transition(Phase::Falling);
        } else {
            self.transition(Phase::GameOver);
        }
    }

    fn step_falling(&mut self, event: Event) {
        if event.kind != EventKind::Enter {
            return;
        }
        self.piece_live = true;

        let fallen = self.piece.shifted(0, -1);
        if !fallen.fits(&self.grid) {
            self.transition(Phase::Lock);
            return;
        }
        self.piece = fallen;

        let next_fall = event.time + self.config.gravity_interval(self.level);
        self.events.push(Event::new(EventKind::Enter, next_fall));
    }

    fn step_lock(&mut self, event: Event) {
        match event.kind {
            EventKind::Enter => {
                let lockdown = event.time + self.config.lock_delay_ms;
                self.events.push(Event::new(EventKind::Lockdown, lockdown));
            }
            EventKind::Lockdown => self.transition(Phase::Pattern),
            _ => {}
        }
    }

    fn step_pattern(&mut self, event: Event) -> Result<(), EngineError> {
        if event.kind != EventKind::Enter {
            return Ok(());
        }
        self.piece_live = false;
        for (x, y) in self.piece.cells() {
            self.grid.set_cell(x, y, Cell::Fill1)?;
        }
        self.marked = MarkedRows::scan(&self.grid);
        self.transition(Phase::Iterate);
        Ok(())
    }

    fn step_iterate(&mut self, event: Event) {
        if event.kind == EventKind::Enter {
            self.transition(Phase::Animate);
        }
    }

    fn step_animate(&mut self, event: Event) {
        if event.kind == EventKind::Enter {
            self.transition(Phase::Eliminate);
        }
    }

    fn step_eliminate(&mut self, event: Event) -> Result<(), EngineError> {
        if event.kind != EventKind::Enter {
            return Ok(());
        }
        let rows = self.marked.top_down();
        for &row in &rows {
            self.grid.remove_line(row)?;
        }
        self.marked.clear();
        self.lines_cleared += rows.len() as u32;
        self.level = self.lines_cleared / LINES_PER_LEVEL;
        self.transition(Phase::Completion);
        Ok(())
    }

    fn step_completion(&mut self, event: Event) {
        if event.kind == EventKind::Enter {
            self.transition(Phase::Generation);
        }
    }

    /// Apply player input to the live piece. Collisions are silent no-ops.
    fn apply_input(&mut self, kind: EventKind) {
        match kind {
            EventKind::ShiftLeft => {
                self.try_adopt(self.piece.shifted(-1, 0));
            }
            EventKind::ShiftRight => {
                self.try_adopt(self.piece.shifted(1, 0));
            }
            EventKind::RotateCw => {
                self.try_adopt(self.piece.rotate_cw());
            }
            EventKind::RotateCcw => {
                self.try_adopt(self.piece.rotate_ccw());
            }
            EventKind::HardDrop => {
                self.piece = self.piece.dropped(&self.grid);
                self.transition(Phase::Pattern);
            }
            EventKind::SoftDrop => {
                if !self.try_adopt(self.piece.shifted(0, -1)) {
                    self.transition(Phase::Pattern);
                }
            }
            EventKind::Pause => self.paused = !self.paused,
            _ => {}
        }
    }

    /// Replace the live piece with `candidate` if it fits
    fn try_adopt(&mut self, candidate: Piece) -> bool {
        if candidate.fits(&self.grid) {
            self.piece = candidate;
            true
        } else {
            false
        }
    }
}
