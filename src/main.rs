//! Terminal blockfall runner (default binary).
//!
//! Owns the wall clock and the terminal. Each frame it drains the events due
//! at the current virtual time into the engine, redraws, then waits for at
//! most one key until the next frame or scheduled event.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};

use blockfall::core::PieceBag;
use blockfall::driver::{accepts_while_paused, frame_deadline, poll_timeout, VirtualClock};
use blockfall::engine::{EngineConfig, GameState, Gravity};
use blockfall::input::event_for_key;
use blockfall::term::{FrameBuffer, FrameStats, GameView, TerminalRenderer, Viewport, MAX_CELL_W};
use blockfall::types::{Event, EventKind, Millis, LOCK_DELAY_MS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the 7-bag piece generator. The same seed replays the same pieces.
    #[arg(short, long, default_value_t = 1)]
    seed: u32,
    /// Wait between a piece touching down and locking, in milliseconds.
    #[arg(long, default_value_t = LOCK_DELAY_MS)]
    lock_delay_ms: Millis,
    /// Fall period in milliseconds at every level. Without it gravity speeds up with the level.
    #[arg(long)]
    constant_gravity_ms: Option<Millis>,
    /// Terminal columns per board cell.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=MAX_CELL_W as i64))]
    cell_width: u16,
    /// Draw a status line under the board and print a run summary on exit.
    /// Also enabled by setting BLOCKFALL_DEBUG.
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        let gravity = match self.constant_gravity_ms {
            Some(ms) => Gravity::Constant(ms),
            None => Gravity::ByLevel,
        };
        EngineConfig::default()
            .with_seed(self.seed)
            .with_gravity(gravity)
            .with_lock_delay_ms(self.lock_delay_ms)
    }

    fn debug_enabled(&self) -> bool {
        self.debug || std::env::var_os("BLOCKFALL_DEBUG").is_some_and(|v| v != "0")
    }
}

/// What a finished run looked like, for the debug summary.
struct RunSummary {
    stats: FrameStats,
    virtual_ms: Millis,
    level: u32,
    lines: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let debug = args.debug_enabled();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let view = GameView::new(args.cell_width);
    let result = run(&mut term, &view, args.engine_config(), debug);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    if debug {
        eprintln!(
            "[blockfall] seed={} frames={} events={} virtual_ms={} level={} lines={}",
            args.seed,
            summary.stats.frames,
            summary.stats.events,
            summary.virtual_ms,
            summary.level,
            summary.lines,
        );
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    view: &GameView,
    config: EngineConfig,
    debug: bool,
) -> Result<RunSummary> {
    let mut clock = VirtualClock::start();
    let mut game = GameState::starting_at(config, PieceBag::new(config.seed), clock.now_ms());
    game.push_event(Event::new(EventKind::NewGame, clock.now_ms()));

    let mut fb = FrameBuffer::new(0, 0);
    let mut stats = FrameStats::default();

    while !game.exiting() {
        let now = clock.now_ms();
        stats.events += game.run_until(now)? as u64;
        clock.set_frozen(game.paused());
        if game.exiting() {
            break;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, debug.then_some(&stats), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
        stats.frames += 1;

        let deadline = frame_deadline(now, game.next_event_time());
        let timeout = poll_timeout(clock.now_ms(), deadline);
        if !event::poll(timeout)? {
            continue;
        }
        let TermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if let Some(kind) = event_for_key(key) {
            if !game.paused() || accepts_while_paused(kind) {
                game.push_event(Event::new(kind, clock.now_ms()));
            }
        }
    }

    Ok(RunSummary {
        stats,
        virtual_ms: game.now().saturating_sub(game.start_time()),
        level: game.level(),
        lines: game.lines_cleared(),
    })
}
