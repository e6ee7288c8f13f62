//! GameView: maps an engine [`GameState`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The grid is stored bottom-up, the screen is top-down: grid row
//! `VISIBLE_HEIGHT - 1` is drawn on the first board line and row 0 on the last.
//! Rows above the visible area are never drawn.

use crate::core::Randomizer;
use crate::engine::GameState;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, PieceKind, GRID_WIDTH, VISIBLE_HEIGHT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Driver-side counters shown on the debug status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub events: u64,
}

/// Widest board cell `GameView::new` accepts, in terminal columns.
pub const MAX_CELL_W: u16 = 4;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps cells roughly square
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// `cell_w` is clamped to `1..=MAX_CELL_W`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    /// Render into a caller-owned framebuffer, resizing it to `viewport`.
    ///
    /// `stats` turns on the debug status line on the last terminal row.
    pub fn render_into<R: Randomizer>(
        &self,
        game: &GameState<R>,
        stats: Option<&FrameStats>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let board_w = (GRID_WIDTH as u16).saturating_mul(self.cell_w);
        let board_h = VISIBLE_HEIGHT as u16;
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_w,
            board_h,
            ' ',
            Style::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let marked = game.marked_rows();
        for row in 0..VISIBLE_HEIGHT as i8 {
            for col in 0..GRID_WIDTH as i8 {
                let cell = game.grid().get_cell(col, row).unwrap_or_default();
                let (ch, style) = if marked.is_marked(row as usize) && cell.is_filled() {
                    ('▒', Style::new(Rgb::new(255, 255, 255), BOARD_BG).bold())
                } else {
                    cell_glyph(cell)
                };
                self.fill_cell(fb, start_x, start_y, col, row, ch, style);
            }
        }

        if let Some(piece) = game.piece() {
            let style = Style::new(piece_color(piece.kind), BOARD_BG).bold();
            for (col, row) in piece.cells() {
                self.fill_cell(fb, start_x, start_y, col, row, '█', style);
            }
        }

        self.draw_side_panel(fb, game, viewport, start_x, start_y, frame_w);

        if game.paused() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if game.game_over() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        if let Some(stats) = stats {
            draw_debug_line(fb, game, stats, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: Randomizer>(
        &self,
        game: &GameState<R>,
        stats: Option<&FrameStats>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, stats, viewport, &mut fb);
        fb
    }

    /// Paint one grid cell; cells outside the visible rows are skipped.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: i8,
        row: i8,
        ch: char,
        style: Style,
    ) {
        if col < 0 || col >= GRID_WIDTH as i8 || row < 0 || row >= VISIBLE_HEIGHT as i8 {
            return;
        }
        let screen_row = (VISIBLE_HEIGHT as i8 - 1 - row) as u16;
        let px = start_x
            .saturating_add(1)
            .saturating_add((col as u16).saturating_mul(self.cell_w));
        let py = start_y + 1 + screen_row;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel<R: Randomizer>(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState<R>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_str(panel_x, y + 1, &game.level().to_string(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_str(panel_x, y + 1, &game.lines_cleared().to_string(), value);
        y = y.saturating_add(3);

        if let Some(piece) = game.piece() {
            fb.put_str(panel_x, y, "PIECE", label);
            fb.put_str(panel_x, y + 1, &piece.kind.as_str().to_uppercase(), value);
        }
    }
}

fn cell_glyph(cell: Cell) -> (char, Style) {
    match cell {
        Cell::Empty => ('·', Style::new(Rgb::new(90, 90, 100), BOARD_BG)),
        Cell::Fill1 => ('█', Style::new(Rgb::new(160, 160, 170), BOARD_BG)),
        Cell::Fill2 => ('▓', Style::new(Rgb::new(120, 120, 200), BOARD_BG)),
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

fn draw_debug_line<R: Randomizer>(
    fb: &mut FrameBuffer,
    game: &GameState<R>,
    stats: &FrameStats,
    viewport: Viewport,
) {
    let Some(y) = viewport.height.checked_sub(1) else {
        return;
    };
    let mut line = format!(
        "phase={} queue={} now={} frames={} events={}",
        game.phase().as_str(),
        game.queue().len(),
        game.now(),
        stats.frames,
        stats.events,
    );
    if let Some(piece) = game.piece() {
        line.push_str(&format!(
            " piece={}/{}",
            piece.kind.as_str(),
            piece.rotation.as_str()
        ));
    }
    let style = Style::new(Rgb::new(140, 140, 140), PANEL_BG);
    fb.put_str(0, y, &line, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedSequence;
    use crate::engine::EngineConfig;
    use crate::types::{Event, EventKind};

    fn started(kind: PieceKind) -> GameState<FixedSequence> {
        let mut game =
            GameState::with_randomizer(EngineConfig::default(), FixedSequence::repeat(kind));
        game.push_event(Event::new(EventKind::NewGame, 0));
        game.run_until(0).unwrap();
        game
    }

    #[test]
    fn test_live_piece_drawn_near_top() {
        let game = started(PieceKind::I);
        let fb = GameView::default().render(&game, None, Viewport::new(22, 22));
        // I piece at row 19 spans columns 3..=6, the first board line
        assert_eq!(fb.row_text(1), "│······████████····│");
    }

    #[test]
    fn test_merged_cells_drawn_at_bottom() {
        let mut game = started(PieceKind::O);
        game.push_event(Event::new(EventKind::HardDrop, 5));
        game.run_until(5).unwrap();
        let fb = GameView::default().render(&game, None, Viewport::new(22, 22));
        assert!(fb.row_text(20).contains("████"));
        assert!(fb.row_text(19).contains("████"));
    }

    #[test]
    fn test_paused_overlay() {
        let mut game = started(PieceKind::T);
        game.push_event(Event::new(EventKind::Pause, 1));
        game.run_until(1).unwrap();
        let fb = GameView::default().render(&game, None, Viewport::new(22, 22));
        assert!(fb.row_text(11).contains("PAUSED"));
    }

    #[test]
    fn test_debug_line_on_last_row() {
        let game = started(PieceKind::T);
        let stats = FrameStats {
            frames: 3,
            events: 9,
        };
        let fb = GameView::default().render(&game, Some(&stats), Viewport::new(60, 24));
        assert!(fb
            .row_text(23)
            .starts_with("phase=falling queue=1 now=0 frames=3"));
    }

    #[test]
    fn test_debug_line_shows_piece_pose() {
        let mut game = started(PieceKind::T);
        game.push_event(Event::new(EventKind::RotateCw, 1));
        game.run_until(1).unwrap();
        let fb = GameView::default().render(&game, Some(&FrameStats::default()), Viewport::new(80, 24));
        assert!(fb.row_text(23).contains("piece=t/east"));
    }

    #[test]
    fn test_cell_width_is_clamped() {
        let game = started(PieceKind::I);
        let fb = GameView::new(u16::MAX).render(&game, None, Viewport::new(60, 22));
        // 10 cells of 4 columns plus the border
        assert_eq!(fb.row_text(0).trim(), format!("┌{}┐", "─".repeat(40)));

        let narrow = GameView::new(0).render(&game, None, Viewport::new(12, 22));
        assert_eq!(narrow.row_text(1), "│···████···│");
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let game = started(PieceKind::Z);
        let fb = GameView::default().render(&game, Some(&FrameStats::default()), Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
