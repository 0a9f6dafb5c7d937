//! GameView: paints an engine [`Snapshot`] into a framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against the buffer contents.
//! The view knows nothing about the engine beyond the snapshot.

use blockfall_core::{Shape, Snapshot};
use blockfall_types::{GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{FrameBuffer, Glyph, Rgb};

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

const PLAY_BG: Rgb = Rgb::new(24, 24, 32);
const PANEL_FG: Rgb = Rgb::new(210, 210, 210);

/// Cell colors, indexed by the snapshot's 1..=7 cell ids (the original
/// palette of the source game).
fn color_for_id(id: u8) -> Rgb {
    match id {
        1 => Rgb::new(255, 13, 114), // I
        2 => Rgb::new(13, 194, 255), // J
        3 => Rgb::new(13, 255, 114), // L
        4 => Rgb::new(245, 56, 255), // O
        5 => Rgb::new(255, 142, 13), // S
        6 => Rgb::new(255, 225, 56), // T
        7 => Rgb::new(56, 119, 255), // Z
        _ => Rgb::new(128, 128, 128),
    }
}

/// Renders a snapshot: bordered board, active piece, queued-piece preview,
/// and the score/best/level/lines panel.
pub struct GameView {
    /// Terminal columns per board cell (2 compensates for glyph aspect).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Paint one frame. `best` is the stored high score shown in the panel.
    pub fn render(&self, snapshot: &Snapshot, best: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let board_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_h = BOARD_HEIGHT as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let x0 = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let y0 = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, x0, y0, frame_w, frame_h);
        fb.fill_rect(
            x0 + 1,
            y0 + 1,
            board_w,
            board_h,
            Glyph::new(' ', PANEL_FG, PLAY_BG),
        );

        // Locked cells.
        for (y, row) in snapshot.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                if id != 0 {
                    self.draw_cell(&mut fb, x0, y0, x as i8, y as i8, id);
                } else {
                    self.draw_empty(&mut fb, x0, y0, x as u16, y as u16);
                }
            }
        }

        // Active piece; rows above the top edge stay hidden.
        if let Some(active) = &snapshot.active {
            for (dx, dy) in active.shape.filled_cells() {
                let x = active.x + dx;
                let y = active.y + dy;
                if y >= 0 {
                    self.draw_cell(&mut fb, x0, y0, x, y, active.kind.id());
                }
            }
        }

        self.draw_panel(&mut fb, snapshot, best, x0 + frame_w + 2, y0);

        match snapshot.phase {
            GamePhase::Idle => self.draw_overlay(&mut fb, x0, y0, frame_w, frame_h, "PRESS ENTER"),
            GamePhase::Paused => self.draw_overlay(&mut fb, x0, y0, frame_w, frame_h, "PAUSED"),
            GamePhase::GameOver => {
                self.draw_overlay(&mut fb, x0, y0, frame_w, frame_h, "GAME OVER")
            }
            GamePhase::Running => {}
        }

        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: i8, y: i8, id: u8) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let glyph = Glyph::new('█', color_for_id(id), PLAY_BG).bold();
        let px = x0 + 1 + x as u16 * self.cell_w;
        fb.fill_rect(px, y0 + 1 + y as u16, self.cell_w, 1, glyph);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: u16, y: u16) {
        let glyph = Glyph::new('·', Rgb::new(90, 90, 100), PLAY_BG).dim();
        // A single dot per cell keeps the grid readable at 2-wide cells.
        fb.put(x0 + 1 + x * self.cell_w, y0 + 1 + y, glyph);
        if self.cell_w > 1 {
            fb.fill_rect(
                x0 + 2 + x * self.cell_w,
                y0 + 1 + y,
                self.cell_w - 1,
                1,
                Glyph::new(' ', PANEL_FG, PLAY_BG),
            );
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Glyph::new(' ', Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.put(x, y, style.with_char('┌'));
        fb.put(x + w - 1, y, style.with_char('┐'));
        fb.put(x, y + h - 1, style.with_char('└'));
        fb.put(x + w - 1, y + h - 1, style.with_char('┘'));
        for dx in 1..w - 1 {
            fb.put(x + dx, y, style.with_char('─'));
            fb.put(x + dx, y + h - 1, style.with_char('─'));
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, style.with_char('│'));
            fb.put(x + w - 1, y + dy, style.with_char('│'));
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snapshot: &Snapshot, best: u32, x: u16, y0: u16) {
        let label = Glyph::new(' ', PANEL_FG, Rgb::new(0, 0, 0)).bold();
        let value = Glyph::new(' ', Rgb::new(190, 190, 190), Rgb::new(0, 0, 0));

        let mut y = y0;
        for (name, amount) in [
            ("SCORE", snapshot.score),
            ("BEST", best.max(snapshot.score)),
            ("LEVEL", snapshot.level),
            ("LINES", snapshot.lines),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_str(x, y + 1, &amount.to_string(), value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        fb.put_str(x + 5, y, &snapshot.queued.letter().to_string(), value);
        self.draw_preview(fb, &snapshot.queued_shape(), x, y + 1);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, shape: &Shape, x: u16, y: u16) {
        for (dx, dy) in shape.filled_cells() {
            let id = shape.at(dy as usize, dx as usize);
            let glyph = Glyph::new('█', color_for_id(id), Rgb::new(0, 0, 0));
            fb.fill_rect(x + dx as u16 * self.cell_w, y + dy as u16, self.cell_w, 1, glyph);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, w: u16, h: u16, text: &str) {
        let len = text.chars().count() as u16;
        let x = x0 + (w.saturating_sub(len)) / 2;
        let y = y0 + h / 2;
        let style = Glyph::new(' ', Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

/// Columns reserved to the right of the board for the info panel.
const PANEL_WIDTH: u16 = 14;
