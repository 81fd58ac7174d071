//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Point;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(20, 28, 24);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const HELP_LINES: [&str; 4] = ["arrows/wasd  turn", "space/p  pause", "r  restart", "q  quit"];

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps board cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, state: &GameState) -> (u16, u16) {
        (
            state.grid_width.saturating_mul(self.cell_w).saturating_add(2),
            state.grid_height.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render a state snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(state);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let bg = CellStyle::new(Rgb::new(60, 80, 70), PLAY_BG);

        fb.fill_rect(
            start_x.saturating_add(1),
            start_y.saturating_add(1),
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let origin = (start_x, start_y);
        for y in 0..state.grid_height as i32 {
            for x in 0..state.grid_width as i32 {
                self.fill_board_cell(fb, origin, Point::new(x, y), '·', bg.dim());
            }
        }

        if let Some(food) = state.food {
            let style = CellStyle::new(Rgb::new(230, 70, 70), PLAY_BG).bold();
            self.fill_board_cell(fb, origin, food, '●', style);
        }

        // Tail first so that the head wins when a fatal move overlaps the body.
        let dead = state.is_game_over && !state.is_won;
        let body = CellStyle::new(Rgb::new(70, 190, 90), PLAY_BG);
        for &segment in state.snake.iter().skip(1).rev() {
            self.fill_board_cell(fb, origin, segment, '▓', body);
        }
        if let Some(&head) = state.snake.first() {
            let fg = if dead {
                Rgb::new(240, 90, 60)
            } else {
                Rgb::new(170, 255, 120)
            };
            self.fill_board_cell(fb, origin, head, '█', CellStyle::new(fg, PLAY_BG).bold());
        }

        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);

        if state.is_won {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN");
        } else if state.is_game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if state.is_paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        // Edges past the viewport are clipped anyway.
        let span_w = (w - 1).min(fb.width().saturating_sub(x));
        let span_h = (h - 1).min(fb.height().saturating_sub(y));
        for dx in 1..span_w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, bottom, '─', style);
        }
        for dy in 1..span_h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(right, y + dy, '│', style);
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        (start_x, start_y): (u16, u16),
        cell: Point,
        ch: char,
        style: CellStyle,
    ) {
        // Off-board points have nowhere to go.
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        // Wide boards can place cells far past the viewport, so offsets are
        // computed in u64 and clipped before narrowing.
        let px = start_x as u64 + 1 + cell.x as u64 * self.cell_w as u64;
        let py = start_y as u64 + 1 + cell.y as u64 * self.cell_h as u64;
        if px >= fb.width() as u64 || py >= fb.height() as u64 {
            return;
        }
        fb.fill_rect(px as u16, py as u16, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, state_label(state), value);
        y = y.saturating_add(2);

        // Key help only when it fits completely.
        if panel_w < 18 {
            return;
        }
        let help = value.dim();
        for line in HELP_LINES {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Status word shown in the side panel.
pub fn state_label(state: &GameState) -> &'static str {
    if state.is_won {
        "YOU WIN"
    } else if state.is_game_over {
        "GAME OVER"
    } else if state.is_paused {
        "PAUSED"
    } else {
        "RUNNING"
    }
}
