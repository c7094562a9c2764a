//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, ShapeKind, BOARD_COLS, BOARD_ROWS};

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

/// Draws the board, a side panel and the start prompt.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const LABEL: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: PANEL_BG,
    bold: true,
    dim: false,
};
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_COLS as u16) * self.cell_w + 2,
            (BOARD_ROWS as u16) * self.cell_h + 2,
        )
    }

    /// Top-left corner of the border for a viewport.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Allocation-free once `fb` has the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Every cell is drawn in its own color, occupied or not.
        for (row, line) in snap.board.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                let color = Rgb::from(cell.color);
                let ch = if cell.occupied { '█' } else { ' ' };
                let style = CellStyle::new(color, color);
                self.fill_cell_rect(fb, start_x, start_y, col as u16, row as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.phase == GamePhase::AwaitingNewGame {
            let title = if snap.games == 0 { "BLOCKFALL" } else { "GAME OVER" };
            let mid_y = start_y.saturating_add(frame_h / 2);
            self.draw_overlay_text(fb, start_x, mid_y.saturating_sub(1), frame_w, title);
            self.draw_overlay_text(fb, start_x, mid_y.saturating_add(1), frame_w, "ENTER TO START");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        for (label, value) in [("LINES", snap.lines), ("PIECES", snap.pieces), ("GAMES", snap.games)] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "AUTO", LABEL);
        fb.put_str(
            panel_x,
            y.saturating_add(1),
            if snap.auto_descend { "ON" } else { "OFF" },
            VALUE,
        );
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "PIECE", LABEL);
        if let Some(active) = snap.active {
            let swatch = CellStyle::new(Rgb::from(active.color), PANEL_BG);
            fb.put_char(panel_x, y.saturating_add(1), '█', swatch);
            fb.put_str(panel_x + 2, y.saturating_add(1), shape_letter(active.kind), VALUE);
        } else {
            fb.put_str(panel_x, y.saturating_add(1), "-", VALUE);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, y: u16, frame_w: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, LABEL);
    }
}

fn shape_letter(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Z => "Z",
        ShapeKind::S => "S",
        ShapeKind::T => "T",
        ShapeKind::J => "J",
        ShapeKind::L => "L",
        ShapeKind::I => "I",
        ShapeKind::O => "O",
    }
}
