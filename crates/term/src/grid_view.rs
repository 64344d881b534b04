//! GridView: maps a sandbox snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The same view also answers where
//! the field sits on screen, which the input layer needs to translate pointer
//! positions into grid cells.

use crate::core::Sandbox;
use crate::fb::{FrameBuffer, Style};
use crate::types::{CELL_COLS, CELL_ROWS};

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

// Field palette: pale blue for empty cells, green for dwellers, light gray
// chrome.
const DEAD_STYLE: Style = Style {
    fg: (150, 150, 210),
    bg: (192, 192, 255),
};
const ALIVE_STYLE: Style = Style {
    fg: (24, 96, 24),
    bg: (32, 128, 32),
};
const BORDER_STYLE: Style = Style {
    fg: (60, 60, 60),
    bg: (192, 192, 192),
};

/// Renders the field with a border and a status line underneath.
pub struct GridView {
    /// Grid cell footprint in terminal columns/rows.
    cell_cols: u16,
    cell_rows: u16,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            cell_cols: CELL_COLS,
            cell_rows: CELL_ROWS,
        }
    }
}

impl GridView {
    pub fn new(cell_cols: u16, cell_rows: u16) -> Self {
        Self {
            cell_cols: cell_cols.max(1),
            cell_rows: cell_rows.max(1),
        }
    }

    /// Terminal position of grid cell (0, 0) for the given viewport, plus the
    /// cell pitch. Feed this to the input layer's pointer translation.
    pub fn field_origin(&self, sandbox: &Sandbox, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(sandbox);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;
        // Interior starts one terminal cell inside the border.
        (start_x + 1, start_y + 1)
    }

    pub fn cell_pitch(&self) -> (u16, u16) {
        (self.cell_cols, self.cell_rows)
    }

    fn frame_size(&self, sandbox: &Sandbox) -> (u16, u16) {
        let grid = sandbox.grid();
        let field_w = (grid.width() as u16) * self.cell_cols;
        let field_h = (grid.height() as u16) * self.cell_rows;
        (field_w + 2, field_h + 2)
    }

    /// Render the sandbox into a fresh framebuffer.
    pub fn render(&self, sandbox: &Sandbox, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid = sandbox.grid();
        let (frame_w, frame_h) = self.frame_size(sandbox);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;
        let (origin_x, origin_y) = (start_x + 1, start_y + 1);

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let alive = grid.get(col as i32, row as i32).unwrap_or(false);
                let (ch, style) = if alive {
                    ('█', ALIVE_STYLE)
                } else {
                    ('·', DEAD_STYLE)
                };
                fb.fill_rect(
                    origin_x + (col as u16) * self.cell_cols,
                    origin_y + (row as u16) * self.cell_rows,
                    self.cell_cols,
                    self.cell_rows,
                    ch,
                    style,
                );
            }
        }

        fb.put_str(
            start_x,
            start_y + frame_h,
            &status_line(sandbox),
            Style::default(),
        );

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        fb.fill_rect(x, y, w, 1, ' ', BORDER_STYLE);
        fb.fill_rect(x, y + h - 1, w, 1, ' ', BORDER_STYLE);
        fb.fill_rect(x, y, 1, h, ' ', BORDER_STYLE);
        fb.fill_rect(x + w - 1, y, 1, h, ' ', BORDER_STYLE);
    }
}

/// Status text below the field: control hints, step delay, run state.
pub fn status_line(sandbox: &Sandbox) -> String {
    let state = if sandbox.is_running() {
        "RUNNING"
    } else {
        "PAUSED"
    };
    format!(
        "Life. LMB draws, RMB runs, wheel sets delay ({} ms) - {} - {} alive - q quits",
        sandbox.delay_ms(),
        state,
        sandbox.grid().population(),
    )
}
