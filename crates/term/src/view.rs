//! ArenaView: draws a [`GameShell`] into a [`FrameBuffer`].
//!
//! Pure, no I/O. Each grid cell is two terminal columns wide to compensate
//! for the glyph aspect ratio.

use crate::core::{GameShell, Session};
use crate::fb::{CellStyle, FrameBuffer, Rgb, BLACK};
use crate::types::{PieceKind, EMPTY};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const CELL_W: u16 = 2;
const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 14;

const KEY_HELP: [&str; 7] = [
    "←/→ move",
    "↓   drop",
    "↑   rotate",
    "Enter start",
    "p   pause",
    "r   reset",
    "q   quit",
];

/// Foreground color for a cell tag; `None` for empty or unknown tags
pub fn tag_color(tag: u8) -> Option<Rgb> {
    let rgb = match PieceKind::from_tag(tag)? {
        PieceKind::I => Rgb::new(0, 220, 220),  // cyan
        PieceKind::J => Rgb::new(60, 100, 230), // blue
        PieceKind::L => Rgb::new(255, 150, 0),  // orange
        PieceKind::O => Rgb::new(240, 220, 60), // yellow
        PieceKind::S => Rgb::new(80, 210, 100), // green
        PieceKind::T => Rgb::new(170, 90, 210), // purple
        PieceKind::Z => Rgb::new(220, 60, 60),  // red
    };
    Some(rgb)
}

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

/// Top-left corner of the well border and its outer size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ArenaView;

impl ArenaView {
    pub fn new() -> Self {
        Self
    }

    /// Where the bordered well lands for a grid of this size, centered
    pub fn layout(&self, session: &Session, viewport: Viewport) -> WellRect {
        let grid = session.grid();
        let w = (grid.width() as u16).saturating_mul(CELL_W).saturating_add(2);
        let h = (grid.height() as u16).saturating_add(2);
        WellRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render into a caller-owned framebuffer, resizing it to the viewport
    pub fn render_into(&self, shell: &GameShell, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::default());

        let session = shell.session();
        let well = self.layout(session, viewport);
        let grid = session.grid();

        draw_border(fb, well, CellStyle::new(Rgb::new(200, 200, 200), BLACK));
        fb.fill_rect(
            well.x + 1,
            well.y + 1,
            well.w.saturating_sub(2),
            well.h.saturating_sub(2),
            ' ',
            CellStyle::new(WELL_BG, WELL_BG),
        );

        for (y, row) in grid.rows().iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                if tag != EMPTY {
                    draw_cell(fb, well, x as i32, y as i32, tag);
                }
            }
        }

        // Drawn last: after a failed spawn it overlaps the stack.
        for (x, y, tag) in session.active().cells() {
            if x >= 0 && y >= 0 && (x as usize) < grid.width() && (y as usize) < grid.height() {
                draw_cell(fb, well, x, y, tag);
            }
        }

        draw_side_panel(fb, shell, well, viewport);

        if shell.game_over_visible() {
            draw_overlay(fb, well, "GAME OVER");
        } else if session.paused() {
            draw_overlay(fb, well, "PAUSED");
        }
    }

    pub fn render(&self, shell: &GameShell, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(shell, viewport, &mut fb);
        fb
    }
}

fn draw_cell(fb: &mut FrameBuffer, well: WellRect, x: i32, y: i32, tag: u8) {
    let Some(fg) = tag_color(tag) else { return };
    let px = well.x + 1 + (x as u16) * CELL_W;
    let py = well.y + 1 + y as u16;
    fb.fill_rect(px, py, CELL_W, 1, '█', CellStyle::new(fg, WELL_BG));
}

fn draw_border(fb: &mut FrameBuffer, well: WellRect, style: CellStyle) {
    let WellRect { x, y, w, h } = well;
    if w < 2 || h < 2 {
        return;
    }

    fb.set(x, y, '┌', style);
    fb.set(x + w - 1, y, '┐', style);
    fb.set(x, y + h - 1, '└', style);
    fb.set(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.set(x + dx, y, '─', style);
        fb.set(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, '│', style);
        fb.set(x + w - 1, y + dy, '│', style);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, shell: &GameShell, well: WellRect, viewport: Viewport) {
    let panel_x = well.x.saturating_add(well.w).saturating_add(PANEL_GAP);
    if viewport.width.saturating_sub(panel_x) < PANEL_MIN_W {
        return;
    }

    let label = CellStyle::default().bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
    let help = CellStyle::new(Rgb::new(130, 130, 140), BLACK);
    let session = shell.session();

    let mut y = well.y;
    for (name, n) in [
        ("SCORE", session.score()),
        ("PIECES", session.pieces_locked()),
    ] {
        fb.put_str(panel_x, y, name, label);
        fb.put_str(panel_x, y + 1, &n.to_string(), value);
        y = y.saturating_add(3);
    }

    fb.put_str(panel_x, y, "KEYS", label);
    for line in KEY_HELP {
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, line, help);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, well: WellRect, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = well.x + well.w.saturating_sub(text_w) / 2;
    let y = well.y + well.h / 2;
    fb.put_str(x, y, text, CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold());
}
