//! MazeView: maps a `core::MazeSession` plus its fog layer into a terminal
//! framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{MazeSession, Tile};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::fog_layer::FogLayer;

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

const WALL: CellStyle = CellStyle::new(Rgb::new(120, 120, 150), Rgb::new(60, 60, 80));
const FLOOR: CellStyle = CellStyle::new(Rgb::new(90, 84, 76), Rgb::new(34, 31, 28));
const EXIT: CellStyle = CellStyle::new(Rgb::new(90, 230, 130), Rgb::new(20, 60, 30));
const TREASURE: Rgb = Rgb::new(250, 210, 60);
const PLAYER: Rgb = Rgb::new(255, 240, 200);

/// A lightweight terminal renderer for the fogged maze.
pub struct MazeView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for MazeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl MazeView {
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

    /// Render the session into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        session: &MazeSession,
        fog: &FogLayer,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let maze = session.maze();
        let frame_w = maze.width().saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = maze.height().saturating_mul(self.cell_h).saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let (ch, style) = match maze.tile(x as i32, y as i32) {
                    Some(Tile::Floor) | None => ('·', FLOOR),
                    Some(Tile::Wall) => ('█', WALL),
                    Some(Tile::Exit) => ('▒', EXIT),
                };
                let style = style.fogged(fog.get(x, y));
                self.fill_cell_rect(fb, start_x, start_y, x, y, ch, style);
            }
        }

        for t in session.treasures().iter().filter(|t| !t.collected) {
            let alpha = session.treasure_alpha(t);
            if alpha <= 0.0 {
                continue;
            }
            let (x, y) = (t.x as u16, t.y as u16);
            let bg = FLOOR.bg.under(fog.get(x, y));
            let style = CellStyle {
                fg: bg.fade_to(TREASURE, alpha),
                bg,
                bold: alpha >= 1.0,
                dim: false,
            };
            self.fill_cell_rect(fb, start_x, start_y, x, y, '$', style);
        }

        let (px, py) = session.player();
        let player = CellStyle {
            fg: PLAYER,
            bg: FLOOR.bg.under(fog.get(px as u16, py as u16)),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, px as u16, py as u16, '@', player);

        self.draw_side_panel(fb, session, viewport, start_x, start_y, frame_w);

        if session.escaped() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "ESCAPED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &MazeSession, fog: &FogLayer, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, fog, viewport, &mut fb);
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

        // Only the part inside the framebuffer is worth drawing.
        for dx in 1..(w - 1).min(fb.width()) {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..(h - 1).min(fb.height()) {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
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
        // Cells past the u16 edge clamp there and are clipped by the framebuffer.
        let px = start_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &MazeSession,
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

        let label = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, session.moves(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LOOT", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, session.collected(), value);
        let digits = digit_count(session.collected());
        fb.put_char(panel_x + digits, y, '/', dim);
        fb.put_u32(panel_x + digits + 1, y, session.treasures().len() as u32, dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "EXPLORED", label);
        y = y.saturating_add(1);
        let pct = (session.explored_ratio() * 100.0).round() as u32;
        fb.put_u32(panel_x, y, pct, value);
        fb.put_char(panel_x + digit_count(pct), y, '%', value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FOG", label);
        y = y.saturating_add(1);
        let state = if session.is_settled() { "still" } else { "shifting" };
        fb.put_str(panel_x, y, state, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, session.config().seed, value);
        y = y.saturating_add(2);

        if y < viewport.height {
            fb.put_str(panel_x, y, "r: new maze", dim);
        }
        y = y.saturating_add(1);
        if y < viewport.height {
            fb.put_str(panel_x, y, "q: quit", dim);
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
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Cheap change detector for [`crate::RenderThrottle`].
///
/// Covers everything the view draws except the fog blend, which callers
/// report separately as "not static".
pub fn frame_fingerprint(session: &MazeSession, viewport: Viewport) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    let (px, py) = session.player();
    let words = [
        px as u32,
        py as u32,
        session.moves(),
        session.collected(),
        session.config().seed,
        session.escaped() as u32,
        viewport.width as u32,
        viewport.height as u32,
    ];
    let mut state = OFFSET_BASIS;
    for word in words {
        for b in word.to_le_bytes() {
            state ^= b as u64;
            state = state.wrapping_mul(PRIME);
        }
    }
    state
}
