//! Fog module - per-cell visibility state and the blended fog color buffer
//!
//! Each cell stores a two-bit mask ([`VISITED`], [`VISIBLE`]). Committing a
//! snapshot ([`FogOfWarGrid::refresh`]) maps every mask through a
//! [`FogPalette`] into the *current* color buffer while the old one becomes
//! *previous*. [`FogOfWarGrid::advance`] then moves the mix level from 0 to 1
//! over time and keeps a *displayed* buffer holding the interpolation, so the
//! fog glides instead of snapping when the explorer moves.
//!
//! The grid never talks to a renderer directly. Callers hand in a
//! [`SensorArea`] to mark cells and a [`ColorSink`] to receive colors.
//!
//! Coordinates: (x, y), x in `0..width`, y in `0..height`, row-major storage.

use log::debug;

use crate::error::FogError;
use crate::sensor::SensorArea;
use crate::types::{Direction, Rgba, VisibilityState, FOG_BITS, VISIBLE, VISITED};

/// Receives per-cell fog colors.
///
/// Implemented by whatever surface displays the fog (a terminal layer, a
/// texture upload buffer, a test recorder).
pub trait ColorSink {
    fn set_pixel(&mut self, x: u16, y: u16, color: Rgba);
}

/// Colors for the four visibility states.
///
/// Both visible states share one color by default: once a cell is in sight,
/// having visited it makes no visual difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogPalette {
    pub unseen: Rgba,
    pub visited: Rgba,
    pub visible: Rgba,
    pub visible_visited: Rgba,
}

impl Default for FogPalette {
    fn default() -> Self {
        let visible = Rgba::TRANSPARENT;
        Self {
            unseen: Rgba::BLACK,
            visited: Rgba::new(0.0, 0.0, 0.0, 0.75),
            visible,
            visible_visited: visible,
        }
    }
}

impl FogPalette {
    pub fn color_for(&self, state: VisibilityState) -> Rgba {
        match state {
            VisibilityState::Unseen => self.unseen,
            VisibilityState::Visited => self.visited,
            VisibilityState::Visible => self.visible,
            VisibilityState::VisibleVisited => self.visible_visited,
        }
    }
}

/// Fog-of-war state for a fixed-size grid.
#[derive(Debug, Clone)]
pub struct FogOfWarGrid {
    width: u16,
    height: u16,
    state: Vec<u8>,
    current: Vec<Rgba>,
    previous: Vec<Rgba>,
    displayed: Vec<Rgba>,
    mix_level: f32,
    dirty: bool,
    palette: FogPalette,
}

impl FogOfWarGrid {
    /// Create a fully unseen grid.
    ///
    /// Every color buffer starts filled with the unseen color and the grid is
    /// dirty, so the first [`update`](Self::update) commits a snapshot.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_palette(width, height, FogPalette::default())
    }

    pub fn with_palette(width: u16, height: u16, palette: FogPalette) -> Self {
        let len = (width as usize) * (height as usize);
        let unseen = palette.unseen;
        Self {
            width,
            height,
            state: vec![0; len],
            current: vec![unseen; len],
            previous: vec![unseen; len],
            displayed: vec![unseen; len],
            mix_level: 1.0,
            dirty: true,
            palette,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn palette(&self) -> &FogPalette {
        &self.palette
    }

    /// Blend progress from the previous to the current snapshot, in `[0, 1]`.
    pub fn mix_level(&self) -> f32 {
        self.mix_level
    }

    /// True when visibility changed since the last snapshot.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True when there is nothing left to commit or blend.
    pub fn is_settled(&self) -> bool {
        !self.dirty && self.mix_level >= 1.0
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, FogError> {
        self.index(x, y).ok_or(FogError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Raw visibility bitmask of a cell.
    pub fn visibility(&self, x: i32, y: i32) -> Result<u8, FogError> {
        let idx = self.checked_index(x, y)?;
        Ok(self.state[idx])
    }

    /// Decoded visibility state of a cell.
    pub fn state(&self, x: i32, y: i32) -> Result<VisibilityState, FogError> {
        self.visibility(x, y).map(VisibilityState::from_bits)
    }

    /// Whether the VISIBLE bit is set. Out-of-range cells are never visible.
    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.state[idx] & VISIBLE != 0,
            None => false,
        }
    }

    /// Mark a cell as visited.
    ///
    /// Does not dirty the grid; the next sensor sweep commits it.
    pub fn set_visited(&mut self, x: i32, y: i32) -> Result<(), FogError> {
        let idx = self.checked_index(x, y)?;
        self.state[idx] |= VISITED;
        Ok(())
    }

    /// OR `bits` into every cell the area contains.
    pub fn set_visibility<A: SensorArea + ?Sized>(&mut self, area: &A, bits: u8) {
        let bits = bits & FOG_BITS;
        let w = self.width as usize;
        for (idx, cell) in self.state.iter_mut().enumerate() {
            let x = (idx % w) as i32;
            let y = (idx / w) as i32;
            if area.contains(x, y) {
                *cell |= bits;
            }
        }
        self.dirty = true;
    }

    /// Clear `bits` from every cell.
    pub fn clear_visibility(&mut self, bits: u8) {
        let inverted = !bits;
        for cell in &mut self.state {
            *cell &= inverted;
        }
        self.dirty = true;
    }

    /// Commit a snapshot: current colors become previous, the state masks are
    /// mapped into a new current buffer, and blending restarts from 0.
    pub fn refresh(&mut self) {
        self.dirty = false;
        std::mem::swap(&mut self.current, &mut self.previous);

        let palette = self.palette;
        for (color, &bits) in self.current.iter_mut().zip(&self.state) {
            *color = palette.color_for(VisibilityState::from_bits(bits));
        }

        self.mix_level = 0.0;
        debug!(
            "fog snapshot committed ({} visible cells)",
            self.count_with(VISIBLE)
        );
    }

    /// Move the mix level forward by `dt * rate` and recompute the displayed
    /// buffer.
    ///
    /// Returns false (and does nothing) once the mix level has reached 1.
    /// Negative or non-finite steps leave the level where it is.
    pub fn advance(&mut self, dt: f32, rate: f32) -> bool {
        if self.mix_level >= 1.0 {
            return false;
        }

        let step = dt * rate;
        if step.is_finite() && step > 0.0 {
            self.mix_level = (self.mix_level + step).min(1.0);
        }

        if self.mix_level >= 1.0 {
            self.displayed.copy_from_slice(&self.current);
        } else {
            let t = self.mix_level;
            for ((out, &from), &to) in self
                .displayed
                .iter_mut()
                .zip(&self.previous)
                .zip(&self.current)
            {
                *out = from.lerp(to, t);
            }
        }
        true
    }

    /// Per-frame entry point: commit pending visibility changes, advance the
    /// blend, and push the displayed colors into `sink` if they changed.
    pub fn update<S: ColorSink + ?Sized>(&mut self, dt: f32, rate: f32, sink: &mut S) {
        if self.dirty {
            self.refresh();
        }
        if self.advance(dt, rate) {
            self.write_to(sink);
        }
    }

    /// Push every displayed color into `sink`.
    pub fn write_to<S: ColorSink + ?Sized>(&self, sink: &mut S) {
        let w = self.width as usize;
        for (idx, &color) in self.displayed.iter().enumerate() {
            sink.set_pixel((idx % w) as u16, (idx / w) as u16, color);
        }
    }

    /// How visible a cell is for fading objects near the fog edge.
    ///
    /// 1.0 for a visible cell, otherwise 0.25 per visible orthogonal
    /// neighbour. Never exceeds 1.0.
    pub fn neighbor_visibility_score(&self, x: i32, y: i32) -> f32 {
        if self.is_visible(x, y) {
            return 1.0;
        }
        let visible = Direction::ALL
            .iter()
            .filter(|d| self.is_visible(x + d.x_delta(), y + d.y_delta()))
            .count();
        visible as f32 * 0.25
    }

    /// Number of cells with any of `bits` set.
    pub fn count_with(&self, bits: u8) -> usize {
        self.state.iter().filter(|&&b| b & bits != 0).count()
    }

    pub fn current_colors(&self) -> &[Rgba] {
        &self.current
    }

    pub fn previous_colors(&self) -> &[Rgba] {
        &self.previous
    }

    pub fn displayed_colors(&self) -> &[Rgba] {
        &self.displayed
    }

    pub fn displayed_at(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|idx| self.displayed[idx])
    }
}
