//! FogLayer: the fog color surface the core writes into.
//!
//! Plays the role of an overlay texture: one RGBA texel per maze cell,
//! composited over the maze tiles by [`crate::MazeView`].

use crate::core::ColorSink;
use crate::types::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub struct FogLayer {
    width: u16,
    height: u16,
    pixels: Vec<Rgba>,
}

impl FogLayer {
    /// A layer fully covered by opaque fog.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::BLACK; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Fog color at (x, y). Outside the layer everything is fogged.
    pub fn get(&self, x: u16, y: u16) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::BLACK;
        }
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Match a new maze size. Changing size resets the layer to opaque fog.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        *self = Self::new(width, height);
    }
}

impl ColorSink for FogLayer {
    fn set_pixel(&mut self, x: u16, y: u16, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FogOfWarGrid;
    use crate::types::VISIBLE;

    #[test]
    fn new_layer_is_opaque() {
        let layer = FogLayer::new(3, 2);
        assert_eq!(layer.get(2, 1), Rgba::BLACK);
        assert_eq!(layer.get(3, 0), Rgba::BLACK);
    }

    #[test]
    fn fog_grid_writes_blend_into_layer() {
        let mut fog = FogOfWarGrid::new(2, 2);
        let mut layer = FogLayer::new(2, 2);
        fog.set_visibility(&|x: i32, y: i32| x == 0 && y == 0, VISIBLE);

        fog.update(0.5, 1.0, &mut layer);
        assert_eq!(layer.get(0, 0).a, 0.5);
        assert_eq!(layer.get(1, 1), Rgba::BLACK);

        fog.update(1.0, 1.0, &mut layer);
        assert_eq!(layer.get(0, 0), Rgba::TRANSPARENT);
    }

    #[test]
    fn resize_resets_only_on_change() {
        let mut layer = FogLayer::new(2, 2);
        layer.fill(Rgba::TRANSPARENT);
        layer.resize(2, 2);
        assert_eq!(layer.get(0, 0), Rgba::TRANSPARENT);
        layer.resize(3, 2);
        assert_eq!(layer.width(), 3);
        assert_eq!(layer.get(0, 0), Rgba::BLACK);
    }
}
