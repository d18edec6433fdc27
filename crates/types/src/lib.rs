//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (fog simulation, maze generation, terminal rendering).
//!
//! # Visibility Bits
//!
//! Every maze cell carries a small bitmask:
//!
//! | Bit | Constant | Meaning |
//! |-----|----------|---------|
//! | `0x1` | `VISITED` | The explorer has stood on this cell |
//! | `0x2` | `VISIBLE` | The cell is inside the current sensor area |
//!
//! The two bits combine into exactly four [`VisibilityState`]s.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `EXPLORER_MOVE_SPEED` | 4.0 | Cells per second while a direction is held |
//! | `DEFAULT_MIX_RATE` | 2.0 | Fog blend progress per second |
//! | `DEFAULT_REPEAT_DELAY_MS` | 150 | Hold time before auto-repeat starts |
//! | `DEFAULT_REPEAT_RATE_MS` | 250 | Interval between auto-repeated steps |
//!
//! # Examples
//!
//! ```
//! use maze_fog_types::{Direction, Rgba, VisibilityState, VISIBLE, VISITED};
//!
//! let state = VisibilityState::from_bits(VISITED | VISIBLE);
//! assert_eq!(state, VisibilityState::VisibleVisited);
//! assert!(state.is_visible());
//!
//! assert_eq!(Direction::North.delta(), (0, -1));
//!
//! let half = Rgba::BLACK.lerp(Rgba::TRANSPARENT, 0.5);
//! assert_eq!(half.a, 0.5);
//! ```

/// Bit set on a cell once the explorer has stood on it.
pub const VISITED: u8 = 0x1;

/// Bit set on a cell while it is inside the sensor area.
pub const VISIBLE: u8 = 0x2;

/// Every bit the fog grid understands.
pub const FOG_BITS: u8 = VISITED | VISIBLE;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Explorer movement speed in cells per second.
pub const EXPLORER_MOVE_SPEED: f32 = 4.0;

/// Fog blend rate per second.
///
/// Half the move speed, so a newly revealed area finishes fading in roughly
/// as the explorer completes the next two steps.
pub const DEFAULT_MIX_RATE: f32 = EXPLORER_MOVE_SPEED / 2.0;

/// Hold time before a held direction starts repeating.
pub const DEFAULT_REPEAT_DELAY_MS: u32 = 150;

/// Interval between repeated steps (one step per `1 / EXPLORER_MOVE_SPEED` s).
pub const DEFAULT_REPEAT_RATE_MS: u32 = (1000.0 / EXPLORER_MOVE_SPEED) as u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_follow_move_speed() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(DEFAULT_MIX_RATE, 2.0);
        assert_eq!(DEFAULT_REPEAT_RATE_MS, 250);
    }

    #[test]
    fn visibility_state_covers_every_bit_combination() {
        assert_eq!(VisibilityState::from_bits(0), VisibilityState::Unseen);
        assert_eq!(VisibilityState::from_bits(VISITED), VisibilityState::Visited);
        assert_eq!(VisibilityState::from_bits(VISIBLE), VisibilityState::Visible);
        assert_eq!(
            VisibilityState::from_bits(VISITED | VISIBLE),
            VisibilityState::VisibleVisited
        );
        // Unknown high bits are ignored.
        assert_eq!(VisibilityState::from_bits(0xF0 | VISITED), VisibilityState::Visited);

        for bits in 0..=FOG_BITS {
            assert_eq!(VisibilityState::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn directions_are_orthogonal_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn lerp_hits_both_endpoints_exactly() {
        let from = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let to = Rgba::new(0.8, 0.1, 0.3, 0.25);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }
}

/// Floating point RGBA color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation from `self` (t = 0) to `to` (t = 1).
    ///
    /// Each channel is computed as `(1 - t) * from + t * to`, which lands on
    /// `to` exactly at `t == 1`.
    pub fn lerp(self, to: Rgba, t: f32) -> Rgba {
        let s = 1.0 - t;
        Rgba {
            r: s * self.r + t * to.r,
            g: s * self.g + t * to.g,
            b: s * self.b + t * to.b,
            a: s * self.a + t * to.a,
        }
    }
}

/// The four states a cell's visibility bitmask can describe.
///
/// - **Unseen**: never visited, not currently visible
/// - **Visited**: explored earlier, currently out of sight
/// - **Visible**: in sight but never stood on
/// - **VisibleVisited**: in sight and explored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityState {
    Unseen,
    Visited,
    Visible,
    VisibleVisited,
}

impl VisibilityState {
    /// Decode a cell bitmask. Bits outside [`FOG_BITS`] are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & FOG_BITS {
            0 => VisibilityState::Unseen,
            VISITED => VisibilityState::Visited,
            VISIBLE => VisibilityState::Visible,
            _ => VisibilityState::VisibleVisited,
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            VisibilityState::Unseen => 0,
            VisibilityState::Visited => VISITED,
            VisibilityState::Visible => VISIBLE,
            VisibilityState::VisibleVisited => VISITED | VISIBLE,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(
            self,
            VisibilityState::Visible | VisibilityState::VisibleVisited
        )
    }
}

/// The four orthogonal directions. Screen coordinates: y grows southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn x_delta(&self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }

    pub fn y_delta(&self) -> i32 {
        match self {
            Direction::South => 1,
            Direction::North => -1,
            Direction::East | Direction::West => 0,
        }
    }

    pub fn delta(&self) -> (i32, i32) {
        (self.x_delta(), self.y_delta())
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Actions that can be applied to a maze session.
///
/// Produced by the key map and the auto-repeat input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeAction {
    /// Step one cell in a direction
    Move(Direction),
    /// Generate a fresh maze and start over
    Restart,
}
