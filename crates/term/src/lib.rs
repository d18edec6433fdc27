//! Terminal maze renderer.
//!
//! Draws the maze and its fog overlay into a plain framebuffer that can be
//! flushed to a terminal backend. No widget/layout libraries.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Act as the fog's color sink ([`FogLayer`]) and composite it over the maze
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod fog_layer;
pub mod maze_view;
pub mod render_throttle;
pub mod renderer;

pub use maze_fog_core as core;
pub use maze_fog_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use fog_layer::FogLayer;
pub use maze_view::{frame_fingerprint, AnchorY, MazeView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
