//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::MazeAction`] and provides an
//! auto-repeat handler for held directions, suitable for terminal environments
//! (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use maze_fog_types as types;

pub use handler::InputHandler;
pub use map::{direction_for_key, handle_key_event, should_quit};
