//! Error type shared by the fog grid, maze generation and session setup.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FogError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },
    #[error("maze of {width}x{height} is too small (minimum 5x5)")]
    MazeTooSmall { width: u16, height: u16 },
    #[error("invalid maze layout: {0}")]
    InvalidLayout(String),
}
