//! Core maze logic module - pure, deterministic, and testable
//!
//! This module contains the fog-of-war model and everything it needs to be
//! driven: maze layout, line-of-sight sensing and the explorer session.
//! It has **no dependencies** on terminals, rendering, or I/O:
//!
//! - **Deterministic**: Same seed produces the same maze and treasure layout
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: The fog writes into any [`ColorSink`], so it can feed a
//!   terminal, a texture, or a test recorder
//!
//! # Module Structure
//!
//! - [`fog`]: per-cell visibility bits, state-to-color palette, blended color buffers
//! - [`sensor`]: [`SensorArea`] trait and line-of-sight [`SightArea`]
//! - [`maze`]: tile grid and seeded maze generation
//! - [`session`]: explorer movement, treasures, per-frame fog update
//! - [`config`]: environment-driven [`SessionConfig`]
//! - [`rng`]: small deterministic LCG
//!
//! # Fog Model
//!
//! - **Visited** cells keep a translucent shroud once out of sight
//! - **Visible** cells are clear; unseen cells are opaque black
//! - A new sight area is committed as a snapshot and blended in over time
//!   (mix level 0 → 1 at `mix_rate` per second)
//!
//! # Example
//!
//! ```
//! use maze_fog_core::{FogOfWarGrid, VISIBLE};
//!
//! let mut fog = FogOfWarGrid::new(3, 3);
//! fog.set_visibility(&|x: i32, y: i32| (x, y) == (1, 1), VISIBLE);
//!
//! assert_eq!(fog.neighbor_visibility_score(1, 1), 1.0);
//! assert_eq!(fog.neighbor_visibility_score(1, 0), 0.25);
//! assert_eq!(fog.neighbor_visibility_score(0, 0), 0.0);
//! assert!(!fog.is_visible(-1, 1));
//! ```
//!
//! # Timing
//!
//! Call [`MazeSession::tick`](session::MazeSession::tick) every frame with the
//! elapsed milliseconds; it commits pending visibility changes and advances
//! the blend.

pub mod config;
pub mod error;
pub mod fog;
pub mod maze;
pub mod rng;
pub mod sensor;
pub mod session;

pub use maze_fog_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use error::FogError;
pub use fog::{ColorSink, FogOfWarGrid, FogPalette};
pub use maze::{Maze, Tile};
pub use rng::SimpleRng;
pub use sensor::{SensorArea, SightArea};
pub use session::{MazeSession, Treasure};
pub use types::{VISIBLE, VISITED};
