//! Maze fog (workspace facade crate).
//!
//! Re-exports the workspace crates as `maze_fog::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path while the
//! implementation lives in dedicated crates under `crates/`.

pub use maze_fog_core as core;
pub use maze_fog_input as input;
pub use maze_fog_term as term;
pub use maze_fog_types as types;
