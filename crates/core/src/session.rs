//! Session module - one explorer walking one maze under fog of war
//!
//! The session owns the maze, the fog grid and the explorer. Every step
//! marks the new cell visited, clears the old sight area, and sweeps the
//! new one in as visible. [`MazeSession::tick`] is called once per frame and
//! drives the fog blend into a caller-owned [`ColorSink`].

use log::{info, trace, warn};

use crate::config::SessionConfig;
use crate::error::FogError;
use crate::fog::{ColorSink, FogOfWarGrid};
use crate::maze::{Maze, Tile};
use crate::rng::SimpleRng;
use crate::sensor::SightArea;
use crate::types::{Direction, MazeAction, VISIBLE, VISITED};

/// Salt so treasure placement does not replay the carving sequence.
const TREASURE_SEED_SALT: u32 = 0x9E37_79B9;

/// A pickup scattered on a floor cell. Fades in near the fog edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treasure {
    pub x: i32,
    pub y: i32,
    pub collected: bool,
}

#[derive(Debug, Clone)]
pub struct MazeSession {
    config: SessionConfig,
    maze: Maze,
    fog: FogOfWarGrid,
    player: (i32, i32),
    treasures: Vec<Treasure>,
    collected: u32,
    moves: u32,
    escaped: bool,
}

impl MazeSession {
    /// Generate a maze from the config and place the explorer at its start.
    pub fn new(config: SessionConfig) -> Result<Self, FogError> {
        let maze = Maze::generate(config.width, config.height, config.seed)?;
        Ok(Self::with_maze(config, maze))
    }

    /// Start a session on an existing maze. `config.width`/`height` are ignored.
    pub fn with_maze(config: SessionConfig, maze: Maze) -> Self {
        let mut spots: Vec<(i32, i32)> = maze
            .floor_cells()
            .into_iter()
            .filter(|&cell| cell != maze.start())
            .collect();
        SimpleRng::new(config.seed ^ TREASURE_SEED_SALT).shuffle(&mut spots);
        let treasures = spots
            .into_iter()
            .take(config.treasure_count)
            .map(|(x, y)| Treasure {
                x,
                y,
                collected: false,
            })
            .collect();

        let fog = FogOfWarGrid::new(maze.width(), maze.height());
        let player = maze.start();
        let mut session = Self {
            config,
            maze,
            fog,
            player,
            treasures,
            collected: 0,
            moves: 0,
            escaped: false,
        };
        session.reveal();
        session
    }

    /// Apply an action. Returns true if the session changed.
    pub fn apply_action(&mut self, action: MazeAction) -> bool {
        match action {
            MazeAction::Move(dir) => self.try_move(dir),
            MazeAction::Restart => self.restart(),
        }
    }

    fn try_move(&mut self, dir: Direction) -> bool {
        if self.escaped {
            return false;
        }
        let (x, y) = (self.player.0 + dir.x_delta(), self.player.1 + dir.y_delta());
        if !self.maze.is_open(x, y) {
            return false;
        }

        self.player = (x, y);
        self.moves += 1;
        trace!("explorer moved {:?} to ({}, {})", dir, x, y);

        for t in self.treasures.iter_mut() {
            if !t.collected && (t.x, t.y) == (x, y) {
                t.collected = true;
                self.collected += 1;
                info!("treasure collected at ({}, {})", x, y);
            }
        }

        if self.maze.tile(x, y) == Some(Tile::Exit) {
            self.escaped = true;
            info!(
                "escaped after {} moves with {} treasures",
                self.moves, self.collected
            );
        }

        self.reveal();
        true
    }

    fn restart(&mut self) -> bool {
        let mut config = self.config.clone();
        config.seed = next_seed(config.seed);
        config.width = self.maze.width();
        config.height = self.maze.height();
        match Self::new(config) {
            Ok(next) => {
                *self = next;
                true
            }
            Err(err) => {
                warn!("restart failed: {}", err);
                false
            }
        }
    }

    /// Mark the explorer's cell visited and replace the visible area with
    /// the current line of sight.
    fn reveal(&mut self) {
        let (x, y) = self.player;
        if let Err(err) = self.fog.set_visited(x, y) {
            warn!("explorer outside fog grid: {}", err);
        }
        self.fog.clear_visibility(VISIBLE);
        let sight = SightArea::new(&self.maze, self.player, self.config.sight_radius);
        self.fog.set_visibility(&sight, VISIBLE);
    }

    /// Advance the fog blend by `elapsed_ms` and push changed colors to `sink`.
    pub fn tick<S: ColorSink + ?Sized>(&mut self, elapsed_ms: u32, sink: &mut S) {
        let dt = elapsed_ms as f32 / 1000.0;
        self.fog.update(dt, self.config.mix_rate, sink);
    }

    /// Opacity for drawing a treasure: visible cells are opaque, cells next to
    /// the sight area partially so.
    pub fn treasure_alpha(&self, treasure: &Treasure) -> f32 {
        self.fog.neighbor_visibility_score(treasure.x, treasure.y)
    }

    /// Number of cells the explorer has stood on.
    pub fn visited_cells(&self) -> usize {
        self.fog.count_with(VISITED)
    }

    /// Fraction of open cells visited, in `[0, 1]`.
    pub fn explored_ratio(&self) -> f32 {
        let open = self.maze.open_cell_count().max(1);
        (self.visited_cells() as f32 / open as f32).min(1.0)
    }

    /// True when the fog has nothing left to animate.
    pub fn is_settled(&self) -> bool {
        self.fog.is_settled()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn fog(&self) -> &FogOfWarGrid {
        &self.fog
    }

    pub fn player(&self) -> (i32, i32) {
        self.player
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn escaped(&self) -> bool {
        self.escaped
    }
}

/// The following seed that yields a different layout. Seeds 0 and 1 share
/// an RNG state.
fn next_seed(seed: u32) -> u32 {
    let next = seed.wrapping_add(1);
    if SimpleRng::new(next) == SimpleRng::new(seed) {
        next.wrapping_add(1)
    } else {
        next
    }
}
