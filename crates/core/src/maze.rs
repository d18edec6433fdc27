//! Maze module - the tile grid the fog covers
//!
//! Mazes are carved with an iterative recursive-backtracker over odd
//! coordinates, so every floor cell is reachable and the outer border is
//! always wall. The explorer starts at (1, 1); the exit is placed on the
//! floor cell farthest from the start by walking distance.
//!
//! Storage is a flat row-major `Vec<Tile>` (y * width + x).

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use log::debug;

use crate::error::FogError;
use crate::rng::SimpleRng;
use crate::types::Direction;

/// Smallest maze that still has a corridor between start and exit.
pub const MIN_MAZE_SIZE: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Exit,
}

impl Tile {
    pub fn is_open(&self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
    start: (i32, i32),
    exit: (i32, i32),
}

impl Maze {
    /// Carve a new maze. The same seed always yields the same layout.
    pub fn generate(width: u16, height: u16, seed: u32) -> Result<Self, FogError> {
        if width < MIN_MAZE_SIZE || height < MIN_MAZE_SIZE {
            return Err(FogError::MazeTooSmall { width, height });
        }

        let mut maze = Self {
            width,
            height,
            tiles: vec![Tile::Wall; (width as usize) * (height as usize)],
            start: (1, 1),
            exit: (1, 1),
        };
        let mut rng = SimpleRng::new(seed);

        maze.set(1, 1, Tile::Floor);
        let mut stack = vec![(1i32, 1i32)];
        while let Some(&(cx, cy)) = stack.last() {
            let mut candidates = ArrayVec::<Direction, 4>::new();
            for dir in Direction::ALL {
                let nx = cx + dir.x_delta() * 2;
                let ny = cy + dir.y_delta() * 2;
                if maze.is_interior(nx, ny) && maze.tile(nx, ny) == Some(Tile::Wall) {
                    candidates.push(dir);
                }
            }

            match rng.pick(&candidates) {
                Some(dir) => {
                    let (dx, dy) = dir.delta();
                    maze.set(cx + dx, cy + dy, Tile::Floor);
                    maze.set(cx + dx * 2, cy + dy * 2, Tile::Floor);
                    stack.push((cx + dx * 2, cy + dy * 2));
                }
                None => {
                    stack.pop();
                }
            }
        }

        maze.place_exit();
        debug!(
            "generated {}x{} maze (seed {}), exit at {:?}",
            width, height, seed, maze.exit
        );
        Ok(maze)
    }

    /// Build a maze from rows of text.
    ///
    /// `#` is wall, `.` floor, `S` the start (floor) and `E` the exit. When
    /// no `E` is given the exit is placed as for generated mazes.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, FogError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 || height == 0 || width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(FogError::InvalidLayout(format!(
                "unsupported dimensions {}x{}",
                width, height
            )));
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut start = None;
        let mut exit = None;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(FogError::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    'S' => {
                        start = Some((x as i32, y as i32));
                        Tile::Floor
                    }
                    'E' => {
                        exit = Some((x as i32, y as i32));
                        Tile::Exit
                    }
                    other => {
                        return Err(FogError::InvalidLayout(format!(
                            "unknown tile {:?} at ({}, {})",
                            other, x, y
                        )))
                    }
                };
                tiles.push(tile);
            }
        }

        let start =
            start.ok_or_else(|| FogError::InvalidLayout("missing start cell 'S'".to_string()))?;
        let mut maze = Self {
            width: width as u16,
            height: height as u16,
            tiles,
            start,
            exit: start,
        };
        match exit {
            Some(exit) => maze.exit = exit,
            None => maze.place_exit(),
        }
        Ok(maze)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = tile;
        }
    }

    /// Inside the border ring.
    fn is_interior(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && x < self.width as i32 - 1 && y < self.height as i32 - 1
    }

    /// Mark the floor cell farthest from the start (breadth-first walking
    /// distance) as the exit.
    fn place_exit(&mut self) {
        let distances = self.distances_from(self.start);
        let mut best = (self.start, 0u32);
        for (idx, dist) in distances.iter().enumerate() {
            if let Some(d) = *dist {
                if d > best.1 {
                    let w = self.width as usize;
                    best = (((idx % w) as i32, (idx / w) as i32), d);
                }
            }
        }
        self.exit = best.0;
        if self.exit != self.start {
            self.set(self.exit.0, self.exit.1, Tile::Exit);
        }
    }

    /// Walking distance from `from` to every open cell (`None` if unreachable).
    pub fn distances_from(&self, from: (i32, i32)) -> Vec<Option<u32>> {
        let mut dist = vec![None; self.tiles.len()];
        let Some(start_idx) = self.index(from.0, from.1) else {
            return dist;
        };
        if !self.tiles[start_idx].is_open() {
            return dist;
        }

        dist[start_idx] = Some(0);
        let mut queue = VecDeque::from([(from, 0u32)]);
        while let Some(((x, y), d)) = queue.pop_front() {
            for dir in Direction::ALL {
                let (nx, ny) = (x + dir.x_delta(), y + dir.y_delta());
                let Some(idx) = self.index(nx, ny) else {
                    continue;
                };
                if self.tiles[idx].is_open() && dist[idx].is_none() {
                    dist[idx] = Some(d + 1);
                    queue.push_back(((nx, ny), d + 1));
                }
            }
        }
        dist
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn start(&self) -> (i32, i32) {
        self.start
    }

    pub fn exit(&self) -> (i32, i32) {
        self.exit
    }

    /// Tile at (x, y), `None` outside the maze.
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Walkable (floor or exit).
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(|t| t.is_open())
    }

    /// Walls and everything outside the maze stop line of sight.
    pub fn blocks_sight(&self, x: i32, y: i32) -> bool {
        !self.is_open(x, y)
    }

    /// Number of walkable cells (floor and exit).
    pub fn open_cell_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_open()).count()
    }

    /// Every plain floor cell, row-major.
    pub fn floor_cells(&self) -> Vec<(i32, i32)> {
        let w = self.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Tile::Floor)
            .map(|(idx, _)| ((idx % w) as i32, (idx / w) as i32))
            .collect()
    }
}
