//! Sensor areas - which cells the explorer can currently see.

use crate::maze::Maze;

/// Answers "is cell (x, y) inside this area".
pub trait SensorArea {
    fn contains(&self, x: i32, y: i32) -> bool;
}

impl<F> SensorArea for F
where
    F: Fn(i32, i32) -> bool,
{
    fn contains(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}

/// Line of sight within a circular radius.
///
/// A cell is contained when it lies within `radius` of the origin and the
/// Bresenham line from the origin reaches it without crossing a wall.
/// The blocking wall itself counts as seen.
#[derive(Debug, Clone, Copy)]
pub struct SightArea<'a> {
    maze: &'a Maze,
    origin: (i32, i32),
    radius: i32,
}

impl<'a> SightArea<'a> {
    pub fn new(maze: &'a Maze, origin: (i32, i32), radius: u16) -> Self {
        Self {
            maze,
            origin,
            radius: radius as i32,
        }
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl SensorArea for SightArea<'_> {
    fn contains(&self, x: i32, y: i32) -> bool {
        if self.maze.tile(x, y).is_none() {
            return false;
        }
        // i64: u16 radii and maze spans square past i32::MAX.
        let dx = x as i64 - self.origin.0 as i64;
        let dy = y as i64 - self.origin.1 as i64;
        let r = self.radius as i64;
        if dx * dx + dy * dy > r * r {
            return false;
        }
        line_is_clear(self.maze, self.origin, (x, y))
    }
}

/// Walk the Bresenham line from `from` to `to` and report whether every cell
/// strictly between the endpoints lets sight through.
fn line_is_clear(maze: &Maze, from: (i32, i32), to: (i32, i32)) -> bool {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (x, y) == to {
            return true;
        }
        if (x, y) != from && maze.blocks_sight(x, y) {
            return false;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Maze {
        Maze::from_ascii(&[
            "#######", //
            "#S...##", //
            "###.###", //
            "#..#..#", //
            "#######",
        ])
        .unwrap()
    }

    #[test]
    fn closures_are_sensor_areas() {
        let area = |x: i32, y: i32| x == y;
        assert!(area.contains(2, 2));
        assert!(!area.contains(1, 2));
    }

    #[test]
    fn sight_reaches_open_cells_within_radius() {
        let maze = corridor();
        let sight = SightArea::new(&maze, (1, 1), 3);
        assert!(sight.contains(1, 1));
        assert!(sight.contains(4, 1));
        // Radius 3 from (1,1): (5,1) is 4 away.
        assert!(!sight.contains(5, 1));
    }

    #[test]
    fn walls_are_lit_but_block_what_lies_behind() {
        let maze = corridor();
        let sight = SightArea::new(&maze, (1, 1), 5);
        // The wall below the start is visible...
        assert!(sight.contains(1, 2));
        // ...the room behind it is not.
        assert!(!sight.contains(1, 3));
        assert!(!sight.contains(2, 3));
    }

    #[test]
    fn huge_radius_is_limited_only_by_walls() {
        let maze = corridor();
        let sight = SightArea::new(&maze, (1, 1), u16::MAX);
        assert!(sight.contains(1, 2));
        assert!(sight.contains(4, 1));
        assert!(!sight.contains(1, 3));

        let open = Maze::generate(7, 7, 1).unwrap();
        let sight = SightArea::new(&open, (1, 1), 50_000);
        assert!(sight.contains(1, 2));
        assert!(sight.contains(1, 1));
    }

    #[test]
    fn out_of_maze_cells_are_never_contained() {
        let maze = corridor();
        let sight = SightArea::new(&maze, (1, 1), 10);
        assert!(!sight.contains(-1, 1));
        assert!(!sight.contains(1, 99));
    }
}
