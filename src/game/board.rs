use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Side length of the board in cells.
pub const BOARD_SIZE: u8 = 9;

/// Walls each player starts with.
pub const WALLS_PER_PLAYER: u8 = 10;

const GRID: usize = BOARD_SIZE as usize;

/// A cell coordinate, `(x, y)` with both components in `[0, 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Position { x, y }
    }

    pub fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A wall placement request. Horizontal walls sit in the gap below cell-row
/// `y` and span columns `x` and `x+1`; vertical walls span rows `y` and `y+1`
/// in the gap between columns `x-1` and `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub x: u8,
    pub y: u8,
    pub orientation: Orientation,
}

impl Wall {
    pub fn horizontal(x: u8, y: u8) -> Self {
        Wall {
            x,
            y,
            orientation: Orientation::Horizontal,
        }
    }

    pub fn vertical(x: u8, y: u8) -> Self {
        Wall {
            x,
            y,
            orientation: Orientation::Vertical,
        }
    }
}

/// Wall state for a 9x9 board.
///
/// Each grid is indexed `[x][y]`. A placed wall occupies two adjacent cells
/// of its orientation's grid (the double-cell model), so the backing arrays
/// are 9x9 even though the placeable coordinate ranges are narrower: the
/// second cell of an edge wall lands at index 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    horizontal_walls: [[bool; GRID]; GRID],
    vertical_walls: [[bool; GRID]; GRID],
}

impl Board {
    /// Create an empty board with no walls placed.
    pub fn new() -> Self {
        Board {
            horizontal_walls: [[false; GRID]; GRID],
            vertical_walls: [[false; GRID]; GRID],
        }
    }

    pub fn horizontal_wall_at(&self, x: u8, y: u8) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE && self.horizontal_walls[x as usize][y as usize]
    }

    pub fn vertical_wall_at(&self, x: u8, y: u8) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE && self.vertical_walls[x as usize][y as usize]
    }

    /// Whether `wall`'s coordinates are placeable. Horizontal walls require
    /// `x in [0,7], y in [1,8]`; vertical walls require `x in [1,8], y in [0,7]`.
    /// The asymmetry follows from where wall gaps sit relative to cell indices.
    pub fn wall_in_bounds(&self, wall: Wall) -> bool {
        match wall.orientation {
            Orientation::Horizontal => wall.x <= 7 && (1..=8).contains(&wall.y),
            Orientation::Vertical => (1..=8).contains(&wall.x) && wall.y <= 7,
        }
    }

    /// Whether either of the two cells `wall` would occupy is already set.
    pub fn wall_overlaps(&self, wall: Wall) -> bool {
        let (x, y) = (wall.x as usize, wall.y as usize);
        match wall.orientation {
            Orientation::Horizontal => {
                self.horizontal_walls[x][y] || self.horizontal_walls[x + 1][y]
            }
            Orientation::Vertical => self.vertical_walls[x][y] || self.vertical_walls[x][y + 1],
        }
    }

    /// Whether `wall` would cross a perpendicular wall at a single
    /// intersection point, which the rules disallow.
    pub fn wall_intersects(&self, wall: Wall) -> bool {
        let (x, y) = (wall.x as usize, wall.y as usize);
        match wall.orientation {
            Orientation::Horizontal => {
                y > 0
                    && y < 8
                    && self.vertical_walls[x + 1][y - 1]
                    && self.vertical_walls[x + 1][y]
            }
            Orientation::Vertical => {
                x > 0
                    && x < 8
                    && self.horizontal_walls[x - 1][y + 1]
                    && self.horizontal_walls[x][y + 1]
            }
        }
    }

    /// Set both backing cells for `wall`. Performs no validation; callers
    /// must have checked legality first. Validation is kept separate so the
    /// AI search can simulate placements without re-validating.
    pub fn place_wall(&mut self, wall: Wall) {
        let (x, y) = (wall.x as usize, wall.y as usize);
        match wall.orientation {
            Orientation::Horizontal => {
                self.horizontal_walls[x][y] = true;
                self.horizontal_walls[x + 1][y] = true;
            }
            Orientation::Vertical => {
                self.vertical_walls[x][y] = true;
                self.vertical_walls[x][y + 1] = true;
            }
        }
    }

    /// Whether a wall segment separates two orthogonally adjacent cells.
    /// Non-adjacent or diagonal pairs always report no wall.
    pub fn is_wall_between(&self, a: Position, b: Position) -> bool {
        if a.x == b.x && a.y.abs_diff(b.y) == 1 {
            let min_y = a.y.min(b.y) as usize;
            self.horizontal_walls[a.x as usize][min_y + 1]
        } else if a.y == b.y && a.x.abs_diff(b.x) == 1 {
            let min_x = a.x.min(b.x) as usize;
            self.vertical_walls[min_x + 1][a.y as usize]
        } else {
            false
        }
    }

    /// Shortest-path length from `from` to any cell on `goal_row`, stepping
    /// only through orthogonal neighbors not separated by a wall. `None` when
    /// the goal row is unreachable.
    pub fn distance_to_goal(&self, from: Position, goal_row: u8) -> Option<u32> {
        let mut visited = [[false; GRID]; GRID];
        let mut queue = VecDeque::new();

        visited[from.x as usize][from.y as usize] = true;
        queue.push_back((from, 0u32));

        while let Some((pos, dist)) = queue.pop_front() {
            if pos.y == goal_row {
                return Some(dist);
            }

            for (dx, dy) in [(0i8, 1i8), (0, -1), (1, 0), (-1, 0)] {
                let nx = pos.x as i8 + dx;
                let ny = pos.y as i8 + dy;
                if nx < 0 || nx >= BOARD_SIZE as i8 || ny < 0 || ny >= BOARD_SIZE as i8 {
                    continue;
                }
                let next = Position::new(nx as u8, ny as u8);
                if visited[next.x as usize][next.y as usize] {
                    continue;
                }
                if self.is_wall_between(pos, next) {
                    continue;
                }
                visited[next.x as usize][next.y as usize] = true;
                queue.push_back((next, dist + 1));
            }
        }

        None
    }

    /// Complete BFS reachability check. This is the legality gate that keeps
    /// wall placements from ever fully enclosing a player.
    pub fn has_path_to_goal(&self, from: Position, goal_row: u8) -> bool {
        self.distance_to_goal(from, goal_row).is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
