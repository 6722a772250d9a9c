use std::collections::HashSet;

use super::common::Position;

/// Fixed-size field with blocked cells.
///
/// Obstacles are stored as given; one outside the bounds is kept but can never
/// be reached by a move.
#[derive(Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    obstacles: HashSet<Position>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            obstacles: HashSet::new(),
        }
    }

    pub fn add_obstacle(&mut self, x: i32, y: i32) {
        self.obstacles.insert(Position::new(x, y));
    }

    pub fn has_obstacle(&self, x: i32, y: i32) -> bool {
        self.obstacles.contains(&Position::new(x, y))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// In bounds and not blocked.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && !self.has_obstacle(x, y)
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}
