use tracing::debug;

use super::{
    common::{Direction, Pose, Position},
    grid::Grid,
};

/// A rover on a borrowed grid. Only the pose is mutable.
#[derive(Debug)]
pub struct Rover<'a> {
    position: Position,
    direction: Direction,
    grid: &'a Grid,
}

impl<'a> Rover<'a> {
    pub fn new(position: Position, direction: Direction, grid: &'a Grid) -> Self {
        Self {
            position,
            direction,
            grid,
        }
    }

    /// Steps one cell forward if the target is free and returns whether it
    /// moved. A blocked or out-of-bounds target leaves the pose untouched.
    pub fn move_forward(&mut self) -> bool {
        let target = match self.position.step(self.direction) {
            Some(p) if self.grid.is_free(p.x, p.y) => p,
            target => {
                debug!(
                    "move from {:?} facing {} absorbed, target {:?}",
                    self.position, self.direction, target
                );
                return false;
            }
        };

        self.position = target;
        true
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.right();
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            direction: self.direction,
        }
    }

    pub fn status_report(&self) -> String {
        format!(
            "Rover is at ({}, {}) facing {}.",
            self.position.x, self.position.y, self.direction
        )
    }

    pub fn final_position(&self) -> String {
        format!(
            "Final Position: ({}, {}, {})",
            self.position.x, self.position.y, self.direction
        )
    }
}
