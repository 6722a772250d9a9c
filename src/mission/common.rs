use std::{fmt, str::FromStr};

use super::error::MissionError;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `None` when the step leaves the `i32` range.
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        Some(Position::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
        ))
    }
}

/// Compass facing. Declaration order is the right-turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    E,
    S,
    W,
}

impl Direction {
    const CYCLE: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    pub fn right(self) -> Self {
        Self::CYCLE[(self as usize + 1) % 4]
    }

    pub fn left(self) -> Self {
        Self::CYCLE[(self as usize + 3) % 4]
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (0, 1),
            Direction::S => (0, -1),
            Direction::E => (1, 0),
            Direction::W => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::N => "N",
            Direction::E => "E",
            Direction::S => "S",
            Direction::W => "W",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = MissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "N" => Ok(Direction::N),
            "E" => Ok(Direction::E),
            "S" => Ok(Direction::S),
            "W" => Ok(Direction::W),
            _ => Err(MissionError::InvalidDirection(s.to_string())),
        }
    }
}

/// Position and facing of a rover at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub position: Position,
    pub direction: Direction,
}

impl Pose {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self {
            position: Position::new(x, y),
            direction,
        }
    }
}
