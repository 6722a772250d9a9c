mod command;
mod common;
mod error;
mod grid;
mod rover;

pub use command::{parse_commands, Command, CommandInterpreter, Execution};
pub use common::{Direction, Pose, Position};
pub use error::MissionError;
pub use grid::Grid;
pub use rover::Rover;
