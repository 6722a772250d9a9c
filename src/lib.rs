pub mod configuration;
mod console;
pub mod mission;

pub use console::{run_session, run_str, Scanner};
pub use mission::{
    Command, CommandInterpreter, Direction, Execution, Grid, MissionError, Pose, Position, Rover,
};
