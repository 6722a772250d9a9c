use tracing::{debug, info};

use super::rover::Rover;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move,
    TurnLeft,
    TurnRight,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Command::Move),
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            _ => None,
        }
    }

    /// Applies the command; `false` only for an absorbed move.
    pub fn execute(self, rover: &mut Rover<'_>) -> bool {
        match self {
            Command::Move => return rover.move_forward(),
            Command::TurnLeft => rover.turn_left(),
            Command::TurnRight => rover.turn_right(),
        }
        true
    }
}

/// Commands in input order, unknown characters dropped.
pub fn parse_commands(commands: &str) -> impl Iterator<Item = Command> + '_ {
    commands.chars().filter_map(|c| {
        let command = Command::from_char(c);
        if command.is_none() {
            debug!("skipping unknown command {:?}", c);
        }
        command
    })
}

/// Tally of a single [`CommandInterpreter::run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub executed: usize,
    pub skipped: usize,
    pub absorbed: usize,
}

pub struct CommandInterpreter;

impl CommandInterpreter {
    /// Runs every command against the rover, strictly left to right. Each
    /// move is checked against the pose left by the previous commands.
    pub fn run(commands: &str, rover: &mut Rover<'_>) -> Execution {
        let mut execution = Execution::default();

        for command in parse_commands(commands) {
            info!("execute {:?}", command);

            execution.executed += 1;
            if !command.execute(rover) {
                execution.absorbed += 1;
            }
        }
        execution.skipped = commands.chars().count() - execution.executed;

        info!(
            "executed {} commands ({} absorbed, {} skipped), rover at {:?}",
            execution.executed,
            execution.absorbed,
            execution.skipped,
            rover.pose()
        );

        execution
    }
}

#[cfg(test)]
mod tests {
    use crate::mission::{
        common::{Direction, Pose, Position},
        grid::Grid,
        rover::Rover,
    };

    use super::{parse_commands, Command, CommandInterpreter, Execution};

    fn run(grid: &Grid, start: Pose, commands: &str) -> Pose {
        let mut rover = Rover::new(start.position, start.direction, grid);
        CommandInterpreter::run(commands, &mut rover);
        rover.pose()
    }

    #[test]
    fn test_command_mapping() {
        assert_eq!(Command::from_char('M'), Some(Command::Move));
        assert_eq!(Command::from_char('L'), Some(Command::TurnLeft));
        assert_eq!(Command::from_char('R'), Some(Command::TurnRight));
        assert_eq!(Command::from_char('m'), None);
        assert_eq!(Command::from_char('X'), None);
    }

    #[test]
    fn test_parse_skips_unknown_characters() {
        let commands: Vec<Command> = parse_commands("MX?rR").collect();
        assert_eq!(commands, vec![Command::Move, Command::TurnRight]);
    }

    #[test]
    fn test_moves_depend_on_previous_commands() {
        let grid = Grid::new(5, 5);
        let start = Pose::new(0, 0, Direction::N);

        assert_eq!(run(&grid, start, "MM"), Pose::new(0, 2, Direction::N));
        assert_eq!(run(&grid, start, "MLM"), Pose::new(0, 1, Direction::W));
        assert_eq!(run(&grid, start, "LM"), Pose::new(0, 0, Direction::W));
    }

    #[test]
    fn test_square_walk() {
        let grid = Grid::new(5, 5);
        let pose = run(&grid, Pose::new(0, 0, Direction::N), "MMRMM");
        assert_eq!(pose, Pose::new(2, 2, Direction::E));
    }

    #[test]
    fn test_obstacle_blocks_move() {
        let mut grid = Grid::new(3, 3);
        grid.add_obstacle(1, 0);
        let pose = run(&grid, Pose::new(0, 0, Direction::E), "M");
        assert_eq!(pose, Pose::new(0, 0, Direction::E));
    }

    #[test]
    fn test_unknown_character_has_no_effect() {
        let grid = Grid::new(5, 5);
        let start = Pose::new(1, 1, Direction::S);
        assert_eq!(run(&grid, start, "MXR"), run(&grid, start, "MR"));
    }

    #[test]
    fn test_execution_tally() {
        let mut grid = Grid::new(3, 3);
        grid.add_obstacle(0, 1);
        let mut rover = Rover::new(Position::new(0, 0), Direction::N, &grid);

        let execution = CommandInterpreter::run("MxRMMMz", &mut rover);

        assert_eq!(
            execution,
            Execution {
                executed: 5,
                skipped: 2,
                absorbed: 2,
            }
        );
        assert_eq!(rover.pose(), Pose::new(2, 0, Direction::E));
    }

    #[test]
    fn test_empty_commands() {
        let grid = Grid::new(2, 2);
        let mut rover = Rover::new(Position::new(1, 1), Direction::W, &grid);

        assert_eq!(CommandInterpreter::run("", &mut rover), Execution::default());
        assert_eq!(rover.pose(), Pose::new(1, 1, Direction::W));
    }
}
