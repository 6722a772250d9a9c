use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use tracing::{debug, info};

use crate::mission::{CommandInterpreter, Direction, Grid, MissionError, Pose, Rover};

/// Whitespace separated tokens, read a line at a time so prompts and answers
/// can interleave on a terminal.
pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self, field: &'static str) -> Result<String, MissionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(MissionError::MissingInput { field });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn next_i32(&mut self, field: &'static str) -> Result<i32, MissionError> {
        let token = self.next_token(field)?;
        token
            .parse()
            .map_err(|_| MissionError::InvalidInteger { field, token })
    }
}

struct Console<'w, R, W> {
    scanner: Scanner<R>,
    output: &'w mut W,
    prompts: bool,
}

impl<'w, R: BufRead, W: Write> Console<'w, R, W> {
    fn prompt(&mut self, text: &str) -> Result<(), MissionError> {
        if self.prompts {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn ask_i32(&mut self, text: &str, field: &'static str) -> Result<i32, MissionError> {
        self.prompt(text)?;
        self.scanner.next_i32(field)
    }

    fn ask_token(&mut self, text: &str, field: &'static str) -> Result<String, MissionError> {
        self.prompt(text)?;
        self.scanner.next_token(field)
    }

    fn read_grid(&mut self) -> Result<Grid, MissionError> {
        let width = self.ask_i32("Enter the grid width: ", "grid width")?;
        let height = self.ask_i32("Enter the grid height: ", "grid height")?;
        let mut grid = Grid::new(width, height);

        // a negative count adds nothing
        let count = self.ask_i32("Enter the number of obstacles: ", "obstacle count")?;
        for _ in 0..count.max(0) {
            let x = self.ask_i32("Enter obstacle x-coordinate: ", "obstacle x")?;
            let y = self.ask_i32("Enter obstacle y-coordinate: ", "obstacle y")?;
            grid.add_obstacle(x, y);
        }

        info!(
            "grid {}x{} with {} obstacles",
            grid.width(),
            grid.height(),
            grid.obstacle_count()
        );
        Ok(grid)
    }

    fn read_start(&mut self) -> Result<Pose, MissionError> {
        let x = self.ask_i32("Enter the initial x-coordinate of the rover: ", "rover x")?;
        let y = self.ask_i32("Enter the initial y-coordinate of the rover: ", "rover y")?;
        let direction: Direction = self
            .ask_token(
                "Enter the initial direction (N, S, E, W) of the rover: ",
                "rover direction",
            )?
            .parse()?;

        Ok(Pose::new(x, y, direction))
    }
}

/// Reads a whole mission from `input`, drives the rover and writes the two
/// report lines to `output`. Returns the final pose.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    prompts: bool,
) -> Result<Pose, MissionError> {
    let mut console = Console {
        scanner: Scanner::new(input),
        output,
        prompts,
    };

    let grid = console.read_grid()?;
    let start = console.read_start()?;
    let commands = console.ask_token("Enter the commands for the rover: ", "commands")?;
    debug!("start {:?}, commands {:?}", start, commands);

    let mut rover = Rover::new(start.position, start.direction, &grid);
    CommandInterpreter::run(&commands, &mut rover);

    writeln!(console.output, "{}", rover.final_position())?;
    writeln!(console.output, "{}", rover.status_report())?;
    console.output.flush()?;

    Ok(rover.pose())
}

/// Convenience for callers holding the mission as a single string.
pub fn run_str(input: &str) -> Result<(Pose, String), MissionError> {
    let mut output = Vec::new();
    let pose = run_session(input.as_bytes(), &mut output, false)?;
    Ok((pose, String::from_utf8_lossy(&output).into_owned()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::mission::MissionError;

    use super::Scanner;

    #[test]
    fn test_scanner_splits_lines_and_spaces() {
        let mut scanner = Scanner::new(Cursor::new("5 5\n\n  2\n1 0\tMMR\n"));

        assert_eq!(scanner.next_i32("a").unwrap(), 5);
        assert_eq!(scanner.next_i32("b").unwrap(), 5);
        assert_eq!(scanner.next_i32("c").unwrap(), 2);
        assert_eq!(scanner.next_token("d").unwrap(), "1");
        assert_eq!(scanner.next_token("e").unwrap(), "0");
        assert_eq!(scanner.next_token("f").unwrap(), "MMR");
        assert!(matches!(
            scanner.next_token("g"),
            Err(MissionError::MissingInput { field: "g" })
        ));
    }

    #[test]
    fn test_scanner_rejects_non_integer() {
        let mut scanner = Scanner::new(Cursor::new("five"));
        assert!(matches!(
            scanner.next_i32("grid width"),
            Err(MissionError::InvalidInteger { field: "grid width", token }) if token == "five"
        ));
    }
}
