//! Human move source reading `row col` lines from a text stream.

use std::io::{BufRead, Write};

use crate::{
    Error, Result,
    ports::MoveSource,
    tictactoe::{GameState, Mark, Move},
};

/// A person at the terminal, or any line-oriented input standing in for one.
///
/// Each prompt asks for a row and a column separated by whitespace (both
/// 0-2). Unparsable or illegal input is reported on `output` and the prompt
/// repeats until a legal move arrives.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    mark: Mark,
    name: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, mark: Mark) -> Self {
        Self {
            input,
            output,
            mark,
            name: format!("human::{mark}"),
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.output, "{} to move (row col): ", self.mark).map_err(io_error("write prompt"))?;
        self.output.flush().map_err(io_error("flush prompt"))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(io_error("write message"))
    }

    fn parse(&self, line: &str) -> std::result::Result<Move, String> {
        let mut parts = line.split_whitespace();
        let (Some(row), Some(column), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err("enter a row and a column, e.g. `1 2`".to_string());
        };
        let row: usize = row
            .parse()
            .map_err(|_| format!("'{row}' is not a row number"))?;
        let column: usize = column
            .parse()
            .map_err(|_| format!("'{column}' is not a column number"))?;
        Move::new(row, column, self.mark).map_err(|err| err.to_string())
    }
}

fn io_error(operation: &'static str) -> impl Fn(std::io::Error) -> Error {
    move |source| Error::Io {
        operation: operation.to_string(),
        source,
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanPlayer<R, W> {
    fn next_move(&mut self, state: &mut GameState) -> Result<Move> {
        loop {
            self.prompt()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(io_error("read move"))?;
            if read == 0 {
                return Err(Error::Io {
                    operation: "read move".to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "input closed before a move was entered",
                    ),
                });
            }

            match self.parse(&line) {
                Ok(mv) if state.is_legal(&mv) => return Ok(mv),
                Ok(mv) => {
                    let message = format!("({}, {}) is taken", mv.row(), mv.column());
                    self.say(&message)?;
                }
                Err(message) => self.say(&message)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Mark::X)
    }

    #[test]
    fn test_reads_move() {
        let mut state = GameState::with_seed(1);
        let mut human = player("1 2\n");

        let mv = human.next_move(&mut state).unwrap();

        assert_eq!((mv.row(), mv.column(), mv.mark()), (1, 2, Mark::X));
    }

    #[test]
    fn test_reprompts_until_legal() {
        let mut state = GameState::with_seed(1);
        assert!(state.apply(Move::new(0, 0, Mark::X).unwrap()));
        assert!(state.apply(Move::new(1, 1, Mark::O).unwrap()));

        let mut human = player("nonsense\n3 0\n0 0\n2 2\n");
        let mv = human.next_move(&mut state).unwrap();
        assert_eq!((mv.row(), mv.column()), (2, 2));

        let transcript = String::from_utf8(human.output.clone()).unwrap();
        assert_eq!(transcript.matches("X to move").count(), 4);
        assert!(transcript.contains("out of bounds"));
        assert!(transcript.contains("(0, 0) is taken"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut state = GameState::with_seed(1);
        let mut human = player("");

        let err = human.next_move(&mut state).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_name_includes_mark() {
        let human = HumanPlayer::new(Cursor::new(Vec::new()), Vec::new(), Mark::O);
        assert_eq!(human.name(), "human::O");
        assert_eq!(human.mark(), Mark::O);
    }
}
