//! Parsing of one line of player input.

use derive_more::{Display, Error, From};
use std::str::FromStr;
use strictly_alquerque::{BoardError, Cell};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Words the player can type instead of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    /// Start a new game.
    #[strum(to_string = "reset", serialize = "new")]
    Reset,
    /// List selectable pieces and where they can go.
    Moves,
    /// List the transitions played this game.
    History,
    /// Show the command summary.
    #[strum(to_string = "help", serialize = "?")]
    Help,
    /// Leave the game.
    #[strum(to_string = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

impl Keyword {
    /// One-line explanation for the help screen.
    pub fn description(self) -> &'static str {
        match self {
            Keyword::Reset => "start a new game (also: new)",
            Keyword::Moves => "list selectable pieces and their destinations",
            Keyword::History => "list the moves played this game",
            Keyword::Help => "show this summary (also: ?)",
            Keyword::Quit => "leave the game (also: q, exit)",
        }
    }

    /// The command summary, one keyword per line.
    pub fn help_text() -> String {
        let mut text = String::from("Enter a cell as \"row col\", \"row,col\" or \"rc\" (0-4).\n");
        for keyword in Keyword::iter() {
            let name = keyword.to_string();
            text.push_str(&format!("  {:<8} {}\n", name, keyword.description()));
        }
        text
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Click on a hole.
    Select(Cell),
    /// A command word.
    Command(Keyword),
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum InputError {
    /// Neither a cell nor a known command.
    #[display("Unrecognised input {input:?}; type 'help' for commands")]
    #[from(ignore)]
    Unrecognised {
        /// The trimmed line.
        input: String,
    },

    /// Coordinates off the board.
    #[display("{_0}")]
    Board(BoardError),
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if let Ok(keyword) = Keyword::from_str(&lowered) {
            return Ok(Input::Command(keyword));
        }

        let unrecognised = || InputError::Unrecognised {
            input: trimmed.to_string(),
        };
        let (row, col) = coordinates(trimmed).ok_or_else(unrecognised)?;
        Ok(Input::Select(Cell::new(row, col)?))
    }
}

/// Parses a blank-insensitive line; `None` for an empty line.
pub fn parse_line(line: &str) -> Result<Option<Input>, InputError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    line.parse().map(Some)
}

/// Splits "r c", "r,c" or "rc" into two numbers.
fn coordinates(text: &str) -> Option<(usize, usize)> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => Some((row.parse().ok()?, col.parse().ok()?)),
        [pair] if pair.len() == 2 && pair.chars().all(|c| c.is_ascii_digit()) => {
            let (row, col) = pair.split_at(1);
            Some((row.parse().ok()?, col.parse().ok()?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(row: usize, col: usize) -> Input {
        Input::Select(Cell::new(row, col).unwrap())
    }

    #[test]
    fn test_cell_spellings() {
        assert_eq!("2 1".parse::<Input>().unwrap(), select(2, 1));
        assert_eq!("2,1".parse::<Input>().unwrap(), select(2, 1));
        assert_eq!(" 2, 1 \n".parse::<Input>().unwrap(), select(2, 1));
        assert_eq!("21".parse::<Input>().unwrap(), select(2, 1));
    }

    #[test]
    fn test_keywords() {
        assert_eq!("reset".parse::<Input>().unwrap(), Input::Command(Keyword::Reset));
        assert_eq!("NEW".parse::<Input>().unwrap(), Input::Command(Keyword::Reset));
        assert_eq!("q".parse::<Input>().unwrap(), Input::Command(Keyword::Quit));
        assert_eq!("?".parse::<Input>().unwrap(), Input::Command(Keyword::Help));
        assert_eq!("history".parse::<Input>().unwrap(), Input::Command(Keyword::History));
    }

    #[test]
    fn test_off_board() {
        assert_eq!(
            "5 0".parse::<Input>(),
            Err(InputError::Board(BoardError::OutOfBounds { row: 5, col: 0 }))
        );
    }

    #[test]
    fn test_garbage() {
        assert!(matches!(
            "jump".parse::<Input>(),
            Err(InputError::Unrecognised { .. })
        ));
        assert!(matches!(
            "1 2 3".parse::<Input>(),
            Err(InputError::Unrecognised { .. })
        ));
        assert!(matches!(
            "123".parse::<Input>(),
            Err(InputError::Unrecognised { .. })
        ));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   \n"), Ok(None));
        assert_eq!(parse_line("0 0"), Ok(Some(select(0, 0))));
    }

    #[test]
    fn test_help_lists_every_keyword() {
        let help = Keyword::help_text();
        for keyword in Keyword::iter() {
            assert!(help.contains(&keyword.to_string()));
        }
    }
}
