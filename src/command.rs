//! Line-based command grammar.
//!
//! ```text
//! GAME N, TYPE C, TYPE C
//! MOVE X, Y
//! BOARD | HELP | EXIT
//! ```
//!
//! Keywords are case-insensitive.

use crate::games::square::{Player, SetupError};
use std::str::FromStr;
use tracing::instrument;

const GAME_USAGE: &str = "GAME N, user|comp W|B, user|comp W|B";
const MOVE_USAGE: &str = "MOVE X, Y";

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new game.
    Game {
        /// Board side length.
        size: usize,
        /// Moves first.
        first: Player,
        /// Moves second.
        second: Player,
    },
    /// Place a piece at one-based coordinates.
    Move {
        /// Column, one-based.
        x: usize,
        /// Row, one-based.
        y: usize,
    },
    /// Show the board.
    Board,
    /// Show the command list.
    Help,
    /// Leave the program.
    Exit,
}

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    /// The line does not start with a known keyword.
    #[display("Incorrect command")]
    Unknown,

    /// The keyword is known but its arguments are not.
    #[display("Incorrect command format, expected: {}", usage)]
    Malformed {
        /// Expected shape of the command.
        usage: &'static str,
    },

    /// A player spec in a GAME command did not parse.
    #[display("{}", source)]
    InvalidPlayer {
        /// The underlying setup error.
        source: SetupError,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let split = line
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(line.len());
        let (keyword, rest) = line.split_at(split);
        let rest = rest.trim();

        match keyword.to_ascii_uppercase().as_str() {
            "GAME" => parse_game(rest),
            "MOVE" => parse_move(rest),
            "BOARD" => bare(rest, Command::Board),
            "HELP" => bare(rest, Command::Help),
            "EXIT" => bare(rest, Command::Exit),
            _ => Err(CommandError::Unknown),
        }
    }
}

fn parse_game(args: &str) -> Result<Command, CommandError> {
    let malformed = CommandError::Malformed { usage: GAME_USAGE };
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let [size, first, second] = parts.as_slice() else {
        return Err(malformed);
    };

    let size = size.parse::<usize>().map_err(|_| malformed)?;
    let first = parse_player(first)?;
    let second = parse_player(second)?;
    Ok(Command::Game { size, first, second })
}

fn parse_player(spec: &str) -> Result<Player, CommandError> {
    spec.parse::<Player>()
        .map_err(|source| CommandError::InvalidPlayer { source })
}

fn parse_move(args: &str) -> Result<Command, CommandError> {
    let malformed = || CommandError::Malformed { usage: MOVE_USAGE };
    let numbers = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;

    match numbers.as_slice() {
        &[x, y] => Ok(Command::Move { x, y }),
        _ => Err(malformed()),
    }
}

fn bare(args: &str, command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::square::Color;

    #[test]
    fn test_parse_game() {
        assert_eq!(
            "GAME 5, user W, comp B".parse::<Command>().unwrap(),
            Command::Game {
                size: 5,
                first: Player::human(Color::White),
                second: Player::automated(Color::Black),
            }
        );
    }

    #[test]
    fn test_parse_game_keeps_small_sizes_for_the_engine() {
        assert!(matches!(
            "game 2, user W, user B".parse::<Command>(),
            Ok(Command::Game { size: 2, .. })
        ));
    }

    #[test]
    fn test_parse_game_malformed() {
        for line in ["GAME", "GAME 5", "GAME 5, user W", "GAME x, user W, comp B", "GAME -3, user W, comp B"] {
            assert_eq!(
                line.parse::<Command>(),
                Err(CommandError::Malformed { usage: GAME_USAGE }),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_parse_game_bad_player() {
        assert!(matches!(
            "GAME 5, user W, robot B".parse::<Command>(),
            Err(CommandError::InvalidPlayer {
                source: SetupError::InvalidPlayerSpec { .. }
            })
        ));
    }

    #[test]
    fn test_parse_move_separators() {
        for line in ["MOVE 2, 3", "move 2 3", "Move 2,3", "  MOVE   2 ,  3  "] {
            assert_eq!(line.parse::<Command>(), Ok(Command::Move { x: 2, y: 3 }), "{line:?}");
        }
    }

    #[test]
    fn test_parse_move_malformed() {
        for line in ["MOVE", "MOVE 1", "MOVE 1, 2, 3", "MOVE a, 2", "MOVE -1, 2"] {
            assert_eq!(
                line.parse::<Command>(),
                Err(CommandError::Malformed { usage: MOVE_USAGE }),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_parse_bare_keywords() {
        assert_eq!("board".parse::<Command>(), Ok(Command::Board));
        assert_eq!("HELP".parse::<Command>(), Ok(Command::Help));
        assert_eq!(" Exit ".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("BOARD now".parse::<Command>(), Err(CommandError::Unknown));
        assert_eq!("jump 1 2".parse::<Command>(), Err(CommandError::Unknown));
    }
}
