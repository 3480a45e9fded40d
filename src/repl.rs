//! Interactive command loop.
//!
//! Reads one command per line, drives the engine and writes everything the
//! player sees. Engine and parse errors are printed and the loop goes on;
//! only I/O failures end it early.

use crate::command::Command;
use crate::games::square::{GameState, TurnReport};
use crate::render::{self, OutputFormat};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Error that stops the loop.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ReplError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
    /// A snapshot could not be serialized.
    #[display("Serialization error: {}", _0)]
    Json(serde_json::Error),
}

/// Whether to keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Command loop over any line source and sink.
#[derive(Debug)]
pub struct Repl<R, W> {
    game: GameState,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates a loop driving `game`.
    pub fn new(game: GameState, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            game,
            input,
            output,
            format,
        }
    }

    /// Runs until `EXIT` or end of input.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or serialization failure.
    #[instrument(skip(self), fields(format = %self.format))]
    pub fn run(&mut self) -> Result<(), ReplError> {
        writeln!(self.output, "=== SQUARE GAME ===")?;
        writeln!(self.output, "Type HELP for commands")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if self.handle(line.trim())? == Flow::Exit {
                info!("Exit requested");
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Engine the loop is driving.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Consumes the loop, returning the engine and the output sink.
    pub fn into_parts(self) -> (GameState, W) {
        (self.game, self.output)
    }

    fn handle(&mut self, line: &str) -> Result<Flow, ReplError> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(%line, %e, "Unparsable command");
                writeln!(self.output, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Game { size, first, second } => match self.game.start(size, first, second) {
                Ok(report) => {
                    writeln!(self.output, "New game started")?;
                    self.report(&report)?;
                }
                Err(e) => writeln!(self.output, "{e}")?,
            },
            Command::Move { x, y } => match self.game.apply_human_move(x, y) {
                Ok(report) => self.report(&report)?,
                Err(e) => writeln!(self.output, "{e}")?,
            },
            Command::Board => self.show_board()?,
            Command::Help => write!(self.output, "{}", render::HELP)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn report(&mut self, report: &TurnReport) -> Result<(), ReplError> {
        for placement in &report.placements {
            writeln!(self.output, "{}", render::placement(placement))?;
        }
        self.show_board()?;
        if let Some(line) = render::outcome(report.status) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<(), ReplError> {
        let text = render::view(&self.game.view(), self.format)?;
        write!(self.output, "{text}")?;
        Ok(())
    }
}
