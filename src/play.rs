//! Interactive hot-seat play.
//!
//! Reads one command per line and writes the board after every change. The
//! loop is generic over its reader and writer so it can be driven from tests.

use crate::render;
use derive_more::{Display, Error};
use shannon_switch::{Coord, Session, Status};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <col>   claim a cell, e.g. `3 4`
  reset         start a new round
  help          show this message
  quit          leave the game";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Claim the cell for the player to move.
    Place(Coord),
    /// Abandon the round and start a fresh one.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Error returned for input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseCommandError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,

    /// The input is neither a keyword nor a coordinate pair.
    #[display("Unknown command `{}`", input)]
    Unknown {
        /// The offending input.
        input: String,
    },
}

impl FromStr for PlayCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => return Err(ParseCommandError::Empty),
            "r" | "reset" | "new" => return Ok(Self::Reset),
            "h" | "?" | "help" => return Ok(Self::Help),
            "q" | "quit" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        let unknown = || ParseCommandError::Unknown {
            input: input.to_string(),
        };
        let mut parts = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty());
        let row = parts.next().and_then(|p| p.parse().ok()).ok_or_else(unknown)?;
        let col = parts.next().and_then(|p| p.parse().ok()).ok_or_else(unknown)?;
        if parts.next().is_some() {
            return Err(unknown());
        }
        Ok(Self::Place(Coord::new(row, col)))
    }
}

/// Runs the hot-seat loop until `quit` or end of input.
///
/// After a win or draw the final board is shown with the winning chain
/// highlighted, then the loop waits for the configured reset delay and starts
/// a new round. Scores carry over between rounds.
#[instrument(skip_all, fields(size = session.grid().size()))]
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    info!("Hot-seat loop started");
    writeln!(output, "{}", HELP)?;
    show_board(session, output)?;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<PlayCommand>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => continue,
            Err(e) => {
                writeln!(output, "{}. Type `help` for commands.", e)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        match command {
            PlayCommand::Quit => break,
            PlayCommand::Help => writeln!(output, "{}", HELP)?,
            PlayCommand::Reset => {
                session.reset();
                writeln!(output, "New round.")?;
                show_board(session, output)?;
            }
            PlayCommand::Place(coord) => match session.place(coord) {
                Ok(status) if status.is_terminal() => finish_round(session, output)?,
                Ok(_) => show_board(session, output)?,
                Err(e) => {
                    warn!(%coord, error = %e, "Move refused");
                    writeln!(output, "{}", e)?;
                }
            },
        }
    }

    write_scores(session, output)?;
    info!("Hot-seat loop finished");
    Ok(())
}

fn show_board<W: Write>(session: &Session, output: &mut W) -> std::io::Result<()> {
    writeln!(output, "{}", render(session.grid(), session.winning_path()))?;
    writeln!(output, "{}", session.status())
}

fn write_scores<W: Write>(session: &Session, output: &mut W) -> std::io::Result<()> {
    let scores = session.scores();
    writeln!(output, "Score: X {} - O {}", scores.x, scores.o)
}

fn finish_round<W: Write>(session: &mut Session, output: &mut W) -> std::io::Result<()> {
    show_board(session, output)?;
    write_scores(session, output)?;
    output.flush()?;

    let delay = session.config().reset_delay();
    if let Status::Won(player) = session.status() {
        info!(%player, ?delay, "Round won, resetting after delay");
    } else {
        info!(?delay, "Round drawn, resetting after delay");
    }
    std::thread::sleep(delay);

    session.reset();
    writeln!(output, "New round.")?;
    show_board(session, output)
}
