//! One-shot evaluation of a board file.

use crate::render;
use anyhow::Context;
use serde::Serialize;
use shannon_switch::{ConnectivityEngine, GameConfig, Goals, Grid, Player, WinningPath};
use std::io::Write;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Overall state of a checked board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BoardState {
    /// At least one player has a spanning chain.
    Won,
    /// The board is full and nobody connected.
    Draw,
    /// Empty cells remain and nobody connected.
    InProgress,
}

/// Verdicts for both players on one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Side length of the board.
    pub size: usize,
    /// Edges each player had to connect.
    pub goals: Goals,
    /// X's winning chain, if any.
    pub x: Option<WinningPath>,
    /// O's winning chain, if any.
    pub o: Option<WinningPath>,
    /// Whether every cell is claimed.
    pub full: bool,
    /// Summary of the above.
    pub state: BoardState,
}

impl Report {
    /// Evaluates `grid` for both players.
    ///
    /// Unlike live play, both players are checked, so a hand-written board may
    /// report two winners.
    #[instrument(skip_all, fields(size = grid.size()))]
    pub fn evaluate(grid: &Grid, engine: &ConnectivityEngine) -> Self {
        let x = engine.evaluate(grid, Player::X).into_path();
        let o = engine.evaluate(grid, Player::O).into_path();
        let full = grid.is_full();
        let state = if x.is_some() || o.is_some() {
            BoardState::Won
        } else if full {
            BoardState::Draw
        } else {
            BoardState::InProgress
        };
        debug!(%state, full, "Board evaluated");

        Self {
            size: grid.size(),
            goals: *engine.goals(),
            x,
            o,
            full,
            state,
        }
    }

    /// Winning chain of `player`, if any.
    pub fn path(&self, player: Player) -> Option<&WinningPath> {
        match player {
            Player::X => self.x.as_ref(),
            Player::O => self.o.as_ref(),
        }
    }

    /// Players with a spanning chain, X first.
    pub fn winners(&self) -> Vec<Player> {
        Player::iter().filter(|p| self.path(*p).is_some()).collect()
    }

    /// Writes a human-readable report, drawing `grid` with the first
    /// winner's chain highlighted.
    pub fn write_text<W: Write>(&self, grid: &Grid, output: &mut W) -> std::io::Result<()> {
        let highlight = self.winners().first().and_then(|p| self.path(*p));
        writeln!(output, "{}", render(grid, highlight))?;

        for player in Player::iter() {
            let goal = self.goals.of(player);
            match self.path(player) {
                Some(path) => {
                    let chain = path
                        .cells()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" -> ");
                    writeln!(output, "{} ({}): wins via {}", player, goal, chain)?;
                }
                None => writeln!(output, "{} ({}): no chain", player, goal)?,
            }
        }
        writeln!(output, "Board: {}", self.state)
    }
}

/// Reads the board at `board`, evaluates it under `config` and writes the
/// report as text or JSON.
///
/// The board's own size is used; `config` supplies the goals and search order.
#[instrument(skip(config, output), fields(board = %board.display()))]
pub fn run<W: Write>(
    board: &Path,
    config: &GameConfig,
    json: bool,
    output: &mut W,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(board)
        .with_context(|| format!("reading board {}", board.display()))?;
    let grid: Grid = text
        .parse()
        .with_context(|| format!("parsing board {}", board.display()))?;
    if grid.size() != *config.size() {
        debug!(
            board = grid.size(),
            config = *config.size(),
            "Board size differs from configured size"
        );
    }

    let report = Report::evaluate(&grid, &config.engine());
    info!(state = %report.state, winners = ?report.winners(), "Board checked");

    if json {
        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
    } else {
        report.write_text(&grid, output)?;
    }
    Ok(())
}
